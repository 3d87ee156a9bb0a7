mod cli;
mod prompt;
mod research;

use agent::Error;
use agent::llm::{Perplexity, PerplexityConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_USER_ERROR: u8 = 1;
const EXIT_PROVIDER_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,research=info,agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();

    match run(cli).await {
        Ok(out) => {
            println!("Wrote {}", out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: cli::Cli) -> agent::Result<PathBuf> {
    // the credential is checked before anything touches the network
    let llm = Perplexity::new(PerplexityConfig::from_env()?)?;

    tracing::debug!(max_sources = %cli.max_sources, "max-sources does not affect the prompt");

    research::MethodFinder::new(llm)
        .run(&cli.params(), &cli.out)
        .await
}

fn exit_code(err: &Error) -> u8 {
    match err {
        Error::Http { .. } | Error::ResponseFormat(_) | Error::Request(_) => EXIT_PROVIDER_ERROR,
        Error::MissingCredential(_) | Error::Format(_) | Error::IOError(_) => EXIT_USER_ERROR,
    }
}
