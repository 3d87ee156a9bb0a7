use crate::prompt::{DEFAULT_RECENCY, ResearchParams};
use clap::Parser;
use std::path::PathBuf;

/// Ask a search-backed model for the single best method to reach a goal and
/// save its one-pager as Markdown.
#[derive(Parser, Debug)]
#[command(name = "research", version)]
pub struct Cli {
    /// What the method should achieve
    #[arg(long)]
    pub topic: String,

    /// Time, budget or platform constraints the method must fit
    #[arg(long)]
    pub constraints: String,

    /// Domains the search should focus on
    #[arg(long, default_value = "")]
    pub domains: String,

    /// Preferred recency window for sources, e.g. 90d
    #[arg(long, default_value = DEFAULT_RECENCY)]
    pub recency: String,

    /// Accepted for compatibility; does not change the prompt
    #[arg(long, default_value = "8")]
    pub max_sources: String,

    /// Where to write the one-pager
    #[arg(long, default_value = "runs/best_method.md")]
    pub out: PathBuf,
}

impl Cli {
    pub fn params(&self) -> ResearchParams {
        ResearchParams {
            topic: self.topic.clone(),
            constraints: self.constraints.clone(),
            domains: self.domains.clone(),
            recency: self.recency.clone(),
        }
    }
}
