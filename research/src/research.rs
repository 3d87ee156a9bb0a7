use crate::prompt::{ResearchParams, SYSTEM_PROMPT};
use agent::Result;
use agent::llm::{self, CompletionRequest, Message, Sampling};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub struct MethodFinder {
    llm: Arc<dyn llm::LLM + Send + Sync>,
}

impl MethodFinder {
    pub fn new(llm: Arc<dyn llm::LLM + Send + Sync>) -> Self {
        Self { llm }
    }

    /// Builds the one-pager prompt, requests a completion and writes the
    /// answer to `out`. Nothing is written if the completion fails.
    pub async fn run(&self, params: &ResearchParams, out: &Path) -> Result<PathBuf> {
        let prompt = params.build_prompt()?;
        info!(topic = %params.topic, chars = prompt.len(), "built prompt");

        let messages = [
            Message::System(SYSTEM_PROMPT.to_string()),
            Message::User(prompt),
        ];

        let response = self
            .llm
            .completion(CompletionRequest {
                messages: &messages,
                sampling: Sampling::default(),
            })
            .await?;

        info!(citations = response.citations.len(), "completion received");
        for citation in &response.citations {
            tracing::debug!(%citation, "citation");
        }

        write_report(out, &response.content)?;
        info!(path = %out.display(), "report written");

        Ok(out.to_path_buf())
    }
}

fn write_report(out: &Path, report: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(out, report.trim())?;
    Ok(())
}
