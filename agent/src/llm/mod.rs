use crate::Result;
use async_trait::async_trait;
use serde::Serialize;

mod perplexity;
pub use perplexity::{Perplexity, PerplexityConfig};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "role", content = "content", rename_all = "lowercase")]
pub enum Message {
    System(String),
    User(String),
}

/// Sampling parameters sent with every completion request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sampling {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub return_citations: bool,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.9,
            max_tokens: 2000,
            return_citations: true,
        }
    }
}

pub struct CompletionRequest<'a> {
    pub messages: &'a [Message],
    pub sampling: Sampling,
}

pub struct CompletionResponse {
    pub content: String,
    pub citations: Vec<String>,
}

#[async_trait]
pub trait LLM {
    async fn completion<'a>(&self, request: CompletionRequest<'a>) -> Result<CompletionResponse>;
}
