use crate::llm::{self, Message, Sampling};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
const DEFAULT_MODEL: &str = "sonar-pro";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const API_KEY_VAR: &str = "PPLX_API_KEY";
pub const BASE_URL_VAR: &str = "PPLX_BASE_URL";

#[derive(Debug, Clone)]
pub struct PerplexityConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub request_timeout: Duration,
}

impl PerplexityConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Reads the API key from `PPLX_API_KEY` and an optional endpoint
    /// override from `PPLX_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(API_KEY_VAR), env::var(BASE_URL_VAR).ok())
    }

    fn from_vars(
        api_key: std::result::Result<String, VarError>,
        base_url: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key.map_err(|_| Error::MissingCredential(API_KEY_VAR))?;

        // the key ends up in a bearer header, reject it before any request is built
        if api_key.trim().is_empty()
            || HeaderValue::from_str(&format!("Bearer {api_key}")).is_err()
        {
            return Err(Error::MissingCredential(API_KEY_VAR));
        }

        let mut config = Self::new(api_key);
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

pub struct Perplexity {
    client: Client,
    config: PerplexityConfig,
}

impl Perplexity {
    pub fn new(config: PerplexityConfig) -> Result<Arc<Self>> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Arc::new(Self { client, config }))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(flatten)]
    sampling: Sampling,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    #[serde(default)]
    choices: Vec<ResponseChoice>,
    #[serde(default)]
    citations: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct ResponseChoice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn parse_completion(body: &str) -> Result<llm::CompletionResponse> {
    let parsed: ChatResponseBody = serde_json::from_str(body)
        .map_err(|e| Error::ResponseFormat(format!("body is not a chat completion: {e}")))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or(Error::ResponseFormat("choices is empty".to_string()))?
        .message
        .and_then(|message| message.content)
        .ok_or(Error::ResponseFormat(
            "choices[0].message.content is missing".to_string(),
        ))?;

    let citations = parsed
        .citations
        .into_iter()
        .filter_map(|citation| citation.as_str().map(str::to_string))
        .collect();

    Ok(llm::CompletionResponse {
        content: content.trim().to_string(),
        citations,
    })
}

#[async_trait]
impl llm::LLM for Perplexity {
    async fn completion<'a>(
        &self,
        request: llm::CompletionRequest<'a>,
    ) -> Result<llm::CompletionResponse> {
        let body = ChatRequestBody {
            model: &self.config.model,
            messages: request.messages,
            sampling: request.sampling,
        };

        info!(model = %self.config.model, url = %self.endpoint(), "requesting completion");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "completion request rejected");
            return Err(Error::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(status = status.as_u16(), bytes = text.len(), "completion received");

        parse_completion(&text)
    }
}
