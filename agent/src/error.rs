use crate::prompt::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing credential: set {0} to a valid API key")]
    MissingCredential(&'static str),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Unexpected response format: {0}")]
    ResponseFormat(String),

    #[error("Prompt format error: {0}")]
    Format(#[from] TemplateError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
}
