mod error;
pub mod llm;
pub mod prompt;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
