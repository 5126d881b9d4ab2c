// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// URL does not have the shape of a race startlist page.
    #[error("invalid startlist URL `{0}`")]
    InvalidUrl(String),

    /// Requested field names outside the supported vocabulary.
    #[error("unsupported field(s): {}", .0.join(", "))]
    UnsupportedField(Vec<String>),

    /// The page does not look the way the extractor expects.
    #[error("malformed startlist page: {0}")]
    MalformedPage(String),

    /// A built-in CSS selector or URL pattern failed to compile.
    #[error("bad pattern {0}")]
    Pattern(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
