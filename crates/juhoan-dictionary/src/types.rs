use std::time::Duration;

use juhoan_core::DictionaryEntry;

/// Where dictionary entries come from
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch every entry, in source order
    async fn fetch(&self) -> Result<Vec<DictionaryEntry>, DictionaryError>;

    /// Short description for log lines
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dictionary unavailable: {0}")]
    Unavailable(String),

    #[error("Network error: {0}")]
    NetworkError(#[source] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}
