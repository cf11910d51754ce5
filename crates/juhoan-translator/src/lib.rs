use std::time::Duration;

pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use http::HttpSentenceTranslator;

/// Whole-text translation provider
#[async_trait::async_trait]
pub trait SentenceTranslator: Send + Sync {
    /// Translate `text` and return the provider's output verbatim
    async fn translate_sentence(&self, text: &str) -> Result<String, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[source] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Sentence translation is disabled")]
    Disabled,
}

impl TranslateError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TranslateError::Timeout(_))
    }
}
