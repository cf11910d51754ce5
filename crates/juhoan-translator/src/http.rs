use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ProviderMetadata, SentenceTranslator, TranslateError};

const DEFAULT_ERROR_MESSAGE: &str = "Translation service error";

#[derive(Serialize)]
struct SentenceRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct SentenceResponse {
    translation: Option<String>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    detail: Option<Value>,
    error: Option<String>,
}

impl ErrorBody {
    fn message(self) -> Option<String> {
        match self.detail {
            Some(Value::String(detail)) => Some(detail),
            Some(Value::Null) | None => self.error,
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Client for a sentence service taking `{"text"}` and answering `{"translation"}`
#[derive(Clone)]
pub struct HttpSentenceTranslator {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
}

impl HttpSentenceTranslator {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            timeout,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> TranslateError {
        if e.is_timeout() {
            TranslateError::Timeout(self.timeout)
        } else {
            TranslateError::NetworkError(e)
        }
    }
}

#[async_trait]
impl SentenceTranslator for HttpSentenceTranslator {
    async fn translate_sentence(&self, text: &str) -> Result<String, TranslateError> {
        tracing::debug!("Sending {} chars to {}", text.chars().count(), self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(&SentenceRequest { text })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .message()
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            tracing::warn!("Sentence service returned HTTP {status}: {message}");
            return Err(TranslateError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: SentenceResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                TranslateError::Timeout(self.timeout)
            } else {
                TranslateError::InvalidResponse(format!("Failed to parse response: {e}"))
            }
        })?;

        body.translation.ok_or_else(|| {
            TranslateError::InvalidResponse("No translation in response".to_string())
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "sentence-service".to_string(),
            endpoint: self.api_url.clone(),
        }
    }
}
