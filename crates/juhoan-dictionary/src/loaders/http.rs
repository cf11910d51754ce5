use std::time::Duration;

use juhoan_core::DictionaryEntry;
use serde::Deserialize;

use crate::types::{DictionaryError, DictionarySource};

#[derive(Deserialize)]
struct WordsPayload {
    words: Option<Vec<DictionaryEntry>>,
}

#[derive(Deserialize, Default)]
struct ErrorPayload {
    error: Option<String>,
}

/// Dictionary served by a words endpoint answering `{"words": [...]}`
#[derive(Clone)]
pub struct HttpDictionarySource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpDictionarySource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> DictionaryError {
        if e.is_timeout() {
            DictionaryError::Timeout(self.timeout)
        } else {
            DictionaryError::NetworkError(e)
        }
    }
}

#[async_trait::async_trait]
impl DictionarySource for HttpDictionarySource {
    async fn fetch(&self) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        tracing::info!("Fetching dictionary from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorPayload = response.json().await.unwrap_or_default();
            let message = body
                .error
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(DictionaryError::Unavailable(message));
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let payload: WordsPayload = serde_json::from_slice(&body)?;
        let words = payload.words.ok_or_else(|| {
            DictionaryError::InvalidFormat(
                "Fetched data is not in the expected format (missing 'words' array)".to_string(),
            )
        })?;

        tracing::info!("Fetched {} dictionary entries", words.len());
        Ok(words)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use juhoan_translator::test_helpers::{serve_once, serve_silently};

    use super::*;

    fn source(base: String) -> HttpDictionarySource {
        HttpDictionarySource::new(format!("{base}/api/words"), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn parses_words_array() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"words":[{"id":1,"english":"water","ju_hoansi":"glu","afrikaans":"water"}]}"#,
        )
        .await;

        let words = source(base).fetch().await.unwrap();
        assert_eq!(words, vec![DictionaryEntry::new("1", "water", "glu", "water")]);
        assert!(request.await.unwrap().starts_with("GET /api/words"));
    }

    #[tokio::test]
    async fn error_body_is_surfaced() {
        let (base, _request) = serve_once(
            "500 Internal Server Error",
            r#"{"error":"Failed to fetch words from the local file."}"#,
        )
        .await;

        match source(base).fetch().await {
            Err(DictionaryError::Unavailable(message)) => {
                assert_eq!(message, "Failed to fetch words from the local file.");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_reports_status() {
        let (base, _request) = serve_once("503 Service Unavailable", "<html>down</html>").await;

        match source(base).fetch().await {
            Err(DictionaryError::Unavailable(message)) => {
                assert_eq!(message, "HTTP error! status: 503");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_words_array_is_invalid() {
        let (base, _request) = serve_once("200 OK", r#"{"items":[]}"#).await;

        let err = source(base).fetch().await.unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidFormat(_)));
    }

    #[tokio::test]
    async fn slow_endpoint_times_out() {
        let base = serve_silently().await;
        let source =
            HttpDictionarySource::new(format!("{base}/api/words"), Duration::from_millis(200));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, DictionaryError::Timeout(_)), "expected timeout, got {err:?}");
    }
}
