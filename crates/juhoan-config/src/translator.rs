use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000/translate".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sentence translation endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout, also used for dictionary fetches
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl TranslatorConfig {
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var("TRANSLATOR_URL") {
            self.api_url = url;
        }
        if let Some(timeout) = env::var("TRANSLATOR_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout_ms = timeout;
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
