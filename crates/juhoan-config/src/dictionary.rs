use std::env;

use juhoan_core::MergePolicy;
use serde::{Deserialize, Serialize};

fn default_path() -> Option<String> {
    Some("data/words.json".to_string())
}

fn default_use_cache() -> bool {
    true
}

fn default_cache_key() -> String {
    "dictionaryCache".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Local words file. Used when `url` is unset.
    #[serde(default = "default_path")]
    pub path: Option<String>,
    /// HTTP endpoint returning `{"words": [...]}`
    #[serde(default)]
    pub url: Option<String>,
    /// Reuse the last fetched dictionary from local storage
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
    #[serde(default = "default_cache_key")]
    pub cache_key: String,
    #[serde(default)]
    pub merge_policy: MergePolicy,
}

impl DictionaryConfig {
    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("DICTIONARY_PATH") {
            self.path = Some(path);
        }
        if let Ok(url) = env::var("DICTIONARY_URL") {
            self.url = Some(url);
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: None,
            use_cache: default_use_cache(),
            cache_key: default_cache_key(),
            merge_policy: MergePolicy::default(),
        }
    }
}
