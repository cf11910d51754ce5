use std::sync::Arc;

use juhoan_core::{DictionaryEntry, Storage, StorageError};
use serde::{Deserialize, Serialize};

pub const CACHE_KEY: &str = "dictionaryCache";

#[derive(Serialize, Deserialize)]
struct CachedWords {
    words: Vec<DictionaryEntry>,
}

/// Last fetched dictionary, kept in local storage as `{"words": [...]}`
#[derive(Clone)]
pub struct DictionaryCache {
    storage: Arc<dyn Storage>,
    key: String,
}

impl DictionaryCache {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_key(storage, CACHE_KEY)
    }

    pub fn with_key(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Cached entries, None when absent or unreadable
    pub fn read(&self) -> Option<Vec<DictionaryEntry>> {
        let raw = match self.storage.read(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read dictionary cache: {e}");
                return None;
            }
        };

        match serde_json::from_str::<CachedWords>(&raw) {
            Ok(cached) => Some(cached.words),
            Err(e) => {
                tracing::warn!("Ignoring corrupt dictionary cache: {e}");
                None
            }
        }
    }

    pub fn write(&self, words: &[DictionaryEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(&CachedWords {
            words: words.to_vec(),
        })?;
        self.storage.write(&self.key, &json)
    }

    pub fn invalidate(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}
