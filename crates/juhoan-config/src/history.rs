use juhoan_core::history::{DEFAULT_CAPACITY, HISTORY_KEY};
use serde::{Deserialize, Serialize};

fn default_max_entries() -> usize {
    DEFAULT_CAPACITY
}

fn default_storage_key() -> String {
    HISTORY_KEY.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct HistoryConfig {
    /// Entries kept, newest first. Values above the default cap of 10 are
    /// lowered to it.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            storage_key: default_storage_key(),
        }
    }
}
