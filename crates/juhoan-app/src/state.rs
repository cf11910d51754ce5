use std::sync::Arc;

use juhoan_config::Config;
use juhoan_core::{HistoryManager, SharedIndex, Storage};
use tokio::sync::{Mutex, RwLock};

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub storage: Arc<dyn Storage>,
    pub index: SharedIndex,
    pub history: Mutex<HistoryManager>,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let history = HistoryManager::with_options(
            storage.clone(),
            config.history.storage_key.clone(),
            config.history.max_entries,
        );

        Self {
            config: Arc::new(RwLock::new(config)),
            storage,
            index: SharedIndex::new(),
            history: Mutex::new(history),
            status: AppStatus::new(),
        }
    }
}
