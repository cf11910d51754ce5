use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use juhoan_config::Config;
use juhoan_core::{DictionaryEntry, MemoryStorage, Storage};
use juhoan_dictionary::{DictionaryCache, DictionaryError, DictionaryLoader, DictionarySource};
use juhoan_translator::{ProviderMetadata, SentenceTranslator, TranslateError};

use crate::controller::AppController;
use crate::state::AppState;

pub struct StaticSource {
    pub words: Vec<DictionaryEntry>,
    pub fetches: Arc<AtomicUsize>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl DictionarySource for StaticSource {
    async fn fetch(&self) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DictionaryError::Unavailable("words endpoint down".to_string()));
        }
        Ok(self.words.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Echoes the input upper-cased, or fails when `fail` is set
pub struct EchoTranslator {
    pub fail: bool,
}

#[async_trait::async_trait]
impl SentenceTranslator for EchoTranslator {
    async fn translate_sentence(&self, text: &str) -> Result<String, TranslateError> {
        if self.fail {
            return Err(TranslateError::ApiError {
                status: 500,
                message: "Translation service error".to_string(),
            });
        }
        Ok(text.to_uppercase())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            endpoint: "memory".to_string(),
        }
    }
}

pub fn dictionary() -> Vec<DictionaryEntry> {
    vec![
        DictionaryEntry::new("1", "water", "glu", "water"),
        DictionaryEntry::new("2", "fire", "da'a", ""),
        DictionaryEntry::new("3", "big", "!xai", "groot"),
    ]
}

pub struct Harness {
    pub controller: AppController,
    pub storage: Arc<MemoryStorage>,
    pub fetches: Arc<AtomicUsize>,
}

pub struct HarnessOptions {
    pub config: Config,
    pub words: Vec<DictionaryEntry>,
    pub dictionary_fails: bool,
    pub translator: Option<EchoTranslator>,
    pub storage: Arc<MemoryStorage>,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            config: Config::default(),
            words: dictionary(),
            dictionary_fails: false,
            translator: Some(EchoTranslator { fail: false }),
            storage: Arc::new(MemoryStorage::new()),
        }
    }
}

pub fn harness(options: HarnessOptions) -> Harness {
    let storage = options.storage;
    let fetches = Arc::new(AtomicUsize::new(0));
    let source = StaticSource {
        words: options.words,
        fetches: fetches.clone(),
        fail: options.dictionary_fails,
    };

    let storage_port: Arc<dyn Storage> = storage.clone();
    let loader = DictionaryLoader::new(Box::new(source))
        .with_cache(DictionaryCache::new(storage_port.clone()));
    let translator = options
        .translator
        .map(|t| Arc::new(t) as Arc<dyn SentenceTranslator>);

    let state = Arc::new(AppState::new(options.config, storage_port));
    Harness {
        controller: AppController::new(state, loader, translator),
        storage,
        fetches,
    }
}
