use std::sync::Arc;

use juhoan_core::{Language, TranslationIndex};
use tokio::sync::RwLock;

/// Dictionary load state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DictionaryStatus {
    #[default]
    NotLoaded,
    Loading,
    Ready { word_counts: Vec<(Language, usize)> },
    Failed(String),
}

impl DictionaryStatus {
    pub fn ready(index: &TranslationIndex) -> Self {
        DictionaryStatus::Ready {
            word_counts: Language::ALL
                .into_iter()
                .map(|lang| (lang, index.word_count(lang)))
                .collect(),
        }
    }
}

/// Application status
pub struct AppStatus {
    pub dictionary: Arc<RwLock<DictionaryStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            dictionary: Arc::new(RwLock::new(DictionaryStatus::default())),
        }
    }

    pub async fn set_dictionary(&self, status: DictionaryStatus) {
        *self.dictionary.write().await = status;
    }

    pub async fn dictionary(&self) -> DictionaryStatus {
        self.dictionary.read().await.clone()
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
