use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use juhoan_core::{HistoryDraft, LanguagePair, StorageError, TranslationIndex, TranslationMode};
use juhoan_dictionary::{
    DictionaryCache, DictionaryError, DictionaryLoader, DictionarySource, HttpDictionarySource,
    WordsFileSource,
};
use juhoan_translator::{HttpSentenceTranslator, SentenceTranslator, TranslateError};

use crate::state::AppState;
use crate::status::DictionaryStatus;

/// Wires the dictionary, the sentence service and history together for one
/// session
pub struct AppController {
    state: Arc<AppState>,
    loader: DictionaryLoader,
    translator: Option<Arc<dyn SentenceTranslator>>,
}

impl AppController {
    pub fn new(
        state: Arc<AppState>,
        loader: DictionaryLoader,
        translator: Option<Arc<dyn SentenceTranslator>>,
    ) -> Self {
        Self {
            state,
            loader,
            translator,
        }
    }

    /// Build the dictionary loader and sentence client described by the config
    pub async fn from_config(state: Arc<AppState>) -> anyhow::Result<Self> {
        let (loader, translator) = {
            let config = state.config.read().await;
            let timeout = Duration::from_millis(config.translator.timeout_ms);

            let source: Box<dyn DictionarySource> =
                match (&config.dictionary.url, &config.dictionary.path) {
                    (Some(url), _) => Box::new(HttpDictionarySource::new(url.clone(), timeout)),
                    (None, Some(path)) => Box::new(WordsFileSource::new(path)),
                    (None, None) => anyhow::bail!(
                        "no dictionary source configured (set dictionary.url or dictionary.path)"
                    ),
                };

            let mut loader =
                DictionaryLoader::new(source).with_merge_policy(config.dictionary.merge_policy);
            if config.dictionary.use_cache {
                loader = loader.with_cache(DictionaryCache::with_key(
                    state.storage.clone(),
                    config.dictionary.cache_key.clone(),
                ));
            }

            let translator: Option<Arc<dyn SentenceTranslator>> = if config.translator.enabled {
                Some(Arc::new(HttpSentenceTranslator::new(
                    config.translator.api_url.clone(),
                    timeout,
                )))
            } else {
                tracing::warn!("Sentence translation disabled");
                None
            };

            (loader, translator)
        };

        Ok(Self::new(state, loader, translator))
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Load the dictionary and publish it, recording the outcome in status
    pub async fn load_dictionary(
        &self,
        refresh: bool,
    ) -> Result<Arc<TranslationIndex>, DictionaryError> {
        let status = &self.state.status;
        status.set_dictionary(DictionaryStatus::Loading).await;

        match self.loader.publish(&self.state.index, refresh).await {
            Ok(index) => {
                status.set_dictionary(DictionaryStatus::ready(&index)).await;
                Ok(index)
            }
            Err(e) => {
                status.set_dictionary(DictionaryStatus::Failed(e.to_string())).await;
                Err(e)
            }
        }
    }

    /// Current index, loading it on first use
    pub async fn index(&self) -> Result<Arc<TranslationIndex>, DictionaryError> {
        match self.state.index.snapshot() {
            Some(index) => Ok(index),
            None => self.load_dictionary(false).await,
        }
    }

    pub async fn translate_words(
        &self,
        text: &str,
        pair: LanguagePair,
    ) -> Result<String, DictionaryError> {
        let index = self.index().await?;
        let text = self.clamp(text).await;
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(index.translate(text, pair.source, pair.target))
    }

    pub async fn translate_sentence(&self, text: &str) -> Result<String, TranslateError> {
        let translator = self.translator.as_ref().ok_or(TranslateError::Disabled)?;
        let text = self.clamp(text).await;

        let provider = translator.metadata();
        tracing::debug!(
            provider = %provider.name,
            endpoint = %provider.endpoint,
            "Translating sentence"
        );
        translator.translate_sentence(text).await.inspect_err(|e| {
            tracing::warn!(provider = %provider.name, "Sentence translation failed: {e}");
        })
    }

    pub async fn translate(
        &self,
        text: &str,
        pair: LanguagePair,
        mode: TranslationMode,
    ) -> anyhow::Result<String> {
        match mode {
            TranslationMode::Words => self
                .translate_words(text, pair)
                .await
                .context("dictionary unavailable"),
            TranslationMode::Sentences => self
                .translate_sentence(text)
                .await
                .context("failed to translate sentence"),
        }
    }

    /// Commit a translation to history, `Ok(false)` when it was a no-op
    pub async fn commit(
        &self,
        pair: LanguagePair,
        original: &str,
        translated: &str,
    ) -> Result<bool, StorageError> {
        let original = self.clamp(original).await;
        let draft = HistoryDraft::new(pair.source, pair.target, original, translated);
        self.state.history.lock().await.add(draft)
    }

    /// Default language pair from the session config
    pub async fn default_pair(&self) -> LanguagePair {
        let config = self.state.config.read().await;
        LanguagePair::new(config.session.source, config.session.target)
    }

    pub async fn default_mode(&self) -> TranslationMode {
        self.state.config.read().await.session.mode
    }

    async fn clamp<'a>(&self, text: &'a str) -> &'a str {
        let max = self.state.config.read().await.session.max_text_length;
        clamp_text(text, max)
    }
}

/// Cut `text` to at most `max` characters
pub fn clamp_text(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => {
            tracing::warn!("Input longer than {max} characters, truncating");
            &text[..end]
        }
        None => text,
    }
}
