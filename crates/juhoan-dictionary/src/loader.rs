use std::sync::Arc;

use juhoan_core::{MergePolicy, SharedIndex, TranslationIndex};

use crate::cache::DictionaryCache;
use crate::types::{DictionaryError, DictionarySource};

/// Turns a dictionary source into a translation index, going through the
/// local cache when one is configured
pub struct DictionaryLoader {
    source: Box<dyn DictionarySource>,
    cache: Option<DictionaryCache>,
    merge_policy: MergePolicy,
}

impl DictionaryLoader {
    pub fn new(source: Box<dyn DictionarySource>) -> Self {
        Self {
            source,
            cache: None,
            merge_policy: MergePolicy::default(),
        }
    }

    pub fn with_cache(mut self, cache: DictionaryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }

    /// Build from the cache if it holds a dictionary, otherwise fetch
    pub async fn load(&self) -> Result<TranslationIndex, DictionaryError> {
        if let Some(words) = self.cache.as_ref().and_then(DictionaryCache::read) {
            tracing::info!("Using cached dictionary ({} entries)", words.len());
            return Ok(TranslationIndex::build_with(&words, self.merge_policy));
        }

        self.refresh().await
    }

    /// Fetch from the source, bypassing and then updating the cache
    pub async fn refresh(&self) -> Result<TranslationIndex, DictionaryError> {
        let words = self.source.fetch().await.inspect_err(|e| {
            tracing::error!("Failed to fetch dictionary from {}: {e}", self.source.describe());
        })?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.write(&words) {
                tracing::warn!("Failed to cache dictionary: {e}");
            }
        }

        Ok(TranslationIndex::build_with(&words, self.merge_policy))
    }

    /// Load (or refresh) and publish the result as the current snapshot
    pub async fn publish(
        &self,
        shared: &SharedIndex,
        refresh: bool,
    ) -> Result<Arc<TranslationIndex>, DictionaryError> {
        let index = if refresh {
            self.refresh().await?
        } else {
            self.load().await?
        };
        Ok(shared.publish(index))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use juhoan_core::{DictionaryEntry, Language, MemoryStorage};

    use super::*;

    struct CountingSource {
        words: Vec<DictionaryEntry>,
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl DictionarySource for CountingSource {
        async fn fetch(&self) -> Result<Vec<DictionaryEntry>, DictionaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DictionaryError::Unavailable("offline".to_string()));
            }
            Ok(self.words.clone())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn source(words: Vec<DictionaryEntry>, fail: bool) -> (Box<CountingSource>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            words,
            calls: calls.clone(),
            fail,
        };
        (Box::new(source), calls)
    }

    #[tokio::test]
    async fn fetches_and_fills_cache() {
        let cache = DictionaryCache::new(Arc::new(MemoryStorage::new()));
        let water = vec![DictionaryEntry::new("1", "water", "glu", "water")];
        let (source, calls) = source(water, false);
        let loader = DictionaryLoader::new(source).with_cache(cache.clone());

        let index = loader.load().await.unwrap();
        assert_eq!(index.translate("water", Language::English, Language::JuHoansi), "glu");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.read().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn valid_cache_skips_fetch() {
        let cache = DictionaryCache::new(Arc::new(MemoryStorage::new()));
        cache
            .write(&[DictionaryEntry::new("1", "fire", "da'a", "vuur")])
            .unwrap();
        let (source, calls) = source(vec![], false);
        let loader = DictionaryLoader::new(source).with_cache(cache);

        let index = loader.load().await.unwrap();
        assert_eq!(index.translate("fire", Language::English, Language::Afrikaans), "vuur");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn refresh_ignores_cache() {
        let cache = DictionaryCache::new(Arc::new(MemoryStorage::new()));
        cache.write(&[DictionaryEntry::new("1", "fire", "da'a", "")]).unwrap();
        let fire = vec![DictionaryEntry::new("1", "fire", "da'a", "vuur")];
        let (source, calls) = source(fire, false);
        let loader = DictionaryLoader::new(source).with_cache(cache.clone());

        let shared = SharedIndex::new();
        let index = loader.publish(&shared, true).await.unwrap();
        assert_eq!(index.translate("fire", Language::English, Language::Afrikaans), "vuur");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.read().unwrap()[0].afrikaans, "vuur");
        assert!(Arc::ptr_eq(&index, &shared.snapshot().unwrap()));
    }

    #[tokio::test]
    async fn source_failure_is_returned() {
        let (source, _calls) = source(vec![], true);
        let loader = DictionaryLoader::new(source);
        let shared = SharedIndex::new();

        let err = loader.publish(&shared, false).await.unwrap_err();
        assert!(matches!(err, DictionaryError::Unavailable(_)));
        assert!(shared.snapshot().is_none());
    }

    #[tokio::test]
    async fn merge_policy_is_applied() {
        let words = vec![
            DictionaryEntry::new("1", "water", "glu", ""),
            DictionaryEntry::new("2", "water", "gu", ""),
        ];
        let (source, _calls) = source(words, false);
        let loader = DictionaryLoader::new(source).with_merge_policy(MergePolicy::LastWins);

        let index = loader.load().await.unwrap();
        assert_eq!(index.translate("water", Language::English, Language::JuHoansi), "gu");
    }
}
