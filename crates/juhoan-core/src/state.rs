use std::sync::{Arc, PoisonError, RwLock};

use crate::index::TranslationIndex;

/// Holder for the current translation index.
///
/// Readers take an `Arc` snapshot and keep using it even if a refresh swaps in
/// a new index meanwhile.
#[derive(Default)]
pub struct SharedIndex {
    current: RwLock<Option<Arc<TranslationIndex>>>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index, None until a dictionary has been loaded
    pub fn snapshot(&self) -> Option<Arc<TranslationIndex>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publish a freshly built index and return it as a snapshot
    pub fn publish(&self, index: TranslationIndex) -> Arc<TranslationIndex> {
        let next = Arc::new(index);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::clone(&next));
        next
    }
}
