use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::language::Language;
use crate::storage::Storage;

/// Storage key holding the serialized history list
pub const HISTORY_KEY: &str = "translatorAppHistory";

/// Maximum number of entries kept
pub const DEFAULT_CAPACITY: usize = 10;

/// A committed translation. Serialized field names match the stored format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    #[serde(rename = "from")]
    pub source: Language,
    #[serde(rename = "to")]
    pub target: Language,
    pub original: String,
    pub translated: String,
    #[serde(default)]
    pub saved: bool,
}

/// Input to [`HistoryManager::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryDraft {
    pub source: Language,
    pub target: Language,
    pub original: String,
    pub translated: String,
}

impl HistoryDraft {
    pub fn new(
        source: Language,
        target: Language,
        original: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target,
            original: original.into(),
            translated: translated.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.original.trim().is_empty() || self.translated.trim().is_empty()
    }
}

impl HistoryEntry {
    fn same_translation(&self, draft: &HistoryDraft) -> bool {
        self.source == draft.source
            && self.target == draft.target
            && self.original == draft.original
            && self.translated == draft.translated
    }
}

/// Newest-first, capped, deduplicated translation history.
///
/// Every mutation rewrites the whole list to storage. Eviction at the cap is
/// purely positional, saved entries are not exempt.
pub struct HistoryManager {
    storage: Arc<dyn Storage>,
    key: String,
    capacity: usize,
    entries: Vec<HistoryEntry>,
    last_id: u64,
}

impl HistoryManager {
    /// Restore history from storage with the default key and capacity
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self::with_options(storage, HISTORY_KEY, DEFAULT_CAPACITY)
    }

    /// `capacity` is clamped to `1..=DEFAULT_CAPACITY`
    pub fn with_options(
        storage: Arc<dyn Storage>,
        key: impl Into<String>,
        capacity: usize,
    ) -> Self {
        let key = key.into();
        let capacity = capacity.clamp(1, DEFAULT_CAPACITY);

        let mut entries = load_entries(storage.as_ref(), &key);
        entries.truncate(capacity);
        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);

        tracing::info!("Loaded {} history entries", entries.len());

        Self {
            storage,
            key,
            capacity,
            entries,
            last_id,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn saved(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(|e| e.saved)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a translation at the head of the list.
    ///
    /// Returns `Ok(false)` without touching storage when either text is blank
    /// or the same translation is already somewhere in the list.
    pub fn add(&mut self, draft: HistoryDraft) -> Result<bool, StorageError> {
        if draft.is_blank() {
            tracing::debug!("Ignoring blank history entry");
            return Ok(false);
        }

        if self.entries.iter().any(|e| e.same_translation(&draft)) {
            tracing::debug!("Translation already in history");
            return Ok(false);
        }

        let entry = HistoryEntry {
            id: self.next_id(),
            source: draft.source,
            target: draft.target,
            original: draft.original,
            translated: draft.translated,
            saved: false,
        };

        let mut entries = Vec::with_capacity(self.capacity);
        entries.push(entry);
        entries.extend(self.entries.iter().take(self.capacity - 1).cloned());
        for evicted in self.entries.iter().skip(self.capacity - 1) {
            tracing::debug!(id = evicted.id, saved = evicted.saved, "Evicted history entry");
        }

        self.commit(entries)?;
        Ok(true)
    }

    /// Flip the saved flag, `Ok(false)` if `id` is unknown
    pub fn toggle_saved(&mut self, id: u64) -> Result<bool, StorageError> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };
        let mut entries = self.entries.clone();
        entries[pos].saved = !entries[pos].saved;
        self.commit(entries)?;
        Ok(true)
    }

    /// Delete an entry, `Ok(false)` if `id` is unknown
    pub fn remove(&mut self, id: u64) -> Result<bool, StorageError> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };
        let mut entries = self.entries.clone();
        entries.remove(pos);
        self.commit(entries)?;
        Ok(true)
    }

    /// Delete everything
    pub fn clear(&mut self) -> Result<bool, StorageError> {
        if self.entries.is_empty() {
            return Ok(false);
        }
        self.commit(Vec::new())?;
        Ok(true)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Millisecond timestamp, bumped past the last id handed out
    fn next_id(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut id = match self.last_id.checked_add(1) {
            Some(next) => now.max(next),
            None => {
                tracing::warn!("History ids exhausted, restarting from the clock");
                now
            }
        };
        while self.position(id).is_some() {
            id = id.wrapping_add(1);
        }

        self.last_id = id;
        id
    }

    /// Write `entries` to storage, then adopt them. On error the in-memory
    /// list is left as it was.
    fn commit(&mut self, entries: Vec<HistoryEntry>) -> Result<(), StorageError> {
        let json = serde_json::to_string(&entries)?;
        self.storage.write(&self.key, &json)?;
        self.entries = entries;
        Ok(())
    }
}

/// Read stored history. Unreadable or malformed data yields an empty list.
pub fn load_entries(storage: &dyn Storage, key: &str) -> Vec<HistoryEntry> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read history, starting empty: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Stored history is corrupt, discarding it: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn manager() -> (Arc<MemoryStorage>, HistoryManager) {
        let storage = Arc::new(MemoryStorage::new());
        let history = HistoryManager::load(storage.clone());
        (storage, history)
    }

    fn draft(original: &str, translated: &str) -> HistoryDraft {
        HistoryDraft::new(Language::English, Language::JuHoansi, original, translated)
    }

    fn stored(storage: &MemoryStorage) -> Vec<HistoryEntry> {
        let raw = storage.read(HISTORY_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn add_prepends_unsaved_entry_and_persists() {
        let (storage, mut history) = manager();

        assert!(history.add(draft("water", "glu")).unwrap());
        assert!(history.add(draft("fire", "da'a")).unwrap());

        let originals: Vec<_> = history.entries().iter().map(|e| e.original.as_str()).collect();
        assert_eq!(originals, vec!["fire", "water"]);
        assert!(history.entries().iter().all(|e| !e.saved));
        assert_eq!(stored(&storage), history.entries());
    }

    #[test]
    fn blank_text_is_ignored() {
        let (storage, mut history) = manager();

        assert!(!history.add(draft("  ", "glu")).unwrap());
        assert!(!history.add(draft("water", "\n\t")).unwrap());
        assert!(history.is_empty());
        assert_eq!(storage.read(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn duplicates_anywhere_in_list_are_ignored() {
        let (_storage, mut history) = manager();

        history.add(draft("water", "glu")).unwrap();
        history.add(draft("fire", "da'a")).unwrap();
        assert!(!history.add(draft("water", "glu")).unwrap());
        assert_eq!(history.len(), 2);

        // Different direction is a different translation
        let reversed = HistoryDraft::new(Language::JuHoansi, Language::English, "water", "glu");
        assert!(history.add(reversed).unwrap());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn identical_adds_yield_one_entry() {
        let (_storage, mut history) = manager();
        history.add(draft("water", "glu")).unwrap();
        history.add(draft("water", "glu")).unwrap();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn cap_keeps_ten_most_recent() {
        let (storage, mut history) = manager();

        for i in 0..15 {
            history.add(draft(&format!("word{i}"), &format!("w{i}"))).unwrap();
        }

        assert_eq!(history.len(), DEFAULT_CAPACITY);
        let originals: Vec<_> = history.entries().iter().map(|e| e.original.clone()).collect();
        let expected: Vec<_> = (5..15).rev().map(|i| format!("word{i}")).collect();
        assert_eq!(originals, expected);
        assert_eq!(stored(&storage).len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn eviction_does_not_spare_saved_entries() {
        let (_storage, mut history) = manager();

        history.add(draft("first", "one")).unwrap();
        let first_id = history.entries()[0].id;
        history.toggle_saved(first_id).unwrap();

        for i in 0..DEFAULT_CAPACITY {
            history.add(draft(&format!("word{i}"), "x")).unwrap();
        }

        assert!(history.get(first_id).is_none());
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let (_storage, mut history) = manager();
        for i in 0..5 {
            history.add(draft(&format!("w{i}"), "x")).unwrap();
        }
        let ids: Vec<_> = history.entries().iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn toggle_saved_flips_and_persists() {
        let (storage, mut history) = manager();
        history.add(draft("water", "glu")).unwrap();
        let id = history.entries()[0].id;

        assert!(history.toggle_saved(id).unwrap());
        assert!(stored(&storage)[0].saved);
        assert_eq!(history.saved().count(), 1);

        assert!(history.toggle_saved(id).unwrap());
        assert!(!stored(&storage)[0].saved);

        assert!(!history.toggle_saved(id + 1000).unwrap());
    }

    #[test]
    fn remove_deletes_and_persists() {
        let (storage, mut history) = manager();
        history.add(draft("water", "glu")).unwrap();
        history.add(draft("fire", "da'a")).unwrap();
        let id = history.entries()[1].id;

        assert!(history.remove(id).unwrap());
        assert!(!history.remove(id).unwrap());
        assert_eq!(history.len(), 1);
        assert_eq!(stored(&storage).len(), 1);
    }

    #[test]
    fn clear_empties_storage() {
        let (storage, mut history) = manager();
        assert!(!history.clear().unwrap());
        history.add(draft("water", "glu")).unwrap();
        assert!(history.clear().unwrap());
        assert!(stored(&storage).is_empty());
    }

    #[test]
    fn reload_restores_state() {
        let storage = Arc::new(MemoryStorage::new());
        let mut history = HistoryManager::load(storage.clone());
        history.add(draft("water", "glu")).unwrap();
        history.add(draft("fire", "da'a")).unwrap();
        let id = history.entries()[0].id;
        history.toggle_saved(id).unwrap();

        let mut restored = HistoryManager::load(storage.clone());
        assert_eq!(restored.entries(), history.entries());

        // New ids keep increasing after a restart
        restored.add(draft("dog", "gumi")).unwrap();
        assert!(restored.entries()[0].id > id);
    }

    #[test]
    fn corrupt_storage_loads_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(HISTORY_KEY, "{not json").unwrap();

        let history = HistoryManager::load(storage.clone());
        assert!(history.is_empty());
        assert!(load_entries(storage.as_ref(), HISTORY_KEY).is_empty());
    }

    #[test]
    fn reads_stored_field_names() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .write(
                HISTORY_KEY,
                r#"[{"id":1700000000000,"from":"english","to":"afrikaans","original":"water","translated":"water","saved":true}]"#,
            )
            .unwrap();

        let history = HistoryManager::load(storage);
        let entry = &history.entries()[0];
        assert_eq!(entry.id, 1_700_000_000_000);
        assert_eq!(entry.target, Language::Afrikaans);
        assert!(entry.saved);
    }

    #[test]
    fn max_stored_id_does_not_overflow() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .write(
                HISTORY_KEY,
                r#"[{"id":18446744073709551615,"from":"english","to":"ju_hoansi","original":"water","translated":"glu","saved":false}]"#,
            )
            .unwrap();

        let mut history = HistoryManager::load(storage.clone());
        assert!(history.add(draft("fire", "da'a")).unwrap());
        assert!(history.add(draft("big", "!xai")).unwrap());

        let ids: Vec<_> = history.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| ids.iter().filter(|other| *other == id).count() == 1));
        assert_eq!(stored(&storage).len(), 3);
    }

    #[test]
    fn capacity_is_clamped_to_default() {
        let storage = Arc::new(MemoryStorage::new());
        let mut history = HistoryManager::with_options(storage, HISTORY_KEY, 50);

        for i in 0..15 {
            history.add(draft(&format!("word{i}"), "x")).unwrap();
        }
        assert_eq!(history.len(), DEFAULT_CAPACITY);
    }

    /// Reads from an inner store, refuses writes once `broken` is set
    struct BrokenDisk {
        inner: MemoryStorage,
        broken: std::sync::atomic::AtomicBool,
    }

    impl Storage for BrokenDisk {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.broken.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.write(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_write_leaves_history_unchanged() {
        let disk = Arc::new(BrokenDisk {
            inner: MemoryStorage::new(),
            broken: Default::default(),
        });
        let mut history = HistoryManager::load(disk.clone());
        history.add(draft("water", "glu")).unwrap();
        let id = history.entries()[0].id;
        let before = history.entries().to_vec();

        disk.broken.store(true, std::sync::atomic::Ordering::SeqCst);

        assert!(history.add(draft("fire", "da'a")).is_err());
        assert!(history.toggle_saved(id).is_err());
        assert!(history.remove(id).is_err());
        assert!(history.clear().is_err());
        assert_eq!(history.entries(), before.as_slice());

        let raw = disk.inner.read(HISTORY_KEY).unwrap().unwrap();
        let on_disk: Vec<HistoryEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, before);
    }
}
