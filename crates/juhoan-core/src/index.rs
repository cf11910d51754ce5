use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryEntry;
use crate::language::Language;

/// Translations of one source word, keyed by target language
pub type WordTranslations = HashMap<Language, String>;

/// How colliding words (same lower-cased spelling in one language) combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Keep the first non-empty value seen for each target language.
    /// Later entries only fill languages that are still missing.
    #[default]
    FirstWins,
    /// The last entry with the word replaces the whole record, so languages it
    /// leaves empty become untranslated.
    LastWins,
}

/// Per-language word lookup built from a dictionary snapshot.
///
/// Keys are lower-cased; values keep the dictionary's casing. The index is
/// never updated in place, a refreshed dictionary builds a new one.
#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    buckets: HashMap<Language, HashMap<String, WordTranslations>>,
}

impl TranslationIndex {
    pub fn build(entries: &[DictionaryEntry]) -> Self {
        Self::build_with(entries, MergePolicy::default())
    }

    pub fn build_with(entries: &[DictionaryEntry], policy: MergePolicy) -> Self {
        let mut buckets: HashMap<Language, HashMap<String, WordTranslations>> = HashMap::new();

        if entries.is_empty() {
            tracing::warn!("Dictionary is empty, translation index will be empty");
        }

        for entry in entries {
            for source in Language::ALL {
                let word = entry.word(source);
                if word.is_empty() {
                    continue;
                }

                let slot = buckets
                    .entry(source)
                    .or_default()
                    .entry(word.to_lowercase())
                    .or_default();
                if policy == MergePolicy::LastWins {
                    slot.clear();
                }

                for target in source.others() {
                    let value = entry.word(target);
                    if value.is_empty() {
                        continue;
                    }
                    match policy {
                        MergePolicy::FirstWins => {
                            slot.entry(target).or_insert_with(|| value.to_string());
                        }
                        MergePolicy::LastWins => {
                            slot.insert(target, value.to_string());
                        }
                    }
                }
            }
        }

        Self { buckets }
    }

    /// Word table for a source language, None if no entry had a word in it
    pub fn bucket(&self, source: Language) -> Option<&HashMap<String, WordTranslations>> {
        self.buckets.get(&source)
    }

    /// Case-insensitive lookup of a single word
    pub fn lookup(&self, source: Language, word: &str) -> Option<&WordTranslations> {
        self.bucket(source)?.get(&word.to_lowercase())
    }

    pub fn word_count(&self, source: Language) -> usize {
        self.bucket(source).map_or(0, HashMap::len)
    }

    /// Word-by-word translation against this index
    pub fn translate(&self, text: &str, source: Language, target: Language) -> String {
        crate::translate::translate(text, source, target, self)
    }
}
