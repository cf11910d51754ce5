use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Which translator handles user input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    /// Word-by-word dictionary substitution
    #[default]
    Words,
    /// Whole text sent to the sentence translation service
    Sentences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    pub fn swapped(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(Language::English, Language::JuHoansi)
    }
}
