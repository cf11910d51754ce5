use juhoan_core::{Language, TranslationMode};
use serde::{Deserialize, Serialize};

fn default_source() -> Language {
    Language::English
}

fn default_target() -> Language {
    Language::JuHoansi
}

fn default_max_text_length() -> usize {
    5000
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(default = "default_source")]
    pub source: Language,
    #[serde(default = "default_target")]
    pub target: Language,
    #[serde(default)]
    pub mode: TranslationMode,
    /// Input longer than this many characters is cut off
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
            mode: TranslationMode::default(),
            max_text_length: default_max_text_length(),
        }
    }
}
