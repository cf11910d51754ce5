use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the dictionary carries a column for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    JuHoansi,
    Afrikaans,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::JuHoansi, Language::Afrikaans];

    /// Wire code used in dictionary records, history entries and config
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::JuHoansi => "ju_hoansi",
            Language::Afrikaans => "afrikaans",
        }
    }

    /// Human readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::JuHoansi => "Ju/’hoansi",
            Language::Afrikaans => "Afrikaans",
        }
    }

    /// BCP 47 tag for text-to-speech, None when no voice exists
    pub fn speech_locale(self) -> Option<&'static str> {
        match self {
            Language::English => Some("en-US"),
            Language::JuHoansi => None,
            Language::Afrikaans => Some("af-ZA"),
        }
    }

    /// Parse a wire code. Empty or unknown codes yield None.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// The two languages other than `self`
    pub fn others(self) -> [Language; 2] {
        match self {
            Language::English => [Language::JuHoansi, Language::Afrikaans],
            Language::JuHoansi => [Language::English, Language::Afrikaans],
            Language::Afrikaans => [Language::English, Language::JuHoansi],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
