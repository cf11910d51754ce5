use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::language::Language;

/// One word across the three dictionary languages.
///
/// Missing or `null` columns deserialize to an empty string, which the index
/// treats as "no word in this language". Numeric ids are kept as their decimal
/// string. The raw words file column names (`english_word`, `jul'hoan_word`)
/// are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, alias = "english_word", deserialize_with = "null_as_empty")]
    pub english: String,
    #[serde(default, alias = "jul'hoan_word", deserialize_with = "null_as_empty")]
    pub ju_hoansi: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub afrikaans: String,
}

impl DictionaryEntry {
    pub fn new(
        id: impl Into<String>,
        english: impl Into<String>,
        ju_hoansi: impl Into<String>,
        afrikaans: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            english: english.into(),
            ju_hoansi: ju_hoansi.into(),
            afrikaans: afrikaans.into(),
        }
    }

    /// Word stored in the column for `lang`
    pub fn word(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.english,
            Language::JuHoansi => &self.ju_hoansi,
            Language::Afrikaans => &self.afrikaans,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}
