use std::io::ErrorKind;
use std::path::PathBuf;

use juhoan_core::DictionaryEntry;
use serde::Deserialize;

use crate::types::{DictionaryError, DictionarySource};

/// A words file is either a bare array or wrapped in `{"words": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum WordsFile {
    List(Vec<DictionaryEntry>),
    Wrapped { words: Vec<DictionaryEntry> },
}

/// Dictionary read from a local JSON file
pub struct WordsFileSource {
    path: PathBuf,
}

impl WordsFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }


    pub fn parse(json: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        Ok(match serde_json::from_str(json)? {
            WordsFile::List(words) | WordsFile::Wrapped { words } => words,
        })
    }
}

#[async_trait::async_trait]
impl DictionarySource for WordsFileSource {
    async fn fetch(&self) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        tracing::info!("Loading dictionary from file: {}", self.path.display());

        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DictionaryError::FileNotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let words = Self::parse(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", words.len());
        Ok(words)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
