use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::session::SessionConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod history;
pub mod session;
pub mod translator;

fn default_data_dir() -> String {
    "data".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub history: HistoryConfig,
    pub session: SessionConfig,

    /// Directory for history and the dictionary cache
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Emit JSON log lines instead of the human readable format
    pub log_json: bool,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Let environment variables win over values read from a file
    pub fn apply_env(&mut self) {
        self.dictionary.apply_env();
        self.translator.apply_env();

        if let Ok(dir) = env::var("JUHOAN_DATA_DIR") {
            self.data_dir = dir;
        }
        if let Some(json) = env::var("LOG_JSON").ok().and_then(|v| v.parse().ok()) {
            self.log_json = json;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary: DictionaryConfig::default(),
            translator: TranslatorConfig::default(),
            history: HistoryConfig::default(),
            session: SessionConfig::default(),

            data_dir: default_data_dir(),
            log_json: false,
        }
    }
}
