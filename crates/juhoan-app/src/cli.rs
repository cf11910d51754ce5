use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use juhoan_core::{Language, TranslationMode};

#[derive(Debug, Parser)]
#[command(
    name = "juhoan",
    version,
    about = "English / Ju/’hoansi / Afrikaans dictionary translator"
)]
pub struct Cli {
    /// Config file, defaults to ./config.json when it exists
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding history and the dictionary cache
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate word by word with the dictionary
    Words {
        /// Text to translate, read from stdin when omitted
        text: Option<String>,
        #[command(flatten)]
        languages: LanguageArgs,
        /// Record the translation in history
        #[arg(long)]
        save: bool,
    },
    /// Translate whole text with the sentence service
    Sentence {
        /// Text to translate, read from stdin when omitted
        text: Option<String>,
        #[command(flatten)]
        languages: LanguageArgs,
        /// Record the translation in history
        #[arg(long)]
        save: bool,
    },
    /// Show and edit translation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Manage the dictionary
    Dictionary {
        #[command(subcommand)]
        action: DictionaryAction,
    },
    /// List supported languages
    Languages,
    /// Read lines from stdin and translate each one
    Interactive {
        #[command(flatten)]
        languages: LanguageArgs,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Print the effective configuration
    Config {
        /// Write it to this file instead
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LanguageArgs {
    /// Source language code (english, ju_hoansi, afrikaans)
    #[arg(short, long)]
    pub from: Option<Language>,
    /// Target language code (english, ju_hoansi, afrikaans)
    #[arg(short, long)]
    pub to: Option<Language>,
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// Print entries, newest first
    List {
        /// Only starred entries
        #[arg(long)]
        saved: bool,
    },
    /// Record a translation
    Add {
        #[arg(short, long)]
        from: Language,
        #[arg(short, long)]
        to: Language,
        original: String,
        translated: String,
    },
    /// Star or unstar an entry
    Save { id: u64 },
    /// Delete an entry
    Delete { id: u64 },
    /// Delete every entry
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum DictionaryAction {
    /// Fetch the dictionary again, ignoring the cache
    Refresh,
    /// Show what is loaded
    Status,
    /// Show the translations of a single word
    Lookup {
        word: String,
        #[arg(short, long, default_value = "english")]
        from: Language,
    },
    /// Drop the cached dictionary
    ClearCache,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Words,
    Sentences,
}

impl From<ModeArg> for TranslationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Words => TranslationMode::Words,
            ModeArg::Sentences => TranslationMode::Sentences,
        }
    }
}
