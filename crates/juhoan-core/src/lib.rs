pub mod dictionary;
pub mod error;
pub mod history;
pub mod index;
pub mod language;
pub mod preprocess;
pub mod state;
pub mod storage;
pub mod translate;
pub mod types;

pub use dictionary::DictionaryEntry;
pub use error::StorageError;
pub use history::{HistoryDraft, HistoryEntry, HistoryManager};
pub use index::{MergePolicy, TranslationIndex, WordTranslations};
pub use language::Language;
pub use state::SharedIndex;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use translate::{translate, translate_codes};
pub use types::{LanguagePair, TranslationMode};
