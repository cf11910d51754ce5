pub mod cache;
pub mod loader;
pub mod loaders;
pub mod types;

pub use cache::DictionaryCache;
pub use loader::DictionaryLoader;
pub use loaders::http::HttpDictionarySource;
pub use loaders::words_file::WordsFileSource;
pub use types::{DictionaryError, DictionarySource};
