pub mod http;
pub mod words_file;
