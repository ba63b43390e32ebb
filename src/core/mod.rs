pub mod errors;
pub mod models;
pub mod store;

pub use errors::WordstashError;
pub use models::VocabularyWord;
pub use store::VocabularyStore;
