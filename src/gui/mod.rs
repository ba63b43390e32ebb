pub mod add_word_modal;
pub mod app;
pub mod flashcard_modal;
pub mod settings;
pub mod theme;
pub mod top_bar;
pub mod word_card;
pub mod word_grid;

pub use app::WordstashApp;
