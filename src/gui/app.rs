use eframe::egui;

use super::{
    add_word_modal::AddWordModal,
    flashcard_modal::FlashcardModal,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    word_grid::{
        word_grid,
        GridAction,
    },
};
use crate::{
    core::VocabularyStore,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct Modals {
    pub add_word: AddWordModal,
    pub flashcards: FlashcardModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { add_word: AddWordModal::new(), flashcards: FlashcardModal::new() }
    }
}

pub struct WordstashApp {
    store: VocabularyStore,
    settings: SettingsData,
    search_term: String,
    theme: Theme,
    modals: Modals,
}

impl WordstashApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let store = VocabularyStore::load();
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        Self { store, settings, search_term: String::new(), theme, modals: Modals::default() }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.save_settings();
        }
    }
}

impl eframe::App for WordstashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopBar::show(ctx, &self.theme, self.store.len()) {
            match action {
                TopBarAction::AddWord => self.modals.add_word.open(),
                TopBarAction::StartFlashcards => self.modals.flashcards.open(),
            }
        }

        if let Some(action) = word_grid(ctx, &self.theme, &self.store, &mut self.search_term) {
            match action {
                GridAction::Delete(id) => self.store.delete(&id),
                GridAction::OpenAddModal => self.modals.add_word.open(),
            }
        }

        if let Some(new_word) = self.modals.add_word.show(ctx, &self.theme) {
            self.store.add(new_word.word, new_word.meaning, new_word.example);
        }

        self.modals.flashcards.show(ctx, &self.theme, self.store.words());

        self.sync_theme_preference(ctx);
    }
}
