use eframe::egui::{
    self,
    containers,
    RichText,
};

use crate::gui::theme::Theme;

pub enum TopBarAction {
    AddWord,
    StartFlashcards,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme, word_count: usize) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();
                ui.label(RichText::new("My Vocabulary").strong());
                ui.label(RichText::new(word_count_label(word_count)).small().color(theme.muted(ui)));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("➕ Add Word").clicked() {
                        action = Some(TopBarAction::AddWord);
                    }

                    let flashcards = ui
                        .add_enabled(word_count > 0, egui::Button::new("⚡ Start Flashcards"))
                        .on_disabled_hover_text("Add a word first");
                    if flashcards.clicked() {
                        action = Some(TopBarAction::StartFlashcards);
                    }
                });
            });
        });

        action
    }
}

fn word_count_label(count: usize) -> String {
    if count == 1 {
        "1 word saved".to_string()
    } else {
        format!("{} words saved", count)
    }
}
