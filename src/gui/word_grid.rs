use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::VocabularyStore,
    gui::{
        theme::Theme,
        word_card::word_card,
    },
};

pub enum GridAction {
    Delete(String),
    OpenAddModal,
}

const CARD_MIN_WIDTH: f32 = 320.0;

/// Central panel: search bar plus one of three view states (card grid,
/// no-search-results message, first-run call to action).
pub fn word_grid(
    ctx: &egui::Context,
    theme: &Theme,
    store: &VocabularyStore,
    search_term: &mut String,
) -> Option<GridAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        if store.is_empty() {
            action = empty_store_view(ui, theme);
            return;
        }

        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(search_term)
                .hint_text("Search words or meanings...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let filtered = store.filtered(search_term);
        if filtered.is_empty() {
            no_matches_view(ui, theme);
            return;
        }

        egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            let columns = (ui.available_width() / CARD_MIN_WIDTH).floor().max(1.0) as usize;
            for row in filtered.chunks(columns) {
                ui.columns(columns, |cols| {
                    for (i, &word) in row.iter().enumerate() {
                        if word_card(&mut cols[i], theme, word) {
                            action = Some(GridAction::Delete(word.id.clone()));
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });
    });

    action
}

fn empty_store_view(ui: &mut egui::Ui, theme: &Theme) -> Option<GridAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(96.0);
        ui.heading("Start Building Your Vocabulary");
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Add your first word to begin creating your personal vocabulary collection.",
            )
            .color(theme.muted(ui)),
        );
        ui.add_space(16.0);
        if ui.button("➕ Add Your First Word").clicked() {
            action = Some(GridAction::OpenAddModal);
        }
    });

    action
}

fn no_matches_view(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(96.0);
        ui.heading("No words found");
        ui.add_space(4.0);
        ui.label(RichText::new("Try adjusting your search terms").color(theme.muted(ui)));
    });
}
