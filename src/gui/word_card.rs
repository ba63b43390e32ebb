use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::VocabularyWord,
    gui::theme::Theme,
};

/// Renders one word card. Returns true when the delete affordance was
/// clicked; the caller resolves it against the store by id.
pub fn word_card(ui: &mut egui::Ui, theme: &Theme, word: &VocabularyWord) -> bool {
    let mut delete_clicked = false;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.heading(word.display_word());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑").on_hover_text("Delete word").clicked() {
                    delete_clicked = true;
                }
            });
        });

        ui.add_space(4.0);
        ui.label(RichText::new("MEANING").small().color(theme.muted(ui)));
        ui.label(&word.meaning);

        ui.add_space(4.0);
        ui.label(RichText::new("EXAMPLE").small().color(theme.muted(ui)));
        ui.label(RichText::new(format!("\"{}\"", word.example)).italics());

        ui.add_space(6.0);
        ui.separator();
        ui.label(
            RichText::new(format!("Added on {}", word.date_added)).small().color(theme.muted(ui)),
        );
    });

    delete_clicked
}
