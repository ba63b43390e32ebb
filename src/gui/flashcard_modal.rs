use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::VocabularyWord,
    gui::theme::Theme,
};

/// Position of the round-robin cycler: which card is showing and whether it
/// is flipped to the meaning side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashcardState {
    pub index: usize,
    pub flipped: bool,
}

impl FlashcardState {
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Advances cyclically and always lands on the front of the next card.
    pub fn next(&mut self, card_count: usize) {
        self.flipped = false;
        self.index = (self.index + 1) % card_count;
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Keeps the index valid if the word list shrank while the cycler was
    /// open (a word deleted elsewhere).
    pub fn clamp(&mut self, card_count: usize) {
        if self.index >= card_count {
            self.index = card_count.saturating_sub(1);
        }
    }
}

pub struct FlashcardModal {
    open: bool,
    state: FlashcardState,
}

impl FlashcardModal {
    pub fn new() -> Self {
        Self { open: false, state: FlashcardState::default() }
    }

    /// Every open starts over at the first card, front side up, regardless of
    /// where a previous session left off.
    pub fn open(&mut self) {
        self.state = FlashcardState::default();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme, words: &[VocabularyWord]) {
        if !self.open {
            return;
        }

        if words.is_empty() {
            self.open = false;
            return;
        }

        self.state.clamp(words.len());
        let card = &words[self.state.index];

        let modal = egui::Modal::new(egui::Id::new("flashcard_modal")).show(ctx, |ui| {
            ui.set_width(440.0);

            ui.horizontal(|ui| {
                ui.heading("Flashcards");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⟲").on_hover_text("Restart").clicked() {
                        self.state.restart();
                    }
                    ui.label(
                        RichText::new(format!(
                            "Card {} of {}",
                            self.state.index + 1,
                            words.len()
                        ))
                        .small()
                        .color(theme.muted(ui)),
                    );
                });
            });

            ui.separator();
            ui.add_space(8.0);

            let card_response = ui
                .scope_builder(egui::UiBuilder::new().sense(egui::Sense::click()), |ui| {
                    self.card_face(ui, theme, card);
                })
                .response;

            if card_response.clicked() {
                self.state.flip();
            }

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let hint = if self.state.flipped {
                    "Click card to flip back"
                } else {
                    "Click card to see meaning"
                };
                ui.label(RichText::new(hint).small().color(theme.muted(ui)));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Next Card ➡").clicked() {
                        self.state.next(words.len());
                    }
                });
            });

            ui.add_space(8.0);

            let progress = (self.state.index + 1) as f32 / words.len() as f32;
            ui.add(
                egui::ProgressBar::new(progress)
                    .desired_width(f32::INFINITY)
                    .fill(theme.purple(ui)),
            );
        });

        if modal.should_close() {
            self.open = false;
        }
    }

    fn card_face(&self, ui: &mut egui::Ui, theme: &Theme, card: &VocabularyWord) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(220.0);

            ui.vertical_centered(|ui| {
                ui.add_space(28.0);

                if !self.state.flipped {
                    ui.label(RichText::new("ENGLISH WORD").small().color(theme.cyan(ui)));
                    ui.add_space(10.0);
                    ui.label(RichText::new(card.display_word()).size(32.0).strong());
                } else {
                    ui.label(RichText::new("TURKISH MEANING").small().color(theme.purple(ui)));
                    ui.add_space(4.0);
                    ui.label(RichText::new(&card.meaning).size(20.0).strong());

                    ui.add_space(14.0);
                    ui.label(RichText::new("EXAMPLE SENTENCE").small().color(theme.purple(ui)));
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("\"{}\"", card.example)).italics());
                }

                ui.add_space(28.0);
            });
        });
    }
}

impl Default for FlashcardModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_cyclic() {
        let mut state = FlashcardState { index: 2, flipped: false };
        for _ in 0..5 {
            state.next(5);
        }
        assert_eq!(state.index, 2);

        let mut last = FlashcardState { index: 4, flipped: false };
        last.next(5);
        assert_eq!(last.index, 0);
    }

    #[test]
    fn next_always_shows_the_front() {
        let mut state = FlashcardState { index: 0, flipped: true };
        state.next(3);
        assert!(!state.flipped);

        state.next(3);
        assert!(!state.flipped);
    }

    #[test]
    fn flip_toggles_without_advancing() {
        let mut state = FlashcardState { index: 1, flipped: false };
        state.flip();
        assert_eq!(state, FlashcardState { index: 1, flipped: true });
        state.flip();
        assert_eq!(state, FlashcardState { index: 1, flipped: false });
    }

    #[test]
    fn restart_returns_to_first_card() {
        let mut state = FlashcardState { index: 4, flipped: true };
        state.restart();
        assert_eq!(state, FlashcardState::default());
    }

    #[test]
    fn clamp_recovers_from_a_shrunk_list() {
        let mut state = FlashcardState { index: 4, flipped: false };
        state.clamp(3);
        assert_eq!(state.index, 2);

        // In-range indices are untouched.
        let mut fine = FlashcardState { index: 1, flipped: true };
        fine.clamp(5);
        assert_eq!(fine.index, 1);
    }

    #[test]
    fn opening_resets_prior_session_state() {
        let mut modal = FlashcardModal::new();
        modal.state = FlashcardState { index: 3, flipped: true };

        modal.open();

        assert!(modal.is_open());
        assert_eq!(modal.state, FlashcardState::default());
    }
}
