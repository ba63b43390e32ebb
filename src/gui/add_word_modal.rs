use eframe::egui::{
    self,
    RichText,
};

use crate::gui::theme::Theme;

/// Trimmed, validated field values emitted by a successful submit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewWord {
    pub word: String,
    pub meaning: String,
    pub example: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    pub word: Option<&'static str>,
    pub meaning: Option<&'static str>,
    pub example: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.word.is_none() && self.meaning.is_none() && self.example.is_none()
    }
}

/// Re-run in full on every submit attempt, so stale errors from a prior
/// attempt are replaced rather than merged.
pub fn validate(fields: &NewWord) -> Result<NewWord, FieldErrors> {
    let word = fields.word.trim();
    let meaning = fields.meaning.trim();
    let example = fields.example.trim();

    let errors = FieldErrors {
        word: word.is_empty().then_some("Word is required"),
        meaning: meaning.is_empty().then_some("Meaning is required"),
        example: example.is_empty().then_some("Example sentence is required"),
    };

    if errors.is_empty() {
        Ok(NewWord {
            word: word.to_string(),
            meaning: meaning.to_string(),
            example: example.to_string(),
        })
    } else {
        Err(errors)
    }
}

pub struct AddWordModal {
    open: bool,
    fields: NewWord,
    errors: FieldErrors,
}

impl AddWordModal {
    pub fn new() -> Self {
        Self { open: false, fields: NewWord::default(), errors: FieldErrors::default() }
    }

    pub fn open(&mut self) {
        self.reset();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the trimmed fields on a valid submit. Cancel and backdrop
    /// dismissal clear everything without emitting.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<NewWord> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("add_word_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.heading("Add New Word");
            ui.add_space(10.0);

            ui.label("Word");
            ui.add(
                egui::TextEdit::singleline(&mut self.fields.word)
                    .hint_text("Enter the word")
                    .desired_width(f32::INFINITY),
            );
            if let Some(error) = self.errors.word {
                ui.colored_label(theme.red(ui), error);
            }
            ui.add_space(6.0);

            ui.label("English Meaning");
            ui.add(
                egui::TextEdit::multiline(&mut self.fields.meaning)
                    .hint_text("Enter the English meaning")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            if let Some(error) = self.errors.meaning {
                ui.colored_label(theme.red(ui), error);
            }
            ui.add_space(6.0);

            ui.label("Example Sentence");
            ui.add(
                egui::TextEdit::multiline(&mut self.fields.example)
                    .hint_text("Enter an example sentence using the word")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            if let Some(error) = self.errors.example {
                ui.colored_label(theme.red(ui), error);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    self.reset();
                    ui.close();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("➕ Add Word").strong()).clicked() {
                        match validate(&self.fields) {
                            Ok(new_word) => {
                                result = Some(new_word);
                                self.reset();
                                ui.close();
                            }
                            Err(errors) => self.errors = errors,
                        }
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
            self.reset();
        }

        result
    }

    fn reset(&mut self) {
        self.fields = NewWord::default();
        self.errors = FieldErrors::default();
    }
}

impl Default for AddWordModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(word: &str, meaning: &str, example: &str) -> NewWord {
        NewWord { word: word.to_string(), meaning: meaning.to_string(), example: example.to_string() }
    }

    #[test]
    fn all_empty_fields_report_all_three_errors() {
        let errors = validate(&NewWord::default()).unwrap_err();
        assert_eq!(errors.word, Some("Word is required"));
        assert_eq!(errors.meaning, Some("Meaning is required"));
        assert_eq!(errors.example, Some("Example sentence is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&fields("   ", "a fruit", "An apple a day.")).unwrap_err();
        assert_eq!(errors.word, Some("Word is required"));
        assert_eq!(errors.meaning, None);
        assert_eq!(errors.example, None);
    }

    #[test]
    fn valid_input_is_trimmed() {
        let new_word =
            validate(&fields("  apple ", "a fruit", "  An apple a day.\n")).unwrap();
        assert_eq!(new_word, fields("apple", "a fruit", "An apple a day."));
    }

    #[test]
    fn revalidation_replaces_prior_errors() {
        let first = validate(&fields("", "", "")).unwrap_err();
        assert!(!first.is_empty());

        // Word fixed, example now blank: only the example error remains.
        let second = validate(&fields("apple", "a fruit", " ")).unwrap_err();
        assert_eq!(second.word, None);
        assert_eq!(second.meaning, None);
        assert_eq!(second.example, Some("Example sentence is required"));
    }
}
