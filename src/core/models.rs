use serde::{
    Deserialize,
    Serialize,
};

/// The sole persisted entity: one vocabulary entry. Created by the add form,
/// never edited afterwards, removed only by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyWord {
    pub id: String,
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub date_added: String,
}

impl VocabularyWord {
    pub fn new(word: String, meaning: String, example: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            word,
            meaning,
            example,
            date_added: chrono::Local::now().format("%B %d, %Y").to_string(),
        }
    }

    /// Capitalized presentation only; the stored value keeps the user's casing.
    pub fn display_word(&self) -> String {
        let mut chars = self.word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(term: &str) -> VocabularyWord {
        VocabularyWord::new(term.to_string(), "meaning".to_string(), "example".to_string())
    }

    #[test]
    fn display_word_capitalizes_without_mutating() {
        let entry = word("serendipity");
        assert_eq!(entry.display_word(), "Serendipity");
        assert_eq!(entry.word, "serendipity");

        // Multi-byte first characters must survive capitalization.
        assert_eq!(word("çay").display_word(), "Çay");
        assert_eq!(word("Already").display_word(), "Already");
    }

    #[test]
    fn persisted_layout_uses_camel_case_date_field() {
        let json = serde_json::to_string(&word("tea")).unwrap();
        assert!(json.contains("\"dateAdded\""));
        assert!(!json.contains("date_added"));
    }

    #[test]
    fn new_words_get_distinct_ids() {
        assert_ne!(word("a").id, word("a").id);
    }
}
