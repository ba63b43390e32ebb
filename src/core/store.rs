use std::path::PathBuf;

use super::models::VocabularyWord;
use crate::persistence::{
    self,
    WORDS_FILE,
};

/// Owns the canonical in-memory word list for the running session. Hydrated
/// once at startup; the full list is written back after every mutation.
pub struct VocabularyStore {
    words: Vec<VocabularyWord>,
    data_file: PathBuf,
}

impl VocabularyStore {
    pub fn load() -> Self {
        Self::from_file(persistence::get_data_file_path(WORDS_FILE))
    }

    pub fn from_file(data_file: PathBuf) -> Self {
        let words = persistence::load_words(&data_file);
        Self { words, data_file }
    }

    pub fn words(&self) -> &[VocabularyWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Prepends a freshly created word (newest first). Inputs are trimmed and
    /// validated by the add form before they get here.
    pub fn add(&mut self, word: String, meaning: String, example: String) {
        self.words.insert(0, VocabularyWord::new(word, meaning, example));
        self.persist();
    }

    /// Removes the word with the given id. A missing id is a no-op, not an
    /// error.
    pub fn delete(&mut self, id: &str) {
        let before = self.words.len();
        self.words.retain(|word| word.id != id);
        if self.words.len() != before {
            self.persist();
        }
    }

    pub fn filtered(&self, query: &str) -> Vec<&VocabularyWord> {
        self.words.iter().filter(|word| matches_search(word, query)).collect()
    }

    fn persist(&self) {
        if let Err(e) = persistence::save_words(&self.data_file, &self.words) {
            eprintln!("Failed to save word list: {}", e);
        }
    }
}

/// Case-insensitive substring match against the term or its meaning. An empty
/// query passes everything.
pub fn matches_search(word: &VocabularyWord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    word.word.to_lowercase().contains(&query) || word.meaning.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        fs,
        path::PathBuf,
    };

    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("wordstash_test_{}.json", uuid::Uuid::new_v4()))
    }

    fn add(store: &mut VocabularyStore, word: &str, meaning: &str) {
        store.add(word.to_string(), meaning.to_string(), format!("Sentence with {}.", word));
    }

    #[test]
    fn add_prepends_and_assigns_unique_ids() {
        let path = temp_path();
        let mut store = VocabularyStore::from_file(path.clone());

        add(&mut store, "alpha", "first");
        add(&mut store, "beta", "second");
        add(&mut store, "gamma", "third");

        assert_eq!(store.len(), 3);
        assert_eq!(store.words()[0].word, "gamma");
        assert_eq!(store.words()[1].word, "beta");
        assert_eq!(store.words()[2].word, "alpha");

        let ids: HashSet<&str> = store.words().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let path = temp_path();
        let mut store = VocabularyStore::from_file(path.clone());

        add(&mut store, "alpha", "first");
        add(&mut store, "beta", "second");
        add(&mut store, "gamma", "third");

        let beta_id = store.words()[1].id.clone();
        store.delete(&beta_id);

        assert_eq!(store.len(), 2);
        assert_eq!(store.words()[0].word, "gamma");
        assert_eq!(store.words()[1].word, "alpha");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn delete_of_missing_id_leaves_list_unchanged() {
        let path = temp_path();
        let mut store = VocabularyStore::from_file(path.clone());

        add(&mut store, "alpha", "first");
        add(&mut store, "beta", "second");
        let before = store.words().to_vec();

        store.delete("no-such-id");

        assert_eq!(store.words(), before.as_slice());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn word_list_round_trips_through_disk() {
        let path = temp_path();
        let mut store = VocabularyStore::from_file(path.clone());

        add(&mut store, "ephemeral", "lasting a very short time");
        add(&mut store, "ubiquitous", "found everywhere");
        let saved = store.words().to_vec();

        let reloaded = VocabularyStore::from_file(path.clone());
        assert_eq!(reloaded.words(), saved.as_slice());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_loads_empty_and_is_cleared() {
        let path = temp_path();
        fs::write(&path, "{ not valid json").unwrap();

        let mut store = VocabularyStore::from_file(path.clone());
        assert!(store.is_empty());
        assert!(!path.exists(), "corrupt file should be removed on load");

        // A later save is unaffected by the prior corruption.
        add(&mut store, "fresh", "new after reset");
        let reloaded = VocabularyStore::from_file(path.clone());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.words()[0].word, "fresh");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupt() {
        let path = temp_path();
        fs::write(&path, r#"[{"id": 5, "word": true}]"#).unwrap();

        let store = VocabularyStore::from_file(path.clone());
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn search_matches_word_or_meaning_case_insensitively() {
        let path = temp_path();
        let mut store = VocabularyStore::from_file(path.clone());

        // Insert in reverse so the stored (newest-first) order reads
        // Apple, Banana, Car.
        add(&mut store, "Car", "a vehicle");
        add(&mut store, "Banana", "a fruit");
        add(&mut store, "Apple", "a fruit");

        let fruit: Vec<&str> = store.filtered("fruit").iter().map(|w| w.word.as_str()).collect();
        assert_eq!(fruit, ["Apple", "Banana"]);

        assert_eq!(store.filtered("").len(), 3);
        assert!(store.filtered("xyz").is_empty());

        let upper: Vec<&str> = store.filtered("APPLE").iter().map(|w| w.word.as_str()).collect();
        assert_eq!(upper, ["Apple"]);

        let _ = fs::remove_file(&path);
    }
}
