use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    VocabularyWord,
    WordstashError,
};

const APP_NAME: &str = "wordstash";

/// Filename of the persisted word list inside the app data directory.
pub const WORDS_FILE: &str = "words.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), WordstashError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(get_data_file_path(filename), json)?;
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, WordstashError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

/// Reads the persisted word list. A missing file is an empty vocabulary. A
/// file that no longer parses as a list of words is logged, deleted so the
/// next launch does not hit the same parse failure, and treated as empty.
pub fn load_words(path: &Path) -> Vec<VocabularyWord> {
    if !path.exists() {
        return Vec::new();
    }

    match read_words(path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Discarding unreadable word list {}: {}", path.display(), e);
            let _ = fs::remove_file(path);
            Vec::new()
        }
    }
}

fn read_words(path: &Path) -> Result<Vec<VocabularyWord>, WordstashError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Overwrites the whole persisted list in one write.
pub fn save_words(path: &Path, words: &[VocabularyWord]) -> Result<(), WordstashError> {
    let json = serde_json::to_string_pretty(words)?;
    fs::write(path, json)?;
    Ok(())
}
