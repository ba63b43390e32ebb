use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}
