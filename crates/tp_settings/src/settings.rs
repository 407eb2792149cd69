use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Debounce quiet period in milliseconds before a capture fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,

    /// OCR language identifier.
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,

    /// Directory containing the OCR model files.
    #[serde(default = "default_models_dir")]
    pub models_dir: String,

    /// Text log file the recognized text is appended to.
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            ocr_language: default_ocr_language(),
            models_dir: default_models_dir(),
            log_path: default_log_path(),
        }
    }
}

impl Settings {
    fn settings_dir() -> PathBuf {
        PathBuf::from(default_home_dir()).join(".textpeek")
    }

    fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.json")
    }

    /// Load settings from disk.
    ///
    /// Falls back to defaults (and persists them) if loading fails.
    pub fn load() -> Self {
        let path = Self::settings_path();

        if let Ok(content) = fs::read_to_string(&path)
            && let Ok(settings) = serde_json::from_str::<Settings>(&content)
        {
            return settings;
        }

        let default_settings = Self::default();
        let _ = default_settings.save();
        default_settings
    }

    /// Save settings to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::settings_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_core_debounce_interval() {
        let s = Settings::default();
        assert_eq!(s.debounce_ms, tp_app::DEBOUNCE_INTERVAL_MS);
        assert_eq!(s.ocr_language, "english");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s: Settings = serde_json::from_str("{\"ocr_language\":\"latin\"}").unwrap();
        assert_eq!(s.ocr_language, "latin");
        assert_eq!(s.debounce_ms, tp_app::DEBOUNCE_INTERVAL_MS);
        assert!(!s.log_path.is_empty());
    }
}
