use std::path::PathBuf;

use tp_app::DEBOUNCE_INTERVAL_MS;

pub fn default_debounce_ms() -> u32 {
    DEBOUNCE_INTERVAL_MS
}

pub fn default_ocr_language() -> String {
    "english".to_string()
}

pub fn default_models_dir() -> String {
    "models".to_string()
}

pub fn default_log_path() -> String {
    PathBuf::from(default_home_dir())
        .join(".textpeek")
        .join("recognized.txt")
        .to_string_lossy()
        .to_string()
}

pub fn default_home_dir() -> String {
    if let Ok(home_dir) = std::env::var("USERPROFILE") {
        return home_dir;
    }
    if let Ok(home_dir) = std::env::var("HOME") {
        return home_dir;
    }

    // Fallback: program directory.
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.to_string_lossy().to_string();
    }

    // Last resort: cwd.
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .to_string_lossy()
        .to_string()
}
