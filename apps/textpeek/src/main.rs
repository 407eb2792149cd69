fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Capture the active screen once, recognize it and log the text.
///
/// The interactive selection flow lives in `tp_host::OcrView` behind the
/// embedder's window loop; this binary is the headless smoke path over the
/// same capture and recognition stack.
#[cfg(windows)]
fn run() -> anyhow::Result<()> {
    use anyhow::bail;
    use tp_capture_windows::GdiScreenSource;
    use tp_host::{FileTextLog, TextLog};
    use tp_ocr::{EngineRecognizer, OcrConfig, Recognizer};
    use tp_platform::ScreenSource;
    use tp_settings::Settings;

    let settings = Settings::load();
    let config = OcrConfig::new(settings.models_dir.clone(), settings.ocr_language.clone());
    if !tp_ocr::models_exist(&config) {
        bail!("OCR models not found in {}", settings.models_dir);
    }

    let recognizer = EngineRecognizer::new(&config)?;
    let mut screen = GdiScreenSource::new();
    let index = screen.active_screen_index()?;
    let image = screen.capture(index)?;

    let text = recognizer.recognize(&image)?;
    if text.is_empty() {
        println!("(no text recognized)");
        return Ok(());
    }

    println!("{text}");
    FileTextLog::new(&settings.log_path).log_text(&text)?;
    Ok(())
}

#[cfg(not(windows))]
fn run() -> anyhow::Result<()> {
    Err(anyhow::anyhow!(
        "textpeek needs a Windows display to capture; no backend for this platform"
    ))
}
