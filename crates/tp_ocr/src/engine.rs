use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use ocr_rs::OcrEngine;
use tp_platform::ScreenImage;

use crate::types::{BoundingBox, OcrResult, Recognizer, join_result_texts};

/// OCR language information.
#[derive(Debug, Clone)]
pub struct OcrLanguageInfo {
    /// Language identifier (e.g. "english").
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Recognition model filename.
    pub rec_model: String,
    /// Charset filename.
    pub charset_file: String,
}

/// Host-provided OCR configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Directory containing the model files.
    pub models_dir: PathBuf,
    /// Language identifier.
    pub language: String,
}

impl OcrConfig {
    pub fn new(models_dir: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            models_dir: models_dir.into(),
            language: language.into(),
        }
    }
}

/// Detect available OCR languages by inspecting the models directory.
///
/// Only languages whose recognition model and charset are both present are
/// reported.
pub fn available_languages(models_dir: &Path) -> Vec<OcrLanguageInfo> {
    // (id, display_name, rec_model, charset)
    let lang_configs = [
        (
            "english",
            "English",
            "en_PP-OCRv5_mobile_rec_infer.mnn",
            "ppocr_keys_en.txt",
        ),
        (
            "chinese",
            "简体中文",
            "PP-OCRv5_mobile_rec.mnn",
            "ppocr_keys_v5.txt",
        ),
        (
            "latin",
            "Latin",
            "latin_PP-OCRv5_mobile_rec_infer.mnn",
            "ppocr_keys_latin.txt",
        ),
    ];

    let mut languages = Vec::new();
    for (id, display_name, rec_model, charset) in lang_configs {
        if models_dir.join(rec_model).exists() && models_dir.join(charset).exists() {
            languages.push(OcrLanguageInfo {
                id: id.to_string(),
                display_name: display_name.to_string(),
                rec_model: rec_model.to_string(),
                charset_file: charset.to_string(),
            });
        }
    }
    languages
}

/// Resolve (detection model, recognition model, charset) paths for a config.
pub fn get_model_paths(config: &OcrConfig) -> Result<(PathBuf, PathBuf, PathBuf)> {
    // Detection model (shared by all languages).
    let det_path = config.models_dir.join("PP-OCRv5_mobile_det.mnn");

    let languages = available_languages(&config.models_dir);
    let lang_info = languages
        .iter()
        .find(|l| l.id == config.language)
        .or_else(|| languages.first())
        .ok_or_else(|| anyhow!("no OCR language models in {}", config.models_dir.display()))?;

    let rec_path = config.models_dir.join(&lang_info.rec_model);
    let charset_path = config.models_dir.join(&lang_info.charset_file);

    if !det_path.exists() {
        return Err(anyhow!("detection model missing: {}", det_path.display()));
    }
    if !rec_path.exists() {
        return Err(anyhow!("recognition model missing: {}", rec_path.display()));
    }
    if !charset_path.exists() {
        return Err(anyhow!("charset file missing: {}", charset_path.display()));
    }

    Ok((det_path, rec_path, charset_path))
}

/// Check whether model files exist for the given config.
pub fn models_exist(config: &OcrConfig) -> bool {
    get_model_paths(config).is_ok()
}

/// Create an OCR engine instance.
pub fn create_engine(config: &OcrConfig) -> Result<OcrEngine> {
    let (det_path, rec_path, charset_path) = get_model_paths(config)?;

    OcrEngine::new(&det_path, &rec_path, &charset_path, None)
        .map_err(|e| anyhow!("failed to create OCR engine: {e}"))
}

/// Recognize text blocks in a captured pixel buffer.
pub fn recognize_image(engine: &OcrEngine, image: &ScreenImage) -> Result<Vec<OcrResult>> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.data.clone())
        .context("pixel buffer does not match its dimensions")?;
    let img = image::DynamicImage::ImageRgba8(rgba);

    let raw_results = engine
        .recognize(&img)
        .map_err(|e| anyhow!("OCR recognition failed: {e}"))?;

    Ok(raw_results
        .into_iter()
        .filter(|r| !r.text.trim().is_empty())
        .map(|r| OcrResult {
            text: r.text,
            confidence: r.confidence,
            bounding_box: BoundingBox {
                x: r.bbox.rect.left(),
                y: r.bbox.rect.top(),
                width: r.bbox.rect.width() as i32,
                height: r.bbox.rect.height() as i32,
            },
        })
        .collect())
}

/// [`Recognizer`] backed by an `ocr-rs` engine.
///
/// The engine is not thread-safe, so it sits behind a mutex; the single-flight
/// rule in the core model means the lock is never contended in practice.
pub struct EngineRecognizer {
    engine: Mutex<OcrEngine>,
}

impl EngineRecognizer {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        Ok(Self {
            engine: Mutex::new(create_engine(config)?),
        })
    }
}

impl Recognizer for EngineRecognizer {
    fn recognize(&self, image: &ScreenImage) -> Result<String> {
        if image.is_empty() {
            return Ok(String::new());
        }

        let engine = self
            .engine
            .lock()
            .map_err(|_| anyhow!("OCR engine lock poisoned"))?;
        let results = recognize_image(&engine, image)?;
        Ok(join_result_texts(results))
    }
}
