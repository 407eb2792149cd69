pub mod engine;
pub mod types;

pub use engine::{
    EngineRecognizer, OcrConfig, OcrLanguageInfo, available_languages, create_engine,
    get_model_paths, models_exist, recognize_image,
};
pub use ocr_rs::OcrEngine;
pub use types::{BoundingBox, OcrResult, Recognizer, join_result_texts};
