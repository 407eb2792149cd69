use anyhow::Result;
use tp_platform::ScreenImage;

/// A recognized text block.
#[derive(Debug, Clone)]
pub struct OcrResult {
    pub text: String,
    pub confidence: f32,
    pub bounding_box: BoundingBox,
}

/// Bounding box for a text block, in crop coordinates.
#[derive(Debug, Clone)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Text recognition collaborator.
///
/// Implementations are invoked off the event-loop thread, one job at a time
/// (the core model enforces the single-flight rule), so `&self` plus internal
/// locking is enough.
pub trait Recognizer: Send + Sync {
    fn recognize(&self, image: &ScreenImage) -> Result<String>;
}

/// Join recognized blocks into display text: top-to-bottom, then
/// left-to-right within a line, one line per row of blocks.
pub fn join_result_texts(mut results: Vec<OcrResult>) -> String {
    results.sort_by(|a, b| {
        (a.bounding_box.y, a.bounding_box.x).cmp(&(b.bounding_box.y, b.bounding_box.x))
    });

    results
        .iter()
        .map(|r| r.text.trim_end())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
