use std::fmt;

use tp_app::RectI32;

/// Bytes per pixel in a [`ScreenImage`] (tightly packed RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// A physical display known to the screen source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A captured pixel buffer: tightly packed RGBA8, row-major, top-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ScreenImage {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * BYTES_PER_PIXEL);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Crop to `rect`, clamped to the image bounds.
    ///
    /// `rect` must be normalized (non-negative width/height); a rect entirely
    /// outside the image yields a zero-size image.
    pub fn crop(&self, rect: RectI32) -> ScreenImage {
        let left = rect.left.clamp(0, self.width as i32) as usize;
        let top = rect.top.clamp(0, self.height as i32) as usize;
        let right = rect.right.clamp(0, self.width as i32) as usize;
        let bottom = rect.bottom.clamp(0, self.height as i32) as usize;

        let width = right.saturating_sub(left);
        let height = bottom.saturating_sub(top);
        if width == 0 || height == 0 {
            return ScreenImage::new(0, 0, Vec::new());
        }

        let src_stride = self.width as usize * BYTES_PER_PIXEL;
        let row_bytes = width * BYTES_PER_PIXEL;
        let mut data = Vec::with_capacity(height * row_bytes);

        for row in top..bottom {
            let start = row * src_stride + left * BYTES_PER_PIXEL;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }

        ScreenImage::new(width as u32, height as u32, data)
    }
}

/// Screen capture error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No displays are available.
    NoScreens,
    /// The requested screen index does not exist.
    InvalidScreen(usize),
    /// Pixel grab failed.
    Grab(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoScreens => write!(f, "no screens available"),
            CaptureError::InvalidScreen(index) => write!(f, "no screen with index {index}"),
            CaptureError::Grab(msg) => write!(f, "screen grab failed: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Screen enumeration and pixel capture collaborator.
pub trait ScreenSource {
    /// Displays currently available.
    fn screens(&self) -> Result<Vec<ScreenInfo>, CaptureError>;

    /// Index of the screen the pointer is currently on.
    fn active_screen_index(&self) -> Result<usize, CaptureError>;

    /// Grab the full pixel buffer for screen `index`.
    fn capture(&mut self, index: usize) -> Result<ScreenImage, CaptureError>;
}
