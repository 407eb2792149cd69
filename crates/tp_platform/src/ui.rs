use std::fmt;

use tp_app::RectI32;

/// Error returned by the selection UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    RubberBand(String),
    Overlay(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::RubberBand(msg) => write!(f, "rubber band error: {msg}"),
            UiError::Overlay(msg) => write!(f, "overlay error: {msg}"),
        }
    }
}

impl std::error::Error for UiError {}

/// Rubber band + text overlay collaborator.
///
/// The widget layer (window management, painting) lives behind this trait;
/// the host only requests state changes. `set_overlay_text` is expected to
/// resize the overlay to fit the new text.
pub trait SelectionUi {
    fn show_rubber_band(&mut self, rect: RectI32) -> Result<(), UiError>;
    fn move_rubber_band(&mut self, rect: RectI32) -> Result<(), UiError>;
    fn hide_rubber_band(&mut self) -> Result<(), UiError>;

    fn show_overlay(&mut self) -> Result<(), UiError>;
    fn set_overlay_text(&mut self, text: &str) -> Result<(), UiError>;
    fn hide_overlay(&mut self) -> Result<(), UiError>;
}

/// One-shot timer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerError(pub String);

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer error: {}", self.0)
    }
}

impl std::error::Error for TimerError {}

/// One-shot platform timers.
///
/// The timer is only a wakeup: it posts `InputEvent::Timer { id }` back onto
/// the event loop, and the host validates the fire against its own deadline.
/// Starting a timer that is already pending restarts it.
pub trait TimerHost {
    fn start_timer(&mut self, id: u32, interval_ms: u32) -> Result<(), TimerError>;
    fn stop_timer(&mut self, id: u32) -> Result<(), TimerError>;
}
