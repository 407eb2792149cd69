pub mod events;
pub mod screen;
pub mod ui;

pub use events::{InputEvent, KeyCode, MouseButton};
pub use screen::{BYTES_PER_PIXEL, CaptureError, ScreenImage, ScreenInfo, ScreenSource};
pub use ui::{SelectionUi, TimerError, TimerHost, UiError};
