//! GDI-backed [`tp_platform::ScreenSource`] for the primary display.

#[cfg(windows)]
mod gdi;

#[cfg(windows)]
pub use gdi::GdiScreenSource;
