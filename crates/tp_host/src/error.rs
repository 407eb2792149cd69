use std::sync::mpsc::{Receiver, Sender, channel};

use thiserror::Error;
use tp_platform::{CaptureError, TimerError, UiError};

/// Failures the interaction absorbs instead of propagating.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("screen capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("overlay update failed: {0}")]
    Ui(#[from] UiError),

    #[error("debounce timer failed: {0}")]
    Timer(#[from] TimerError),

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("text log failed: {0}")]
    Log(#[from] std::io::Error),
}

/// Caller-supplied error channel.
///
/// Replaces the original interaction's catch-and-print on recognition
/// completion: every collaborator failure becomes a typed [`HostError`] the
/// embedder can drain, and effect execution continues.
#[derive(Debug, Clone)]
pub struct ErrorSink(Sender<HostError>);

impl ErrorSink {
    pub fn report(&self, error: HostError) {
        // A dropped receiver means the embedder no longer cares.
        let _ = self.0.send(error);
    }
}

pub fn error_channel() -> (ErrorSink, Receiver<HostError>) {
    let (tx, rx) = channel();
    (ErrorSink(tx), rx)
}
