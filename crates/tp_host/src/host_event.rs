use std::sync::mpsc::{Receiver, SendError, Sender, channel};

/// Events delivered from worker threads back onto the event-loop thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A recognition job produced its text (possibly empty).
    RecognitionCompleted { text: String },
    /// A recognition job failed.
    RecognitionFailed { message: String },
}

/// Cloneable sender handed to background workers.
///
/// The embedder owns the receiving end and drains it on the event-loop
/// thread, feeding each event into `OcrView::handle_host_event`.
#[derive(Debug, Clone)]
pub struct HostEventSender(Sender<HostEvent>);

impl HostEventSender {
    pub fn send(&self, event: HostEvent) -> Result<(), SendError<HostEvent>> {
        self.0.send(event)
    }
}

pub fn host_event_channel() -> (HostEventSender, Receiver<HostEvent>) {
    let (tx, rx) = channel();
    (HostEventSender(tx), rx)
}
