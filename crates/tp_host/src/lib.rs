pub mod debounce;
pub mod error;
pub mod host_event;
pub mod log;
pub mod view;

pub use debounce::Debouncer;
pub use error::{ErrorSink, HostError, error_channel};
pub use host_event::{HostEvent, HostEventSender, host_event_channel};
pub use log::{FileTextLog, TextLog};
pub use view::{DEBOUNCE_TIMER_ID, OcrView};
