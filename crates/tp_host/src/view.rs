use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tp_app::{Action, AppModel, DEBOUNCE_INTERVAL_MS, Effect, RectI32, selection};
use tp_ocr::Recognizer;
use tp_platform::{
    CaptureError, InputEvent, KeyCode, MouseButton, ScreenImage, ScreenSource, SelectionUi,
    TimerHost,
};

use crate::debounce::Debouncer;
use crate::error::{ErrorSink, HostError};
use crate::host_event::{HostEvent, HostEventSender};
use crate::log::TextLog;

/// Timer id used for the debounce wakeup.
pub const DEBOUNCE_TIMER_ID: u32 = 1;

/// The capture-and-recognize view.
///
/// Routes platform input events into core actions and executes the returned
/// effects against the collaborators. Capture and crop run synchronously on
/// the event-loop thread; each recognition job runs on a spawned worker that
/// posts its result back through the [`HostEventSender`]. Collaborator
/// failures go to the [`ErrorSink`] and never propagate.
pub struct OcrView<S, U, T, L> {
    model: AppModel,
    debounce: Debouncer,
    screen: S,
    ui: U,
    timers: T,
    log: L,
    recognizer: Arc<dyn Recognizer>,
    events: HostEventSender,
    errors: ErrorSink,
}

impl<S, U, T, L> OcrView<S, U, T, L>
where
    S: ScreenSource,
    U: SelectionUi,
    T: TimerHost,
    L: TextLog,
{
    pub fn new(
        screen: S,
        ui: U,
        timers: T,
        log: L,
        recognizer: Arc<dyn Recognizer>,
        events: HostEventSender,
        errors: ErrorSink,
    ) -> Self {
        Self {
            model: AppModel::new(),
            debounce: Debouncer::new(Duration::from_millis(DEBOUNCE_INTERVAL_MS as u64)),
            screen,
            ui,
            timers,
            log,
            recognizer,
            events,
            errors,
        }
    }

    /// Override the debounce quiet period.
    pub fn with_debounce_interval(mut self, interval: Duration) -> Self {
        self.debounce = Debouncer::new(interval);
        self
    }

    /// Take the debounce quiet period from settings.
    pub fn with_settings(self, settings: &tp_settings::Settings) -> Self {
        self.with_debounce_interval(Duration::from_millis(settings.debounce_ms as u64))
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Handle a platform input event delivered on the event-loop thread.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } => self.dispatch(
                Action::Selection(selection::Action::PointerDown { x, y }),
                now,
            ),

            InputEvent::MouseMove { x, y } => self.dispatch(
                Action::Selection(selection::Action::PointerMove { x, y }),
                now,
            ),

            InputEvent::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } => self.dispatch(
                Action::Selection(selection::Action::PointerUp { x, y }),
                now,
            ),

            InputEvent::KeyDown { key } if key == KeyCode::ESCAPE => {
                self.dispatch(Action::Cancel, now)
            }

            InputEvent::Timer {
                id: DEBOUNCE_TIMER_ID,
            } => {
                // The platform timer is only a wakeup; stale fires from
                // before a restart are dropped here.
                if self.debounce.fire(now) {
                    self.dispatch(Action::DebounceElapsed, now);
                }
            }

            _ => {}
        }
    }

    /// Handle a worker event drained from the host event channel.
    pub fn handle_host_event(&mut self, event: HostEvent, now: Instant) {
        match event {
            HostEvent::RecognitionCompleted { text } => {
                self.dispatch(Action::RecognitionCompleted { text }, now)
            }
            HostEvent::RecognitionFailed { message } => {
                self.errors.report(HostError::Recognition(message));
                self.dispatch(Action::RecognitionFailed, now);
            }
        }
    }

    fn dispatch(&mut self, action: Action, now: Instant) {
        for effect in self.model.reduce(action) {
            self.apply_effect(effect, now);
        }
    }

    fn apply_effect(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::Selection(e) => self.apply_selection_effect(e, now),

            Effect::ClearOverlayText => {
                if let Err(e) = self.ui.set_overlay_text("") {
                    self.errors.report(e.into());
                }
            }

            Effect::ShowOverlay => {
                if let Err(e) = self.ui.show_overlay() {
                    self.errors.report(e.into());
                }
            }

            Effect::SetOverlayText { text } => {
                if let Err(e) = self.ui.set_overlay_text(&text) {
                    self.errors.report(e.into());
                }
            }

            Effect::HideOverlay => {
                if let Err(e) = self.ui.hide_overlay() {
                    self.errors.report(e.into());
                }
            }

            Effect::LogText { text } => {
                if let Err(e) = self.log.log_text(&text) {
                    self.errors.report(HostError::Log(e));
                }
            }

            Effect::CaptureAndRecognize { rect } => self.capture_and_recognize(rect, now),
        }
    }

    fn apply_selection_effect(&mut self, effect: selection::Effect, now: Instant) {
        match effect {
            selection::Effect::ShowRubberBand { rect } => {
                if let Err(e) = self.ui.show_rubber_band(rect) {
                    self.errors.report(e.into());
                }
            }

            selection::Effect::MoveRubberBand { rect } => {
                if let Err(e) = self.ui.move_rubber_band(rect) {
                    self.errors.report(e.into());
                }
            }

            selection::Effect::HideRubberBand => {
                if let Err(e) = self.ui.hide_rubber_band() {
                    self.errors.report(e.into());
                }
            }

            selection::Effect::RestartDebounce => {
                self.debounce.restart(now);
                let interval_ms = self.debounce.interval().as_millis() as u32;
                if let Err(e) = self.timers.start_timer(DEBOUNCE_TIMER_ID, interval_ms) {
                    self.errors.report(e.into());
                }
            }

            selection::Effect::StopDebounce => {
                self.debounce.cancel();
                if let Err(e) = self.timers.stop_timer(DEBOUNCE_TIMER_ID) {
                    self.errors.report(e.into());
                }
            }
        }
    }

    fn capture_and_recognize(&mut self, rect: RectI32, now: Instant) {
        let crop = match self.capture_crop(rect) {
            Ok(crop) => crop,
            Err(e) => {
                // Unwind the in-flight flag so the next fire can submit.
                self.errors.report(HostError::Capture(e));
                self.dispatch(Action::RecognitionFailed, now);
                return;
            }
        };

        let recognizer = Arc::clone(&self.recognizer);
        let events = self.events.clone();

        thread::spawn(move || match recognizer.recognize(&crop) {
            Ok(text) => {
                let _ = events.send(HostEvent::RecognitionCompleted { text });
            }
            Err(e) => {
                let _ = events.send(HostEvent::RecognitionFailed {
                    message: e.to_string(),
                });
            }
        });
    }

    fn capture_crop(&mut self, rect: RectI32) -> Result<ScreenImage, CaptureError> {
        let index = self.screen.active_screen_index()?;
        let full = self.screen.capture(index)?;
        Ok(full.crop(rect))
    }
}
