pub mod selection;

pub use selection::{DEBOUNCE_INTERVAL_MS, PointI32, RectI32};

/// Top-level interaction actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pointer input routed to the selection controller.
    Selection(selection::Action),
    /// The debounce quiet period elapsed (validated by the host debouncer).
    DebounceElapsed,
    /// A recognition job delivered its text.
    RecognitionCompleted { text: String },
    /// A recognition job failed (capture or OCR error already reported on the
    /// host error channel).
    RecognitionFailed,
    /// Cancel the current flow (e.g. Escape).
    Cancel,
}

/// Top-level interaction effects (executed by the host).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Selection(selection::Effect),
    /// Clear the overlay text before showing a fresh recognition round.
    ClearOverlayText,
    /// Show the text overlay.
    ShowOverlay,
    /// Set the overlay text (the UI resizes the overlay to fit).
    SetOverlayText { text: String },
    /// Hide the text overlay.
    HideOverlay,
    /// Capture the active screen, crop to `rect` and submit a recognition job.
    CaptureAndRecognize { rect: RectI32 },
    /// Forward the final overlay text to the logging collaborator.
    LogText { text: String },
}

/// Composite interaction phase, derived from the selection drag phase and the
/// recognition in-flight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Dragging,
    Debouncing,
    Recognizing,
    /// Recognition completed while the drag is still active; the overlay shows
    /// the result until pointer-up or the next debounce round.
    IdleWithResult,
}

/// Core interaction model.
///
/// Composes the selection controller with the capture-recognize pipeline
/// state. The single overlay string and the in-flight flag live here; both
/// are only ever touched from the event-loop thread.
#[derive(Debug, Default)]
pub struct AppModel {
    selection: selection::Model,
    /// Explicit "recognition in progress" flag. The original interaction
    /// unbound its timer handler while a job ran and rebound it on
    /// completion; the flag replaces that toggle, and a debounce fire that
    /// lands while it is set is dropped.
    recognition_in_flight: bool,
    overlay_text: String,
    overlay_visible: bool,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &selection::Model {
        &self.selection
    }

    pub fn recognition_in_flight(&self) -> bool {
        self.recognition_in_flight
    }

    pub fn overlay_text(&self) -> &str {
        &self.overlay_text
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn phase(&self) -> InteractionPhase {
        match self.selection.phase() {
            selection::Phase::Idle => InteractionPhase::Idle,
            selection::Phase::Dragging => InteractionPhase::Dragging,
            selection::Phase::Debouncing => {
                if self.recognition_in_flight {
                    InteractionPhase::Recognizing
                } else if !self.overlay_text.is_empty() {
                    InteractionPhase::IdleWithResult
                } else {
                    InteractionPhase::Debouncing
                }
            }
        }
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Selection(a) => self.reduce_selection(a),

            Action::DebounceElapsed => {
                // A fire that lands while a job is in flight is dropped; the
                // next pointer-move restarts the debounce and produces a
                // fresh round.
                if self.recognition_in_flight {
                    return Vec::new();
                }

                // Stale fires after pointer-up (the host stops the timer, but
                // an already-queued event may still arrive) are ignored.
                if !self.selection.is_dragging() {
                    return Vec::new();
                }

                let Some(rect) = self.selection.rect() else {
                    return Vec::new();
                };
                if rect.is_empty() {
                    return Vec::new();
                }

                let mut effects = Vec::new();
                if !self.overlay_visible {
                    self.overlay_visible = true;
                    effects.push(Effect::ClearOverlayText);
                    effects.push(Effect::ShowOverlay);
                }

                self.recognition_in_flight = true;
                effects.push(Effect::CaptureAndRecognize { rect });
                effects
            }

            Action::RecognitionCompleted { text } => {
                self.recognition_in_flight = false;
                self.overlay_text = text.clone();
                vec![Effect::SetOverlayText { text }]
            }

            Action::RecognitionFailed => {
                // Unwind the in-flight flag so the next fire can submit again.
                self.recognition_in_flight = false;
                Vec::new()
            }

            Action::Cancel => {
                self.overlay_text.clear();
                self.overlay_visible = false;

                let mut effects: Vec<Effect> = self
                    .selection
                    .reduce(selection::Action::Reset)
                    .into_iter()
                    .map(Effect::Selection)
                    .collect();
                effects.push(Effect::HideOverlay);
                effects
            }
        }
    }

    fn reduce_selection(&mut self, action: selection::Action) -> Vec<Effect> {
        match action {
            selection::Action::PointerDown { .. } => {
                // A new drag clears the previous result immediately.
                self.overlay_text.clear();
                self.overlay_visible = false;

                let mut effects: Vec<Effect> = self
                    .selection
                    .reduce(action)
                    .into_iter()
                    .map(Effect::Selection)
                    .collect();
                effects.push(Effect::HideOverlay);
                effects
            }

            selection::Action::PointerUp { .. } => {
                let sel_effects = self.selection.reduce(action);
                if sel_effects.is_empty() {
                    // Up without a matching down.
                    return Vec::new();
                }

                let text = std::mem::take(&mut self.overlay_text);
                self.overlay_visible = false;

                let mut effects = vec![Effect::LogText { text }];
                effects.extend(sel_effects.into_iter().map(Effect::Selection));
                effects.push(Effect::HideOverlay);
                effects
            }

            _ => self
                .selection
                .reduce(action)
                .into_iter()
                .map(Effect::Selection)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_to(m: &mut AppModel, x: i32, y: i32) {
        m.reduce(Action::Selection(selection::Action::PointerDown {
            x: 10,
            y: 10,
        }));
        m.reduce(Action::Selection(selection::Action::PointerMove { x, y }));
    }

    #[test]
    fn debounce_fire_shows_overlay_and_submits_capture() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);

        let eff = m.reduce(Action::DebounceElapsed);
        let rect = RectI32 {
            left: 10,
            top: 10,
            right: 110,
            bottom: 60,
        };
        assert_eq!(
            eff,
            vec![
                Effect::ClearOverlayText,
                Effect::ShowOverlay,
                Effect::CaptureAndRecognize { rect },
            ]
        );
        assert!(m.recognition_in_flight());
        assert_eq!(m.phase(), InteractionPhase::Recognizing);
    }

    #[test]
    fn second_fire_while_in_flight_submits_nothing() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);

        let first = m.reduce(Action::DebounceElapsed);
        assert!(
            first
                .iter()
                .any(|e| matches!(e, Effect::CaptureAndRecognize { .. }))
        );

        // Keep dragging so the debounce re-arms, then fire again before the
        // job completes.
        m.reduce(Action::Selection(selection::Action::PointerMove {
            x: 120,
            y: 70,
        }));
        let second = m.reduce(Action::DebounceElapsed);
        assert!(second.is_empty());
    }

    #[test]
    fn completion_sets_overlay_text_exactly() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);

        let eff = m.reduce(Action::RecognitionCompleted {
            text: "HELLO".to_string(),
        });
        assert_eq!(
            eff,
            vec![Effect::SetOverlayText {
                text: "HELLO".to_string()
            }]
        );
        assert_eq!(m.overlay_text(), "HELLO");
        assert!(!m.recognition_in_flight());
        assert_eq!(m.phase(), InteractionPhase::IdleWithResult);
    }

    #[test]
    fn completion_reopens_the_pipeline_for_the_next_fire() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        m.reduce(Action::RecognitionCompleted {
            text: "first".to_string(),
        });

        m.reduce(Action::Selection(selection::Action::PointerMove {
            x: 130,
            y: 80,
        }));
        let eff = m.reduce(Action::DebounceElapsed);
        assert!(
            eff.iter()
                .any(|e| matches!(e, Effect::CaptureAndRecognize { .. }))
        );
    }

    #[test]
    fn pointer_up_logs_result_and_hides_both_overlays() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        m.reduce(Action::RecognitionCompleted {
            text: "HELLO".to_string(),
        });

        let eff = m.reduce(Action::Selection(selection::Action::PointerUp {
            x: 110,
            y: 60,
        }));
        assert_eq!(
            eff,
            vec![
                Effect::LogText {
                    text: "HELLO".to_string()
                },
                Effect::Selection(selection::Effect::HideRubberBand),
                Effect::Selection(selection::Effect::StopDebounce),
                Effect::HideOverlay,
            ]
        );
        assert_eq!(m.overlay_text(), "");
        assert_eq!(m.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn pointer_up_hides_overlays_even_while_recognizing() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        assert!(m.recognition_in_flight());

        let eff = m.reduce(Action::Selection(selection::Action::PointerUp {
            x: 110,
            y: 60,
        }));
        assert!(
            eff.contains(&Effect::Selection(selection::Effect::HideRubberBand))
        );
        assert!(eff.contains(&Effect::HideOverlay));
        // The job itself runs to completion; only the UI state is torn down.
        assert!(m.recognition_in_flight());
    }

    #[test]
    fn late_completion_after_pointer_up_does_not_resurrect_the_overlay() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        m.reduce(Action::Selection(selection::Action::PointerUp {
            x: 110,
            y: 60,
        }));

        m.reduce(Action::RecognitionCompleted {
            text: "late".to_string(),
        });
        // The host applies SetOverlayText to a hidden overlay; the model does
        // not flip visibility back on.
        assert!(!m.overlay_visible());
        assert_eq!(m.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn pointer_down_clears_previous_result() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        m.reduce(Action::RecognitionCompleted {
            text: "old".to_string(),
        });
        m.reduce(Action::Selection(selection::Action::PointerUp {
            x: 110,
            y: 60,
        }));

        let eff = m.reduce(Action::Selection(selection::Action::PointerDown {
            x: 5,
            y: 5,
        }));
        assert_eq!(m.overlay_text(), "");
        assert!(eff.contains(&Effect::HideOverlay));
    }

    #[test]
    fn fire_without_a_drag_is_ignored() {
        let mut m = AppModel::new();
        assert!(m.reduce(Action::DebounceElapsed).is_empty());

        // Down without a move keeps a zero-size rect, which is not captured.
        m.reduce(Action::Selection(selection::Action::PointerDown {
            x: 10,
            y: 10,
        }));
        assert!(m.reduce(Action::DebounceElapsed).is_empty());
    }

    #[test]
    fn overlay_is_shown_once_per_round() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        m.reduce(Action::RecognitionCompleted {
            text: "a".to_string(),
        });

        // Second fire in the same drag: overlay already visible, no
        // Clear/Show pair this time.
        m.reduce(Action::Selection(selection::Action::PointerMove {
            x: 140,
            y: 90,
        }));
        let eff = m.reduce(Action::DebounceElapsed);
        assert_eq!(
            eff,
            vec![Effect::CaptureAndRecognize {
                rect: RectI32 {
                    left: 10,
                    top: 10,
                    right: 140,
                    bottom: 90,
                }
            }]
        );
    }

    #[test]
    fn recognition_failure_unwinds_the_in_flight_flag() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        assert!(m.recognition_in_flight());

        assert!(m.reduce(Action::RecognitionFailed).is_empty());
        assert!(!m.recognition_in_flight());

        m.reduce(Action::Selection(selection::Action::PointerMove {
            x: 111,
            y: 61,
        }));
        let eff = m.reduce(Action::DebounceElapsed);
        assert!(
            eff.iter()
                .any(|e| matches!(e, Effect::CaptureAndRecognize { .. }))
        );
    }

    #[test]
    fn cancel_resets_everything() {
        let mut m = AppModel::new();
        drag_to(&mut m, 110, 60);
        m.reduce(Action::DebounceElapsed);
        m.reduce(Action::RecognitionCompleted {
            text: "x".to_string(),
        });

        let eff = m.reduce(Action::Cancel);
        assert!(eff.contains(&Effect::Selection(selection::Effect::HideRubberBand)));
        assert!(eff.contains(&Effect::Selection(selection::Effect::StopDebounce)));
        assert!(eff.contains(&Effect::HideOverlay));
        assert_eq!(m.overlay_text(), "");
        assert_eq!(m.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn phase_walks_the_interaction_state_machine() {
        let mut m = AppModel::new();
        assert_eq!(m.phase(), InteractionPhase::Idle);

        m.reduce(Action::Selection(selection::Action::PointerDown {
            x: 10,
            y: 10,
        }));
        assert_eq!(m.phase(), InteractionPhase::Dragging);

        m.reduce(Action::Selection(selection::Action::PointerMove {
            x: 110,
            y: 60,
        }));
        assert_eq!(m.phase(), InteractionPhase::Debouncing);

        m.reduce(Action::DebounceElapsed);
        assert_eq!(m.phase(), InteractionPhase::Recognizing);

        m.reduce(Action::RecognitionCompleted {
            text: "HELLO".to_string(),
        });
        assert_eq!(m.phase(), InteractionPhase::IdleWithResult);

        m.reduce(Action::Selection(selection::Action::PointerUp {
            x: 110,
            y: 60,
        }));
        assert_eq!(m.phase(), InteractionPhase::Idle);
    }
}
