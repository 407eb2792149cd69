/// Platform-neutral integer point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointI32 {
    pub x: i32,
    pub y: i32,
}

impl PointI32 {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Platform-neutral integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Construct a normalized rectangle from two corner points.
    ///
    /// The result always has non-negative width and height regardless of the
    /// drag direction, so it can be handed to the capture crop directly.
    #[inline]
    pub fn from_points(a: PointI32, b: PointI32) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Zero-size rectangle anchored at a single point.
    #[inline]
    pub fn at_point(p: PointI32) -> Self {
        Self {
            left: p.x,
            top: p.y,
            right: p.x,
            bottom: p.y,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Debounce quiet period before a capture fires.
///
/// This is a core interaction rule so the host timer, the debouncer and the
/// tests all agree on the default timing.
pub const DEBOUNCE_INTERVAL_MS: u32 = 300;

/// Selection drag phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No drag in progress.
    #[default]
    Idle,
    /// Primary button went down; the rubber band is a zero-size rect at the
    /// anchor until the pointer moves.
    Dragging,
    /// The pointer has moved while held; the debounce timer is armed.
    Debouncing,
}

/// Pointer actions routed into the selection controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Primary button pressed.
    PointerDown { x: i32, y: i32 },
    /// Pointer moved. Only meaningful while the primary button is held
    /// (i.e. an anchor exists); hover moves produce no effects.
    PointerMove { x: i32, y: i32 },
    /// Primary button released.
    PointerUp { x: i32, y: i32 },
    /// Host reset back to idle (e.g. Escape).
    Reset,
}

/// Effects requested by the selection controller (executed by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show the rubber band at the given (zero-size) rect.
    ShowRubberBand { rect: RectI32 },
    /// Resize the rubber band to follow the drag.
    MoveRubberBand { rect: RectI32 },
    /// Hide the rubber band.
    HideRubberBand,
    /// (Re)start the one-shot debounce timer.
    RestartDebounce,
    /// Stop the debounce timer; any pending fire is stale.
    StopDebounce,
}

/// Selection controller state machine.
///
/// Tracks the drag anchor and the normalized selection rectangle. The anchor
/// doubles as the button-held flag: it exists exactly between pointer-down
/// and pointer-up.
#[derive(Debug, Default)]
pub struct Model {
    phase: Phase,
    anchor: Option<PointI32>,
    rect: Option<RectI32>,
}

impl Model {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current selection rectangle (normalized), if a drag produced one.
    pub fn rect(&self) -> Option<RectI32> {
        self.rect
    }

    /// True between pointer-down and pointer-up.
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::PointerDown { x, y } => {
                let anchor = PointI32::new(x, y);
                self.anchor = Some(anchor);
                let rect = RectI32::at_point(anchor);
                self.rect = Some(rect);
                self.phase = Phase::Dragging;
                vec![Effect::ShowRubberBand { rect }]
            }

            Action::PointerMove { x, y } => {
                let Some(anchor) = self.anchor else {
                    return Vec::new();
                };

                let rect = RectI32::from_points(anchor, PointI32::new(x, y));
                self.rect = Some(rect);
                self.phase = Phase::Debouncing;
                vec![Effect::MoveRubberBand { rect }, Effect::RestartDebounce]
            }

            Action::PointerUp { x, y } => {
                let Some(anchor) = self.anchor.take() else {
                    return Vec::new();
                };

                // Finalize with the release position so a press-move-release
                // without a trailing move event still yields the full rect.
                self.rect = Some(RectI32::from_points(anchor, PointI32::new(x, y)));
                self.phase = Phase::Idle;
                vec![Effect::HideRubberBand, Effect::StopDebounce]
            }

            Action::Reset => {
                self.anchor = None;
                self.rect = None;
                self.phase = Phase::Idle;
                vec![Effect::HideRubberBand, Effect::StopDebounce]
            }
        }
    }
}
