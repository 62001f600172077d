//! Click / double-click / hold / drag state machine.
//!
//! One gesture at most is open at any time. Each frame the classifier:
//!
//! 1. opens a gesture on the first button-down edge, if none is open;
//! 2. closes the open gesture on a button-up edge for *its* button, without
//!    looking at the thresholds again;
//! 3. otherwise advances the open gesture past the drag and hold
//!    thresholds.
//!
//! Hold and drag are independent. When both apply, both sets of
//! notifications fire, drag before hold within a frame.

use glam::Vec2;

use super::state::{Gesture, GesturePhase};
use crate::input::{MouseButton, PointerFrame};
use crate::options::GestureOptions;

/// The eight gesture notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEventKind {
    /// Gesture closed without crossing either threshold.
    Click,
    /// As `Click`, on a press that followed a recent gesture on the same
    /// button.
    DoubleClick,
    /// Hold threshold crossed this frame.
    HoldStart,
    /// Still holding on a later frame.
    HoldStay,
    /// Held gesture closed.
    HoldEnd,
    /// Drag threshold crossed this frame.
    DragStart,
    /// Still dragging on a later frame.
    DragStay,
    /// Dragged gesture closed.
    DragEnd,
}

/// A gesture notification with a snapshot of the gesture that caused it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    /// Which notification.
    pub kind: GestureEventKind,
    /// The gesture as of the emitting frame.
    pub gesture: Gesture,
    /// Frame time.
    pub time: f64,
    /// Pointer position on the emitting frame.
    pub position: Vec2,
}

/// Classifies a single active pointer gesture from per-frame edges.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    thresholds: GestureOptions,
    current: Option<Gesture>,
    last_closed: Option<Gesture>,
}

impl GestureClassifier {
    /// Create an idle classifier with the given thresholds.
    #[must_use]
    pub fn new(thresholds: GestureOptions) -> Self {
        Self {
            thresholds,
            current: None,
            last_closed: None,
        }
    }

    /// Active thresholds.
    #[must_use]
    pub fn thresholds(&self) -> &GestureOptions {
        &self.thresholds
    }

    /// Replace the thresholds. The open gesture, if any, is kept.
    pub fn set_thresholds(&mut self, thresholds: GestureOptions) {
        self.thresholds = thresholds;
    }

    /// The open gesture, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Gesture> {
        self.current.as_ref()
    }

    /// The most recently closed gesture.
    #[must_use]
    pub fn last_closed(&self) -> Option<&Gesture> {
        self.last_closed.as_ref()
    }

    /// Whether a gesture is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the open gesture without emitting anything (e.g. on focus
    /// loss). Double-click history is kept.
    pub fn reset(&mut self) {
        if let Some(gesture) = self.current.take() {
            log::debug!("gesture on {:?} dropped", gesture.button);
        }
    }

    /// Advance the state machine by one frame and return the notifications
    /// it produced, in emission order.
    pub fn update(&mut self, frame: &PointerFrame) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        // Not `else`: a gesture opened here can close on the same frame.
        if self.current.is_none() {
            self.begin(frame);
        }

        let Some(mut gesture) = self.current else {
            return events;
        };

        if frame.released.contains(&gesture.button) {
            self.current = None;
            gesture.end_time = Some(frame.time);
            Self::emit_close(&gesture, frame, &mut events);
            log::debug!(
                "gesture on {:?} closed as {:?} after {:.3}s",
                gesture.button,
                gesture.kind(),
                gesture.elapsed(frame.time)
            );
            self.last_closed = Some(gesture);
            return events;
        }

        self.advance(&mut gesture, frame, &mut events);
        self.current = Some(gesture);
        events
    }

    /// Open a gesture on the first button-down edge of the frame.
    fn begin(&mut self, frame: &PointerFrame) {
        let Some(&button) = frame.pressed.first() else {
            return;
        };
        let double_click = self.is_double_click(button, frame.time);
        self.current = Some(Gesture::open(
            button,
            frame.time,
            frame.position,
            frame.modifiers,
            double_click,
        ));
        log::debug!(
            "gesture on {button:?} opened at {:.3}s (double_click: {double_click})",
            frame.time
        );
    }

    /// Same button as the last closed gesture, and strictly inside the
    /// double-click window measured from its close.
    fn is_double_click(&self, button: MouseButton, time: f64) -> bool {
        self.last_closed.as_ref().is_some_and(|last| {
            last.button == button
                && last.end_time.is_some_and(|end| {
                    time - end < self.thresholds.double_click_window
                })
        })
    }

    fn advance(
        &self,
        gesture: &mut Gesture,
        frame: &PointerFrame,
        events: &mut Vec<GestureEvent>,
    ) {
        let was = gesture.phase;
        let displacement = frame.position.distance(gesture.origin);
        if !was.is_dragging() && displacement > self.thresholds.drag_threshold
        {
            gesture.phase = gesture.phase.with_drag();
        }
        if !was.is_holding()
            && gesture.elapsed(frame.time) > self.thresholds.hold_threshold
        {
            gesture.phase = gesture.phase.with_hold();
        }

        let now = gesture.phase;
        let mut push = |kind| {
            events.push(GestureEvent {
                kind,
                gesture: *gesture,
                time: frame.time,
                position: frame.position,
            });
        };
        match (was.is_dragging(), now.is_dragging()) {
            (true, _) => push(GestureEventKind::DragStay),
            (false, true) => push(GestureEventKind::DragStart),
            (false, false) => {}
        }
        match (was.is_holding(), now.is_holding()) {
            (true, _) => push(GestureEventKind::HoldStay),
            (false, true) => push(GestureEventKind::HoldStart),
            (false, false) => {}
        }
        if now != was && now != GesturePhase::Active {
            log::debug!("gesture on {:?} now {now:?}", gesture.button);
        }
    }

    fn emit_close(
        gesture: &Gesture,
        frame: &PointerFrame,
        events: &mut Vec<GestureEvent>,
    ) {
        let mut push = |kind| {
            events.push(GestureEvent {
                kind,
                gesture: *gesture,
                time: frame.time,
                position: frame.position,
            });
        };
        match (gesture.drag(), gesture.hold()) {
            (false, false) if gesture.double_click => {
                push(GestureEventKind::DoubleClick);
            }
            (false, false) => push(GestureEventKind::Click),
            (drag, hold) => {
                if drag {
                    push(GestureEventKind::DragEnd);
                }
                if hold {
                    push(GestureEventKind::HoldEnd);
                }
            }
        }
    }
}
