use glam::Vec2;

use crate::input::{Modifiers, MouseButton};

/// Progress of an open gesture past the hold and drag thresholds.
///
/// Both transitions are one-way: once holding or dragging, a gesture never
/// returns to `Active`, and a gesture that crosses both thresholds ends up
/// in `HoldingAndDragging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Button down, neither threshold crossed.
    Active,
    /// Held past the hold threshold.
    Holding,
    /// Moved past the drag threshold.
    Dragging,
    /// Both thresholds crossed.
    HoldingAndDragging,
}

impl GesturePhase {
    /// Whether the hold threshold has been crossed.
    #[must_use]
    pub fn is_holding(self) -> bool {
        matches!(self, Self::Holding | Self::HoldingAndDragging)
    }

    /// Whether the drag threshold has been crossed.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging | Self::HoldingAndDragging)
    }

    #[must_use]
    pub(crate) fn with_hold(self) -> Self {
        match self {
            Self::Active | Self::Holding => Self::Holding,
            Self::Dragging | Self::HoldingAndDragging => {
                Self::HoldingAndDragging
            }
        }
    }

    #[must_use]
    pub(crate) fn with_drag(self) -> Self {
        match self {
            Self::Active | Self::Dragging => Self::Dragging,
            Self::Holding | Self::HoldingAndDragging => {
                Self::HoldingAndDragging
            }
        }
    }
}

/// What a gesture amounts to, drag taking precedence over hold, hold over
/// double-click, double-click over click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Quick press and release.
    Click,
    /// Quick press and release shortly after another on the same button.
    DoubleClick,
    /// Press held past the hold threshold.
    Hold,
    /// Press moved past the drag threshold.
    Drag,
}

/// A single pointer-button interaction, open or closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    /// Button that opened the gesture.
    pub button: MouseButton,
    /// Host time of the button-down edge, in seconds.
    pub start_time: f64,
    /// Host time of the closing button-up edge; `None` while open.
    pub end_time: Option<f64>,
    /// Modifiers held at the button-down edge.
    pub modifiers: Modifiers,
    /// Whether this press followed a closed gesture on the same button
    /// within the double-click window.
    pub double_click: bool,
    /// Pointer position at the button-down edge.
    pub origin: Vec2,
    /// Hold/drag progress.
    pub phase: GesturePhase,
}

impl Gesture {
    pub(crate) fn open(
        button: MouseButton,
        time: f64,
        origin: Vec2,
        modifiers: Modifiers,
        double_click: bool,
    ) -> Self {
        Self {
            button,
            start_time: time,
            end_time: None,
            modifiers,
            double_click,
            origin,
            phase: GesturePhase::Active,
        }
    }

    /// Whether the hold threshold has been crossed.
    #[must_use]
    pub fn hold(&self) -> bool {
        self.phase.is_holding()
    }

    /// Whether the drag threshold has been crossed.
    #[must_use]
    pub fn drag(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Whether the gesture has been closed by its button-up edge.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.end_time.is_some()
    }

    /// Seconds between the button-down edge and `now` (or the close, once
    /// closed).
    #[must_use]
    pub fn elapsed(&self, now: f64) -> f64 {
        self.end_time.unwrap_or(now) - self.start_time
    }

    /// Summary classification of the gesture so far.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        if self.drag() {
            GestureKind::Drag
        } else if self.hold() {
            GestureKind::Hold
        } else if self.double_click {
            GestureKind::DoubleClick
        } else {
            GestureKind::Click
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture() -> Gesture {
        Gesture::open(MouseButton::Left, 1.0, Vec2::ZERO, Modifiers::NONE, false)
    }

    #[test]
    fn phase_transitions_are_one_way() {
        let p = GesturePhase::Active.with_hold();
        assert_eq!(p, GesturePhase::Holding);
        assert_eq!(p.with_hold(), GesturePhase::Holding);
        assert_eq!(p.with_drag(), GesturePhase::HoldingAndDragging);
        assert_eq!(
            GesturePhase::Dragging.with_hold(),
            GesturePhase::HoldingAndDragging
        );
        assert_eq!(
            GesturePhase::HoldingAndDragging.with_drag(),
            GesturePhase::HoldingAndDragging
        );
    }

    #[test]
    fn kind_prefers_drag_over_hold() {
        let mut g = gesture();
        g.double_click = true;
        assert_eq!(g.kind(), GestureKind::DoubleClick);
        g.phase = GesturePhase::Holding;
        assert_eq!(g.kind(), GestureKind::Hold);
        g.phase = GesturePhase::HoldingAndDragging;
        assert_eq!(g.kind(), GestureKind::Drag);
    }

    #[test]
    fn elapsed_stops_at_close() {
        let mut g = gesture();
        assert!((g.elapsed(1.5) - 0.5).abs() < 1e-9);
        g.end_time = Some(1.25);
        assert!(g.is_closed());
        assert!((g.elapsed(9.0) - 0.25).abs() < 1e-9);
    }
}
