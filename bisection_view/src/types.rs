// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: display and gesture states, gesture input, panel slots and frames.

use kurbo::{Rect, Vec2};

/// Which panels are visible once the container has settled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayState {
    /// Both panels, split at the vertical midpoint.
    #[default]
    Both,
    /// The primary panel fills the container; the secondary is collapsed at the bottom edge.
    PrimaryOnly,
    /// The secondary panel fills the container; the primary is collapsed at the top edge.
    SecondaryOnly,
}

impl DisplayState {
    /// All display states, in declaration order.
    pub const ALL: [Self; 3] = [Self::Both, Self::PrimaryOnly, Self::SecondaryOnly];
}

/// Phase of the drag interaction as tracked by the view state.
///
/// `Ended` doubles as the idle state and is the initial value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No drag in progress.
    #[default]
    Ended,
    /// A drag has started but not moved yet.
    Began,
    /// A drag is moving the shared boundary.
    Changed,
}

impl GestureState {
    /// True between `Began` and the matching `Ended`.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }
}

/// Phase reported by the host's gesture recognizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The pointer went down and the recognizer started tracking.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer was released.
    Ended,
    /// The system took the gesture away (e.g. an incoming call).
    Cancelled,
    /// The recognizer gave up on the gesture.
    Failed,
}

/// One gesture sample delivered to
/// [`BisectionController::handle_gesture`](crate::controller::BisectionController::handle_gesture).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureEvent {
    /// Phase of the gesture.
    pub phase: GesturePhase,
    /// Translation accumulated since the gesture began.
    pub translation: Vec2,
    /// Instantaneous velocity; positive `y` means the finger moves down.
    pub velocity: Vec2,
}

impl GestureEvent {
    /// Build an event from its parts.
    pub const fn new(phase: GesturePhase, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }

    /// A `Began` sample with no translation.
    pub const fn began() -> Self {
        Self::new(GesturePhase::Began, Vec2::ZERO, Vec2::ZERO)
    }

    /// A `Changed` sample.
    pub const fn changed(translation: Vec2, velocity: Vec2) -> Self {
        Self::new(GesturePhase::Changed, translation, velocity)
    }

    /// An `Ended` sample.
    pub const fn ended(translation: Vec2, velocity: Vec2) -> Self {
        Self::new(GesturePhase::Ended, translation, velocity)
    }

    /// Direction of travel at the time of the sample.
    pub fn is_dragging_downward(&self) -> bool {
        self.velocity.y > 0.0
    }
}

/// Addresses one of the two panels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelSlot {
    /// The top panel.
    Primary,
    /// The bottom panel.
    Secondary,
}

impl PanelSlot {
    /// Both slots, top first.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];
}

/// Geometry of both panels in container coordinates.
///
/// Rectangles are built with [`Rect::new`] and never normalized, so a drag
/// that pushes a panel past the opposite edge shows up as a negative height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanelFrames {
    /// Frame of the top panel.
    pub primary: Rect,
    /// Frame of the bottom panel.
    pub secondary: Rect,
}

impl PanelFrames {
    /// Both frames empty at the origin.
    pub const ZERO: Self = Self::new(Rect::ZERO, Rect::ZERO);

    /// Pair two frames.
    pub const fn new(primary: Rect, secondary: Rect) -> Self {
        Self { primary, secondary }
    }

    /// Frame for one slot.
    pub fn get(&self, slot: PanelSlot) -> Rect {
        match slot {
            PanelSlot::Primary => self.primary,
            PanelSlot::Secondary => self.secondary,
        }
    }

    /// Vertical position of the primary panel's bottom edge.
    pub fn boundary(&self) -> f64 {
        self.primary.y1
    }

    /// True if the secondary panel starts exactly where the primary ends.
    pub fn is_contiguous(&self) -> bool {
        self.secondary.y0 == self.primary.y1
    }

    /// Linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`).
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            lerp_rect(self.primary, other.primary, t),
            lerp_rect(self.secondary, other.secondary, t),
        )
    }
}

fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    let mix = |from: f64, to: f64| from + (to - from) * t;
    Rect::new(mix(a.x0, b.x0), mix(a.y0, b.y0), mix(a.x1, b.x1), mix(a.y1, b.y1))
}
