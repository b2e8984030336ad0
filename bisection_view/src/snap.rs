// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap decision: which display state a released drag settles into.
//!
//! ## Rules
//!
//! - From `Both`, dragging the boundary down reveals the primary panel fully
//!   and dragging it up reveals the secondary panel fully.
//! - From a single-panel state, only the drag that pulls the boundary back
//!   toward the middle returns to `Both`.
//! - Anything else settles back into the starting state.
//!
//! A drag counts as "down" only when both the accumulated translation is
//! positive and the finger was still moving down on release, and
//! symmetrically for "up". A fling that reverses direction before release
//! is treated as a failed swipe.

use kurbo::Vec2;

use crate::types::{DisplayState, GestureEvent};

/// Decide the settled state for a drag released with the given translation and direction.
pub fn snap_decision(
    start: DisplayState,
    translation_y: f64,
    dragging_downward: bool,
) -> DisplayState {
    let pulled_down = translation_y > 0.0 && dragging_downward;
    let pulled_up = translation_y < 0.0 && !dragging_downward;
    match start {
        DisplayState::Both if pulled_down => DisplayState::PrimaryOnly,
        DisplayState::Both if pulled_up => DisplayState::SecondaryOnly,
        DisplayState::PrimaryOnly if pulled_up => DisplayState::Both,
        DisplayState::SecondaryOnly if pulled_down => DisplayState::Both,
        unchanged => unchanged,
    }
}

/// Inputs to [`snap_decision`], gathered from a gesture release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapInput {
    /// Display state the drag started from.
    pub start: DisplayState,
    /// Vertical translation accumulated over the drag.
    pub translation_y: f64,
    /// Direction of travel at release.
    pub dragging_downward: bool,
}

impl SnapInput {
    /// Build the input for a drag that started in `start`, moved by
    /// `translation`, and was released with `release`.
    ///
    /// The direction comes from the release velocity, not from `translation`.
    pub fn from_release(start: DisplayState, translation: Vec2, release: &GestureEvent) -> Self {
        Self {
            start,
            translation_y: translation.y,
            dragging_downward: release.is_dragging_downward(),
        }
    }

    /// Run the decision.
    pub fn decide(self) -> DisplayState {
        snap_decision(self.start, self.translation_y, self.dragging_downward)
    }
}
