// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout resolution: discrete frames per display state and continuous drag deformation.
//!
//! All functions here are pure. The controller decides when to call them and
//! which policy to apply on top.
//!
//! ```
//! use bisection_view::layout::{apply_drag, discrete_layout};
//! use bisection_view::types::DisplayState;
//! use kurbo::Size;
//!
//! let frames = discrete_layout(DisplayState::Both, Size::new(320.0, 480.0));
//! assert_eq!(frames.boundary(), 240.0);
//!
//! let dragged = apply_drag(frames, 40.0);
//! assert_eq!(dragged.primary.height(), 280.0);
//! assert_eq!(dragged.secondary.height(), 200.0);
//! assert!(dragged.is_contiguous());
//! ```

use kurbo::{Rect, Size, Vec2};

use crate::types::{DisplayState, PanelFrames};

/// Frames for a settled display state inside a container of `extent`.
///
/// Collapsed panels keep their width and sit at the edge they collapse
/// toward, so they can grow back smoothly.
pub fn discrete_layout(state: DisplayState, extent: Size) -> PanelFrames {
    let Size {
        width: w,
        height: h,
    } = extent;
    match state {
        DisplayState::Both => PanelFrames::new(
            Rect::new(0.0, 0.0, w, h / 2.0),
            Rect::new(0.0, h / 2.0, w, h),
        ),
        DisplayState::PrimaryOnly => {
            PanelFrames::new(Rect::new(0.0, 0.0, w, h), Rect::new(0.0, h, w, h))
        }
        DisplayState::SecondaryOnly => {
            PanelFrames::new(Rect::new(0.0, 0.0, w, 0.0), Rect::new(0.0, 0.0, w, h))
        }
    }
}

/// Move the shared boundary by `delta_y`.
///
/// The primary panel grows by `delta_y` and the secondary panel's top edge
/// moves by the same amount while its bottom edge stays put. Horizontal
/// geometry is untouched. No clamping: heights may go negative.
pub fn apply_drag(frames: PanelFrames, delta_y: f64) -> PanelFrames {
    let PanelFrames { primary, secondary } = frames;
    PanelFrames::new(
        Rect::new(primary.x0, primary.y0, primary.x1, primary.y1 + delta_y),
        Rect::new(secondary.x0, secondary.y0 + delta_y, secondary.x1, secondary.y1),
    )
}

/// Pull the shared boundary back between the primary's top and the
/// secondary's bottom so neither height is negative.
pub fn clamp_heights(frames: PanelFrames) -> PanelFrames {
    let PanelFrames { primary, secondary } = frames;
    // min/max rather than f64::clamp: degenerate frames must not panic.
    let boundary = primary.y1.max(primary.y0).min(secondary.y1);
    PanelFrames::new(
        Rect::new(primary.x0, primary.y0, primary.x1, boundary),
        Rect::new(secondary.x0, boundary, secondary.x1, secondary.y1),
    )
}

/// Whether a drag sample is allowed to move the boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPolicy {
    /// Every sample moves the boundary.
    #[default]
    Unconditional,
    /// Gate on horizontal direction while a single panel is shown.
    ///
    /// `Both` admits every sample, `PrimaryOnly` only samples moving left
    /// (`delta.x < 0`), `SecondaryOnly` only samples moving right (`delta.x > 0`).
    DirectionalGate,
}

impl DragPolicy {
    /// True if a sample with `delta` should be applied while in `state`.
    pub fn admits(self, state: DisplayState, delta: Vec2) -> bool {
        match self {
            Self::Unconditional => true,
            Self::DirectionalGate => match state {
                DisplayState::Both => true,
                DisplayState::PrimaryOnly => delta.x < 0.0,
                DisplayState::SecondaryOnly => delta.x > 0.0,
            },
        }
    }
}

/// What the controller does with drag geometry that leaves the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClampPolicy {
    /// Keep both heights non-negative with [`clamp_heights`].
    #[default]
    NonNegative,
    /// Write [`apply_drag`] output as-is.
    Unclamped,
}

impl ClampPolicy {
    /// Apply this policy to drag output.
    pub fn apply(self, frames: PanelFrames) -> PanelFrames {
        match self {
            Self::NonNegative => clamp_heights(frames),
            Self::Unclamped => frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: Size = Size::new(400.0, 800.0);

    #[test]
    fn both_splits_at_midpoint() {
        let f = discrete_layout(DisplayState::Both, EXTENT);
        assert_eq!(f.primary, Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(f.secondary, Rect::new(0.0, 400.0, 400.0, 800.0));
        assert_eq!(f.primary.height(), 400.0);
        assert_eq!(f.secondary.height(), 400.0);
    }

    #[test]
    fn primary_only_collapses_secondary_at_bottom() {
        let f = discrete_layout(DisplayState::PrimaryOnly, EXTENT);
        assert_eq!(f.primary, Rect::new(0.0, 0.0, 400.0, 800.0));
        assert_eq!(f.secondary.y0, 800.0);
        assert_eq!(f.secondary.height(), 0.0);
        assert_eq!(f.secondary.width(), 400.0);
    }

    #[test]
    fn secondary_only_collapses_primary_at_top() {
        let f = discrete_layout(DisplayState::SecondaryOnly, EXTENT);
        assert_eq!(f.primary.y0, 0.0);
        assert_eq!(f.primary.height(), 0.0);
        assert_eq!(f.secondary, Rect::new(0.0, 0.0, 400.0, 800.0));
    }

    #[test]
    fn zero_extent_is_all_zero() {
        for state in DisplayState::ALL {
            assert_eq!(discrete_layout(state, Size::ZERO), PanelFrames::ZERO);
        }
    }

    #[test]
    fn drag_moves_boundary_and_keeps_span() {
        let f = apply_drag(discrete_layout(DisplayState::Both, EXTENT), -150.0);
        assert_eq!(f.primary, Rect::new(0.0, 0.0, 400.0, 250.0));
        assert_eq!(f.secondary, Rect::new(0.0, 250.0, 400.0, 800.0));
        assert_eq!(f.primary.height() + f.secondary.height(), 800.0);
    }

    // Unclamped drag past the bottom edge yields a negative secondary height.
    #[test]
    fn drag_is_unclamped() {
        let f = apply_drag(discrete_layout(DisplayState::PrimaryOnly, EXTENT), 30.0);
        assert_eq!(f.primary.height(), 830.0);
        assert_eq!(f.secondary.height(), -30.0);
        assert!(f.is_contiguous());
    }

    #[test]
    fn clamp_pulls_boundary_inside() {
        let base = discrete_layout(DisplayState::Both, EXTENT);
        let low = clamp_heights(apply_drag(base, 1000.0));
        assert_eq!(low, discrete_layout(DisplayState::PrimaryOnly, EXTENT));
        let high = clamp_heights(apply_drag(base, -1000.0));
        assert_eq!(high.primary.height(), 0.0);
        assert_eq!(high.secondary, Rect::new(0.0, 0.0, 400.0, 800.0));
    }

    #[test]
    fn clamp_leaves_valid_frames_alone() {
        let f = apply_drag(discrete_layout(DisplayState::Both, EXTENT), 12.5);
        assert_eq!(clamp_heights(f), f);
        assert_eq!(ClampPolicy::Unclamped.apply(f), f);
    }

    #[test]
    fn directional_gate_follows_display_state() {
        let left = Vec2::new(-1.0, 5.0);
        let right = Vec2::new(1.0, 5.0);
        let vertical = Vec2::new(0.0, 5.0);
        let gate = DragPolicy::DirectionalGate;

        assert!(gate.admits(DisplayState::Both, vertical));
        assert!(gate.admits(DisplayState::PrimaryOnly, left));
        assert!(!gate.admits(DisplayState::PrimaryOnly, right));
        assert!(!gate.admits(DisplayState::PrimaryOnly, vertical));
        assert!(gate.admits(DisplayState::SecondaryOnly, right));
        assert!(!gate.admits(DisplayState::SecondaryOnly, left));

        for state in DisplayState::ALL {
            assert!(DragPolicy::Unconditional.admits(state, vertical));
        }
    }
}
