// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the host toolkit: panels, the parent container, and the animation driver.
//!
//! The controller owns its panels by value and talks to the surrounding view
//! hierarchy only through these traits, so the same state machine can sit on
//! top of any retained-mode toolkit or a plain test double.

use kurbo::Rect;

use crate::transition::{AnimationStatus, TransitionRequest};
use crate::types::PanelSlot;

/// One of the two child content areas.
pub trait Panel {
    /// Current frame in container coordinates.
    fn frame(&self) -> Rect;

    /// Move and resize the panel.
    fn set_frame(&mut self, frame: Rect);

    /// Called before the panel is detached from the container.
    fn will_detach(&mut self) {}

    /// Called after the panel has been attached to the container.
    fn did_attach(&mut self) {}
}

/// The parent container that hosts the panels.
pub trait Host<P> {
    /// Insert `panel` into the container's hierarchy in `slot`.
    fn attach(&mut self, slot: PanelSlot, panel: &mut P);

    /// Remove `panel` from the container's hierarchy.
    fn detach(&mut self, slot: PanelSlot, panel: &mut P);
}

/// Runs timed transitions between panel frames.
///
/// The controller has already written `request.to` onto the panels when
/// [`Animator::animate`] is called, mirroring toolkits where the model value
/// changes immediately and only the presentation is interpolated.
pub trait Animator {
    /// Start animating `request`.
    fn animate(&mut self, request: &TransitionRequest) -> AnimationStatus;
}

/// An animator that completes every transition on the spot.
///
/// Useful for tests, headless hosts, and reduced-motion settings.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {
    fn animate(&mut self, _request: &TransitionRequest) -> AnimationStatus {
        AnimationStatus::Completed { finished: true }
    }
}
