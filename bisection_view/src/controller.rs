// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container controller.
//!
//! ## Overview
//!
//! [`BisectionController`] owns the two panels and the [`ViewState`], and is
//! the only writer of either. It turns gesture samples into panel geometry
//! with the [layout](crate::layout) functions, picks a settled state on
//! release with [`SnapInput`], and commits that state once the host's
//! [`Animator`] reports the transition as done.
//!
//! ## Gesture handling
//!
//! - `Began` remembers the settled state the drag starts from. Both the
//!   direction gate and the release decision read that state.
//! - `Changed` moves the shared boundary by the change in translation since
//!   the previous sample and writes the frames straight to the panels.
//! - `Ended` reports the gesture as ended, then snaps and starts an animated
//!   transition.
//! - `Cancelled` and `Failed` follow [`CancelPolicy`].
//!
//! ## Minimal example
//!
//! ```
//! use bisection_view::controller::BisectionController;
//! use bisection_view::host::{Host, ImmediateAnimator, Panel};
//! use bisection_view::types::{DisplayState, GestureEvent, PanelSlot};
//! use kurbo::{Rect, Size, Vec2};
//!
//! #[derive(Default)]
//! struct Pane(Rect);
//! impl Panel for Pane {
//!     fn frame(&self) -> Rect { self.0 }
//!     fn set_frame(&mut self, frame: Rect) { self.0 = frame; }
//! }
//!
//! struct Root;
//! impl Host<Pane> for Root {
//!     fn attach(&mut self, _: PanelSlot, _: &mut Pane) {}
//!     fn detach(&mut self, _: PanelSlot, _: &mut Pane) {}
//! }
//!
//! let mut c = BisectionController::new(
//!     Pane::default(),
//!     Pane::default(),
//!     DisplayState::Both,
//!     Root,
//!     ImmediateAnimator,
//! );
//! c.layout(Size::new(300.0, 600.0));
//!
//! c.handle_gesture(&GestureEvent::began());
//! c.handle_gesture(&GestureEvent::changed(Vec2::new(0.0, 30.0), Vec2::new(0.0, 80.0)));
//! c.handle_gesture(&GestureEvent::ended(Vec2::new(0.0, 30.0), Vec2::new(0.0, 80.0)));
//!
//! assert_eq!(c.display_state(), DisplayState::PrimaryOnly);
//! assert_eq!(c.panel(PanelSlot::Primary).frame(), Rect::new(0.0, 0.0, 300.0, 600.0));
//! ```

use kurbo::{Size, Vec2};

use crate::config::{BisectionConfig, CancelPolicy, OverlapPolicy};
use crate::error::TransitionError;
use crate::host::{Animator, Host, Panel};
use crate::layout::{apply_drag, discrete_layout};
use crate::snap::SnapInput;
use crate::state::ViewState;
use crate::transition::{AnimationStatus, TransitionId, TransitionRequest};
use crate::types::{
    DisplayState, GestureEvent, GesturePhase, GestureState, PanelFrames, PanelSlot,
};

#[derive(Copy, Clone, Debug)]
struct InFlight {
    id: TransitionId,
    target: DisplayState,
}

/// Two-panel vertical split container.
///
/// ## Usage
///
/// - Construct with [`BisectionController::new`] or
///   [`BisectionController::with_config`]; both panels are attached immediately.
/// - Call [`BisectionController::layout`] from the host's layout pass.
/// - Feed recognizer output to [`BisectionController::handle_gesture`].
/// - Call [`BisectionController::complete_transition`] when an asynchronous
///   animation finishes.
/// - Observe changes through [`BisectionController::view_state_mut`].
pub struct BisectionController<P, H, A> {
    primary: P,
    secondary: P,
    host: H,
    animator: A,
    state: ViewState,
    config: BisectionConfig,
    extent: Size,
    laid_out: bool,
    translation: Vec2,
    drag_start: Option<DisplayState>,
    in_flight: Option<InFlight>,
    next_transition: u64,
}

impl<P, H, A> core::fmt::Debug for BisectionController<P, H, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BisectionController")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("extent", &self.extent)
            .field("laid_out", &self.laid_out)
            .field("translation", &self.translation)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl<P: Panel, H: Host<P>, A: Animator> BisectionController<P, H, A> {
    /// Create a controller with the default configuration.
    pub fn new(
        primary: P,
        secondary: P,
        display_state: DisplayState,
        host: H,
        animator: A,
    ) -> Self {
        Self::with_config(
            primary,
            secondary,
            display_state,
            host,
            animator,
            BisectionConfig::default(),
        )
    }

    /// Create a controller with an explicit configuration.
    ///
    /// Attaches the primary panel, then the secondary panel.
    pub fn with_config(
        primary: P,
        secondary: P,
        display_state: DisplayState,
        host: H,
        animator: A,
        config: BisectionConfig,
    ) -> Self {
        let mut controller = Self {
            primary,
            secondary,
            host,
            animator,
            state: ViewState::with_policy(display_state, config.notify),
            config,
            extent: Size::ZERO,
            laid_out: false,
            translation: Vec2::ZERO,
            drag_start: None,
            in_flight: None,
            next_transition: 0,
        };
        for slot in PanelSlot::ALL {
            controller.attach(slot);
        }
        controller
    }

    /// Committed display state.
    pub fn display_state(&self) -> DisplayState {
        self.state.display_state()
    }

    /// Current gesture phase.
    pub fn gesture_state(&self) -> GestureState {
        self.state.gesture_state()
    }

    /// Read-only view state.
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// View state for registering listeners. Writes stay with the controller.
    pub fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Configuration in effect.
    pub fn config(&self) -> &BisectionConfig {
        &self.config
    }

    /// Panel in `slot`.
    pub fn panel(&self, slot: PanelSlot) -> &P {
        match slot {
            PanelSlot::Primary => &self.primary,
            PanelSlot::Secondary => &self.secondary,
        }
    }

    /// Mutable access to the panel in `slot`, e.g. to update its content.
    pub fn panel_mut(&mut self, slot: PanelSlot) -> &mut P {
        match slot {
            PanelSlot::Primary => &mut self.primary,
            PanelSlot::Secondary => &mut self.secondary,
        }
    }

    /// Current frames of both panels.
    pub fn frames(&self) -> PanelFrames {
        PanelFrames::new(self.primary.frame(), self.secondary.frame())
    }

    /// The host container.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host container.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Mutable access to the animator, e.g. to advance it.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Container extent seen by the last layout pass.
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// True once the first layout pass has placed the panels.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Translation recorded from the last `Changed` sample of the current drag.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// The transition waiting for completion, if any.
    pub fn pending_transition(&self) -> Option<TransitionId> {
        self.in_flight.map(|t| t.id)
    }

    /// The state the panels are heading to: the in-flight target, or the committed state.
    pub fn settled_state(&self) -> DisplayState {
        self.in_flight
            .map_or_else(|| self.state.display_state(), |t| t.target)
    }

    /// Swap the panel in `slot` for `panel`, returning the previous one.
    ///
    /// The old panel is fully detached before the new one is attached. The new
    /// panel takes over the old panel's frame.
    pub fn replace_panel(&mut self, slot: PanelSlot, panel: P) -> P {
        let frame = self.panel(slot).frame();
        self.detach(slot);
        let old = core::mem::replace(self.panel_mut(slot), panel);
        self.panel_mut(slot).set_frame(frame);
        self.attach(slot);
        old
    }

    /// Host layout pass.
    ///
    /// The first pass places the panels for the current display state without
    /// animation. Later passes only record `extent` for upcoming transitions.
    pub fn layout(&mut self, extent: Size) {
        self.extent = extent;
        if self.laid_out {
            return;
        }
        let frames = discrete_layout(self.state.display_state(), extent);
        self.write_frames(frames);
        self.laid_out = true;
    }

    /// Request a display state.
    ///
    /// Before the first layout pass the state is committed directly and
    /// `Ok(None)` is returned. Afterwards the change always goes through an
    /// animated transition and its id is returned.
    pub fn set_display_state(
        &mut self,
        state: DisplayState,
    ) -> Result<Option<TransitionId>, TransitionError> {
        if !self.laid_out {
            self.state.set_display_state(state);
            return Ok(None);
        }
        self.begin_transition(state).map(Some)
    }

    /// Report that the animation for `id` has ended.
    ///
    /// Commits the transition's target state. Returns `false`, changing
    /// nothing, if `id` is not the transition in flight.
    #[cfg_attr(
        not(feature = "tracing"),
        expect(unused_variables, reason = "`finished` is only logged")
    )]
    pub fn complete_transition(&mut self, id: TransitionId, finished: bool) -> bool {
        match self.in_flight {
            Some(t) if t.id == id => {
                self.in_flight = None;
                #[cfg(feature = "tracing")]
                tracing::debug!(id = id.get(), to = ?t.target, finished, "transition complete");
                self.state.set_display_state(t.target);
                true
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!(id = id.get(), "ignoring completion of a stale transition");
                false
            }
        }
    }

    /// Feed one gesture sample.
    pub fn handle_gesture(&mut self, event: &GestureEvent) {
        match event.phase {
            GesturePhase::Began => self.drag_began(),
            GesturePhase::Changed => self.drag_changed(event),
            GesturePhase::Ended => self.drag_ended(event),
            GesturePhase::Cancelled | GesturePhase::Failed => match self.config.cancel {
                CancelPolicy::Ignore => {}
                CancelPolicy::Revert => self.drag_reverted(),
            },
        }
    }

    fn drag_began(&mut self) {
        #[cfg(feature = "tracing")]
        if self.state.gesture_state().is_active() {
            tracing::warn!("drag began while another drag is active");
        }
        let start = self.settled_state();
        #[cfg(feature = "tracing")]
        tracing::debug!(?start, "drag began");
        self.drag_start = Some(start);
        self.translation = Vec2::ZERO;
        self.state.set_gesture_state(GestureState::Began);
    }

    fn drag_changed(&mut self, event: &GestureEvent) {
        #[cfg(feature = "tracing")]
        if !self.state.gesture_state().is_active() {
            tracing::warn!("drag sample without a preceding begin");
        }
        let delta = event.translation - self.translation;
        if self.config.drag.admits(self.drag_anchor(), delta) {
            let frames = self.config.clamp.apply(apply_drag(self.frames(), delta.y));
            #[cfg(feature = "tracing")]
            tracing::trace!(delta_y = delta.y, boundary = frames.boundary(), "drag");
            self.write_frames(frames);
        }
        self.translation = event.translation;
        self.state.set_gesture_state(GestureState::Changed);
    }

    fn drag_ended(&mut self, event: &GestureEvent) {
        let start = self.take_drag_start();
        let target = SnapInput::from_release(start, self.translation, event).decide();
        #[cfg(feature = "tracing")]
        tracing::debug!(?start, ?target, translation_y = self.translation.y, "drag ended");
        self.settle(target);
    }

    fn drag_reverted(&mut self) {
        let start = self.take_drag_start();
        #[cfg(feature = "tracing")]
        tracing::debug!(?start, "drag cancelled, reverting");
        self.settle(start);
    }

    fn drag_anchor(&self) -> DisplayState {
        self.drag_start.unwrap_or_else(|| self.settled_state())
    }

    fn take_drag_start(&mut self) -> DisplayState {
        let start = self.drag_anchor();
        self.drag_start = None;
        start
    }

    // Observers hear `Ended` before a synchronous animator commits the target.
    fn settle(&mut self, target: DisplayState) {
        self.translation = Vec2::ZERO;
        self.state.set_gesture_state(GestureState::Ended);
        if let Err(_err) = self.begin_transition(target)
            && let Some(t) = self.in_flight
        {
            // The running transition keeps going; drop the drag geometry.
            #[cfg(feature = "tracing")]
            tracing::warn!(%_err, ?target, "drag release dropped");
            self.write_frames(discrete_layout(t.target, self.extent));
        }
    }

    fn begin_transition(&mut self, target: DisplayState) -> Result<TransitionId, TransitionError> {
        if let Some(t) = self.in_flight
            && self.config.overlap == OverlapPolicy::Reject
        {
            return Err(TransitionError::InFlight { pending: t.id });
        }

        let id = TransitionId::from_raw(self.next_transition);
        self.next_transition += 1;
        let request = TransitionRequest {
            id,
            target,
            from: self.frames(),
            to: discrete_layout(target, self.extent),
            spec: self.config.transition,
        };
        self.in_flight = Some(InFlight { id, target });
        self.write_frames(request.to);

        match self.animator.animate(&request) {
            AnimationStatus::Pending => {}
            AnimationStatus::Completed { finished } => {
                self.complete_transition(id, finished);
            }
        }
        Ok(id)
    }

    fn write_frames(&mut self, frames: PanelFrames) {
        for slot in PanelSlot::ALL {
            self.panel_mut(slot).set_frame(frames.get(slot));
        }
    }

    fn attach(&mut self, slot: PanelSlot) {
        let (panel, host) = self.parts(slot);
        host.attach(slot, panel);
        panel.did_attach();
    }

    fn detach(&mut self, slot: PanelSlot) {
        let (panel, host) = self.parts(slot);
        panel.will_detach();
        host.detach(slot, panel);
    }

    fn parts(&mut self, slot: PanelSlot) -> (&mut P, &mut H) {
        match slot {
            PanelSlot::Primary => (&mut self.primary, &mut self.host),
            PanelSlot::Secondary => (&mut self.secondary, &mut self.host),
        }
    }
}
