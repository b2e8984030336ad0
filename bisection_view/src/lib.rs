// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bisection View: the state machine behind a two-panel vertical split container.
//!
//! ## Overview
//!
//! Two panels are stacked vertically. Their visible proportions are either one
//! of three discrete [`DisplayState`]s or, while the user drags the shared
//! boundary, a continuous deformation of the settled layout. On release the
//! drag snaps to a discrete state and the container animates there.
//!
//! This crate does not draw, recognize gestures, or run animations. The host
//! toolkit plugs in through the traits in [`host`]:
//! - [`Panel`]: a child content area with a frame.
//! - [`Host`]: the parent that panels are attached to and detached from.
//! - [`Animator`]: runs a [`TransitionRequest`] and reports completion.
//!
//! ## Pieces
//!
//! - [`layout`]: pure functions from display state or drag delta to [`PanelFrames`].
//! - [`snap`]: the release decision table.
//! - [`state`]: [`ViewState`], the observable display and gesture state.
//! - [`controller`]: [`BisectionController`], which owns the panels and
//!   drives everything above from gesture samples.
//!
//! ## Workflow
//!
//! 1) Build a [`BisectionController`] with two panels, a host, and an animator.
//! 2) Call [`BisectionController::layout`] from the host's layout pass.
//! 3) Forward each recognizer sample as a [`GestureEvent`] to
//!    [`BisectionController::handle_gesture`].
//! 4) If the animator runs asynchronously, call
//!    [`BisectionController::complete_transition`] when it finishes; the new
//!    display state is committed and listeners are notified.
//!
//! ## Logging
//!
//! With the `tracing` feature the controller reports gesture phases, snap
//! decisions, and ignored or rejected transitions through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod layout;
pub mod snap;
pub mod state;
pub mod transition;
pub mod types;

pub use bisection_observable::{ChangeEvent, ChangeEvents, NotifyPolicy, SubscriptionId};
pub use config::{BisectionConfig, CancelPolicy, OverlapPolicy};
pub use controller::BisectionController;
pub use error::{ConfigError, TransitionError};
pub use host::{Animator, Host, ImmediateAnimator, Panel};
pub use layout::{ClampPolicy, DragPolicy, apply_drag, clamp_heights, discrete_layout};
pub use snap::{SnapInput, snap_decision};
pub use state::ViewState;
pub use transition::{AnimationStatus, Curve, TransitionId, TransitionRequest, TransitionSpec};
pub use types::{
    DisplayState, GestureEvent, GesturePhase, GestureState, PanelFrames, PanelSlot,
};
