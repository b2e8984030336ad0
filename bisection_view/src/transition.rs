// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated transitions between display states.
//!
//! ## Overview
//!
//! The controller never animates by itself. For every transition it builds a
//! [`TransitionRequest`], a self-contained record of the target state, the
//! start and end frames, and the timing parameters, and hands it to the
//! host's [`Animator`](crate::host::Animator). The animator reports back with
//! an [`AnimationStatus`]; an asynchronous animator later calls
//! [`BisectionController::complete_transition`](crate::controller::BisectionController::complete_transition)
//! with the request's [`TransitionId`].
//!
//! Hosts that drive animation frame by frame can sample
//! [`TransitionRequest::frames_at`].

use crate::error::ConfigError;
use crate::types::{DisplayState, PanelFrames};

/// Easing curve applied to transition progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow finish.
    #[default]
    EaseOut,
    /// Slow start and finish.
    EaseInOut,
}

impl Curve {
    /// Map linear progress `t` in `[0, 1]` to eased progress. Out-of-range input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.max(0.0).min(1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Timing parameters for a transition.
///
/// The defaults are a half-second spring (damping ratio 0.6, initial velocity
/// 0.3) with an ease-out curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionSpec {
    duration: f64,
    delay: f64,
    damping: f64,
    initial_velocity: f64,
    curve: Curve,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration: 0.5,
            delay: 0.0,
            damping: 0.6,
            initial_velocity: 0.3,
            curve: Curve::EaseOut,
        }
    }
}

impl TransitionSpec {
    /// Validate and build a spec.
    ///
    /// `duration` and `delay` are seconds; `damping` is a spring damping ratio
    /// in `(0, 1]`.
    pub fn new(
        duration: f64,
        delay: f64,
        damping: f64,
        initial_velocity: f64,
        curve: Curve,
    ) -> Result<Self, ConfigError> {
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(ConfigError::InvalidDuration { duration });
        }
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(ConfigError::InvalidDelay { delay });
        }
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(ConfigError::InvalidDamping { damping });
        }
        if !initial_velocity.is_finite() {
            return Err(ConfigError::InvalidVelocity {
                velocity: initial_velocity,
            });
        }
        Ok(Self {
            duration,
            delay,
            damping,
            initial_velocity,
            curve,
        })
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Delay before the transition starts, in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Spring damping ratio.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Initial spring velocity.
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Easing curve.
    pub fn curve(&self) -> Curve {
        self.curve
    }
}

/// Identifies one transition started by a controller.
///
/// Ids increase monotonically per controller and are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(u64);

impl TransitionId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw counter value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Everything an animator needs to run one transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionRequest {
    /// Pass back to `complete_transition` when done.
    pub id: TransitionId,
    /// Display state committed on completion.
    pub target: DisplayState,
    /// Panel frames when the transition started.
    pub from: PanelFrames,
    /// Panel frames for `target`.
    pub to: PanelFrames,
    /// Timing parameters.
    pub spec: TransitionSpec,
}

impl TransitionRequest {
    /// Frames at linear progress `progress` in `[0, 1]`, eased through `spec.curve()`.
    ///
    /// Spring parameters are not applied here; animators that simulate a
    /// spring read them from [`TransitionRequest::spec`].
    pub fn frames_at(&self, progress: f64) -> PanelFrames {
        self.from.lerp(&self.to, self.spec.curve().apply(progress))
    }
}

/// Result of handing a request to an animator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationStatus {
    /// The animation runs asynchronously; completion is reported later.
    Pending,
    /// The animation already ran to its end (or was skipped).
    Completed {
        /// False if the animation was interrupted before reaching its end.
        finished: bool,
    },
}
