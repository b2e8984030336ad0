// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

use crate::transition::TransitionId;

/// A transition parameter was out of range.
///
/// Returned by [`TransitionSpec::new`](crate::transition::TransitionSpec::new).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Duration must be finite and non-negative (seconds).
    InvalidDuration {
        /// The rejected value.
        duration: f64,
    },
    /// Delay must be finite and non-negative (seconds).
    InvalidDelay {
        /// The rejected value.
        delay: f64,
    },
    /// Spring damping ratio must lie in `(0, 1]`.
    InvalidDamping {
        /// The rejected value.
        damping: f64,
    },
    /// Initial spring velocity must be finite.
    InvalidVelocity {
        /// The rejected value.
        velocity: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration { duration } => {
                write!(
                    f,
                    "transition duration {duration} is not a finite, non-negative number of seconds"
                )
            }
            Self::InvalidDelay { delay } => {
                write!(
                    f,
                    "transition delay {delay} is not a finite, non-negative number of seconds"
                )
            }
            Self::InvalidDamping { damping } => {
                write!(f, "spring damping {damping} is outside (0, 1]")
            }
            Self::InvalidVelocity { velocity } => {
                write!(f, "initial spring velocity {velocity} is not finite")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// A transition could not be started.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionError {
    /// Another transition is still running and overlapping transitions are rejected.
    InFlight {
        /// The transition that is still running.
        pending: TransitionId,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InFlight { pending } => {
                write!(f, "transition {} is still in flight", pending.get())
            }
        }
    }
}

impl core::error::Error for TransitionError {}
