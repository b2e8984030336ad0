// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use bisection_observable::NotifyPolicy;

use crate::layout::{ClampPolicy, DragPolicy};
use crate::transition::TransitionSpec;

/// What happens when a transition is requested while another is still running.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlapPolicy {
    /// Start the new transition; the old one's completion is ignored.
    #[default]
    Supersede,
    /// Refuse the new transition with
    /// [`TransitionError::InFlight`](crate::error::TransitionError::InFlight).
    Reject,
}

/// What happens when the gesture recognizer cancels or fails a drag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CancelPolicy {
    /// Do nothing; panels stay where the drag left them.
    #[default]
    Ignore,
    /// Animate back to the state the drag started from and end the gesture.
    Revert,
}

/// Policies and timing used by a
/// [`BisectionController`](crate::controller::BisectionController).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BisectionConfig {
    /// Which drag samples move the boundary.
    pub drag: DragPolicy,
    /// How drag geometry is kept inside the container.
    pub clamp: ClampPolicy,
    /// Handling of overlapping transitions.
    pub overlap: OverlapPolicy,
    /// Handling of cancelled or failed gestures.
    pub cancel: CancelPolicy,
    /// Timing for every animated transition.
    pub transition: TransitionSpec,
    /// Whether view-state listeners hear about assignments of an unchanged value.
    pub notify: NotifyPolicy,
}

impl BisectionConfig {
    /// Set the drag policy.
    pub fn with_drag(mut self, drag: DragPolicy) -> Self {
        self.drag = drag;
        self
    }

    /// Set the clamp policy.
    pub fn with_clamp(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }

    /// Set the overlap policy.
    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// Set the cancel policy.
    pub fn with_cancel(mut self, cancel: CancelPolicy) -> Self {
        self.cancel = cancel;
        self
    }

    /// Set the transition timing.
    pub fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = transition;
        self
    }

    /// Set the view-state notification policy.
    pub fn with_notify(mut self, notify: NotifyPolicy) -> Self {
        self.notify = notify;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Curve;

    #[test]
    fn defaults_match_revised_behavior() {
        let config = BisectionConfig::default();
        assert_eq!(config.drag, DragPolicy::Unconditional);
        assert_eq!(config.clamp, ClampPolicy::NonNegative);
        assert_eq!(config.overlap, OverlapPolicy::Supersede);
        assert_eq!(config.cancel, CancelPolicy::Ignore);
        assert_eq!(config.notify, NotifyPolicy::OnChange);
        assert_eq!(config.transition, TransitionSpec::default());
    }

    #[test]
    fn setters_chain() {
        let spec = TransitionSpec::new(0.25, 0.0, 1.0, 0.0, Curve::Linear).unwrap();
        let config = BisectionConfig::default()
            .with_drag(DragPolicy::DirectionalGate)
            .with_clamp(ClampPolicy::Unclamped)
            .with_overlap(OverlapPolicy::Reject)
            .with_cancel(CancelPolicy::Revert)
            .with_transition(spec)
            .with_notify(NotifyPolicy::Always);
        assert_eq!(config.drag, DragPolicy::DirectionalGate);
        assert_eq!(config.clamp, ClampPolicy::Unclamped);
        assert_eq!(config.overlap, OverlapPolicy::Reject);
        assert_eq!(config.cancel, CancelPolicy::Revert);
        assert_eq!(config.transition, spec);
        assert_eq!(config.notify, NotifyPolicy::Always);
    }
}
