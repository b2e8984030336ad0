// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event kinds, subscription masks, handles, and notification policies.

bitflags::bitflags! {
    /// Which notifications a listener wants to receive.
    ///
    /// Passed to [`ObservableValue::subscribe`](crate::ObservableValue::subscribe).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChangeEvents: u8 {
        /// Delivered before the value is replaced, carrying the old value.
        const WILL_UPDATE = 0b0000_0001;
        /// Delivered after the value is replaced, carrying the new value.
        const DID_UPDATE  = 0b0000_0010;
    }
}

impl Default for ChangeEvents {
    fn default() -> Self {
        Self::all()
    }
}

/// A single notification delivered to a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    /// The value is about to change; the listener sees the old value.
    WillUpdate,
    /// The value has changed; the listener sees the new value.
    DidUpdate,
}

impl ChangeEvent {
    /// The mask bit that selects this event.
    pub const fn mask(self) -> ChangeEvents {
        match self {
            Self::WillUpdate => ChangeEvents::WILL_UPDATE,
            Self::DidUpdate => ChangeEvents::DID_UPDATE,
        }
    }
}

/// When an assignment produces notifications.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotifyPolicy {
    /// Notify only when the new value differs from the current one.
    #[default]
    OnChange,
    /// Notify on every assignment, including assignments of an equal value.
    Always,
}

/// Handle returned by a subscription; pass it back to unsubscribe.
///
/// Handles are unique per [`ObservableValue`](crate::ObservableValue) and are
/// never reused, even after the subscription is removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);
