// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bisection Observable: value cells that announce their changes.
//!
//! ## Overview
//!
//! [`ObservableValue`] holds a single value and a list of listeners.
//! Every effective assignment produces exactly two notifications per interested listener:
//! [`ChangeEvent::WillUpdate`] while the old value is still current, then
//! [`ChangeEvent::DidUpdate`] once the new value is stored.
//! Delivery is synchronous, on the caller's stack, in registration order.
//!
//! Assigning a value equal to the current one is a no-op under the default
//! [`NotifyPolicy::OnChange`]. [`NotifyPolicy::Always`] restores the older
//! behavior of notifying on every assignment.
//!
//! ## Re-entrant assignment
//!
//! Listeners registered with [`ObservableValue::subscribe_deferred`] receive a
//! [`Deferred`] queue and may request further assignments. Those are applied
//! strictly after the current notification round, in the order requested.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod types;
pub mod value;

pub use types::{ChangeEvent, ChangeEvents, NotifyPolicy, SubscriptionId};
pub use value::{Deferred, ObservableValue};
