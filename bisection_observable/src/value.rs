// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The observable value cell.
//!
//! ## Ordering
//!
//! - "Will update" listeners run before the stored value is replaced and see the old value.
//! - "Did update" listeners run after and see the new value.
//! - Within one event, listeners run in registration order.
//!
//! ## Re-entrancy
//!
//! A listener cannot borrow the cell it is observing. Instead it receives a
//! [`Deferred`] handle and may queue further assignments with [`Deferred::set`].
//! Queued assignments are applied first-in first-out after the current
//! notification round has completed, each going through the regular
//! comparison and notification path.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::types::{ChangeEvent, ChangeEvents, NotifyPolicy, SubscriptionId};

type Callback<T> = Box<dyn FnMut(ChangeEvent, &T, &mut Deferred<'_, T>)>;

struct Listener<T> {
    id: SubscriptionId,
    events: ChangeEvents,
    callback: Callback<T>,
}

/// A mutable value that publishes before/after notifications on change.
///
/// ## Usage
///
/// - Create with [`ObservableValue::new`] (suppresses no-op assignments) or
///   [`ObservableValue::with_policy`].
/// - Register listeners with [`ObservableValue::subscribe`] and remove them
///   with [`ObservableValue::unsubscribe`].
/// - Mutate only through [`ObservableValue::set`].
///
/// ```
/// use bisection_observable::{ChangeEvent, ChangeEvents, ObservableValue};
/// use std::{cell::RefCell, rc::Rc};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut cell = ObservableValue::new(1_u32);
/// let log = seen.clone();
/// cell.subscribe(ChangeEvents::all(), move |event, value| {
///     log.borrow_mut().push((event, *value));
/// });
///
/// assert!(cell.set(2));
/// assert!(!cell.set(2));
/// assert_eq!(
///     *seen.borrow(),
///     vec![(ChangeEvent::WillUpdate, 1), (ChangeEvent::DidUpdate, 2)]
/// );
/// ```
pub struct ObservableValue<T> {
    value: T,
    policy: NotifyPolicy,
    listeners: Vec<Listener<T>>,
    next_id: u64,
    queued: VecDeque<T>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for ObservableValue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObservableValue")
            .field("value", &self.value)
            .field("policy", &self.policy)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<T: Default + PartialEq> Default for ObservableValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Queue for assignments requested from inside a listener.
///
/// Handed to listeners registered with
/// [`ObservableValue::subscribe_deferred`].
#[derive(Debug)]
pub struct Deferred<'a, T> {
    queue: &'a mut VecDeque<T>,
}

impl<T> Deferred<'_, T> {
    /// Queue `value` to be assigned once the current notification completes.
    pub fn set(&mut self, value: T) {
        self.queue.push_back(value);
    }

    /// Number of assignments waiting to be applied.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl<T: PartialEq> ObservableValue<T> {
    /// Create a cell that only notifies on effective changes.
    pub fn new(value: T) -> Self {
        Self::with_policy(value, NotifyPolicy::OnChange)
    }

    /// Create a cell with an explicit notification policy.
    pub fn with_policy(value: T, policy: NotifyPolicy) -> Self {
        Self {
            value,
            policy,
            listeners: Vec::new(),
            next_id: 0,
            queued: VecDeque::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener for the events selected by `events`.
    pub fn subscribe<F>(&mut self, events: ChangeEvents, mut listener: F) -> SubscriptionId
    where
        F: FnMut(ChangeEvent, &T) + 'static,
    {
        self.subscribe_deferred(events, move |event, value, _| listener(event, value))
    }

    /// Register a listener that may queue further assignments to this cell.
    pub fn subscribe_deferred<F>(&mut self, events: ChangeEvents, listener: F) -> SubscriptionId
    where
        F: FnMut(ChangeEvent, &T, &mut Deferred<'_, T>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            events,
            callback: Box::new(listener),
        });
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Assign a new value, notifying listeners according to the policy.
    ///
    /// Returns `true` if the stored value changed. Assignments queued by
    /// listeners are applied before this returns; they do not affect the
    /// return value.
    pub fn set(&mut self, value: T) -> bool {
        let changed = self.apply(value);
        while let Some(next) = self.queued.pop_front() {
            self.apply(next);
        }
        changed
    }

    fn apply(&mut self, value: T) -> bool {
        let changed = self.value != value;
        if !changed && self.policy == NotifyPolicy::OnChange {
            return false;
        }

        let Self {
            value: current,
            listeners,
            queued,
            ..
        } = self;
        let mut deferred = Deferred { queue: queued };

        Self::notify(listeners, ChangeEvent::WillUpdate, current, &mut deferred);
        *current = value;
        Self::notify(listeners, ChangeEvent::DidUpdate, current, &mut deferred);
        changed
    }

    fn notify(
        listeners: &mut [Listener<T>],
        event: ChangeEvent,
        value: &T,
        deferred: &mut Deferred<'_, T>,
    ) {
        for l in listeners.iter_mut().filter(|l| l.events.contains(event.mask())) {
            (l.callback)(event, value, deferred);
        }
    }
}
