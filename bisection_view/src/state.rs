// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable view state shared between the controller and its listeners.

use bisection_observable::{
    ChangeEvent, ChangeEvents, NotifyPolicy, ObservableValue, SubscriptionId,
};

use crate::types::{DisplayState, GestureState};

/// The committed display state and the current gesture phase.
///
/// Anyone holding a reference can read and observe; only the
/// [controller](crate::controller::BisectionController) writes.
#[derive(Debug)]
pub struct ViewState {
    display: ObservableValue<DisplayState>,
    gesture: ObservableValue<GestureState>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DisplayState::default())
    }
}

impl ViewState {
    /// Start in `display_state` with no gesture in progress.
    pub fn new(display_state: DisplayState) -> Self {
        Self::with_policy(display_state, NotifyPolicy::OnChange)
    }

    /// Like [`ViewState::new`], with an explicit notification policy for both values.
    pub fn with_policy(display_state: DisplayState, policy: NotifyPolicy) -> Self {
        Self {
            display: ObservableValue::with_policy(display_state, policy),
            gesture: ObservableValue::with_policy(GestureState::default(), policy),
        }
    }

    /// The last committed display state.
    pub fn display_state(&self) -> DisplayState {
        *self.display.get()
    }

    /// The current gesture phase.
    pub fn gesture_state(&self) -> GestureState {
        *self.gesture.get()
    }

    /// Observe display-state changes.
    pub fn on_display_state<F>(&mut self, events: ChangeEvents, listener: F) -> SubscriptionId
    where
        F: FnMut(ChangeEvent, &DisplayState) + 'static,
    {
        self.display.subscribe(events, listener)
    }

    /// Observe gesture-state changes.
    pub fn on_gesture_state<F>(&mut self, events: ChangeEvents, listener: F) -> SubscriptionId
    where
        F: FnMut(ChangeEvent, &GestureState) + 'static,
    {
        self.gesture.subscribe(events, listener)
    }

    /// Remove a display-state listener.
    pub fn remove_display_listener(&mut self, id: SubscriptionId) -> bool {
        self.display.unsubscribe(id)
    }

    /// Remove a gesture-state listener.
    pub fn remove_gesture_listener(&mut self, id: SubscriptionId) -> bool {
        self.gesture.unsubscribe(id)
    }

    pub(crate) fn set_display_state(&mut self, state: DisplayState) -> bool {
        self.display.set(state)
    }

    pub(crate) fn set_gesture_state(&mut self, state: GestureState) -> bool {
        self.gesture.set(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn starts_idle_in_given_state() {
        let state = ViewState::new(DisplayState::SecondaryOnly);
        assert_eq!(state.display_state(), DisplayState::SecondaryOnly);
        assert_eq!(state.gesture_state(), GestureState::Ended);
    }

    // Each value notifies its own listeners only.
    #[test]
    fn display_and_gesture_listeners_are_independent() {
        let displays = Rc::new(RefCell::new(Vec::new()));
        let gestures = Rc::new(RefCell::new(Vec::new()));
        let mut state = ViewState::new(DisplayState::Both);

        let d = displays.clone();
        state.on_display_state(ChangeEvents::DID_UPDATE, move |_, s| d.borrow_mut().push(*s));
        let g = gestures.clone();
        state.on_gesture_state(ChangeEvents::DID_UPDATE, move |_, s| g.borrow_mut().push(*s));

        state.set_display_state(DisplayState::PrimaryOnly);
        state.set_gesture_state(GestureState::Began);

        assert_eq!(*displays.borrow(), vec![DisplayState::PrimaryOnly]);
        assert_eq!(*gestures.borrow(), vec![GestureState::Began]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let hits = Rc::new(RefCell::new(0));
        let mut state = ViewState::default();
        let h = hits.clone();
        let id = state.on_display_state(ChangeEvents::all(), move |_, _| *h.borrow_mut() += 1);

        assert!(state.remove_display_listener(id));
        state.set_display_state(DisplayState::SecondaryOnly);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn removing_a_gesture_listener_leaves_others() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = ViewState::default();
        let s = seen.clone();
        let first = state.on_gesture_state(ChangeEvents::DID_UPDATE, move |_, g| {
            s.borrow_mut().push((1, *g));
        });
        let s = seen.clone();
        state.on_gesture_state(ChangeEvents::DID_UPDATE, move |_, g| s.borrow_mut().push((2, *g)));

        assert!(state.remove_gesture_listener(first));
        assert!(!state.remove_gesture_listener(first));
        state.set_gesture_state(GestureState::Began);
        assert_eq!(*seen.borrow(), vec![(2, GestureState::Began)]);
    }

    #[test]
    fn always_policy_repeats_gesture_changes() {
        let hits = Rc::new(RefCell::new(0));
        let mut state = ViewState::with_policy(DisplayState::Both, NotifyPolicy::Always);
        let h = hits.clone();
        state.on_gesture_state(ChangeEvents::DID_UPDATE, move |_, _| *h.borrow_mut() += 1);

        state.set_gesture_state(GestureState::Changed);
        state.set_gesture_state(GestureState::Changed);
        assert_eq!(*hits.borrow(), 2);
    }
}
