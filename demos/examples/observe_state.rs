// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable values on their own.
//!
//! Listeners hear `WillUpdate` with the old value and `DidUpdate` with the
//! new one. A listener that wants to assign the same cell again queues the
//! value; it is applied after the current round of notifications.
//!
//! Run:
//! - `cargo run -p bisection_demos --example observe_state`

use std::cell::RefCell;
use std::rc::Rc;

use bisection_observable::{ChangeEvent, ChangeEvents, ObservableValue};

fn main() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut level = ObservableValue::new(0_u32);

    let sink = log.clone();
    level.subscribe(ChangeEvents::all(), move |e, v| sink.borrow_mut().push((e, *v)));

    // Clamp anything above 10 back down.
    level.subscribe_deferred(ChangeEvents::DID_UPDATE, |_, v, deferred| {
        if *v > 10 {
            deferred.set(10);
        }
    });

    level.set(3);
    level.set(3);
    level.set(42);

    for (event, value) in log.borrow().iter() {
        println!("  {:?} {}", event, value);
    }
    assert_eq!(*level.get(), 10);
    assert_eq!(
        *log.borrow(),
        vec![
            (ChangeEvent::WillUpdate, 0),
            (ChangeEvent::DidUpdate, 3),
            (ChangeEvent::WillUpdate, 3),
            (ChangeEvent::DidUpdate, 42),
            (ChangeEvent::WillUpdate, 42),
            (ChangeEvent::DidUpdate, 10),
        ]
    );
}
