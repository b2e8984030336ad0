// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag the boundary of a split container and watch it snap.
//!
//! Both panels start visible. A short downward drag moves the boundary with
//! the finger, then the release snaps to the primary-only layout.
//!
//! Run:
//! - `cargo run -p bisection_demos --example drag_to_primary`

use bisection_view::{
    BisectionController, ChangeEvents, DisplayState, GestureEvent, Host, ImmediateAnimator, Panel,
    PanelSlot, discrete_layout,
};
use kurbo::{Rect, Size, Vec2};

#[derive(Debug)]
struct Pane {
    name: &'static str,
    frame: Rect,
}

impl Pane {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            frame: Rect::ZERO,
        }
    }
}

impl Panel for Pane {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

struct Window;

impl Host<Pane> for Window {
    fn attach(&mut self, slot: PanelSlot, panel: &mut Pane) {
        println!("attach {:?} <- {}", slot, panel.name);
    }

    fn detach(&mut self, slot: PanelSlot, panel: &mut Pane) {
        println!("detach {:?} <- {}", slot, panel.name);
    }
}

fn main() {
    let extent = Size::new(390.0, 844.0);
    let mut c = BisectionController::new(
        Pane::new("map"),
        Pane::new("list"),
        DisplayState::Both,
        Window,
        ImmediateAnimator,
    );
    c.layout(extent);
    c.view_state_mut()
        .on_gesture_state(ChangeEvents::DID_UPDATE, |_, s| println!("  gesture: {:?}", s));
    c.view_state_mut()
        .on_display_state(ChangeEvents::all(), |e, s| println!("  display {:?}: {:?}", e, s));

    println!("== Layout ==\n  {:?}", c.frames());

    let down = Vec2::new(0.0, 120.0);
    c.handle_gesture(&GestureEvent::began());
    for y in [12.0, 30.0, 55.0] {
        c.handle_gesture(&GestureEvent::changed(Vec2::new(0.0, y), down));
        println!("== Drag {} ==\n  boundary at {}", y, c.frames().boundary());
    }
    c.handle_gesture(&GestureEvent::ended(Vec2::new(0.0, 55.0), down));

    println!("== Settled ==\n  {:?}", c.frames());
    assert_eq!(c.display_state(), DisplayState::PrimaryOnly);
    assert_eq!(c.frames(), discrete_layout(DisplayState::PrimaryOnly, extent));
}
