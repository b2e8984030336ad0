// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a transition frame by frame with an asynchronous animator.
//!
//! The animator keeps the request, the demo steps it through a few frames
//! using the request's easing curve, then reports completion. The display
//! state only changes once the completion is reported.
//!
//! Run:
//! - `cargo run -p bisection_demos --example stepped_animation`

use bisection_view::{
    AnimationStatus, Animator, BisectionController, DisplayState, Host, Panel, PanelSlot,
    TransitionRequest,
};
use kurbo::{Rect, Size};

#[derive(Default)]
struct Pane(Rect);

impl Panel for Pane {
    fn frame(&self) -> Rect {
        self.0
    }

    fn set_frame(&mut self, frame: Rect) {
        self.0 = frame;
    }
}

struct Window;

impl Host<Pane> for Window {
    fn attach(&mut self, _: PanelSlot, _: &mut Pane) {}
    fn detach(&mut self, _: PanelSlot, _: &mut Pane) {}
}

/// Holds the running request until the host's frame clock finishes it.
#[derive(Default)]
struct Stepper {
    running: Option<TransitionRequest>,
}

impl Animator for Stepper {
    fn animate(&mut self, request: &TransitionRequest) -> AnimationStatus {
        self.running = Some(*request);
        AnimationStatus::Pending
    }
}

fn main() {
    let mut c = BisectionController::new(
        Pane::default(),
        Pane::default(),
        DisplayState::PrimaryOnly,
        Window,
        Stepper::default(),
    );
    c.layout(Size::new(320.0, 640.0));

    let id = c
        .set_display_state(DisplayState::Both)
        .expect("nothing else is running")
        .expect("laid out, so the change is animated");

    let Some(request) = c.animator_mut().running.take() else {
        panic!("animator did not receive a request");
    };
    println!("== Transition {} to {:?} ==", id.get(), request.target);
    for frame in 0..=4 {
        let t = f64::from(frame) / 4.0;
        let frames = request.frames_at(t);
        println!("  t={:.2} boundary={:.1}", t, frames.boundary());
    }
    assert_eq!(c.display_state(), DisplayState::PrimaryOnly);

    assert!(c.complete_transition(id, true));
    println!("== Committed ==\n  {:?}", c.display_state());
    assert_eq!(c.display_state(), DisplayState::Both);
    assert_eq!(c.frames().boundary(), 320.0);
}
