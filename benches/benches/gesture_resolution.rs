// Copyright 2025 the Bisection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bisection_view::{
    BisectionController, DisplayState, GestureEvent, Host, ImmediateAnimator, Panel, PanelSlot,
    apply_drag, clamp_heights, discrete_layout, snap_decision,
};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};

const EXTENT: Size = Size::new(390.0, 844.0);

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

struct Root;

impl Host<Pane> for Root {
    fn attach(&mut self, _: PanelSlot, _: &mut Pane) {}
    fn detach(&mut self, _: PanelSlot, _: &mut Pane) {}
}

type Controller = BisectionController<Pane, Root, ImmediateAnimator>;

fn controller(state: DisplayState) -> Controller {
    let mut c = BisectionController::new(
        Pane::default(),
        Pane::default(),
        state,
        Root,
        ImmediateAnimator,
    );
    c.layout(EXTENT);
    c
}

// A finger moving down then back up, like a hesitant drag.
fn samples(n: usize) -> Vec<GestureEvent> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / n as f64;
        let y = 300.0 * (core::f64::consts::PI * t).sin() - 40.0 * t;
        let vy = 300.0 * core::f64::consts::PI * (core::f64::consts::PI * t).cos() - 40.0;
        out.push(GestureEvent::changed(Vec2::new(0.0, y), Vec2::new(0.0, vy)));
    }
    out
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.bench_function("discrete_all_states", |b| {
        b.iter(|| {
            for state in DisplayState::ALL {
                black_box(discrete_layout(black_box(state), black_box(EXTENT)));
            }
        });
    });
    for &n in &[64usize, 512, 4096] {
        let deltas: Vec<f64> = (0..n).map(|i| ((i % 17) as f64) - 8.0).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drag_clamped_n{}", n), |b| {
            b.iter(|| {
                let mut frames = discrete_layout(DisplayState::Both, EXTENT);
                for &dy in &deltas {
                    frames = clamp_heights(apply_drag(frames, dy));
                }
                black_box(frames);
            });
        });
    }
    group.finish();
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");
    group.bench_function("decision_table", |b| {
        b.iter(|| {
            for start in DisplayState::ALL {
                for ty in [-50.0, 0.0, 50.0] {
                    for down in [false, true] {
                        black_box(snap_decision(black_box(start), ty, down));
                    }
                }
            }
        });
    });
    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    for &n in &[16usize, 128, 1024] {
        let events = samples(n);
        let last = events[n - 1];
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("full_drag_n{}", n), |b| {
            b.iter_batched(
                || controller(DisplayState::Both),
                |mut c| {
                    c.handle_gesture(&GestureEvent::began());
                    for e in &events {
                        c.handle_gesture(e);
                    }
                    c.handle_gesture(&GestureEvent::ended(last.translation, last.velocity));
                    black_box(c.display_state());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("listener_fanout_16", |b| {
        b.iter_batched(
            || {
                let mut c = controller(DisplayState::Both);
                for _ in 0..16 {
                    c.view_state_mut()
                        .on_gesture_state(bisection_view::ChangeEvents::all(), |_, s| {
                            black_box(s);
                        });
                }
                c
            },
            |mut c| {
                c.handle_gesture(&GestureEvent::began());
                c.handle_gesture(&GestureEvent::changed(
                    Vec2::new(0.0, 30.0),
                    Vec2::new(0.0, 10.0),
                ));
                c.handle_gesture(&GestureEvent::ended(Vec2::new(0.0, 30.0), Vec2::new(0.0, 10.0)));
                black_box(c.display_state());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_snap, bench_controller);
criterion_main!(benches);
