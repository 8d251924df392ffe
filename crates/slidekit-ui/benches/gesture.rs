use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidekit_core::{Dimension, Easing, Edge, MenuStyle, Size, Target};
use slidekit_foundation::PointerEvent;
use slidekit_ui::{
    AnimationDriver, EdgePlacement, LayoutTarget, MenuSlot, PanelConfig, SlidePanel,
};

const VIEWPORT: Size = Size::new(1080, 1920);
const MOVES_PER_DRAG: usize = 120;

struct NullLayout;

impl LayoutTarget for NullLayout {
    fn apply(&mut self, target: Target, placement: &EdgePlacement) {
        black_box((target, placement.content));
    }

    fn hide_menu(&mut self, edge: Edge) {
        black_box(edge);
    }
}

struct NullDriver;

impl AnimationDriver for NullDriver {
    fn request_frame(&mut self) {}
}

fn drawer_panel() -> SlidePanel {
    let style = MenuStyle::new()
        .with_border(Dimension::Px(0))
        .with_touch_slop(16)
        .with_drag_edge_width(40)
        .with_easing(Easing::Decelerate);
    let config = PanelConfig::new()
        .with_content_child(1)
        .with_menu(Edge::Left, MenuSlot::new(0, style));

    let mut panel = SlidePanel::new(
        config,
        Rc::new(RefCell::new(NullLayout)),
        Rc::new(RefCell::new(NullDriver)),
    );
    panel.set_viewport(VIEWPORT);
    panel
}

/// One full gesture: arm, commit, drag across the viewport, release, and
/// settle the close animation frame by frame.
fn drag_and_settle(panel: &mut SlidePanel) {
    let mut time = 0i64;
    panel.handle_pointer(&PointerEvent::down(10.0, 500.0, time));
    for step in 1..=MOVES_PER_DRAG {
        time += 8;
        let x = 10.0 + step as f32 * 3.0;
        panel.handle_pointer(&PointerEvent::moved(x, 500.0, time));
    }
    time += 8;
    panel.handle_pointer(&PointerEvent::up(
        10.0 + MOVES_PER_DRAG as f32 * 3.0,
        500.0,
        time,
    ));

    let mut frame_time = time as u64;
    while {
        frame_time += 16;
        panel.on_frame(frame_time)
    } {}
}

fn gesture_benchmark(c: &mut Criterion) {
    c.bench_function("drag_commit_release_settle", |b| {
        let mut panel = drawer_panel();
        b.iter(|| {
            drag_and_settle(black_box(&mut panel));
        });
    });
}

criterion_group!(benches, gesture_benchmark);
criterion_main!(benches);
