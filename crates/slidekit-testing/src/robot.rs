//! The panel robot: programmatic control over a real panel instance.

use std::cell::RefCell;
use std::rc::Rc;

use slidekit_core::{Action, Edge, Size, Target};
use slidekit_foundation::PointerEvent;
use slidekit_ui::{
    AnimationDriver, DispatchOutcome, EdgePlacement, LayoutTarget, PanelConfig, PanelObserver,
    SlidePanel,
};

/// Milliseconds between synthetic pointer samples; a step of N pixels per
/// sample therefore reads as `N * 100` px/s to the velocity tracker.
pub const SAMPLE_INTERVAL_MS: u64 = 10;

/// Records every placement and hide the panel pushes out.
#[derive(Default)]
pub struct RecordingLayout {
    pub applied: Vec<(Target, EdgePlacement)>,
    pub hidden: Vec<Edge>,
}

impl LayoutTarget for RecordingLayout {
    fn apply(&mut self, target: Target, placement: &EdgePlacement) {
        self.applied.push((target, *placement));
    }

    fn hide_menu(&mut self, edge: Edge) {
        self.hidden.push(edge);
    }
}

/// Counts outstanding frame requests instead of scheduling anything.
#[derive(Default)]
pub struct CountingDriver {
    pending: usize,
}

impl CountingDriver {
    /// Takes all pending requests, reporting whether there were any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending) > 0
    }

    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }
}

impl AnimationDriver for CountingDriver {
    fn request_frame(&mut self) {
        self.pending += 1;
    }
}

/// Records listener traffic for later assertions.
#[derive(Default)]
pub struct RecordingObserver {
    pub states: RefCell<Vec<(u8, u8)>>,
    pub offsets: RefCell<Vec<(f32, f32, u8)>>,
}

impl PanelObserver for RecordingObserver {
    fn on_state_changed(&self, previous: u8, current: u8) {
        self.states.borrow_mut().push((previous, current));
    }

    fn on_offset_changed(&self, offset_x: f32, offset_y: f32, state: u8) {
        self.offsets.borrow_mut().push((offset_x, offset_y, state));
    }
}

/// Drives a real panel with synthetic gestures and frame pumping.
pub struct PanelRobot {
    pub panel: SlidePanel,
    pub layout: Rc<RefCell<RecordingLayout>>,
    pub driver: Rc<RefCell<CountingDriver>>,
    pub observer: Rc<RecordingObserver>,
    time_ms: u64,
}

impl PanelRobot {
    /// Builds a panel from `config`, wires the recording boundaries, and
    /// sizes it.
    pub fn new(config: PanelConfig, width: i32, height: i32) -> Self {
        let layout = Rc::new(RefCell::new(RecordingLayout::default()));
        let driver = Rc::new(RefCell::new(CountingDriver::default()));
        let observer = Rc::new(RecordingObserver::default());

        let mut panel = SlidePanel::new(config, layout.clone(), driver.clone());
        panel.set_observer(&observer);
        panel.set_viewport(Size::new(width, height));

        Self {
            panel,
            layout,
            driver,
            observer,
            time_ms: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.time_ms
    }

    pub fn advance(&mut self, ms: u64) {
        self.time_ms += ms;
    }

    pub fn touch_down(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.panel
            .handle_pointer(&PointerEvent::down(x, y, self.time_ms as i64))
    }

    /// Moves after one sample interval.
    pub fn touch_move(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.advance(SAMPLE_INTERVAL_MS);
        self.panel
            .handle_pointer(&PointerEvent::moved(x, y, self.time_ms as i64))
    }

    /// Releases after one sample interval.
    pub fn touch_up(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.advance(SAMPLE_INTERVAL_MS);
        self.panel
            .handle_pointer(&PointerEvent::up(x, y, self.time_ms as i64))
    }

    pub fn touch_cancel(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.advance(SAMPLE_INTERVAL_MS);
        self.panel
            .handle_pointer(&PointerEvent::cancel(x, y, self.time_ms as i64))
    }

    /// Presses at `from` and drags toward `to` in `step`-px increments
    /// along the dominant axis, one sample interval apart, without
    /// releasing. A small step keeps the tracked velocity below fling
    /// slops (4 px reads as 400 px/s).
    pub fn slow_drag(&mut self, from: (f32, f32), to: (f32, f32), step: f32) {
        self.touch_down(from.0, from.1);

        let (mut x, mut y) = from;
        let step = step.abs().max(1.0);
        loop {
            let dx = to.0 - x;
            let dy = to.1 - y;
            if dx == 0.0 && dy == 0.0 {
                break;
            }
            x += dx.clamp(-step, step);
            y += dy.clamp(-step, step);
            self.touch_move(x, y);
        }
    }

    /// A quick tap: down and up at the same spot.
    pub fn tap(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.touch_down(x, y);
        self.touch_up(x, y)
    }

    /// Runs the animation loop to quiescence, one `frame_ms` step per
    /// frame the panel asked for.
    pub fn pump(&mut self, frame_ms: u64) {
        let mut fuse = 10_000;
        while self.driver.borrow_mut().take() {
            self.advance(frame_ms);
            self.panel.on_frame(self.time_ms);
            fuse -= 1;
            assert!(fuse > 0, "animation never went idle");
        }
    }

    pub fn last_placement(&self) -> Option<(Target, EdgePlacement)> {
        self.layout.borrow().applied.last().copied()
    }

    pub fn states(&self) -> Vec<(u8, u8)> {
        self.observer.states.borrow().clone()
    }

    pub fn offsets(&self) -> Vec<(f32, f32, u8)> {
        self.observer.offsets.borrow().clone()
    }

    pub fn assert_state(&self, action: Action, target: Target) {
        assert!(
            self.panel.is_state(action, target),
            "expected {action:?}/{target:?}, panel is {:?}",
            self.panel.state()
        );
    }

    pub fn assert_offsets(&self, x: i32, y: i32) {
        assert_eq!(
            (self.panel.offset_x(), self.panel.offset_y()),
            (x, y),
            "unexpected offsets"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::{Dimension, MenuStyle};
    use slidekit_ui::MenuSlot;

    #[test]
    fn robot_drives_a_real_panel_end_to_end() {
        let style = MenuStyle::new().with_border(Dimension::Px(0));
        let config = PanelConfig::new()
            .with_content_child(1)
            .with_menu(Edge::Left, MenuSlot::new(0, style));
        let mut robot = PanelRobot::new(config, 400, 600);

        robot.panel.open_menu(Edge::Left, true);
        robot.pump(16);

        robot.assert_state(Action::Show, Target::Left);
        robot.assert_offsets(400, 0);
        assert!(!robot.states().is_empty());
        assert!(robot.last_placement().is_some());
    }
}
