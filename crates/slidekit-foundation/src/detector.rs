//! Scroll/fling/tap detection over a raw pointer sequence.
//!
//! Scroll deltas use the prev-minus-current convention (positive when the
//! pointer moves left/up) so they feed the offset engine directly.

use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
use crate::pointer::{PointerEvent, PointerEventKind};
use crate::velocity_tracker::VelocityTracker;
use slidekit_core::Point;

/// Primitive the detector distilled from one pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    None,
    /// The pointer is dragging; deltas are prev-minus-current.
    Scroll { dx: f32, dy: f32 },
    /// The pointer lifted (or the sequence was cancelled, which reports
    /// zero velocity so an in-flight drag still settles).
    Release {
        velocity_x: f32,
        velocity_y: f32,
        /// The sequence never travelled past the drag threshold.
        is_tap: bool,
        at: Point,
    },
}

/// Tracks one pointer from down to up and classifies what it did.
#[derive(Clone, Default)]
pub struct GestureDetector {
    down: Option<Point>,
    prev: Point,
    scrolled: bool,
    tracker_x: VelocityTracker,
    tracker_y: VelocityTracker,
}

impl GestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.down = None;
        self.scrolled = false;
        self.tracker_x.reset();
        self.tracker_y.reset();
    }

    /// Where the tracked sequence went down, while it is alive.
    pub fn down_position(&self) -> Option<Point> {
        self.down
    }

    /// Adopts an in-progress drag: the sequence is treated as already past
    /// the threshold, so the next move reports a scroll immediately. Used
    /// when an edge-drag commit hands the rest of the gesture over.
    pub fn begin_scrolled(&mut self, position: Point, time_ms: i64) {
        self.reset();
        self.down = Some(position);
        self.prev = position;
        self.scrolled = true;
        self.tracker_x.add(time_ms, position.x);
        self.tracker_y.add(time_ms, position.y);
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Gesture {
        match event.kind {
            PointerEventKind::Down => {
                self.reset();
                self.down = Some(event.position);
                self.prev = event.position;
                self.tracker_x.add(event.time_ms, event.position.x);
                self.tracker_y.add(event.time_ms, event.position.y);
                Gesture::None
            }
            PointerEventKind::Move => {
                let Some(down) = self.down else {
                    return Gesture::None;
                };
                self.tracker_x.add(event.time_ms, event.position.x);
                self.tracker_y.add(event.time_ms, event.position.y);

                if !self.scrolled {
                    let travelled_x = event.position.x - down.x;
                    let travelled_y = event.position.y - down.y;
                    if travelled_x.hypot(travelled_y) <= DRAG_THRESHOLD {
                        self.prev = event.position;
                        return Gesture::None;
                    }
                    // First scroll covers the full distance from the down
                    // position, like the platform detector.
                    self.scrolled = true;
                    self.prev = event.position;
                    return Gesture::Scroll {
                        dx: down.x - event.position.x,
                        dy: down.y - event.position.y,
                    };
                }

                let gesture = Gesture::Scroll {
                    dx: self.prev.x - event.position.x,
                    dy: self.prev.y - event.position.y,
                };
                self.prev = event.position;
                gesture
            }
            PointerEventKind::Up => {
                if self.down.is_none() {
                    return Gesture::None;
                }
                let gesture = Gesture::Release {
                    velocity_x: self.tracker_x.velocity_capped(MAX_FLING_VELOCITY),
                    velocity_y: self.tracker_y.velocity_capped(MAX_FLING_VELOCITY),
                    is_tap: !self.scrolled,
                    at: event.position,
                };
                self.reset();
                gesture
            }
            PointerEventKind::Cancel => {
                if self.down.is_none() {
                    return Gesture::None;
                }
                self.reset();
                Gesture::Release {
                    velocity_x: 0.0,
                    velocity_y: 0.0,
                    is_tap: false,
                    at: event.position,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector_with_down(x: f32, y: f32) -> GestureDetector {
        let mut detector = GestureDetector::new();
        detector.on_event(&PointerEvent::down(x, y, 0));
        detector
    }

    #[test]
    fn small_wiggle_then_up_is_a_tap() {
        let mut detector = detector_with_down(100.0, 100.0);
        assert_eq!(
            detector.on_event(&PointerEvent::moved(103.0, 101.0, 10)),
            Gesture::None
        );
        match detector.on_event(&PointerEvent::up(103.0, 101.0, 20)) {
            Gesture::Release { is_tap, .. } => assert!(is_tap),
            other => panic!("expected release, got {other:?}"),
        }
    }

    #[test]
    fn first_scroll_covers_the_distance_from_down() {
        let mut detector = detector_with_down(100.0, 100.0);
        let gesture = detector.on_event(&PointerEvent::moved(120.0, 100.0, 10));
        assert_eq!(gesture, Gesture::Scroll { dx: -20.0, dy: 0.0 });

        // Subsequent scrolls are per-move deltas.
        let gesture = detector.on_event(&PointerEvent::moved(125.0, 102.0, 20));
        assert_eq!(gesture, Gesture::Scroll { dx: -5.0, dy: -2.0 });
    }

    #[test]
    fn release_after_scrolling_is_not_a_tap() {
        let mut detector = detector_with_down(100.0, 100.0);
        detector.on_event(&PointerEvent::moved(140.0, 100.0, 10));
        match detector.on_event(&PointerEvent::up(140.0, 100.0, 20)) {
            Gesture::Release { is_tap, .. } => assert!(!is_tap),
            other => panic!("expected release, got {other:?}"),
        }
    }

    #[test]
    fn release_reports_tracked_velocity() {
        let mut detector = detector_with_down(0.0, 0.0);
        // ~3000 px/s leftward: -30 px every 10 ms.
        for step in 1..=5i64 {
            detector.on_event(&PointerEvent::moved(step as f32 * -30.0, 0.0, step * 10));
        }
        match detector.on_event(&PointerEvent::up(-150.0, 0.0, 60)) {
            Gesture::Release { velocity_x, .. } => {
                assert!(velocity_x < -2_000.0, "got {velocity_x}");
            }
            other => panic!("expected release, got {other:?}"),
        }
    }

    #[test]
    fn cancel_settles_with_zero_velocity() {
        let mut detector = detector_with_down(100.0, 100.0);
        detector.on_event(&PointerEvent::moved(160.0, 100.0, 10));
        let gesture = detector.on_event(&PointerEvent::cancel(160.0, 100.0, 20));
        assert_eq!(
            gesture,
            Gesture::Release {
                velocity_x: 0.0,
                velocity_y: 0.0,
                is_tap: false,
                at: Point::new(160.0, 100.0),
            }
        );
    }

    #[test]
    fn adopted_drag_scrolls_without_a_second_threshold() {
        let mut detector = GestureDetector::new();
        detector.begin_scrolled(Point::new(50.0, 100.0), 0);
        assert_eq!(detector.down_position(), Some(Point::new(50.0, 100.0)));

        let gesture = detector.on_event(&PointerEvent::moved(53.0, 100.0, 10));
        assert_eq!(gesture, Gesture::Scroll { dx: -3.0, dy: 0.0 });
    }

    #[test]
    fn events_without_a_down_are_ignored() {
        let mut detector = GestureDetector::new();
        assert_eq!(
            detector.on_event(&PointerEvent::moved(10.0, 10.0, 0)),
            Gesture::None
        );
        assert_eq!(
            detector.on_event(&PointerEvent::up(10.0, 10.0, 10)),
            Gesture::None
        );
    }
}
