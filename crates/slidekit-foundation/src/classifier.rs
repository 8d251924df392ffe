//! Edge-drag classification: deciding that an ambiguous touch sequence is
//! a menu drag rather than a scroll or tap on the content.
//!
//! One classifier instance serves the whole container. A down inside a
//! drag zone arms it; moves accumulate distance only while they travel in
//! the zone's opening direction (a reversal resets the anchor without
//! disarming), and crossing the zone's touch slop commits.

use crate::pointer::{PointerEvent, PointerEventKind};
use slidekit_core::{Axis, Edge, Point, Size};

/// A hit zone that can arm an edge drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragZone {
    pub edge: Edge,
    /// Band width measured inward from the zone's container edge, px.
    pub band: f32,
    /// Accumulated distance that commits the drag, px.
    pub touch_slop: f32,
    /// Arm on the menu's trailing edge instead, pulling back toward
    /// content. Used when a shown menu covers the full extent.
    pub pull_back: bool,
}

impl DragZone {
    /// Whether a down at `position` lands inside this zone.
    fn hit(&self, position: Point, viewport: Size) -> bool {
        let width = viewport.width as f32;
        let height = viewport.height as f32;
        // Pull-back zones sit on the side the menu slid in from the
        // opposite of, i.e. the trailing edge of the shown menu.
        match (self.edge, self.pull_back) {
            (Edge::Left, false) | (Edge::Right, true) => position.x < self.band,
            (Edge::Right, false) | (Edge::Left, true) => position.x > width - self.band,
            (Edge::Top, false) | (Edge::Bottom, true) => position.y < self.band,
            (Edge::Bottom, false) | (Edge::Top, true) => position.y > height - self.band,
        }
    }

    /// Sign of pointer movement that accumulates toward a commit.
    fn opening_direction(&self) -> f32 {
        let toward_open = self.edge.sign() as f32;
        if self.pull_back {
            -toward_open
        } else {
            toward_open
        }
    }
}

/// A committed edge drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Commit {
    pub edge: Edge,
    /// The sequence started on a shown menu's trailing edge.
    pub pull_back: bool,
    /// Distance accumulated in the opening direction when the slop broke.
    pub distance: f32,
    /// Pointer position at the committing move.
    pub position: Point,
}

/// Verdict for one pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Classification {
    /// Not (yet) a menu drag; the event falls through.
    None,
    Commit(Commit),
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle,
    Armed {
        zone: DragZone,
        prev: Point,
        accumulated: f32,
    },
}

/// The IDLE → ARMED → COMMITTED state machine.
#[derive(Debug)]
pub struct EdgeDragClassifier {
    phase: Phase,
}

impl Default for EdgeDragClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDragClassifier {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    /// Drops any armed zone, e.g. after a state transition.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Feeds one event. `zones` lists the zones valid in the container's
    /// current state; it is only consulted for down events.
    pub fn on_event(
        &mut self,
        event: &PointerEvent,
        viewport: Size,
        zones: &[DragZone],
    ) -> Classification {
        match event.kind {
            PointerEventKind::Down => {
                self.phase = Phase::Idle;
                if let Some(&zone) = zones.iter().find(|z| z.hit(event.position, viewport)) {
                    self.phase = Phase::Armed {
                        zone,
                        prev: event.position,
                        accumulated: 0.0,
                    };
                }
                Classification::None
            }
            PointerEventKind::Move => self.track(event.position),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.phase = Phase::Idle;
                Classification::None
            }
        }
    }

    fn track(&mut self, position: Point) -> Classification {
        let Phase::Armed {
            zone,
            prev,
            accumulated,
        } = &mut self.phase
        else {
            return Classification::None;
        };

        let delta = match zone.edge.axis() {
            Axis::Horizontal => position.x - prev.x,
            Axis::Vertical => position.y - prev.y,
        };
        *prev = position;

        let toward_open = delta * zone.opening_direction();
        if toward_open >= 0.0 {
            *accumulated += toward_open;
            if *accumulated > zone.touch_slop {
                let commit = Commit {
                    edge: zone.edge,
                    pull_back: zone.pull_back,
                    distance: *accumulated,
                    position,
                };
                log::trace!("edge drag committed on {:?}", commit.edge);
                self.phase = Phase::Idle;
                return Classification::Commit(commit);
            }
        } else {
            // Reversal: re-anchor but stay armed.
            *accumulated = 0.0;
        }

        Classification::None
    }
}
