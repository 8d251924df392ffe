//! Core vocabulary and pure logic for SlideKit.
//!
//! Everything in this crate is UI-framework-agnostic: pixel geometry, the
//! slide-state vocabulary with its packed boundary encoding, per-edge menu
//! styles, easing curves, and the offset engine that turns drag distances
//! and fling velocities into clamped offsets and commit decisions.

mod easing;
mod geometry;
mod offset;
mod state;
mod style;

pub use easing::Easing;
pub use geometry::{Axis, Point, Rect, Size};
pub use offset::{apply_drag, clamp_offset, decide_on_fling, decide_on_release};
pub use offset::{FlingResponse, ReleaseDecision};
pub use state::{Action, Edge, EdgeMap, SlideState, StateCell, Target};
pub use style::{Dimension, MenuStyle, DRAG_EDGE_FULL};
