//! Robot-style testing harness for SlideKit panels.
//!
//! [`PanelRobot`] drives a real [`slidekit_ui::SlidePanel`] with synthetic
//! pointer streams and frame pumping, recording everything the panel says
//! through its boundaries so tests can assert on states, offsets, and
//! geometry.

mod robot;

pub use robot::{
    CountingDriver, PanelRobot, RecordingLayout, RecordingObserver, SAMPLE_INTERVAL_MS,
};
