//! Frame-driven open/close animation for SlideKit.
//!
//! One tween per transition: the host's animation scheduler delivers frame
//! timestamps, the tween answers with the next clamped offset. There is no
//! thread and no timer in here; a tween that has nothing to do reports
//! itself finished on its first sample.

mod slide;

pub use slide::{AnimationFrame, SlideAnimation};
