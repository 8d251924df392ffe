//! The SlideKit container widget core.
//!
//! [`SlidePanel`] owns the gesture-to-offset state machine: it consumes
//! pointer primitives, keeps the `(offset, action, target)` tuple honest,
//! and pushes rectangles, visibility, and dim alpha out through the
//! [`LayoutTarget`] boundary. Animated transitions are pulled through
//! [`AnimationDriver`] one frame at a time; everything runs on the host's
//! event-dispatch thread.

mod boundary;
mod clock;
mod config;
mod panel;
mod placement;

pub use boundary::{
    AnimationDriver, CancelTarget, DispatchOutcome, LayoutTarget, PanelObserver,
};
pub use clock::FrameClock;
pub use config::{MenuSlot, PanelConfig};
pub use panel::SlidePanel;
pub use placement::{place_content, place_edge, EdgePlacement};
