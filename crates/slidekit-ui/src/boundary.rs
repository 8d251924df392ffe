//! Boundary traits between the panel core and the host framework.
//!
//! The platform adapter implements [`LayoutTarget`] and [`AnimationDriver`]
//! and feeds pointer events in; the panel never touches a view hierarchy
//! directly. Observers are held weakly, so a host can drop its listener
//! without telling the panel first.

use crate::placement::EdgePlacement;
use slidekit_core::{Edge, Target};

/// Receiver for freshly computed geometry.
///
/// Invoked on every offset mutation; this is the only place screen
/// coordinates leave the core.
pub trait LayoutTarget {
    /// Applies the rectangles, visibility flags, and overlay alpha for the
    /// currently active target. `Target::Content` means the panel is at
    /// rest and only the content rectangle is meaningful.
    fn apply(&mut self, target: Target, placement: &EdgePlacement);

    /// Hides an edge's menu and shadow after the panel returned to
    /// content.
    fn hide_menu(&mut self, edge: Edge);
}

/// Host-side frame scheduler.
pub trait AnimationDriver {
    /// Asks the host for one animation frame; the host answers by calling
    /// [`crate::SlidePanel::on_frame`] with its frame timestamp.
    fn request_frame(&mut self);
}

/// State and offset notifications, fired synchronously from the owning
/// thread. Implementations must not call back into the panel.
pub trait PanelObserver {
    /// Both arguments use the packed encoding (`target << 4 | action`).
    fn on_state_changed(&self, previous: u8, current: u8);

    /// Normalized offset magnitudes (`|offset| / size`, per axis; may
    /// exceed 1 while over-dragging) plus the current packed state.
    fn on_offset_changed(&self, offset_x: f32, offset_y: f32, state: u8);
}

/// Whose in-flight touch dispatch a commit invalidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelTarget {
    /// The container's ordinary child dispatch.
    Content,
    /// The menu surface itself (pull-back commit on a full-extent menu).
    Menu(Edge),
}

/// What the host should do with an event after the panel has seen it.
///
/// Consumption itself travels on the event ([`slidekit_foundation::PointerEvent::is_consumed`]);
/// this carries the side requests that have no home on the event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Deliver a synthetic cancel to this dispatch target before the panel
    /// starts swallowing the gesture.
    pub cancel: Option<CancelTarget>,
    /// Ask the ancestor scrollable not to intercept the rest of the
    /// gesture.
    pub disallow_parent_intercept: bool,
}

impl DispatchOutcome {
    /// The panel made no claim; dispatch proceeds as usual.
    pub fn passthrough() -> Self {
        Self::default()
    }
}
