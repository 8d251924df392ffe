//! Shared gesture constants for consistent touch handling.
//!
//! The same thresholds feed the scroll detector and the tap check so there
//! is no dead zone where a sequence is visually dragging yet still taps on
//! release. Values are logical pixels on a baseline-density display.

/// Distance a pointer must travel from its down position before the
/// detector starts reporting scrolls and stops treating the sequence as a
/// tap. Matches the common platform touch slop (~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Cap applied to tracked fling velocities, px/s. Matches the platform's
/// default maximum fling velocity on a baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
