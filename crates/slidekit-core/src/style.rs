//! Per-edge menu configuration and derived geometry.

use crate::easing::Easing;

/// A fixed pixel length or a fraction of the container extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Px(i32),
    /// Fraction of the extent the value resolves against, clamped to [0, 1].
    Fraction(f32),
}

impl Dimension {
    pub fn resolve(self, extent: i32) -> i32 {
        match self {
            Dimension::Px(px) => px,
            Dimension::Fraction(fraction) => {
                (extent as f32 * fraction.clamp(0.0, 1.0)) as i32
            }
        }
    }
}

/// Drag-edge width meaning the whole container extent arms a drag.
pub const DRAG_EDGE_FULL: i32 = i32::MAX;

/// Minimum fling velocity the platform accepts, px/s.
const MIN_VELOCITY_SLOP: f32 = 500.0;

/// Configuration and derived geometry for one edge menu.
///
/// Configured fields are plain data; the `*_px` values and `size` are
/// derived by [`MenuStyle::resolve`] whenever the container extent changes
/// and are read-only outside this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuStyle {
    /// Strip of the container the menu never covers.
    pub border: Dimension,
    /// Strip that stays uncovered even while over-dragging.
    pub over_drag_border: Dimension,
    /// Offset below which a plain release closes instead of opens.
    pub close_edge: Dimension,
    /// Drop-shadow thickness at the sliding seam, px.
    pub shadow_width: i32,
    /// Band from the container edge that arms an edge drag, px.
    /// [`DRAG_EDGE_FULL`] arms anywhere.
    pub drag_edge_width: i32,
    /// Distance a pointer must travel before an armed drag commits, px.
    pub touch_slop: i32,
    /// Maximum dim applied to the overlay, [0, 1].
    pub max_dim: f32,
    /// Fling velocity that forces an open/close, px/s.
    pub velocity_slop: f32,
    /// Full open/close animation duration, ms.
    pub anim_duration_ms: u32,
    /// Fraction of the offset applied to the parallax surface, [0, 1].
    pub slide_ratio: f32,
    /// Allow the offset to exceed the menu size during a live drag.
    pub over_drag: bool,
    pub easing: Easing,

    border_px: i32,
    over_drag_border_px: i32,
    close_edge_px: i32,
    size: i32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            border: Dimension::Px(50),
            over_drag_border: Dimension::Px(50),
            close_edge: Dimension::Fraction(0.75),
            shadow_width: 10,
            drag_edge_width: 30,
            touch_slop: 16,
            max_dim: 0.5,
            velocity_slop: MIN_VELOCITY_SLOP,
            anim_duration_ms: 1000,
            slide_ratio: 0.5,
            over_drag: false,
            easing: Easing::Decelerate,
            border_px: 0,
            over_drag_border_px: 0,
            close_edge_px: 0,
            size: 0,
        }
    }
}

impl MenuStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border(mut self, border: Dimension) -> Self {
        self.border = border;
        self
    }

    pub fn with_over_drag_border(mut self, border: Dimension) -> Self {
        self.over_drag_border = border;
        self
    }

    pub fn with_close_edge(mut self, close_edge: Dimension) -> Self {
        self.close_edge = close_edge;
        self
    }

    pub fn with_shadow_width(mut self, width: i32) -> Self {
        self.shadow_width = width.max(0);
        self
    }

    pub fn with_drag_edge_width(mut self, width: i32) -> Self {
        self.drag_edge_width = width.max(0);
        self
    }

    pub fn with_touch_slop(mut self, slop: i32) -> Self {
        self.touch_slop = slop.max(0);
        self
    }

    pub fn with_max_dim(mut self, dim: f32) -> Self {
        self.max_dim = dim.clamp(0.0, 1.0);
        self
    }

    pub fn with_velocity_slop(mut self, slop: f32) -> Self {
        self.velocity_slop = slop.max(MIN_VELOCITY_SLOP);
        self
    }

    pub fn with_anim_duration_ms(mut self, duration: u32) -> Self {
        self.anim_duration_ms = duration;
        self
    }

    pub fn with_slide_ratio(mut self, ratio: f32) -> Self {
        self.slide_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_over_drag(mut self, over_drag: bool) -> Self {
        self.over_drag = over_drag;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Recomputes the derived geometry against a container extent.
    ///
    /// Safe to call on every resize; calling twice with the same extent
    /// yields identical values. Negative extents clamp the size to zero.
    pub fn resolve(&mut self, extent: i32) {
        let extent = extent.max(0);
        self.border_px = self.border.resolve(extent).clamp(0, extent);
        self.over_drag_border_px = self.over_drag_border.resolve(extent).clamp(0, extent);
        self.size = extent - self.border_px;
        self.close_edge_px = self.close_edge.resolve(self.size).clamp(0, self.size);
    }

    /// Menu extent along its axis; valid after [`MenuStyle::resolve`].
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn border_px(&self) -> i32 {
        self.border_px
    }

    pub fn over_drag_border_px(&self) -> i32 {
        self.over_drag_border_px
    }

    pub fn close_edge_px(&self) -> i32 {
        self.close_edge_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_derives_size_and_close_edge() {
        let mut style = MenuStyle::new()
            .with_border(Dimension::Px(100))
            .with_close_edge(Dimension::Fraction(0.5));
        style.resolve(400);

        assert_eq!(style.size(), 300);
        assert_eq!(style.border_px(), 100);
        assert_eq!(style.close_edge_px(), 150);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut style = MenuStyle::new()
            .with_border(Dimension::Fraction(0.25))
            .with_over_drag_border(Dimension::Fraction(0.1));
        style.resolve(400);
        let first = style.clone();
        style.resolve(400);
        assert_eq!(style, first);
    }

    #[test]
    fn fraction_border_tracks_resize() {
        let mut style = MenuStyle::new().with_border(Dimension::Fraction(0.25));
        style.resolve(400);
        assert_eq!(style.size(), 300);

        style.resolve(200);
        assert_eq!(style.border_px(), 50);
        assert_eq!(style.size(), 150);
    }

    #[test]
    fn zero_and_negative_extents_clamp() {
        let mut style = MenuStyle::new();
        style.resolve(0);
        assert_eq!(style.size(), 0);
        assert_eq!(style.close_edge_px(), 0);

        style.resolve(-50);
        assert_eq!(style.size(), 0);
    }

    #[test]
    fn oversized_pixel_border_clamps_to_extent() {
        let mut style = MenuStyle::new().with_border(Dimension::Px(900));
        style.resolve(400);
        assert_eq!(style.border_px(), 400);
        assert_eq!(style.size(), 0);
    }

    #[test]
    fn malformed_fractions_clamp_at_configuration() {
        assert_eq!(Dimension::Fraction(2.0).resolve(100), 100);
        assert_eq!(Dimension::Fraction(-1.0).resolve(100), 0);

        let style = MenuStyle::new().with_max_dim(3.0).with_slide_ratio(-0.5);
        assert_eq!(style.max_dim, 1.0);
        assert_eq!(style.slide_ratio, 0.0);
    }

    #[test]
    fn velocity_slop_keeps_platform_floor() {
        let style = MenuStyle::new().with_velocity_slop(100.0);
        assert_eq!(style.velocity_slop, 500.0);

        let style = MenuStyle::new().with_velocity_slop(900.0);
        assert_eq!(style.velocity_slop, 900.0);
    }
}
