//! The render adapter: pure placement math.
//!
//! Given an edge, its clamped offset, the viewport, and the style, these
//! functions produce every rectangle, visibility flag, and the overlay
//! alpha the host needs. Two variants exist per edge: a menu listed after
//! the content draws *above* it (the content stays put and the menu slides
//! over), a menu listed before it sits *below* (the content slides away
//! and reveals the menu with parallax).

use slidekit_core::{Axis, Edge, MenuStyle, Rect, Size};

/// Geometry and visuals for one offset sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgePlacement {
    pub content: Rect,
    pub menu: Rect,
    pub shadow: Rect,
    pub overlay: Rect,
    pub menu_visible: bool,
    pub shadow_visible: bool,
    pub overlay_visible: bool,
    /// Dim strength for the overlay, [0, 1]; meaningful only while the
    /// overlay is visible.
    pub overlay_alpha: f32,
}

/// Primary-axis start coordinates for the four moving surfaces.
struct Spans {
    menu: i32,
    content: i32,
    shadow: i32,
    overlay: i32,
}

/// Placement for the at-rest content state.
pub fn place_content(viewport: Size) -> EdgePlacement {
    EdgePlacement {
        content: Rect::from_size(viewport),
        menu: Rect::ZERO,
        shadow: Rect::ZERO,
        overlay: Rect::ZERO,
        menu_visible: false,
        shadow_visible: false,
        overlay_visible: false,
        overlay_alpha: 0.0,
    }
}

/// Placement for an active edge at the given clamped offset.
pub fn place_edge(
    edge: Edge,
    offset: i32,
    viewport: Size,
    style: &MenuStyle,
    above_content: bool,
) -> EdgePlacement {
    let axis = edge.axis();
    let extent = viewport.extent(axis);
    let size = style.size();
    let ratio = style.slide_ratio;
    let border = style.border_px();
    let shadow_width = style.shadow_width;

    let spans = if edge.sign() > 0 {
        if above_content {
            // Menu slides in over the content; the content parallaxes.
            let seam = offset.min(size);
            Spans {
                menu: seam - size,
                content: (offset as f32 * ratio) as i32,
                shadow: seam,
                overlay: seam,
            }
        } else {
            // Content slides away; the menu parallaxes up from behind.
            Spans {
                menu: ((offset - size) as f32 * ratio) as i32,
                content: offset,
                shadow: offset - shadow_width,
                overlay: offset - extent,
            }
        }
    } else if above_content {
        let seam = (offset + extent).max(border);
        Spans {
            menu: seam,
            content: (offset as f32 * ratio) as i32,
            shadow: seam - shadow_width,
            overlay: seam - extent,
        }
    } else {
        Spans {
            menu: ((offset + size) as f32 * ratio) as i32 + border,
            content: offset,
            shadow: offset + extent,
            overlay: offset + extent,
        }
    };

    // Fraction of the menu revealed, in [0, 1] (above 1 while
    // over-dragging, clamped for the dim).
    let openness = if size > 0 {
        (offset * edge.sign()) as f32 / size as f32
    } else {
        0.0
    };
    let dim_progress = if above_content {
        1.0 - openness
    } else {
        openness
    };
    let overlay_alpha = (1.0 - dim_progress.clamp(0.0, 1.0)) * style.max_dim;

    let visible = offset * edge.sign() > 0;
    EdgePlacement {
        content: axis_rect(axis, spans.content, extent, viewport),
        menu: axis_rect(axis, spans.menu, size, viewport),
        shadow: axis_rect(axis, spans.shadow, shadow_width, viewport),
        overlay: axis_rect(axis, spans.overlay, extent, viewport),
        menu_visible: visible,
        shadow_visible: visible,
        overlay_visible: visible && overlay_alpha > 0.0,
        overlay_alpha,
    }
}

/// A primary-axis span stretched across the full cross extent.
fn axis_rect(axis: Axis, start: i32, length: i32, viewport: Size) -> Rect {
    match axis {
        Axis::Horizontal => Rect::new(start, 0, length, viewport.height),
        Axis::Vertical => Rect::new(0, start, viewport.width, length),
    }
}
