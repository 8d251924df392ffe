//! The offset engine: clamped drag math and commit decisions.
//!
//! Scroll distances follow the prev-minus-current convention the platform
//! gesture detectors use: a positive distance means the pointer moved
//! left/up, so the new offset is `clamp(offset - distance)`.

use crate::state::Edge;
use crate::style::MenuStyle;

/// Verdict for a release without a qualifying fling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    Open,
    Close,
}

/// Verdict for a fling sample against the edge's velocity slop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlingResponse {
    /// Animate to the fully open offset.
    Open,
    /// Animate back to zero.
    Close,
    /// Opening fling but the menu is already at its bound; re-assert the
    /// shown state so the listener hears a settle.
    AlreadyOpen,
    /// Closing fling but the offset is already zero; re-assert content.
    AlreadyClosed,
    /// Below the slop; fall back to the release-position policy.
    Ignored,
}

/// Magnitude bound for an offset on `edge`.
///
/// A live drag with over-drag enabled may pull past the menu size, up to
/// the over-drag border; everything else stays within the menu size.
fn offset_limit(style: &MenuStyle, extent: i32, over_drag_active: bool) -> i32 {
    if over_drag_active && style.over_drag {
        (extent - style.over_drag_border_px()).max(0)
    } else {
        style.size()
    }
}

/// Clamps an offset to the legal band for `edge`.
pub fn clamp_offset(
    edge: Edge,
    offset: i32,
    style: &MenuStyle,
    extent: i32,
    over_drag_active: bool,
) -> i32 {
    let limit = offset_limit(style, extent, over_drag_active);
    if edge.sign() > 0 {
        offset.clamp(0, limit)
    } else {
        offset.clamp(-limit, 0)
    }
}

/// Applies one scroll distance to the offset and clamps.
pub fn apply_drag(
    edge: Edge,
    offset: i32,
    distance: f32,
    style: &MenuStyle,
    extent: i32,
    over_drag_active: bool,
) -> i32 {
    clamp_offset(
        edge,
        offset - distance as i32,
        style,
        extent,
        over_drag_active,
    )
}

/// The release-without-fling policy: close below the close edge, open at
/// or past it.
pub fn decide_on_release(offset: i32, style: &MenuStyle) -> ReleaseDecision {
    if offset.abs() < style.close_edge_px() {
        ReleaseDecision::Close
    } else {
        ReleaseDecision::Open
    }
}

/// Classifies a fling velocity along the edge's axis.
///
/// `velocity` is the signed primary-axis velocity in px/s as the platform
/// reports it (rightward/downward positive).
pub fn decide_on_fling(
    edge: Edge,
    velocity: f32,
    offset: i32,
    style: &MenuStyle,
) -> FlingResponse {
    let toward_open = velocity * edge.sign() as f32;
    if toward_open > style.velocity_slop {
        if offset != edge.sign() * style.size() {
            FlingResponse::Open
        } else {
            FlingResponse::AlreadyOpen
        }
    } else if toward_open < -style.velocity_slop {
        if offset * edge.sign() > 0 {
            FlingResponse::Close
        } else {
            FlingResponse::AlreadyClosed
        }
    } else {
        FlingResponse::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Dimension;

    fn style(extent: i32) -> MenuStyle {
        let mut style = MenuStyle::new().with_border(Dimension::Px(0));
        style.resolve(extent);
        style
    }

    #[test]
    fn clamp_keeps_every_edge_inside_its_band() {
        let style = style(400);
        for edge in Edge::ALL {
            for probe in [-1000, -400, -1, 0, 1, 399, 400, 1000] {
                let clamped = clamp_offset(edge, probe, &style, 400, false);
                assert!(clamped.abs() <= style.size(), "{edge:?} at {probe}");
                assert!(clamped * edge.sign() >= 0, "{edge:?} wrong sign");
            }
        }
    }

    #[test]
    fn over_drag_extends_the_band_only_while_dragging() {
        let mut style = MenuStyle::new()
            .with_border(Dimension::Px(100))
            .with_over_drag(true)
            .with_over_drag_border(Dimension::Px(20));
        style.resolve(400);

        // size 300, over-drag limit 380.
        assert_eq!(clamp_offset(Edge::Left, 350, &style, 400, true), 350);
        assert_eq!(clamp_offset(Edge::Left, 500, &style, 400, true), 380);
        assert_eq!(clamp_offset(Edge::Left, 350, &style, 400, false), 300);
        assert_eq!(clamp_offset(Edge::Right, -500, &style, 400, true), -380);
    }

    #[test]
    fn over_drag_disabled_ignores_the_wider_band() {
        let mut style = MenuStyle::new()
            .with_border(Dimension::Px(100))
            .with_over_drag_border(Dimension::Px(20));
        style.resolve(400);

        assert_eq!(clamp_offset(Edge::Left, 500, &style, 400, true), 300);
    }

    #[test]
    fn drag_distance_moves_against_the_scroll_sign() {
        let style = style(400);
        // Pointer moving right reports a negative distance and opens a
        // left menu.
        assert_eq!(apply_drag(Edge::Left, 100, -40.0, &style, 400, false), 140);
        assert_eq!(apply_drag(Edge::Left, 100, 40.0, &style, 400, false), 60);
        assert_eq!(
            apply_drag(Edge::Right, -100, -40.0, &style, 400, false),
            -60
        );
    }

    #[test]
    fn release_policy_uses_the_close_edge() {
        let mut style = MenuStyle::new()
            .with_border(Dimension::Px(0))
            .with_close_edge(Dimension::Px(100));
        style.resolve(400);

        assert_eq!(decide_on_release(80, &style), ReleaseDecision::Close);
        assert_eq!(decide_on_release(100, &style), ReleaseDecision::Open);
        assert_eq!(decide_on_release(-80, &style), ReleaseDecision::Close);
        assert_eq!(decide_on_release(-150, &style), ReleaseDecision::Open);
    }

    #[test]
    fn fling_opens_and_closes_with_the_edge_sign() {
        let style = style(400);

        assert_eq!(
            decide_on_fling(Edge::Left, 600.0, 200, &style),
            FlingResponse::Open
        );
        assert_eq!(
            decide_on_fling(Edge::Left, -600.0, 200, &style),
            FlingResponse::Close
        );
        // Right menus open with leftward (negative) velocity.
        assert_eq!(
            decide_on_fling(Edge::Right, -600.0, -200, &style),
            FlingResponse::Open
        );
        assert_eq!(
            decide_on_fling(Edge::Right, 600.0, -200, &style),
            FlingResponse::Close
        );
    }

    #[test]
    fn fling_at_a_settled_offset_reasserts() {
        let style = style(400);

        assert_eq!(
            decide_on_fling(Edge::Left, 600.0, 400, &style),
            FlingResponse::AlreadyOpen
        );
        assert_eq!(
            decide_on_fling(Edge::Left, -600.0, 0, &style),
            FlingResponse::AlreadyClosed
        );
    }

    #[test]
    fn slow_flings_are_ignored() {
        let style = style(400);
        assert_eq!(
            decide_on_fling(Edge::Left, 499.0, 200, &style),
            FlingResponse::Ignored
        );
        assert_eq!(
            decide_on_fling(Edge::Top, -250.0, 100, &style),
            FlingResponse::Ignored
        );
    }
}
