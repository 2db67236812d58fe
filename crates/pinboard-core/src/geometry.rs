//! Coordinate adjustment and scroll-relative projection.

use kurbo::{Point, Size, Vec2};

/// Minimum distance kept between a popup and every viewport edge.
pub const EDGE_MARGIN: f64 = 10.0;

/// Clamp an anchor point so an element of the given size stays fully inside
/// the viewport with [`EDGE_MARGIN`] on every side.
///
/// The far-edge rule is applied before the near-edge rule on each axis, so an
/// element too large to fit ends up pinned at the margin rather than pushed
/// off the near edge.
pub fn clamp_to_viewport(anchor: Point, element: Size, viewport: Size) -> Point {
    let mut x = anchor.x;
    let mut y = anchor.y;

    if x + element.width > viewport.width - EDGE_MARGIN {
        x = viewport.width - element.width - EDGE_MARGIN;
    }
    if x < EDGE_MARGIN {
        x = EDGE_MARGIN;
    }

    if y + element.height > viewport.height - EDGE_MARGIN {
        y = viewport.height - element.height - EDGE_MARGIN;
    }
    if y < EDGE_MARGIN {
        y = EDGE_MARGIN;
    }

    Point::new(x, y)
}

/// Document-space position for a click captured in viewport space, given the
/// scroll offset at capture time.
pub fn document_position(click: Point, scroll: Vec2) -> Point {
    click - scroll
}

/// Viewport-space position for a stored document-space position, given the
/// current scroll offset. Recomputed on every frame so markers track
/// scrolling without the stored coordinates ever changing.
pub fn viewport_position(stored: Point, scroll: Vec2) -> Point {
    stored - scroll
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    #[test]
    fn test_fitting_anchor_unchanged() {
        let anchor = Point::new(300.0, 400.0);
        let adjusted = clamp_to_viewport(anchor, Size::new(200.0, 150.0), VIEWPORT);
        assert_eq!(adjusted, anchor);
    }

    #[test]
    fn test_right_edge_overflow() {
        let adjusted = clamp_to_viewport(Point::new(900.0, 100.0), Size::new(200.0, 150.0), VIEWPORT);
        assert_eq!(adjusted, Point::new(814.0, 100.0));
    }

    #[test]
    fn test_negative_anchor() {
        let adjusted = clamp_to_viewport(Point::new(-50.0, 100.0), Size::new(200.0, 150.0), VIEWPORT);
        assert_eq!(adjusted, Point::new(10.0, 100.0));
    }

    #[test]
    fn test_bottom_edge_overflow() {
        let adjusted = clamp_to_viewport(Point::new(100.0, 700.0), Size::new(200.0, 150.0), VIEWPORT);
        assert_eq!(adjusted, Point::new(100.0, 608.0));
    }

    #[test]
    fn test_oversized_element_pinned_at_margin() {
        // Wider than the viewport minus both margins: margin wins over
        // right-alignment.
        let adjusted = clamp_to_viewport(Point::new(500.0, 100.0), Size::new(1100.0, 150.0), VIEWPORT);
        assert_eq!(adjusted.x, EDGE_MARGIN);
        assert_eq!(adjusted.y, 100.0);
    }

    #[test]
    fn test_both_axes_overflow() {
        let adjusted = clamp_to_viewport(Point::new(1000.0, 750.0), Size::new(200.0, 150.0), VIEWPORT);
        assert_eq!(adjusted, Point::new(814.0, 608.0));
    }

    #[test]
    fn test_document_position_subtracts_scroll() {
        let stored = document_position(Point::new(480.0, 320.0), Vec2::new(30.0, 120.0));
        assert_eq!(stored, Point::new(450.0, 200.0));
    }

    #[test]
    fn test_marker_projection_tracks_scroll() {
        let stored = Point::new(100.0, 200.0);

        let shown = viewport_position(stored, Vec2::new(50.0, 75.0));
        assert_eq!(shown, Point::new(50.0, 125.0));

        // Scroll changes; the same stored position projects elsewhere.
        let shown = viewport_position(stored, Vec2::new(25.0, 30.0));
        assert_eq!(shown, Point::new(75.0, 170.0));
    }

    #[test]
    fn test_projection_is_pure() {
        let stored = Point::new(100.0, 200.0);
        let scroll = Vec2::new(50.0, 75.0);
        assert_eq!(
            viewport_position(stored, scroll),
            viewport_position(stored, scroll)
        );
    }
}
