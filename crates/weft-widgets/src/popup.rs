#![forbid(unsafe_code)]

//! Anchored popup placement.
//!
//! Pure geometry: given a trigger rectangle, a desired panel size, and the
//! frame bounds, compute where an anchored panel lands. Dismissal policy
//! belongs to whoever owns the open/closed state, not to placement.

use weft_core::geometry::Rect;

/// Place a panel of `width` x `height` directly below `anchor`, clamped to
/// stay inside `bounds`.
///
/// The panel's left edge starts at the anchor's left edge and shifts left
/// when it would overflow the right edge of `bounds`. Width and height are
/// clipped to what fits; the result can be empty when `bounds` has no room
/// below the anchor.
#[must_use]
pub fn anchored_below(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let y = anchor.bottom();
    if y >= bounds.bottom() {
        return Rect::default();
    }

    let width = width.min(bounds.width);
    let max_x = bounds.right().saturating_sub(width);
    let x = anchor.x.min(max_x).max(bounds.x);

    let available = bounds.bottom() - y;
    let height = height.min(available);

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_sits_below_anchor() {
        let bounds = Rect::new(0, 0, 40, 12);
        let anchor = Rect::new(10, 2, 3, 1);
        let panel = anchored_below(anchor, 12, 5, bounds);
        assert_eq!(panel, Rect::new(10, 3, 12, 5));
    }

    #[test]
    fn panel_shifts_left_at_right_edge() {
        let bounds = Rect::new(0, 0, 20, 10);
        let anchor = Rect::new(15, 0, 3, 1);
        let panel = anchored_below(anchor, 10, 4, bounds);
        assert_eq!(panel.right(), 20);
        assert_eq!(panel.y, 1);
    }

    #[test]
    fn panel_height_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 20, 5);
        let anchor = Rect::new(0, 2, 3, 1);
        let panel = anchored_below(anchor, 8, 10, bounds);
        assert_eq!(panel.height, 2);
    }

    #[test]
    fn no_room_below_yields_empty() {
        let bounds = Rect::new(0, 0, 20, 3);
        let anchor = Rect::new(0, 2, 3, 1);
        let panel = anchored_below(anchor, 8, 4, bounds);
        assert!(panel.is_empty());
    }

    #[test]
    fn panel_wider_than_bounds_is_clipped() {
        let bounds = Rect::new(0, 0, 10, 10);
        let anchor = Rect::new(2, 0, 3, 1);
        let panel = anchored_below(anchor, 50, 3, bounds);
        assert_eq!(panel.width, 10);
        assert_eq!(panel.x, 0);
    }
}
