#![forbid(unsafe_code)]

//! Core widgets for weft.

pub mod avatar;
pub mod badge;
pub mod block;
pub mod breadcrumb;
pub mod button;
pub mod input;
pub mod popup;
pub mod progress;
pub mod rule;
pub mod spinner;
pub mod switch;
pub mod toast;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use weft_core::geometry::Rect;
use weft_render::buffer::Buffer;
use weft_render::cell::Cell;
use weft_render::frame::Frame;
use weft_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Frame`] within a given [`Rect`].
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame<'_>);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame<'_>, state: &mut Self::State);
}

/// Display width of a string in cells.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Apply a style patch to a cell, leaving unset fields alone.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = cell.attrs.with_flags(cell.attrs.flags() | attrs);
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Attach a hyperlink id to all cells in a rectangular area.
pub(crate) fn set_link_area(buf: &mut Buffer, area: Rect, link_id: u32) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.attrs = cell.attrs.with_link(link_id);
            }
        }
    }
}

/// Draw a text span into a frame at the given position.
///
/// Grapheme-cluster aware: multi-scalar clusters are interned in the
/// frame's pool. Returns the x position after the last drawn cluster.
/// Stops at `max_x` (exclusive); a cluster that would cross `max_x` is
/// not drawn.
pub(crate) fn draw_text_span(
    frame: &mut Frame<'_>,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }

        let mut chars = grapheme.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => continue,
        };
        let mut cell = if chars.next().is_none() {
            Cell::from_char(first)
        } else {
            match frame.pool.intern(grapheme) {
                Some(id) => Cell::from_grapheme(id),
                None => Cell::from_char(first),
            }
        };
        apply_style(&mut cell, style);
        frame.buffer.set(x, y, cell);
        x = x.saturating_add(w as u16);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_render::cell::PackedRgba;
    use weft_render::grapheme_pool::GraphemePool;

    #[test]
    fn apply_style_sets_fg_and_preserves_content() {
        let mut cell = Cell::from_char('Z');
        apply_style(&mut cell, Style::new().fg(PackedRgba::rgb(1, 2, 3)));
        assert_eq!(cell.fg, PackedRgba::rgb(1, 2, 3));
        assert_eq!(cell.content.as_char(), Some('Z'));
    }

    #[test]
    fn apply_style_empty_is_noop() {
        let original = Cell::from_char('a');
        let mut cell = original;
        apply_style(&mut cell, Style::default());
        assert_eq!(cell, original);
    }

    #[test]
    fn set_style_area_applies_to_all_cells() {
        let mut buf = Buffer::new(3, 2);
        set_style_area(
            &mut buf,
            Rect::new(0, 0, 3, 2),
            Style::new().bg(PackedRgba::rgb(10, 20, 30)),
        );
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buf.get(x, y).unwrap().bg, PackedRgba::rgb(10, 20, 30));
            }
        }
    }

    #[test]
    fn set_link_area_tags_cells() {
        let mut buf = Buffer::new(3, 1);
        buf.set(0, 0, Cell::from_char('a'));
        set_link_area(&mut buf, Rect::new(0, 0, 2, 1), 5);
        assert_eq!(buf.get(0, 0).unwrap().attrs.link_id(), 5);
        assert_eq!(buf.get(1, 0).unwrap().attrs.link_id(), 5);
        assert_eq!(buf.get(2, 0).unwrap().attrs.link_id(), 0);
    }

    #[test]
    fn draw_text_span_basic() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        let end_x = draw_text_span(&mut frame, 0, 0, "ABC", Style::default(), 10);

        assert_eq!(end_x, 3);
        assert_eq!(frame.buffer.get(0, 0).unwrap().content.as_char(), Some('A'));
        assert_eq!(frame.buffer.get(2, 0).unwrap().content.as_char(), Some('C'));
    }

    #[test]
    fn draw_text_span_clipped_at_max_x() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        let end_x = draw_text_span(&mut frame, 0, 0, "ABCDEF", Style::default(), 3);

        assert_eq!(end_x, 3);
        assert!(frame.buffer.get(3, 0).unwrap().is_empty());
    }

    #[test]
    fn draw_text_span_wide_glyph_takes_two_cells() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        let end_x = draw_text_span(&mut frame, 0, 0, "漢a", Style::default(), 10);

        assert_eq!(end_x, 3);
        assert!(frame.buffer.get(1, 0).unwrap().is_continuation());
        assert_eq!(frame.buffer.get(2, 0).unwrap().content.as_char(), Some('a'));
    }

    #[test]
    fn draw_text_span_pools_multi_scalar_clusters() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        draw_text_span(&mut frame, 0, 0, "e\u{301}x", Style::default(), 10);

        let cell = *frame.buffer.get(0, 0).unwrap();
        assert!(matches!(
            cell.content,
            weft_render::cell::CellContent::Grapheme(_)
        ));
        assert_eq!(frame.buffer.get(1, 0).unwrap().content.as_char(), Some('x'));
        drop(frame);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn draw_text_span_wide_cluster_does_not_cross_max_x() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        let end_x = draw_text_span(&mut frame, 0, 0, "a漢", Style::default(), 2);
        // The wide glyph needs cells 1..3 but max_x is 2
        assert_eq!(end_x, 1);
        assert!(frame.buffer.get(1, 0).unwrap().is_empty());
    }
}
