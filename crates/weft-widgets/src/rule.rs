#![forbid(unsafe_code)]

//! Horizontal rule widget.
//!
//! A single-row separator line with an optional centered title.

use crate::{Widget, display_width, draw_text_span};
use weft_core::geometry::Rect;
use weft_render::cell::Cell;
use weft_render::frame::Frame;
use weft_style::Style;

/// A horizontal separator line.
#[derive(Debug, Clone, Copy)]
pub struct Rule<'a> {
    glyph: char,
    title: Option<&'a str>,
    style: Style,
    title_style: Style,
}

impl<'a> Rule<'a> {
    /// Create a rule drawn with `─`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            glyph: '─',
            title: None,
            style: Style::default(),
            title_style: Style::default(),
        }
    }

    /// Set the line glyph.
    #[must_use]
    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Set a title rendered centered in the line.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the line style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the title style.
    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }
}

impl Default for Rule<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Rule<'_> {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        if area.is_empty() {
            return;
        }

        let y = area.y;
        for x in area.x..area.right() {
            let mut cell = Cell::from_char(self.glyph);
            crate::apply_style(&mut cell, self.style);
            frame.buffer.set(x, y, cell);
        }

        if let Some(title) = self.title {
            let width = display_width(title) as u16;
            if width > 0 && width + 2 <= area.width {
                let start = area.x + (area.width - width) / 2;
                draw_text_span(frame, start, y, title, self.title_style, area.right());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_render::grapheme_pool::GraphemePool;

    #[test]
    fn fills_row_with_glyph() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(5, 1, &mut pool);
        Rule::new().render(Rect::new(0, 0, 5, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0, frame.pool), "─────");
    }

    #[test]
    fn custom_glyph() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        Rule::new().glyph('=').render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0, frame.pool), "====");
    }

    #[test]
    fn title_is_centered() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(8, 1, &mut pool);
        Rule::new().title("ab").render(Rect::new(0, 0, 8, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0, frame.pool), "───ab───");
    }

    #[test]
    fn oversized_title_is_dropped() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        Rule::new()
            .title("too long")
            .render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0, frame.pool), "────");
    }

    #[test]
    fn empty_area_is_noop() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        Rule::new().render(Rect::new(0, 0, 0, 0), &mut frame);
        assert_eq!(frame.buffer.row_text(0, frame.pool), "    ");
    }
}
