#![forbid(unsafe_code)]

//! Bordered container widget.
//!
//! Wraps an area with a border and optional title; content renders into
//! [`Block::inner`]. The dropdown panel and modal-like surfaces build on it.

use crate::{Widget, draw_text_span};
use weft_core::geometry::{Rect, Sides};
use weft_render::cell::Cell;
use weft_render::frame::Frame;
use weft_style::Style;

/// The glyph set used for a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Unicode light box drawing.
    #[default]
    Light,
    /// Unicode rounded corners.
    Rounded,
    /// ASCII-safe fallback.
    Ascii,
}

struct BorderGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BorderType {
    const fn glyphs(self) -> BorderGlyphs {
        match self {
            Self::Light => BorderGlyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            Self::Rounded => BorderGlyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            Self::Ascii => BorderGlyphs {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            },
        }
    }
}

/// A bordered container with an optional title.
#[derive(Debug, Clone, Copy, Default)]
pub struct Block<'a> {
    title: Option<&'a str>,
    border_type: BorderType,
    border_style: Style,
    title_style: Style,
    padding: Sides,
}

impl<'a> Block<'a> {
    /// Create a bordered block.
    #[must_use]
    pub fn bordered() -> Self {
        Self::default()
    }

    /// Set a title rendered on the top border.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the border glyph set.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the border style.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the title style.
    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Set inner padding between border and content.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// The content area inside the border and padding.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        area.inner(Sides::all(1)).inner(self.padding)
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let g = self.border_type.glyphs();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        let put = |frame: &mut Frame<'_>, x: u16, y: u16, c: char| {
            let mut cell = Cell::from_char(c);
            crate::apply_style(&mut cell, self.border_style);
            frame.buffer.set(x, y, cell);
        };

        for x in area.x + 1..right {
            put(frame, x, area.y, g.horizontal);
            put(frame, x, bottom, g.horizontal);
        }
        for y in area.y + 1..bottom {
            put(frame, area.x, y, g.vertical);
            put(frame, right, y, g.vertical);
        }
        put(frame, area.x, area.y, g.top_left);
        put(frame, right, area.y, g.top_right);
        put(frame, area.x, bottom, g.bottom_left);
        put(frame, right, bottom, g.bottom_right);

        if let Some(title) = self.title
            && area.width > 4
        {
            draw_text_span(frame, area.x + 2, area.y, title, self.title_style, right - 1);
        }
    }
}
