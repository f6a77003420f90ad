#![forbid(unsafe_code)]

//! Avatar widget.
//!
//! An initials chip derived from a display name, rendered as a bracketed
//! two-letter token. Shape picks the bracket glyphs.

use crate::{Widget, draw_text_span};
use weft_core::geometry::Rect;
use weft_render::frame::Frame;
use weft_style::Style;

/// Bracket shape around the initials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarShape {
    /// Round brackets: `(AB)`.
    #[default]
    Circle,
    /// Square brackets: `[AB]`.
    Square,
}

impl AvatarShape {
    const fn brackets(self) -> (char, char) {
        match self {
            Self::Circle => ('(', ')'),
            Self::Square => ('[', ']'),
        }
    }
}

/// An initials chip for a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar<'a> {
    name: &'a str,
    shape: AvatarShape,
    style: Style,
}

impl<'a> Avatar<'a> {
    /// Create an avatar for a display name.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            shape: AvatarShape::default(),
            style: Style::default(),
        }
    }

    /// Set the bracket shape.
    #[must_use]
    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the chip style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The derived initials: uppercased first letters of the first two
    /// words, or the first letter alone for single-word names. Empty names
    /// yield `?`.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut letters = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect::<String>();
        if letters.is_empty() {
            letters.push('?');
        }
        letters
    }

    /// Display width of the rendered chip.
    #[must_use]
    pub fn width(&self) -> u16 {
        crate::display_width(&self.initials()) as u16 + 2
    }
}

impl Widget for Avatar<'_> {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        if area.is_empty() {
            return;
        }

        let (open, close) = self.shape.brackets();
        let text = format!("{open}{}{close}", self.initials());
        draw_text_span(frame, area.x, area.y, &text, self.style, area.right());
    }
}
