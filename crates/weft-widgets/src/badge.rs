#![forbid(unsafe_code)]

//! Badge widget.
//!
//! A small, single-line label with background + foreground styling and
//! configurable left/right padding. Severity variants map to theme roles
//! for "status", "priority", and tag-like uses.

use crate::{Widget, apply_style, display_width, draw_text_span};
use weft_core::geometry::Rect;
use weft_render::cell::Cell;
use weft_render::frame::Frame;
use weft_style::Style;
use weft_style::theme::ResolvedTheme;

/// Semantic flavor of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    /// The theme style for this variant: role color on the overlay surface.
    #[must_use]
    pub fn style(self, theme: &ResolvedTheme) -> Style {
        let fg = match self {
            Self::Neutral => theme.text_muted,
            Self::Info => theme.info,
            Self::Success => theme.success,
            Self::Warning => theme.warning,
            Self::Error => theme.error,
        };
        Style::new().fg(fg).bg(theme.overlay)
    }
}

/// A compact label with padding and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge<'a> {
    label: &'a str,
    style: Style,
    pad_left: u16,
    pad_right: u16,
}

impl<'a> Badge<'a> {
    /// Create a new badge with 1 cell padding on each side.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
            pad_left: 1,
            pad_right: 1,
        }
    }

    /// Set the badge style (foreground/background/attrs).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style the badge from a theme variant.
    #[must_use]
    pub fn with_variant(self, variant: BadgeVariant, theme: &ResolvedTheme) -> Self {
        self.with_style(variant.style(theme))
    }

    /// Set the left/right padding in cells.
    #[must_use]
    pub fn with_padding(mut self, left: u16, right: u16) -> Self {
        self.pad_left = left;
        self.pad_right = right;
        self
    }

    /// Display width in cells (label width + padding).
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        let label_width = display_width(self.label) as u16;
        label_width
            .saturating_add(self.pad_left)
            .saturating_add(self.pad_right)
    }

    #[inline]
    fn render_spaces(
        frame: &mut Frame<'_>,
        mut x: u16,
        y: u16,
        n: u16,
        style: Style,
        max_x: u16,
    ) -> u16 {
        let mut cell = Cell::from_char(' ');
        apply_style(&mut cell, style);
        for _ in 0..n {
            if x >= max_x {
                break;
            }
            frame.buffer.set(x, y, cell);
            x = x.saturating_add(1);
        }
        x
    }
}

impl Widget for Badge<'_> {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        if area.is_empty() {
            return;
        }

        let y = area.y;
        let max_x = area.right();
        let mut x = area.x;

        x = Self::render_spaces(frame, x, y, self.pad_left, self.style, max_x);
        x = draw_text_span(frame, x, y, self.label, self.style, max_x);
        let _ = Self::render_spaces(frame, x, y, self.pad_right, self.style, max_x);
    }
}
