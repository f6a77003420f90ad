#![forbid(unsafe_code)]

//! Progress bar widget.
//!
//! A determinate single-row bar with an optional percent label.

use crate::{Widget, apply_style, display_width, draw_text_span};
use weft_core::geometry::Rect;
use weft_render::cell::Cell;
use weft_render::frame::Frame;
use weft_style::Style;

/// A determinate progress bar.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    ratio: f64,
    filled_glyph: char,
    empty_glyph: char,
    show_percent: bool,
    style: Style,
    label_style: Style,
}

impl Progress {
    /// Create a bar at the given completion ratio, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) },
            filled_glyph: '█',
            empty_glyph: '░',
            show_percent: false,
            style: Style::default(),
            label_style: Style::default(),
        }
    }

    /// The clamped completion ratio.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Set the fill and track glyphs.
    #[must_use]
    pub fn glyphs(mut self, filled: char, empty: char) -> Self {
        self.filled_glyph = filled;
        self.empty_glyph = empty;
        self
    }

    /// Append a percent label after the bar.
    #[must_use]
    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Set the bar style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the percent label style.
    #[must_use]
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    fn percent_label(&self) -> String {
        format!("{:>3.0}%", self.ratio * 100.0)
    }
}

impl Widget for Progress {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        if area.is_empty() {
            return;
        }

        let y = area.y;
        let label = self.show_percent.then(|| self.percent_label());
        let label_width = label
            .as_deref()
            .map(|l| display_width(l) as u16 + 1)
            .unwrap_or(0);
        let bar_width = area.width.saturating_sub(label_width);
        if bar_width == 0 {
            return;
        }

        let filled = (f64::from(bar_width) * self.ratio).round() as u16;
        for i in 0..bar_width {
            let glyph = if i < filled {
                self.filled_glyph
            } else {
                self.empty_glyph
            };
            let mut cell = Cell::from_char(glyph);
            apply_style(&mut cell, self.style);
            frame.buffer.set(area.x + i, y, cell);
        }

        if let Some(label) = label {
            draw_text_span(
                frame,
                area.x + bar_width + 1,
                y,
                &label,
                self.label_style,
                area.right(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_render::grapheme_pool::GraphemePool;

    fn row(frame: &Frame<'_>) -> String {
        frame.buffer.row_text(0, frame.pool)
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(Progress::new(-0.5).ratio(), 0.0);
        assert_eq!(Progress::new(1.5).ratio(), 1.0);
        assert_eq!(Progress::new(f64::NAN).ratio(), 0.0);
        assert_eq!(Progress::new(0.25).ratio(), 0.25);
    }

    #[test]
    fn renders_half_filled_bar() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        Progress::new(0.5).render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(row(&frame), "█████░░░░░");
    }

    #[test]
    fn empty_and_full_bars() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        Progress::new(0.0).render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(row(&frame), "░░░░");

        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        Progress::new(1.0).render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(row(&frame), "████");
    }

    #[test]
    fn percent_label_rides_along() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(12, 1, &mut pool);
        Progress::new(0.5)
            .show_percent(true)
            .render(Rect::new(0, 0, 12, 1), &mut frame);
        let text = row(&frame);
        assert!(text.ends_with(" 50%"), "got: {text}");
    }

    #[test]
    fn custom_glyphs() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        Progress::new(0.5)
            .glyphs('#', '-')
            .render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(row(&frame), "##--");
    }

    #[test]
    fn empty_area_is_noop() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        Progress::new(0.5).render(Rect::new(0, 0, 0, 0), &mut frame);
        assert_eq!(row(&frame), "    ");
    }
}
