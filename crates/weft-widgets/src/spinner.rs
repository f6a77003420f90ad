#![forbid(unsafe_code)]

//! Spinner widget.

use crate::{StatefulWidget, Widget, draw_text_span};
use weft_core::geometry::Rect;
use weft_render::frame::Frame;
use weft_style::Style;

/// Braille dot spinner animation frames.
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// ASCII line spinner animation frames.
pub const LINE: &[&str] = &["|", "/", "-", "\\"];

/// A widget to display a spinner.
#[derive(Debug, Clone)]
pub struct Spinner<'a> {
    frames: &'a [&'a str],
    label: Option<&'a str>,
    style: Style,
}

impl<'a> Spinner<'a> {
    /// Create a new spinner with default dot frames.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: DOTS,
            label: None,
            style: Style::default(),
        }
    }

    /// Set the animation frame characters.
    #[must_use]
    pub fn frames(mut self, frames: &'a [&'a str]) -> Self {
        self.frames = frames;
        self
    }

    /// Set a text label displayed next to the spinner.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the base style for the spinner.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Spinner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable state for a [`Spinner`] widget.
#[derive(Debug, Clone, Default)]
pub struct SpinnerState {
    /// Index of the currently displayed animation frame.
    pub current_frame: usize,
}

impl SpinnerState {
    /// Advance to the next animation frame.
    pub fn tick(&mut self) {
        self.current_frame = self.current_frame.wrapping_add(1);
    }
}

impl StatefulWidget for Spinner<'_> {
    type State = SpinnerState;

    fn render(&self, area: Rect, frame: &mut Frame<'_>, state: &mut Self::State) {
        if area.is_empty() || self.frames.is_empty() {
            return;
        }

        let glyph = self.frames[state.current_frame % self.frames.len()];
        let mut x = draw_text_span(frame, area.x, area.y, glyph, self.style, area.right());

        if let Some(label) = self.label {
            x += 1;
            if x < area.right() {
                draw_text_span(frame, x, area.y, label, self.style, area.right());
            }
        }
    }
}

impl Widget for Spinner<'_> {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        let mut state = SpinnerState::default();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_render::grapheme_pool::GraphemePool;

    fn cell_char(frame: &Frame<'_>, x: u16, y: u16) -> Option<char> {
        frame.buffer.get(x, y).and_then(|c| c.content.as_char())
    }

    #[test]
    fn state_tick_increments_and_wraps() {
        let mut state = SpinnerState::default();
        state.tick();
        assert_eq!(state.current_frame, 1);

        let mut state = SpinnerState {
            current_frame: usize::MAX,
        };
        state.tick();
        assert_eq!(state.current_frame, 0);
    }

    #[test]
    fn stateless_render_uses_frame_zero() {
        let frames: &[&str] = &["A", "B", "C"];
        let spinner = Spinner::new().frames(frames);
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(5, 1, &mut pool);
        Widget::render(&spinner, Rect::new(0, 0, 5, 1), &mut frame);
        assert_eq!(cell_char(&frame, 0, 0), Some('A'));
    }

    #[test]
    fn stateful_render_cycles_frames() {
        let frames: &[&str] = &["X", "Y", "Z"];
        let spinner = Spinner::new().frames(frames);
        let area = Rect::new(0, 0, 5, 1);

        for (i, expected) in ['X', 'Y', 'Z', 'X'].into_iter().enumerate() {
            let mut pool = GraphemePool::new();
            let mut frame = Frame::new(5, 1, &mut pool);
            let mut state = SpinnerState { current_frame: i };
            StatefulWidget::render(&spinner, area, &mut frame, &mut state);
            assert_eq!(cell_char(&frame, 0, 0), Some(expected));
        }
    }

    #[test]
    fn render_with_label() {
        let frames: &[&str] = &["*"];
        let spinner = Spinner::new().frames(frames).label("Go");
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        Widget::render(&spinner, Rect::new(0, 0, 10, 1), &mut frame);

        assert_eq!(cell_char(&frame, 0, 0), Some('*'));
        assert_eq!(cell_char(&frame, 2, 0), Some('G'));
        assert_eq!(cell_char(&frame, 3, 0), Some('o'));
    }

    #[test]
    fn large_frame_index_wraps() {
        let frames: &[&str] = &["A", "B"];
        let spinner = Spinner::new().frames(frames);
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(5, 1, &mut pool);
        let mut state = SpinnerState {
            current_frame: 1000,
        };
        StatefulWidget::render(&spinner, Rect::new(0, 0, 5, 1), &mut frame, &mut state);
        assert_eq!(cell_char(&frame, 0, 0), Some('A'));
    }

    #[test]
    fn empty_frames_is_noop() {
        let spinner = Spinner::new().frames(&[]);
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(5, 1, &mut pool);
        Widget::render(&spinner, Rect::new(0, 0, 5, 1), &mut frame);
        assert_eq!(cell_char(&frame, 0, 0), None);
    }

    #[test]
    fn dots_and_line_frame_sets() {
        assert_eq!(DOTS.len(), 10);
        assert_eq!(LINE.len(), 4);
    }
}
