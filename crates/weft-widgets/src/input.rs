#![forbid(unsafe_code)]

//! Text input widget.
//!
//! A single-line text input with cursor management, horizontal scrolling,
//! placeholder, and password masking. Grapheme-cluster aware so cursor
//! movement never splits a cluster.

use crate::{StatefulWidget, display_width, draw_text_span, set_style_area};
use unicode_segmentation::UnicodeSegmentation;
use weft_core::event::{Event, KeyCode, KeyEvent};
use weft_core::geometry::Rect;
use weft_render::frame::Frame;
use weft_style::Style;

/// A single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    scroll_cells: usize,
    placeholder: String,
    mask_char: Option<char>,
    max_length: Option<usize>,
    style: Style,
    cursor_style: Style,
    placeholder_style: Style,
    focused: bool,
}

impl TextInput {
    /// Create a new empty text input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set password mode with mask character (builder).
    #[must_use]
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask_char = Some(mask);
        self
    }

    /// Set maximum length in graphemes (builder).
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set base style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set cursor style (builder).
    #[must_use]
    pub fn with_cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    /// Set placeholder style (builder).
    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set whether the input is focused (controls cursor rendering).
    #[must_use]
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Get the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value, clamping the cursor to the valid range.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.grapheme_count());
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.scroll_cells = 0;
    }

    /// Get the cursor position (grapheme index).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a terminal event.
    ///
    /// Returns `true` if the state changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event
            && key.is_press()
        {
            return self.handle_key(key);
        }
        false
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.ctrl() => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_char_back();
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.grapheme_count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.scroll_cells = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.grapheme_count();
                true
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        if let Some(max) = self.max_length
            && self.grapheme_count() >= max
        {
            return;
        }
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        self.cursor += 1;
    }

    fn delete_char_back(&mut self) {
        if self.cursor > 0 {
            let byte_start = self.grapheme_byte_offset(self.cursor - 1);
            let byte_end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(byte_start..byte_end);
            self.cursor -= 1;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.grapheme_count() {
            let byte_start = self.grapheme_byte_offset(self.cursor);
            let byte_end = self.grapheme_byte_offset(self.cursor + 1);
            self.value.drain(byte_start..byte_end);
        }
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index` (value length past the end).
    fn grapheme_byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    /// The value with masking applied for display.
    fn display_value(&self) -> String {
        match self.mask_char {
            Some(mask) => self.value.graphemes(true).map(|_| mask).collect(),
            None => self.value.clone(),
        }
    }

    /// Visual cell offset of the cursor within the display value.
    fn cursor_visual_pos(&self) -> usize {
        let display = self.display_value();
        display
            .graphemes(true)
            .take(self.cursor)
            .map(display_width)
            .sum()
    }

    fn effective_scroll(&self, width: usize) -> usize {
        if width == 0 {
            return self.scroll_cells;
        }
        let cursor = self.cursor_visual_pos();
        let mut scroll = self.scroll_cells.min(cursor);
        if cursor >= scroll + width {
            scroll = cursor + 1 - width;
        }
        scroll
    }
}

/// The input widget is its own state: render takes `&mut TextInput`.
///
/// A zero-sized wrapper keeps the builder (`TextInput`) and the stateful
/// widget contract aligned with the rest of the kit.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInputView;

impl StatefulWidget for TextInputView {
    type State = TextInput;

    fn render(&self, area: Rect, frame: &mut Frame<'_>, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        let y = area.y;
        let width = area.width as usize;

        if state.value.is_empty() {
            draw_text_span(
                frame,
                area.x,
                y,
                &state.placeholder,
                state.placeholder_style,
                area.right(),
            );
        } else {
            let display = state.display_value();
            let scroll = state.effective_scroll(width);
            state.scroll_cells = scroll;

            let mut x = area.x;
            let mut skipped = 0usize;
            for grapheme in display.graphemes(true) {
                let w = display_width(grapheme);
                if skipped + w <= scroll {
                    skipped += w;
                    continue;
                }
                if x >= area.right() {
                    break;
                }
                x = draw_text_span(frame, x, y, grapheme, state.style, area.right());
            }
        }

        if state.focused {
            let cursor_x = area.x as usize + state.cursor_visual_pos()
                - state.effective_scroll(width);
            let cursor_x = (cursor_x as u16).min(area.right().saturating_sub(1));
            frame.set_cursor(cursor_x, y);
            set_style_area(
                &mut frame.buffer,
                Rect::new(cursor_x, y, 1, 1),
                state.cursor_style,
            );
        }
    }
}
