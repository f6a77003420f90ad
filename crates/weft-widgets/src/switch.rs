#![forbid(unsafe_code)]

//! Switch widget.
//!
//! A boolean toggle rendered as a two-position track. Enter, Space, and a
//! left-click on its area flip the state.

use crate::{StatefulWidget, draw_text_span};
use weft_core::event::{Event, KeyCode, MouseButton, MouseEventKind};
use weft_core::geometry::Rect;
use weft_render::frame::Frame;
use weft_style::Style;

/// A boolean toggle control.
#[derive(Debug, Clone, Copy)]
pub struct Switch<'a> {
    label: Option<&'a str>,
    on_style: Style,
    off_style: Style,
    label_style: Style,
}

impl<'a> Switch<'a> {
    /// Create a switch with no label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: None,
            on_style: Style::new().bold(),
            off_style: Style::new().dim(),
            label_style: Style::default(),
        }
    }

    /// Set a label rendered after the track.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the style used while on.
    #[must_use]
    pub fn on_style(mut self, style: Style) -> Self {
        self.on_style = style;
        self
    }

    /// Set the style used while off.
    #[must_use]
    pub fn off_style(mut self, style: Style) -> Self {
        self.off_style = style;
        self
    }

    /// Set the label style.
    #[must_use]
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }
}

impl Default for Switch<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable state for a [`Switch`].
#[derive(Debug, Clone, Default)]
pub struct SwitchState {
    on: bool,
    area: Rect,
}

impl SwitchState {
    /// Create a switch state in the off position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch state in the on position.
    #[must_use]
    pub fn on() -> Self {
        Self {
            on: true,
            area: Rect::default(),
        }
    }

    /// Whether the switch is currently on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip the state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    /// Handle a terminal event.
    ///
    /// Returns `true` if the state changed. Key events assume the host
    /// routes them here only while the switch is focused.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.is_press() => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.toggle();
                    true
                }
                _ => false,
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Up(MouseButton::Left)
                    && self.area.contains(mouse.x, mouse.y)
                {
                    self.toggle();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

impl StatefulWidget for Switch<'_> {
    type State = SwitchState;

    fn render(&self, area: Rect, frame: &mut Frame<'_>, state: &mut Self::State) {
        if area.is_empty() {
            state.area = Rect::default();
            return;
        }

        let (track, style) = if state.on {
            ("[ ●]", self.on_style)
        } else {
            ("[● ]", self.off_style)
        };
        let mut x = draw_text_span(frame, area.x, area.y, track, style, area.right());
        state.area = Rect::new(area.x, area.y, x.saturating_sub(area.x), 1);

        if let Some(label) = self.label {
            x += 1;
            if x < area.right() {
                draw_text_span(frame, x, area.y, label, self.label_style, area.right());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_render::grapheme_pool::GraphemePool;

    fn render(switch: &Switch<'_>, state: &mut SwitchState) -> String {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(14, 1, &mut pool);
        switch.render(Rect::new(0, 0, 14, 1), &mut frame, state);
        frame.buffer.row_text(0, frame.pool).trim_end().to_owned()
    }

    #[test]
    fn starts_off_and_toggles() {
        let mut state = SwitchState::new();
        assert!(!state.is_on());
        assert!(state.toggle());
        assert!(!state.toggle());
    }

    #[test]
    fn renders_both_positions() {
        let switch = Switch::new();
        let mut state = SwitchState::new();
        assert_eq!(render(&switch, &mut state), "[● ]");
        state.toggle();
        assert_eq!(render(&switch, &mut state), "[ ●]");
    }

    #[test]
    fn renders_label() {
        let switch = Switch::new().label("dark mode");
        let mut state = SwitchState::new();
        assert_eq!(render(&switch, &mut state), "[● ] dark mode");
    }

    #[test]
    fn enter_and_space_toggle() {
        let mut state = SwitchState::new();
        assert!(state.handle_event(&Event::key(KeyCode::Enter)));
        assert!(state.is_on());
        assert!(state.handle_event(&Event::key(KeyCode::Char(' '))));
        assert!(!state.is_on());
        assert!(!state.handle_event(&Event::key(KeyCode::Esc)));
    }

    #[test]
    fn click_inside_track_toggles() {
        let switch = Switch::new();
        let mut state = SwitchState::new();
        render(&switch, &mut state);

        let click = Event::mouse(MouseEventKind::Up(MouseButton::Left), 1, 0);
        assert!(state.handle_event(&click));
        assert!(state.is_on());

        let miss = Event::mouse(MouseEventKind::Up(MouseButton::Left), 9, 0);
        assert!(!state.handle_event(&miss));
        assert!(state.is_on());
    }
}
