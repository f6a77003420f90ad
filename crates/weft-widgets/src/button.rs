#![forbid(unsafe_code)]

//! Button widget.
//!
//! A padded label with variant and size enums mapping to theme styles,
//! plus focused/disabled visual states. Activation is the host's business;
//! the button registers a hit region so pointer events can find it.

use crate::{Widget, apply_style, display_width, draw_text_span};
use weft_core::geometry::Rect;
use weft_render::cell::{Cell, PackedRgba, StyleFlags};
use weft_render::frame::Frame;
use weft_render::hit::HitId;
use weft_style::Style;
use weft_style::theme::ResolvedTheme;

/// Visual flavor of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    /// The theme style for this variant.
    #[must_use]
    pub fn style(self, theme: &ResolvedTheme) -> Style {
        match self {
            Self::Primary => Style::new().fg(PackedRgba::WHITE).bg(theme.accent).bold(),
            Self::Secondary => Style::new().fg(PackedRgba::WHITE).bg(theme.accent_alt),
            Self::Ghost => Style::new().fg(theme.text),
            Self::Destructive => Style::new().fg(PackedRgba::WHITE).bg(theme.error).bold(),
        }
    }
}

/// Horizontal padding steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    const fn padding(self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

/// A clickable label.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    style: Style,
    focused: bool,
    disabled: bool,
    hit_id: HitId,
}

impl<'a> Button<'a> {
    /// Create a button with the default variant and size.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            style: Style::default(),
            focused: false,
            disabled: false,
            hit_id: HitId(0),
        }
    }

    /// Set the variant.
    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set an explicit style, overriding any theme variant style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Pull the style for the configured variant from a theme.
    #[must_use]
    pub fn with_theme(self, theme: &ResolvedTheme) -> Self {
        let style = self.variant.style(theme);
        self.style(style)
    }

    /// Set the focused visual state (underlines the label).
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the disabled visual state (dims the button).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the id used for hit grid registration.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = id;
        self
    }

    /// Display width including padding.
    #[must_use]
    pub fn width(&self) -> u16 {
        (display_width(self.label) as u16).saturating_add(self.size.padding() * 2)
    }

    fn effective_style(&self) -> Style {
        let mut style = self.style;
        if self.disabled {
            style = style.add_attrs(StyleFlags::DIM);
        } else if self.focused {
            style = style.add_attrs(StyleFlags::UNDERLINE);
        }
        style
    }
}

impl Widget for Button<'_> {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        if area.is_empty() {
            return;
        }

        let style = self.effective_style();
        let y = area.y;
        let max_x = area.right();
        let pad = self.size.padding();
        let mut x = area.x;

        let mut space = Cell::from_char(' ');
        apply_style(&mut space, style);
        for _ in 0..pad {
            if x >= max_x {
                break;
            }
            frame.buffer.set(x, y, space);
            x += 1;
        }
        x = draw_text_span(frame, x, y, self.label, style, max_x);
        for _ in 0..pad {
            if x >= max_x {
                break;
            }
            frame.buffer.set(x, y, space);
            x += 1;
        }

        if !self.disabled {
            let rect = Rect::new(area.x, y, x.saturating_sub(area.x), 1);
            frame.register_hit(rect, self.hit_id, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_render::grapheme_pool::GraphemePool;
    use weft_style::theme::Theme;

    #[test]
    fn width_scales_with_size() {
        assert_eq!(Button::new("OK").size(ButtonSize::Small).width(), 4);
        assert_eq!(Button::new("OK").width(), 6);
        assert_eq!(Button::new("OK").size(ButtonSize::Large).width(), 8);
    }

    #[test]
    fn renders_padded_label() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        Button::new("Go").render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0, frame.pool), "  Go      ");
    }

    #[test]
    fn variant_maps_to_theme_roles() {
        let theme = Theme::default().resolve(true);
        assert_eq!(ButtonVariant::Primary.style(&theme).bg, Some(theme.accent));
        assert_eq!(
            ButtonVariant::Destructive.style(&theme).bg,
            Some(theme.error)
        );
        assert_eq!(ButtonVariant::Ghost.style(&theme).bg, None);
    }

    #[test]
    fn focused_underlines() {
        let style = Button::new("x").focused(true).effective_style();
        assert!(style.attrs.unwrap().contains(StyleFlags::UNDERLINE));
    }

    #[test]
    fn disabled_dims_and_suppresses_hit_region() {
        let style = Button::new("x").disabled(true).effective_style();
        assert!(style.attrs.unwrap().contains(StyleFlags::DIM));

        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        Button::new("x").disabled(true).render(Rect::new(0, 0, 10, 1), &mut frame);
        assert!(frame.hits.is_empty());
    }

    #[test]
    fn enabled_button_registers_hit_region() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(10, 1, &mut pool);
        Button::new("Go").hit_id(HitId(3)).render(Rect::new(0, 0, 10, 1), &mut frame);

        let hit = frame.hits.hit_test(2, 0).unwrap();
        assert_eq!(hit.id, HitId(3));
    }

    #[test]
    fn disabled_wins_over_focused() {
        let style = Button::new("x")
            .focused(true)
            .disabled(true)
            .effective_style();
        let attrs = style.attrs.unwrap();
        assert!(attrs.contains(StyleFlags::DIM));
        assert!(!attrs.contains(StyleFlags::UNDERLINE));
    }
}
