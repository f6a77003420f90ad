#![forbid(unsafe_code)]

//! Style patches.
//!
//! A [`Style`] is a partial styling instruction: unset fields leave the
//! cell's current value alone, so styles layer. [`Style::merge`] composes
//! two patches with the receiver taking precedence, which is what
//! [`crate::stylesheet::StyleSheet::compose`] builds on.

use weft_render::cell::{PackedRgba, StyleFlags};

/// A partial styling instruction for cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<PackedRgba>,
    /// Background color, if set.
    pub bg: Option<PackedRgba>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags, replacing any previously set.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Add attribute flags to whatever is already set.
    #[must_use]
    pub fn add_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | attrs);
        self
    }

    /// Add the bold flag.
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attrs(StyleFlags::BOLD)
    }

    /// Add the dim flag.
    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attrs(StyleFlags::DIM)
    }

    /// Add the italic flag.
    #[must_use]
    pub fn italic(self) -> Self {
        self.add_attrs(StyleFlags::ITALIC)
    }

    /// Add the underline flag.
    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attrs(StyleFlags::UNDERLINE)
    }

    /// Add the reverse-video flag.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_attrs(StyleFlags::REVERSE)
    }

    /// Add the strikethrough flag.
    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.add_attrs(StyleFlags::STRIKETHROUGH)
    }

    /// Whether this style changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Compose this style over a base style.
    ///
    /// Colors set on `self` win; attribute flags are unioned so emphasis
    /// layers accumulate.
    #[must_use]
    pub fn merge(&self, base: &Style) -> Style {
        let attrs = match (self.attrs, base.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Style {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            attrs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_changes_nothing() {
        assert!(Style::new().is_empty());
        assert!(Style::default().is_empty());
        assert!(!Style::new().bold().is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let style = Style::new()
            .fg(PackedRgba::RED)
            .bg(PackedRgba::BLACK)
            .bold()
            .underline();
        assert_eq!(style.fg, Some(PackedRgba::RED));
        assert_eq!(style.bg, Some(PackedRgba::BLACK));
        assert_eq!(style.attrs, Some(StyleFlags::BOLD | StyleFlags::UNDERLINE));
    }

    #[test]
    fn merge_prefers_receiver_colors() {
        let over = Style::new().fg(PackedRgba::RED);
        let base = Style::new().fg(PackedRgba::GREEN).bg(PackedRgba::BLUE);
        let merged = over.merge(&base);
        assert_eq!(merged.fg, Some(PackedRgba::RED));
        assert_eq!(merged.bg, Some(PackedRgba::BLUE));
    }

    #[test]
    fn merge_unions_attrs() {
        let over = Style::new().bold();
        let base = Style::new().dim();
        let merged = over.merge(&base);
        assert_eq!(merged.attrs, Some(StyleFlags::BOLD | StyleFlags::DIM));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let style = Style::new().fg(PackedRgba::WHITE).italic();
        assert_eq!(style.merge(&Style::new()), style);
        assert_eq!(Style::new().merge(&style), style);
    }

    #[test]
    fn attrs_replaces_but_add_attrs_accumulates() {
        let replaced = Style::new().bold().attrs(StyleFlags::DIM);
        assert_eq!(replaced.attrs, Some(StyleFlags::DIM));

        let added = Style::new().bold().add_attrs(StyleFlags::DIM);
        assert_eq!(added.attrs, Some(StyleFlags::BOLD | StyleFlags::DIM));
    }
}
