#![forbid(unsafe_code)]

//! Cell representation: content, colors, and attributes.
//!
//! A [`Cell`] is one terminal cell. Content is either a single `char`, a
//! reference into the [`crate::grapheme_pool::GraphemePool`] for multi-scalar
//! clusters, or a continuation marker occupying the trailing columns of a
//! wide glyph.

use crate::grapheme_pool::GraphemeId;
use bitflags::bitflags;

/// Content of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Nothing drawn here yet.
    #[default]
    Empty,
    /// A single Unicode scalar.
    Char(char),
    /// A pooled grapheme cluster (more than one scalar).
    Grapheme(GraphemeId),
    /// Trailing column of a wide glyph to the left.
    Continuation,
}

impl CellContent {
    /// The character, if this content is a plain char.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Check whether nothing has been drawn here.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check whether this is a wide-glyph continuation.
    #[must_use]
    pub const fn is_continuation(self) -> bool {
        matches!(self, Self::Continuation)
    }
}

/// Packed 32-bit RGBA color, 8 bits per channel.
///
/// Alpha 0 means "terminal default" rather than transparency blending;
/// the serializer emits no color code for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// The terminal's default color.
    pub const DEFAULT: Self = Self(0);

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Red component.
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green component.
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue component.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha component.
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether this is the terminal-default sentinel.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.a() == 0
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

/// Packed cell attributes: style flags in the low byte, a hyperlink id in
/// the upper 24 bits (0 = no link).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellAttrs(u32);

impl CellAttrs {
    /// No flags, no link.
    pub const NONE: Self = Self(0);

    /// "No hyperlink" sentinel.
    pub const LINK_ID_NONE: u32 = 0;

    /// Largest representable hyperlink id.
    pub const LINK_ID_MAX: u32 = 0x00FF_FFFF;

    /// Create attributes from flags and a link id.
    ///
    /// Link ids above [`Self::LINK_ID_MAX`] are treated as no-link.
    #[must_use]
    pub fn new(flags: StyleFlags, link_id: u32) -> Self {
        let link = if link_id > Self::LINK_ID_MAX {
            Self::LINK_ID_NONE
        } else {
            link_id
        };
        Self((link << 8) | flags.bits() as u32)
    }

    /// The style flags.
    #[must_use]
    pub fn flags(self) -> StyleFlags {
        StyleFlags::from_bits_truncate(self.0 as u8)
    }

    /// The hyperlink id (0 = none).
    #[must_use]
    pub const fn link_id(self) -> u32 {
        self.0 >> 8
    }

    /// Replace the style flags, keeping the link id.
    #[must_use]
    pub fn with_flags(self, flags: StyleFlags) -> Self {
        Self::new(flags, self.link_id())
    }

    /// Replace the link id, keeping the style flags.
    #[must_use]
    pub fn with_link(self, link_id: u32) -> Self {
        Self::new(self.flags(), link_id)
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// What is drawn in the cell.
    pub content: CellContent,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Style flags and hyperlink id.
    pub attrs: CellAttrs,
}

impl Cell {
    /// The continuation cell behind a wide glyph.
    pub const CONTINUATION: Self = Self {
        content: CellContent::Continuation,
        fg: PackedRgba::DEFAULT,
        bg: PackedRgba::DEFAULT,
        attrs: CellAttrs::NONE,
    };

    /// Create a cell holding a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            fg: PackedRgba::DEFAULT,
            bg: PackedRgba::DEFAULT,
            attrs: CellAttrs::NONE,
        }
    }

    /// Create a cell holding a pooled grapheme.
    #[must_use]
    pub const fn from_grapheme(id: GraphemeId) -> Self {
        Self {
            content: CellContent::Grapheme(id),
            fg: PackedRgba::DEFAULT,
            bg: PackedRgba::DEFAULT,
            attrs: CellAttrs::NONE,
        }
    }

    /// Check whether nothing has been drawn here.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check whether this is a wide-glyph continuation.
    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    /// Display width of the content (continuations and empties are 0).
    #[must_use]
    pub fn width(&self) -> usize {
        match self.content {
            CellContent::Empty | CellContent::Continuation => 0,
            CellContent::Char(c) => unicode_width::UnicodeWidthChar::width(c).unwrap_or(0),
            CellContent::Grapheme(id) => id.width(),
        }
    }

    /// Builder: set content to a character.
    #[must_use]
    pub const fn with_char(mut self, c: char) -> Self {
        self.content = CellContent::Char(c);
        self
    }

    /// Builder: set foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: set background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    /// Builder: set attributes.
    #[must_use]
    pub const fn with_attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_rgba_roundtrip() {
        let c = PackedRgba::rgba(10, 20, 30, 40);
        assert_eq!(c.r(), 10);
        assert_eq!(c.g(), 20);
        assert_eq!(c.b(), 30);
        assert_eq!(c.a(), 40);
    }

    #[test]
    fn default_color_is_sentinel() {
        assert!(PackedRgba::DEFAULT.is_default());
        assert!(!PackedRgba::rgb(0, 0, 0).is_default());
    }

    #[test]
    fn attrs_pack_flags_and_link() {
        let attrs = CellAttrs::new(StyleFlags::BOLD | StyleFlags::UNDERLINE, 42);
        assert_eq!(attrs.flags(), StyleFlags::BOLD | StyleFlags::UNDERLINE);
        assert_eq!(attrs.link_id(), 42);
    }

    #[test]
    fn attrs_with_link_keeps_flags() {
        let attrs = CellAttrs::new(StyleFlags::DIM, 0).with_link(7);
        assert_eq!(attrs.flags(), StyleFlags::DIM);
        assert_eq!(attrs.link_id(), 7);
    }

    #[test]
    fn attrs_oversized_link_is_dropped() {
        let attrs = CellAttrs::new(StyleFlags::empty(), CellAttrs::LINK_ID_MAX + 1);
        assert_eq!(attrs.link_id(), CellAttrs::LINK_ID_NONE);
    }

    #[test]
    fn cell_from_char() {
        let cell = Cell::from_char('x');
        assert_eq!(cell.content.as_char(), Some('x'));
        assert!(!cell.is_empty());
        assert_eq!(cell.width(), 1);
    }

    #[test]
    fn wide_char_width() {
        let cell = Cell::from_char('漢');
        assert_eq!(cell.width(), 2);
    }

    #[test]
    fn continuation_has_zero_width() {
        assert!(Cell::CONTINUATION.is_continuation());
        assert_eq!(Cell::CONTINUATION.width(), 0);
    }

    #[test]
    fn default_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.width(), 0);
        assert_eq!(cell.content.as_char(), None);
    }
}
