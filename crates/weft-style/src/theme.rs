#![forbid(unsafe_code)]

//! Adaptive role-based themes.
//!
//! A [`Theme`] maps semantic roles (text, muted text, accent, borders,
//! severity colors) to [`AdaptiveColor`]s carrying a light and a dark
//! variant. [`Theme::resolve`] picks one side and yields a [`ResolvedTheme`]
//! of concrete colors plus ready-made [`Style`]s for the common roles.

use crate::style::Style;
use weft_render::cell::PackedRgba;

/// A color with light-background and dark-background variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveColor {
    /// Used on light backgrounds.
    pub light: PackedRgba,
    /// Used on dark backgrounds.
    pub dark: PackedRgba,
}

impl AdaptiveColor {
    /// Create an adaptive color from both variants.
    #[must_use]
    pub const fn new(light: PackedRgba, dark: PackedRgba) -> Self {
        Self { light, dark }
    }

    /// Pick the variant for the given mode.
    #[must_use]
    pub const fn resolve(self, is_dark: bool) -> PackedRgba {
        if is_dark { self.dark } else { self.light }
    }
}

impl From<PackedRgba> for AdaptiveColor {
    /// A color used as-is in both modes.
    fn from(color: PackedRgba) -> Self {
        Self::new(color, color)
    }
}

/// Semantic color roles for the kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: AdaptiveColor,
    pub text_muted: AdaptiveColor,
    pub accent: AdaptiveColor,
    pub accent_alt: AdaptiveColor,
    pub surface: AdaptiveColor,
    pub overlay: AdaptiveColor,
    pub border: AdaptiveColor,
    pub success: AdaptiveColor,
    pub warning: AdaptiveColor,
    pub error: AdaptiveColor,
    pub info: AdaptiveColor,
    pub selection_bg: AdaptiveColor,
    pub selection_fg: AdaptiveColor,
}

impl Theme {
    /// Start building a theme from the default palette.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Resolve every role for the given mode.
    #[must_use]
    pub fn resolve(&self, is_dark: bool) -> ResolvedTheme {
        ResolvedTheme {
            text: self.text.resolve(is_dark),
            text_muted: self.text_muted.resolve(is_dark),
            accent: self.accent.resolve(is_dark),
            accent_alt: self.accent_alt.resolve(is_dark),
            surface: self.surface.resolve(is_dark),
            overlay: self.overlay.resolve(is_dark),
            border: self.border.resolve(is_dark),
            success: self.success.resolve(is_dark),
            warning: self.warning.resolve(is_dark),
            error: self.error.resolve(is_dark),
            info: self.info.resolve(is_dark),
            selection_bg: self.selection_bg.resolve(is_dark),
            selection_fg: self.selection_fg.resolve(is_dark),
        }
    }

    /// A grayscale theme for monochrome contexts.
    #[must_use]
    pub fn monochrome() -> Self {
        let fg = AdaptiveColor::new(PackedRgba::rgb(20, 20, 20), PackedRgba::rgb(230, 230, 230));
        let mid = AdaptiveColor::new(PackedRgba::rgb(110, 110, 110), PackedRgba::rgb(140, 140, 140));
        Self {
            text: fg,
            text_muted: mid,
            accent: fg,
            accent_alt: mid,
            surface: AdaptiveColor::new(PackedRgba::rgb(245, 245, 245), PackedRgba::rgb(24, 24, 24)),
            overlay: AdaptiveColor::new(PackedRgba::rgb(235, 235, 235), PackedRgba::rgb(32, 32, 32)),
            border: mid,
            success: fg,
            warning: fg,
            error: fg,
            info: mid,
            selection_bg: mid,
            selection_fg: AdaptiveColor::new(PackedRgba::WHITE, PackedRgba::BLACK),
        }
    }
}

impl Default for Theme {
    /// The kit's stock palette: ocean-blue accent, plum alternate accent,
    /// neutral grays.
    fn default() -> Self {
        Self {
            text: AdaptiveColor::new(PackedRgba::rgb(31, 41, 55), PackedRgba::rgb(209, 213, 219)),
            text_muted: AdaptiveColor::new(
                PackedRgba::rgb(156, 163, 175),
                PackedRgba::rgb(107, 114, 128),
            ),
            accent: AdaptiveColor::new(PackedRgba::rgb(0, 160, 255), PackedRgba::rgb(44, 181, 255)),
            accent_alt: AdaptiveColor::new(
                PackedRgba::rgb(156, 39, 176),
                PackedRgba::rgb(186, 104, 200),
            ),
            surface: AdaptiveColor::new(PackedRgba::rgb(249, 250, 251), PackedRgba::rgb(17, 24, 39)),
            overlay: AdaptiveColor::new(PackedRgba::rgb(243, 244, 246), PackedRgba::rgb(31, 41, 55)),
            border: AdaptiveColor::new(PackedRgba::rgb(209, 213, 219), PackedRgba::rgb(75, 85, 99)),
            success: AdaptiveColor::new(PackedRgba::rgb(22, 163, 74), PackedRgba::rgb(74, 222, 128)),
            warning: AdaptiveColor::new(PackedRgba::rgb(217, 119, 6), PackedRgba::rgb(251, 191, 36)),
            error: AdaptiveColor::new(PackedRgba::rgb(220, 38, 38), PackedRgba::rgb(248, 113, 113)),
            info: AdaptiveColor::new(PackedRgba::rgb(2, 132, 199), PackedRgba::rgb(56, 189, 248)),
            selection_bg: AdaptiveColor::new(
                PackedRgba::rgb(182, 226, 255),
                PackedRgba::rgb(0, 82, 141),
            ),
            selection_fg: AdaptiveColor::new(PackedRgba::rgb(4, 43, 77), PackedRgba::rgb(222, 240, 255)),
        }
    }
}

/// A theme with every role resolved to a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub text: PackedRgba,
    pub text_muted: PackedRgba,
    pub accent: PackedRgba,
    pub accent_alt: PackedRgba,
    pub surface: PackedRgba,
    pub overlay: PackedRgba,
    pub border: PackedRgba,
    pub success: PackedRgba,
    pub warning: PackedRgba,
    pub error: PackedRgba,
    pub info: PackedRgba,
    pub selection_bg: PackedRgba,
    pub selection_fg: PackedRgba,
}

impl ResolvedTheme {
    /// Style for primary text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    /// Style for secondary/muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.text_muted)
    }

    /// Style for accented/emphasized text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent).bold()
    }

    /// Style for borders and separators.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }

    /// Style for overlay surfaces (popups, panels).
    #[must_use]
    pub fn overlay_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.overlay)
    }

    /// Style for selected rows.
    #[must_use]
    pub fn selection_style(&self) -> Style {
        Style::new().fg(self.selection_fg).bg(self.selection_bg)
    }
}

/// Builder for [`Theme`], starting from the default palette.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Start from the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Start from an existing theme.
    #[must_use]
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Set the primary text color.
    #[must_use]
    pub fn text(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.text = color.into();
        self
    }

    /// Set the muted text color.
    #[must_use]
    pub fn text_muted(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.text_muted = color.into();
        self
    }

    /// Set the accent color.
    #[must_use]
    pub fn accent(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.accent = color.into();
        self
    }

    /// Set the alternate accent color.
    #[must_use]
    pub fn accent_alt(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.accent_alt = color.into();
        self
    }

    /// Set the surface color.
    #[must_use]
    pub fn surface(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.surface = color.into();
        self
    }

    /// Set the overlay color.
    #[must_use]
    pub fn overlay(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.overlay = color.into();
        self
    }

    /// Set the border color.
    #[must_use]
    pub fn border(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.border = color.into();
        self
    }

    /// Set the success color.
    #[must_use]
    pub fn success(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.success = color.into();
        self
    }

    /// Set the warning color.
    #[must_use]
    pub fn warning(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.warning = color.into();
        self
    }

    /// Set the error color.
    #[must_use]
    pub fn error(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.error = color.into();
        self
    }

    /// Set the info color.
    #[must_use]
    pub fn info(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.info = color.into();
        self
    }

    /// Set the selection background color.
    #[must_use]
    pub fn selection_bg(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.selection_bg = color.into();
        self
    }

    /// Set the selection foreground color.
    #[must_use]
    pub fn selection_fg(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.selection_fg = color.into();
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
