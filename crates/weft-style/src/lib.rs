#![forbid(unsafe_code)]

//! Styling for weft: style patches, named-style composition, and adaptive
//! role-based themes.

pub mod style;
pub mod stylesheet;
pub mod theme;

pub use style::Style;
pub use stylesheet::{StyleId, StyleSheet};
pub use theme::{AdaptiveColor, ResolvedTheme, Theme, ThemeBuilder};
