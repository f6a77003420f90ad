#![forbid(unsafe_code)]

//! StyleSheet registry for named styles.
//!
//! Named styles compose the way utility classes do in the original design
//! systems this kit borrows from: `compose(&["muted", "accent"])` layers
//! the named patches left to right, later names taking precedence.

use crate::style::Style;
use std::collections::HashMap;
use std::sync::RwLock;

/// Identifier for a named style in a StyleSheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleId(pub String);

impl StyleId {
    /// Create a style id.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A registry of named styles.
///
/// Interior mutability lets a sheet be shared read-mostly across widgets
/// while themes re-define entries.
#[derive(Debug, Default)]
pub struct StyleSheet {
    styles: RwLock<HashMap<String, Style>>,
}

impl StyleSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or replace a named style.
    pub fn define(&self, name: impl Into<String>, style: Style) {
        if let Ok(mut styles) = self.styles.write() {
            styles.insert(name.into(), style);
        }
    }

    /// Remove a named style, returning it if present.
    pub fn remove(&self, name: &str) -> Option<Style> {
        self.styles.write().ok()?.remove(name)
    }

    /// Look up a named style.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Style> {
        self.styles.read().ok()?.get(name).copied()
    }

    /// Look up a named style, empty if absent.
    #[must_use]
    pub fn get_or_default(&self, name: &str) -> Style {
        self.get(name).unwrap_or_default()
    }

    /// Whether a name is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.styles.read().map(|s| s.contains_key(name)).unwrap_or(false)
    }

    /// Number of defined styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Whether no styles are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compose named styles left to right; later names take precedence.
    ///
    /// Unknown names are skipped, so conditional composition can pass
    /// optimistic name lists the way class-name helpers do.
    #[must_use]
    pub fn compose(&self, names: &[&str]) -> Style {
        let mut result = Style::new();
        for name in names {
            if let Some(style) = self.get(name) {
                result = style.merge(&result);
            }
        }
        result
    }

    /// Compose named styles, failing on the first unknown name.
    #[must_use]
    pub fn compose_strict(&self, names: &[&str]) -> Option<Style> {
        let mut result = Style::new();
        for name in names {
            result = self.get(name)?.merge(&result);
        }
        Some(result)
    }

    /// Remove all definitions.
    pub fn clear(&self) {
        if let Ok(mut styles) = self.styles.write() {
            styles.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_render::cell::PackedRgba;

    #[test]
    fn define_and_get() {
        let sheet = StyleSheet::new();
        sheet.define("error", Style::new().fg(PackedRgba::RED).bold());
        assert!(sheet.contains("error"));
        assert_eq!(sheet.get("error").unwrap().fg, Some(PackedRgba::RED));
        assert!(sheet.get("missing").is_none());
    }

    #[test]
    fn get_or_default_on_missing() {
        let sheet = StyleSheet::new();
        assert!(sheet.get_or_default("missing").is_empty());
    }

    #[test]
    fn compose_later_wins() {
        let sheet = StyleSheet::new();
        sheet.define("base", Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK));
        sheet.define("accent", Style::new().fg(PackedRgba::BLUE));

        let composed = sheet.compose(&["base", "accent"]);
        assert_eq!(composed.fg, Some(PackedRgba::BLUE));
        assert_eq!(composed.bg, Some(PackedRgba::BLACK));
    }

    #[test]
    fn compose_skips_unknown_names() {
        let sheet = StyleSheet::new();
        sheet.define("base", Style::new().fg(PackedRgba::WHITE));
        let composed = sheet.compose(&["base", "nope"]);
        assert_eq!(composed.fg, Some(PackedRgba::WHITE));
    }

    #[test]
    fn compose_strict_fails_on_unknown() {
        let sheet = StyleSheet::new();
        sheet.define("base", Style::new().fg(PackedRgba::WHITE));
        assert!(sheet.compose_strict(&["base", "nope"]).is_none());
        assert!(sheet.compose_strict(&["base"]).is_some());
    }

    #[test]
    fn redefine_replaces() {
        let sheet = StyleSheet::new();
        sheet.define("x", Style::new().fg(PackedRgba::RED));
        sheet.define("x", Style::new().fg(PackedRgba::GREEN));
        assert_eq!(sheet.get("x").unwrap().fg, Some(PackedRgba::GREEN));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let sheet = StyleSheet::new();
        sheet.define("x", Style::new().bold());
        assert!(sheet.remove("x").is_some());
        assert!(sheet.remove("x").is_none());

        sheet.define("y", Style::new().dim());
        sheet.clear();
        assert!(sheet.is_empty());
    }

    #[test]
    fn style_id_wraps_name() {
        let id = StyleId::new("accent");
        assert_eq!(id.as_str(), "accent");
    }
}
