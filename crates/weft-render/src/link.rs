#![forbid(unsafe_code)]

//! Hyperlink URL interning.
//!
//! Cells carry a 24-bit link id in their attributes (0 = no link); the
//! registry owns the URL strings. The ANSI serializer emits OSC 8 sequences
//! around linked runs.

use crate::cell::CellAttrs;
use std::collections::HashMap;

/// Interns hyperlink URLs to the compact ids cells can carry.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    urls: Vec<String>,
    index: HashMap<String, u32>,
}

impl LinkRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a URL, returning its id (1-based; 0 means "no link").
    ///
    /// Registering the same URL twice returns the same id. Returns
    /// [`CellAttrs::LINK_ID_NONE`] when the registry is full.
    pub fn register(&mut self, url: &str) -> u32 {
        if let Some(&id) = self.index.get(url) {
            return id;
        }
        let id = self.urls.len() as u32 + 1;
        if id > CellAttrs::LINK_ID_MAX {
            return CellAttrs::LINK_ID_NONE;
        }
        self.urls.push(url.to_owned());
        self.index.insert(url.to_owned(), id);
        id
    }

    /// Look up the URL for an id.
    #[must_use]
    pub fn url(&self, id: u32) -> Option<&str> {
        if id == CellAttrs::LINK_ID_NONE {
            return None;
        }
        self.urls.get(id as usize - 1).map(String::as_str)
    }

    /// Number of registered URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether no URLs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Remove all URLs.
    pub fn clear(&mut self) {
        self.urls.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_returns_one_based_ids() {
        let mut links = LinkRegistry::new();
        let a = links.register("https://example.com/a");
        let b = links.register("https://example.com/b");
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn register_is_idempotent() {
        let mut links = LinkRegistry::new();
        let a = links.register("https://example.com");
        let b = links.register("https://example.com");
        assert_eq!(a, b);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn url_lookup() {
        let mut links = LinkRegistry::new();
        let id = links.register("https://example.com");
        assert_eq!(links.url(id), Some("https://example.com"));
        assert_eq!(links.url(0), None);
        assert_eq!(links.url(99), None);
    }

    #[test]
    fn clear_resets() {
        let mut links = LinkRegistry::new();
        links.register("https://example.com");
        links.clear();
        assert!(links.is_empty());
        assert_eq!(links.register("https://other.com"), 1);
    }
}
