#![forbid(unsafe_code)]

//! A render pass target: buffer plus interaction surfaces.

use crate::buffer::Buffer;
use crate::cell::CellAttrs;
use crate::grapheme_pool::GraphemePool;
use crate::hit::{HitGrid, HitId};
use crate::link::LinkRegistry;
use weft_core::geometry::Rect;

/// Everything widgets draw into during one render pass.
///
/// The buffer holds the cells; the grapheme pool backs multi-scalar
/// clusters; the optional link registry interns hyperlink URLs; the hit
/// grid collects the interactive regions widgets painted this pass.
#[derive(Debug)]
pub struct Frame<'a> {
    /// The cell grid.
    pub buffer: Buffer,

    /// Cluster interning pool, shared across frames.
    pub pool: &'a mut GraphemePool,

    /// Hyperlink registry, when the host supports links.
    pub links: Option<&'a mut LinkRegistry>,

    /// Interactive regions painted this pass.
    pub hits: HitGrid,

    /// Where the terminal cursor should be parked after presenting.
    pub cursor_position: Option<(u16, u16)>,

    /// Whether the cursor should be visible after presenting.
    pub cursor_visible: bool,
}

impl<'a> Frame<'a> {
    /// Create a frame with an empty buffer of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16, pool: &'a mut GraphemePool) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            pool,
            links: None,
            hits: HitGrid::new(),
            cursor_position: None,
            cursor_visible: false,
        }
    }

    /// Create a frame that can intern hyperlinks.
    #[must_use]
    pub fn with_links(
        width: u16,
        height: u16,
        pool: &'a mut GraphemePool,
        links: &'a mut LinkRegistry,
    ) -> Self {
        let mut frame = Self::new(width, height, pool);
        frame.links = Some(links);
        frame
    }

    /// The frame's full area.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Intern a hyperlink URL.
    ///
    /// Returns [`CellAttrs::LINK_ID_NONE`] when the host supplied no
    /// registry, so callers can attach the result unconditionally.
    pub fn register_link(&mut self, url: &str) -> u32 {
        match self.links.as_deref_mut() {
            Some(links) => links.register(url),
            None => CellAttrs::LINK_ID_NONE,
        }
    }

    /// Register an interactive region painted this pass.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, data: u64) {
        self.hits.register(rect, id, data);
    }

    /// Park the cursor at a position and make it visible.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor_position = Some((x, y));
        self.cursor_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn new_frame_is_empty() {
        let mut pool = GraphemePool::new();
        let frame = Frame::new(4, 2, &mut pool);
        assert_eq!(frame.area(), Rect::new(0, 0, 4, 2));
        assert!(frame.buffer.cells().iter().all(Cell::is_empty));
        assert!(frame.hits.is_empty());
        assert!(frame.cursor_position.is_none());
    }

    #[test]
    fn register_link_without_registry_is_none() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        assert_eq!(frame.register_link("https://example.com"), CellAttrs::LINK_ID_NONE);
    }

    #[test]
    fn register_link_with_registry() {
        let mut pool = GraphemePool::new();
        let mut links = LinkRegistry::new();
        let mut frame = Frame::with_links(4, 1, &mut pool, &mut links);
        let id = frame.register_link("https://example.com");
        assert_eq!(id, 1);
        drop(frame);
        assert_eq!(links.url(1), Some("https://example.com"));
    }

    #[test]
    fn set_cursor_shows_cursor() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(4, 1, &mut pool);
        frame.set_cursor(2, 0);
        assert_eq!(frame.cursor_position, Some((2, 0)));
        assert!(frame.cursor_visible);
    }
}
