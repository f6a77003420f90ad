#![forbid(unsafe_code)]

//! Rectangle-based hit testing.
//!
//! Widgets register the screen regions they drew, tagged with an owner id
//! and an owner-defined payload. Hosts resolve pointer events back to the
//! widget that painted the topmost region under the pointer. Regions
//! registered later win, matching paint order.

use smallvec::SmallVec;
use weft_core::geometry::Rect;

/// Identifies the widget instance that registered a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

/// One registered hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    /// The rectangle the widget painted.
    pub rect: Rect,
    /// Owner widget id.
    pub id: HitId,
    /// Owner-defined payload (widgets encode their own target enums here).
    pub data: u64,
}

/// A per-frame list of hit regions.
///
/// Cleared at the start of each frame; queried between frames.
#[derive(Debug, Default)]
pub struct HitGrid {
    regions: SmallVec<[HitRegion; 8]>,
}

impl HitGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. Empty rectangles are ignored.
    pub fn register(&mut self, rect: Rect, id: HitId, data: u64) {
        if rect.is_empty() {
            return;
        }
        self.regions.push(HitRegion { rect, id, data });
    }

    /// The topmost (most recently registered) region containing a point.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitRegion> {
        self.regions.iter().rev().find(|r| r.rect.contains(x, y))
    }

    /// All regions registered by a widget, in registration order.
    pub fn regions_of(&self, id: HitId) -> impl Iterator<Item = &HitRegion> {
        self.regions.iter().filter(move |r| r.id == id)
    }

    /// All registered regions, in registration order.
    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Remove all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_finds_containing_region() {
        let mut grid = HitGrid::new();
        grid.register(Rect::new(0, 0, 5, 1), HitId(1), 10);
        grid.register(Rect::new(10, 0, 5, 1), HitId(2), 20);

        assert_eq!(grid.hit_test(2, 0).unwrap().id, HitId(1));
        assert_eq!(grid.hit_test(12, 0).unwrap().data, 20);
        assert!(grid.hit_test(7, 0).is_none());
    }

    #[test]
    fn later_registration_wins_on_overlap() {
        let mut grid = HitGrid::new();
        grid.register(Rect::new(0, 0, 10, 2), HitId(1), 1);
        grid.register(Rect::new(3, 0, 4, 1), HitId(2), 2);

        assert_eq!(grid.hit_test(4, 0).unwrap().id, HitId(2));
        assert_eq!(grid.hit_test(4, 1).unwrap().id, HitId(1));
    }

    #[test]
    fn empty_rect_is_not_registered() {
        let mut grid = HitGrid::new();
        grid.register(Rect::new(3, 3, 0, 0), HitId(1), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn regions_of_filters_by_owner() {
        let mut grid = HitGrid::new();
        grid.register(Rect::new(0, 0, 1, 1), HitId(1), 0);
        grid.register(Rect::new(1, 0, 1, 1), HitId(2), 0);
        grid.register(Rect::new(2, 0, 1, 1), HitId(1), 0);
        assert_eq!(grid.regions_of(HitId(1)).count(), 2);
    }

    #[test]
    fn clear_empties_grid() {
        let mut grid = HitGrid::new();
        grid.register(Rect::new(0, 0, 1, 1), HitId(1), 0);
        grid.clear();
        assert!(grid.hit_test(0, 0).is_none());
        assert_eq!(grid.len(), 0);
    }
}
