#![forbid(unsafe_code)]

//! Interning pool for multi-scalar grapheme clusters.
//!
//! Cells store a fixed-size [`GraphemeId`] instead of a string; the pool
//! owns the cluster text. Ids pack a 24-bit slot with the cluster's display
//! width so width queries never touch the pool.

use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Packed reference to a pooled grapheme cluster: slot in the low 24 bits,
/// display width in the high 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphemeId(u32);

impl GraphemeId {
    /// Largest representable slot index.
    pub const MAX_SLOT: u32 = 0x00FF_FFFF;

    /// Create an id from a slot and width.
    #[must_use]
    pub const fn new(slot: u32, width: u8) -> Self {
        Self(((width as u32) << 24) | (slot & Self::MAX_SLOT))
    }

    /// The slot index into the pool.
    #[must_use]
    pub const fn slot(self) -> usize {
        (self.0 & Self::MAX_SLOT) as usize
    }

    /// The cluster's display width in cells.
    #[must_use]
    pub const fn width(self) -> usize {
        (self.0 >> 24) as usize
    }
}

/// Owns interned grapheme cluster strings.
#[derive(Debug, Default)]
pub struct GraphemePool {
    slots: Vec<String>,
    index: HashMap<String, u32>,
}

impl GraphemePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a cluster, returning its id.
    ///
    /// Interning the same cluster twice returns the same id. Returns `None`
    /// when the pool is full (more than [`GraphemeId::MAX_SLOT`] distinct
    /// clusters), in which case callers fall back to the cluster's first
    /// scalar.
    pub fn intern(&mut self, cluster: &str) -> Option<GraphemeId> {
        let width = UnicodeWidthStr::width(cluster).min(u8::MAX as usize) as u8;
        if let Some(&slot) = self.index.get(cluster) {
            return Some(GraphemeId::new(slot, width));
        }
        let slot = u32::try_from(self.slots.len()).ok()?;
        if slot > GraphemeId::MAX_SLOT {
            return None;
        }
        self.slots.push(cluster.to_owned());
        self.index.insert(cluster.to_owned(), slot);
        Some(GraphemeId::new(slot, width))
    }

    /// Look up the cluster text for an id.
    #[must_use]
    pub fn get(&self, id: GraphemeId) -> Option<&str> {
        self.slots.get(id.slot()).map(String::as_str)
    }

    /// Number of distinct interned clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool holds no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
