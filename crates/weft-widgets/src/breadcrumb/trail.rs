#![forbid(unsafe_code)]

//! Item decoration rules for the trail renderer.
//!
//! Every visible item gets an [`ItemPosition`] describing where it sits;
//! the separator and emphasis rules are pure functions of that position so
//! both disclosure strategies and the flat fallback share one rule set.

/// Which run of the trail an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Leading visible run.
    Before,
    /// The foldable middle run.
    Collapsed,
    /// Trailing visible run.
    After,
    /// The un-collapsed flat list.
    All,
}

/// Where an item sits in the rendered trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPosition {
    /// The run the item belongs to.
    pub segment: Segment,
    /// First item of its run.
    pub first_of_segment: bool,
    /// Last item of its run.
    pub last_of_segment: bool,
    /// Last item of the full original sequence.
    pub globally_last: bool,
    /// Rendered inside a vertically stacked folded region (dropdown panel),
    /// where items are rows rather than an inline run.
    pub stacked: bool,
}

impl ItemPosition {
    /// Position of an item in a run.
    #[must_use]
    pub const fn new(segment: Segment, first_of_segment: bool, globally_last: bool) -> Self {
        Self {
            segment,
            first_of_segment,
            last_of_segment: false,
            globally_last,
            stacked: false,
        }
    }

    /// Mark the item as the last of its run.
    #[must_use]
    pub const fn last_of_segment(mut self, last: bool) -> Self {
        self.last_of_segment = last;
        self
    }

    /// Mark the item as part of a stacked folded region.
    #[must_use]
    pub const fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }
}

/// Whether a separator is drawn before the item.
///
/// Only the item immediately following the fold gets one: it bridges the
/// folded region and the remaining visible run.
#[must_use]
pub const fn separator_before(pos: &ItemPosition) -> bool {
    matches!(pos.segment, Segment::After) && pos.first_of_segment
}

/// Whether a separator is drawn after the item.
///
/// Suppressed for the item marking the user's current location, for rows
/// of a stacked folded region (not inline), and for the last item of an
/// inline folded run, whose boundary separator is supplied by the item
/// following the fold.
#[must_use]
pub const fn separator_after(pos: &ItemPosition) -> bool {
    if pos.globally_last || pos.stacked {
        return false;
    }
    !(matches!(pos.segment, Segment::Collapsed) && pos.last_of_segment)
}

/// Whether the item gets accent emphasis rather than the muted run style.
///
/// The entry point of the trail, the current location, and, when
/// configured, the whole trailing run are accented.
#[must_use]
pub const fn is_accented(pos: &ItemPosition, accent_after: bool) -> bool {
    if pos.globally_last {
        return true;
    }
    match pos.segment {
        Segment::Before | Segment::All => pos.first_of_segment,
        Segment::After => accent_after,
        Segment::Collapsed => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_first_item_bridges_both_sides() {
        let pos = ItemPosition::new(Segment::After, true, false);
        assert!(separator_before(&pos));
        assert!(separator_after(&pos));
    }

    #[test]
    fn after_first_item_that_is_terminal_keeps_only_leading() {
        let pos = ItemPosition::new(Segment::After, true, true);
        assert!(separator_before(&pos));
        assert!(!separator_after(&pos));
    }

    #[test]
    fn terminal_item_has_no_trailing_separator() {
        let pos = ItemPosition::new(Segment::All, false, true);
        assert!(!separator_after(&pos));
        assert!(!separator_before(&pos));
    }

    #[test]
    fn stacked_rows_have_no_separators() {
        let pos = ItemPosition::new(Segment::Collapsed, false, false).stacked();
        assert!(!separator_after(&pos));
        assert!(!separator_before(&pos));
    }

    #[test]
    fn inline_folded_run_separates_internally_but_not_at_its_end() {
        // Spread mode reveals folded items inline; the run's boundary
        // separator comes from the first item after the fold.
        let first = ItemPosition::new(Segment::Collapsed, true, false);
        let last = ItemPosition::new(Segment::Collapsed, false, false).last_of_segment(true);
        assert!(separator_after(&first));
        assert!(!separator_after(&last));
        assert!(!separator_before(&first));
    }

    #[test]
    fn before_items_separate_normally() {
        let first = ItemPosition::new(Segment::Before, true, false);
        let rest = ItemPosition::new(Segment::Before, false, false);
        assert!(separator_after(&first));
        assert!(separator_after(&rest));
        assert!(!separator_before(&first));
    }

    #[test]
    fn accent_on_entry_point_and_terminal() {
        assert!(is_accented(&ItemPosition::new(Segment::All, true, false), false));
        assert!(is_accented(&ItemPosition::new(Segment::Before, true, false), false));
        assert!(is_accented(&ItemPosition::new(Segment::After, false, true), false));
        assert!(!is_accented(&ItemPosition::new(Segment::Before, false, false), false));
        assert!(!is_accented(&ItemPosition::new(Segment::Collapsed, true, false), false));
    }

    #[test]
    fn accent_after_covers_whole_trailing_run() {
        let mid = ItemPosition::new(Segment::After, false, false);
        assert!(!is_accented(&mid, false));
        assert!(is_accented(&mid, true));
    }
}
