#![forbid(unsafe_code)]

//! Trail partitioning.
//!
//! Splits an ordered item sequence into the three runs a collapsing trail
//! renders: the leading items kept visible, the foldable middle, and the
//! trailing items kept visible. Pure slicing; the function is total and
//! never panics.

/// The three runs of a partitioned trail, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition<'a, T> {
    /// Leading items kept visible.
    pub before: &'a [T],
    /// Foldable middle items.
    pub collapsed: &'a [T],
    /// Trailing items kept visible.
    pub after: &'a [T],
}

impl<T> Partition<'_, T> {
    /// Total number of items across the three runs.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.before.len() + self.collapsed.len() + self.after.len()
    }

    /// Whether every run is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.collapsed.is_empty() && self.after.is_empty()
    }
}

/// Partition `items` into `{before, collapsed, after}` runs.
///
/// `before` and `after` are the requested visible counts on each side of
/// the fold. The arithmetic clamps rather than failing:
///
/// - the leading run keeps at least one item when the input is non-empty,
///   but never eats into the tail reservation;
/// - `after >= items.len()` degenerates to "everything except the first
///   item"; `after == 0` degenerates to "only the last item".
///
/// When the caller's collapse threshold admits folding
/// (`items.len() > before.max(1) + after.max(1)`), the three runs
/// concatenate to exactly the input. Outside that range the runs may
/// overlap or drop items; callers are expected to fall back to rendering
/// the full list there, which is what [`super::Breadcrumb`] does.
#[must_use]
pub fn partition<T>(items: &[T], before: usize, after: usize) -> Partition<'_, T> {
    let len = items.len();
    if len == 0 {
        return Partition {
            before: &[],
            collapsed: &[],
            after: &[],
        };
    }

    let after_run: &[T] = if after >= len {
        &items[1..]
    } else if after == 0 {
        &items[len - 1..]
    } else {
        &items[len - after..]
    };

    let effective_before = before.max(1).min(len.saturating_sub(after));
    let before_run = &items[..effective_before];

    let collapsed_end = len - after_run.len();
    let collapsed_start = before_run.len().min(collapsed_end);
    let collapsed = &items[collapsed_start..collapsed_end];

    Partition {
        before: before_run,
        collapsed,
        after: after_run,
    }
}

/// Whether a trail of `len` items should fold at all for the requested
/// counts. Below this threshold the full list renders flat.
#[must_use]
pub fn should_collapse(len: usize, before: usize, after: usize) -> bool {
    len > before.max(1) + after.max(1)
}
