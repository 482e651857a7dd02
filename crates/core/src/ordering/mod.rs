//! Ordering engine for inventory rows.
//!
//! Two base comparators (size, name) plus a reverse modifier. All sorting is
//! stable so that entries comparing equal keep their universe order.

/// Comparator selected for one report invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Preserve universe (registration) order.
    Universe,
    /// Selected display name ascending, byte-wise.
    Name,
    /// Size ascending.
    Size,
}

/// Sort key accessors for anything the ordering engine can arrange.
pub trait SortEntry {
    fn sort_size(&self) -> u64;
    fn sort_name(&self) -> &str;
}

/// Arrange `entries` per the comparator, then apply the reverse modifier.
///
/// The reverse step flips the final sequence and composes with every order,
/// including `Universe`.
pub fn apply<T: SortEntry>(entries: &mut [T], order: SortOrder, reverse: bool) {
    match order {
        SortOrder::Universe => {}
        SortOrder::Size => entries.sort_by_key(|e| e.sort_size()),
        SortOrder::Name => {
            entries.sort_by(|a, b| a.sort_name().as_bytes().cmp(b.sort_name().as_bytes()))
        }
    }
    if reverse {
        entries.reverse();
    }
}
