//! Pairwise overlap detection between sections.
//!
//! Performs slot-by-slot comparison between two sections to find time
//! conflicts. Adjacent slots (where one ends exactly when another starts)
//! are NOT overlaps.

use crate::section::{Section, TimeSlot};

/// Whether two time slots conflict: same day label and intersecting
/// half-open minute intervals.
///
/// Two intervals overlap iff NOT (`a.end <= b.start || a.start >= b.end`),
/// so touching endpoints (`a.end == b.start`) do not count.
///
/// Sentinel boundaries ([`crate::UNPARSED_MINUTES`]) are compared numerically
/// like any other value; slots carrying them can therefore be misclassified.
/// The engine does not special-case the sentinel.
pub fn slots_overlap(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.day == b.day && !(a.end <= b.start || a.start >= b.end)
}

/// Whether two sections conflict: true iff any slot of `a` and any slot of
/// `b` overlap. O(|a.slots| × |b.slots|).
pub fn sections_overlap(a: &Section, b: &Section) -> bool {
    a.slots
        .iter()
        .any(|sa| b.slots.iter().any(|sb| slots_overlap(sa, sb)))
}
