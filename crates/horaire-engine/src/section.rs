//! Data model for schedulable course sections.
//!
//! A [`Section`] is one concrete offering of a course (a group with its own
//! meeting times); its identifier carries the course code as the prefix
//! before the first `-`, e.g. `INF1120-automne2025-A` belongs to course
//! `INF1120`. Alternate sections of the same course share that prefix.

/// Minutes since midnight. Negative values are never produced by valid clock
/// text; the [`UNPARSED_MINUTES`] sentinel marks a missing or unparseable time.
pub type Minutes = i32;

/// Sentinel for a clock time that was absent or could not be parsed.
///
/// Slots carrying this value still participate numerically in overlap
/// comparisons (see [`crate::overlap`]), so pairs involving them can be
/// misclassified. Callers that need strict answers should drop such slots.
pub const UNPARSED_MINUTES: Minutes = -1;

/// A single recurring meeting time: a day label and a minute interval.
///
/// Day labels are opaque, equality-compared tokens (`"Lundi"`, `"Mardi"`, …);
/// two slots can only conflict when their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub day: String,
    pub start: Minutes,
    pub end: Minutes,
}

impl TimeSlot {
    pub fn new(day: impl Into<String>, start: Minutes, end: Minutes) -> Self {
        Self {
            day: day.into(),
            start,
            end,
        }
    }
}

/// One schedulable offering of a course.
///
/// `identifier` is globally unique within a term. `slots` holds every
/// recurring meeting time of the section and is never empty in well-formed
/// input; the engine does not defend against empty slot lists (callers must
/// filter such sections out, see [`crate::search::find_schedules`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub identifier: String,
    pub slots: Vec<TimeSlot>,
}

impl Section {
    pub fn new(identifier: impl Into<String>, slots: Vec<TimeSlot>) -> Self {
        Self {
            identifier: identifier.into(),
            slots,
        }
    }

    /// The course key (sigle) shared by alternate sections of the same course.
    pub fn course_key(&self) -> &str {
        course_key(&self.identifier)
    }
}

/// Extract the course key from a section identifier: the substring before the
/// first `-`, or the whole identifier when it contains none.
///
/// # Examples
/// ```
/// use horaire_engine::section::course_key;
///
/// assert_eq!(course_key("MAT1000-automne2025-B"), "MAT1000");
/// assert_eq!(course_key("SEMINAIRE"), "SEMINAIRE");
/// ```
pub fn course_key(identifier: &str) -> &str {
    match identifier.split_once('-') {
        Some((key, _)) => key,
        None => identifier,
    }
}
