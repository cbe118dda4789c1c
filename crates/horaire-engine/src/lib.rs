//! # horaire-engine
//!
//! Combination search engine for course timetable planning.
//!
//! Given a pool of course sections — each a uniquely identified offering with
//! one or more weekly time slots — the engine enumerates every combination
//! that picks at most one section per course and contains no time overlap.
//! It is pure and synchronous: no I/O and no process-wide state, so
//! concurrent callers need no locking.
//!
//! ## Quick start
//!
//! ```rust
//! use horaire_engine::{find_schedules, Section, TimeSlot};
//!
//! let sections = vec![
//!     Section::new("MAT1000-automne2025-A", vec![TimeSlot::new("Lundi", 630, 720)]),
//!     Section::new("MAT1000-automne2025-B", vec![TimeSlot::new("Mardi", 540, 630)]),
//!     Section::new("INF1120-automne2025-A", vec![TimeSlot::new("Lundi", 660, 750)]),
//! ];
//!
//! let combos = find_schedules(&sections);
//! // Every valid subset is returned, empty and partial selections included.
//! // The two Lundi sections overlap and MAT1000 A/B share a course key, so
//! // the only valid pair is {MAT1000-B, INF1120-A}: 1 empty + 3 singletons
//! // + 1 pair.
//! assert_eq!(combos.len(), 5);
//! ```
//!
//! ## Modules
//!
//! - [`section`] — data model: [`Section`], [`TimeSlot`], minute sentinel
//! - [`clock`] — `"10h30"` → minutes-since-midnight parsing
//! - [`overlap`] — pairwise conflict predicate (half-open intervals)
//! - [`search`] — backtracking enumeration with canonical deduplication

pub mod clock;
pub mod overlap;
pub mod search;
pub mod section;

pub use clock::parse_clock_time;
pub use overlap::{sections_overlap, slots_overlap};
pub use search::{find_schedules, find_schedules_budgeted, Combination, SearchOutcome};
pub use section::{course_key, Minutes, Section, TimeSlot, UNPARSED_MINUTES};
