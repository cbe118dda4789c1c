//! # horaire-catalog
//!
//! Catalog layer for the horaire timetable planner. A catalog is a JSON
//! array of meeting rows; this crate loads it, assembles per-term
//! [`horaire_engine::Section`] pools out of it, and answers the lookup
//! queries the CLI exposes (course filtering, section details, course
//! listings), with an optional bounded cache for repeated term assembly.
//!
//! ## Quick start
//!
//! ```rust
//! use horaire_catalog::{sections_for_term, MeetingRecord};
//!
//! let records: Vec<MeetingRecord> = serde_json::from_str(
//!     r#"[
//!         {"name": "MAT1000-automne2025-A", "day": "Lundi",
//!          "start_time": "10h30", "end_time": "12h00"},
//!         {"name": "PHI1001-ete2025-A", "day": "Mardi",
//!          "start_time": "9h00", "end_time": "10h30"}
//!     ]"#,
//! )
//! .unwrap();
//!
//! // Only the automne2025 record survives the term filter.
//! let sections = sections_for_term(&records, "automne2025");
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].identifier, "MAT1000-automne2025-A");
//! assert_eq!(sections[0].slots[0].start, 630);
//! ```
//!
//! ## Modules
//!
//! - [`record`] — raw meeting rows as stored in the catalog file
//! - [`store`] — loading and the query operations
//! - [`cache`] — bounded per-term section cache
//! - [`error`] — error types for loading failures

pub mod cache;
pub mod error;
pub mod record;
pub mod store;

pub use cache::TermCache;
pub use error::{CatalogError, Result};
pub use record::MeetingRecord;
pub use store::{
    course_codes, filter_by_courses, load_catalog, section_details, sections_for_term,
};
