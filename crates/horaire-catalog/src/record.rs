//! Raw meeting rows as they appear in the catalog file.
//!
//! A catalog is a JSON array of [`MeetingRecord`]s, one per weekly meeting of
//! a section. A section that meets twice a week occupies two records with the
//! same `name`. Every field is optional in the file; absent fields read back
//! as empty strings so downstream parsing can degrade gracefully instead of
//! rejecting the whole catalog.

use serde::{Deserialize, Serialize};

/// One meeting row of the catalog.
///
/// `name` is the full section identifier (`MAT1000-automne2025-A`): course
/// code, term, and group joined by `-`. The remaining fields are display
/// data, except `day`, `start_time`, and `end_time`, which feed the
/// conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub teacher: String,
}

impl MeetingRecord {
    /// The course code prefix of `name` (text before the first `-`).
    pub fn course_key(&self) -> &str {
        horaire_engine::course_key(&self.name)
    }

    /// The term component of `name`, present only when the identifier has
    /// exactly three `-`-separated parts.
    ///
    /// Identifiers with any other shape belong to no term and are skipped by
    /// term-scoped queries.
    pub fn term(&self) -> Option<&str> {
        let mut parts = self.name.split('-');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(term), Some(_), None) => Some(term),
            _ => None,
        }
    }
}
