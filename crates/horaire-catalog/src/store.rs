//! Catalog loading and the query operations built on top of it.
//!
//! The store works on plain slices of [`MeetingRecord`]; it owns no state.
//! Callers load a catalog once with [`load_catalog`], then derive per-term
//! [`Section`] pools and narrower views from it. Repeated per-term assembly
//! can be fronted by a [`crate::cache::TermCache`].

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use horaire_engine::{parse_clock_time, Section, TimeSlot};

use crate::error::{CatalogError, Result};
use crate::record::MeetingRecord;

/// Read and parse a catalog file: a JSON array of meeting records.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be read and
/// [`CatalogError::Json`] when its contents are not a record array.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<MeetingRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<MeetingRecord> = serde_json::from_str(&text)?;
    Ok(records)
}

/// Assemble the section pool for one term.
///
/// Records whose identifier carries the requested term (compared
/// case-insensitively) are grouped by identifier, in first-seen file order,
/// and their day/time columns become [`TimeSlot`]s. Unparseable clock text
/// degrades to the sentinel minute value rather than dropping the record.
///
/// Records whose identifier does not split into exactly three parts belong
/// to no term and never match.
pub fn sections_for_term(records: &[MeetingRecord], term: &str) -> Vec<Section> {
    let wanted = term.to_lowercase();
    let mut sections: Vec<Section> = Vec::new();
    let mut index_of: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let in_term = record
            .term()
            .is_some_and(|t| t.to_lowercase() == wanted);
        if !in_term {
            continue;
        }

        let slot = TimeSlot::new(
            record.day.clone(),
            parse_clock_time(&record.start_time),
            parse_clock_time(&record.end_time),
        );

        match index_of.get(record.name.as_str()) {
            Some(&at) => sections[at].slots.push(slot),
            None => {
                index_of.insert(record.name.as_str(), sections.len());
                sections.push(Section::new(record.name.clone(), vec![slot]));
            }
        }
    }

    sections
}

/// Keep only the sections whose identifier contains any of the requested
/// course codes as a substring.
///
/// Substring matching means `MAT` selects both `MAT1000` and `MAT2050`
/// sections; callers wanting exact courses pass full codes.
pub fn filter_by_courses(sections: &[Section], codes: &[String]) -> Vec<Section> {
    sections
        .iter()
        .filter(|section| codes.iter().any(|code| section.identifier.contains(code.as_str())))
        .cloned()
        .collect()
}

/// Every meeting row of one section, matched by exact identifier.
///
/// Returns an empty vector when the identifier is unknown; the caller
/// decides how to report that.
pub fn section_details<'a>(
    records: &'a [MeetingRecord],
    identifier: &str,
) -> Vec<&'a MeetingRecord> {
    records.iter().filter(|r| r.name == identifier).collect()
}

/// The sorted, deduplicated course codes present in the catalog, optionally
/// restricted to one term.
pub fn course_codes(records: &[MeetingRecord], term: Option<&str>) -> Vec<String> {
    let wanted = term.map(str::to_lowercase);
    let mut codes: BTreeSet<String> = BTreeSet::new();

    for record in records {
        let in_scope = match &wanted {
            Some(w) => record.term().is_some_and(|t| t.to_lowercase() == *w),
            None => true,
        };
        if in_scope {
            codes.insert(record.course_key().to_string());
        }
    }

    codes.into_iter().collect()
}
