//! Clock-time parsing for catalog hour strings.
//!
//! Catalog data expresses meeting times as `"<H>h<MM>"` strings (`"10h30"`,
//! `"8h00"`). Parsing is deliberately forgiving: it never fails, it only
//! degrades to the [`UNPARSED_MINUTES`] sentinel so a single malformed row
//! cannot abort an enumeration over hundreds of sections.

use crate::section::{Minutes, UNPARSED_MINUTES};

/// Parse a `"<H>h<MM>"` clock string into minutes since midnight.
///
/// Empty input yields [`UNPARSED_MINUTES`] silently (absent times are common
/// in scraped data). Any other input that does not match `<integer>h<integer>`
/// yields the sentinel and emits a `log::warn!` — parsing never panics and
/// never returns an error. Whitespace around either number is tolerated, and
/// no range validation is applied (`"25h00"` parses to 1500); values whose
/// conversion would overflow the minute count degrade to the sentinel too.
///
/// # Examples
/// ```
/// use horaire_engine::{parse_clock_time, UNPARSED_MINUTES};
///
/// assert_eq!(parse_clock_time("10h30"), 630);
/// assert_eq!(parse_clock_time(""), UNPARSED_MINUTES);
/// assert_eq!(parse_clock_time("garbage"), UNPARSED_MINUTES);
/// ```
pub fn parse_clock_time(text: &str) -> Minutes {
    if text.is_empty() {
        return UNPARSED_MINUTES;
    }

    let parsed = text.split_once('h').and_then(|(hours, minutes)| {
        let hours: i32 = hours.trim().parse().ok()?;
        let minutes: i32 = minutes.trim().parse().ok()?;
        hours.checked_mul(60)?.checked_add(minutes)
    });

    match parsed {
        Some(total) => total,
        None => {
            log::warn!("invalid clock time '{}', expected a format like '10h30'", text);
            UNPARSED_MINUTES
        }
    }
}
