//! Lead time calculation

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whole days between two civil dates, `to - from`.
///
/// Both arguments are parsed strictly as `yyyy-MM-dd`; there is no timezone
/// component because intake and completion are civil dates, not instants.
/// Returns `None` when either string fails to parse — callers treat that as
/// "unknown", never as zero. The difference is signed: a completion date
/// before intake yields a negative count, which is deliberately not clamped.
pub fn days_between(from: &str, to: &str) -> Option<i64> {
    let from = NaiveDate::parse_from_str(from, DATE_FORMAT).ok()?;
    let to = NaiveDate::parse_from_str(to, DATE_FORMAT).ok()?;
    Some(to.signed_duration_since(from).num_days())
}

/// Whether a string is a syntactically valid `yyyy-MM-dd` date
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}
