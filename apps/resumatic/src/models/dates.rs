//! Date formatting helpers shared by every template.
//!
//! Resume dates carry month+year granularity only. The model stores a full
//! `NaiveDate` with the day pinned to 1; the day component never appears in
//! display output.

use chrono::NaiveDate;

/// Builds a month+year date with the day pinned to 1.
///
/// Returns `None` for an out-of-range month (the only way construction can
/// fail at this granularity).
pub fn month_year(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Formats a single date as `"Mon YYYY"`; a missing date renders as
/// `"Present"`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %Y").to_string(),
        None => "Present".to_string(),
    }
}

/// Formats a date range for display.
///
/// A missing start date renders as an empty string; a missing end date
/// renders as `"<start> - Present"`.
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    if start.is_none() {
        return String::new();
    }
    format!("{} - {}", format_date(start), format_date(end))
}
