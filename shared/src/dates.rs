//! Date handling for validity windows.
//!
//! The server is not consistent about date formats, so parsing accepts ISO
//! (`2024-03-01`, optionally with a time part) and US (`03/01/2024`) forms.
//! Everything written back uses ISO.

use chrono::NaiveDate;

const ISO: &str = "%Y-%m-%d";
const US: &str = "%m/%d/%Y";

/// Parse a date in any of the accepted formats.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    // "2024-03-01T00:00:00" and "2024-03-01 00:00:00" carry a time we ignore
    let date_part = trimmed.get(..10).filter(|head| head.contains('-')).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, ISO)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, US))
        .ok()
}

/// ISO form of a parseable date; other input is returned trimmed.
pub fn normalize(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format(ISO).to_string(),
        None => value.trim().to_string(),
    }
}

/// Format a date the way it goes on the wire.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO).to_string()
}

/// A record is active while its end date has not passed. A missing or
/// unparseable end date counts as open-ended.
pub fn is_active_on(end_date: Option<&str>, today: NaiveDate) -> bool {
    end_date.and_then(parse_date).map_or(true, |end| end >= today)
}

/// Visual tone of a start-date cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTone {
    /// Starts after today.
    Future,
    /// Already started; the row is editable.
    PastEditable,
    /// Already started; the row is read-only.
    PastReadOnly,
}

impl DateTone {
    /// CSS class used by the table cell.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Future => "future-date-text",
            Self::PastEditable => "past-date-text-editable",
            Self::PastReadOnly => "past-date-text-non-editable",
        }
    }
}

/// Unparseable start dates are treated as already started.
pub fn start_date_tone(start_date: &str, today: NaiveDate, editable: bool) -> DateTone {
    match parse_date(start_date) {
        Some(start) if start > today => DateTone::Future,
        _ if editable => DateTone::PastEditable,
        _ => DateTone::PastReadOnly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parses_iso_us_and_timestamps() {
        assert_eq!(parse_date("2024-03-01"), Some(day(2024, 3, 1)));
        assert_eq!(parse_date("03/01/2024"), Some(day(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01T10:00:00Z"), Some(day(2024, 3, 1)));
        assert_eq!(parse_date(" "), None);
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn normalize_rewrites_to_iso() {
        assert_eq!(normalize("12/31/2025"), "2025-12-31");
        assert_eq!(normalize("not a date "), "not a date");
    }

    #[test]
    fn open_ended_records_are_active() {
        let today = day(2025, 6, 1);
        assert!(is_active_on(None, today));
        assert!(is_active_on(Some("2025-06-01"), today));
        assert!(!is_active_on(Some("2025-05-31"), today));
    }

    #[test]
    fn start_date_tone_depends_on_today_and_editability() {
        let today = day(2025, 6, 1);
        assert_eq!(start_date_tone("2025-07-01", today, false), DateTone::Future);
        assert_eq!(start_date_tone("2025-01-01", today, true), DateTone::PastEditable);
        assert_eq!(start_date_tone("2025-01-01", today, false), DateTone::PastReadOnly);
        assert_eq!(start_date_tone("garbage", today, true), DateTone::PastEditable);
    }
}
