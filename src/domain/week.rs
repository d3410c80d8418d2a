//! ISO week boundaries and display formatting

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Display format used for week boundaries and rotation dates (e.g., "05.01.2025")
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// ISO-8601 week containing a given instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekInfo {
    /// ISO week number (1..=53)
    pub week_number: u32,
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Sunday of the week
    pub week_end: NaiveDate,
    pub formatted_start: String,
    pub formatted_end: String,
}

impl WeekInfo {
    /// Render the week band, e.g. "Week 1 (30.12.2024 - 05.01.2025)"
    pub fn band(&self) -> String {
        format!(
            "Week {} ({} - {})",
            self.week_number, self.formatted_start, self.formatted_end
        )
    }
}

/// Derive ISO week metadata for an instant.
///
/// The instant is read on the UTC calendar, so the result does not depend on
/// the process timezone.
pub fn derive_week_info(instant: DateTime<Utc>) -> WeekInfo {
    derive_week_info_for_date(instant.date_naive())
}

/// Derive ISO week metadata for a calendar date
pub fn derive_week_info_for_date(date: NaiveDate) -> WeekInfo {
    let week_start = monday_of(date);
    let week_end = week_start + Duration::days(6);

    WeekInfo {
        week_number: date.iso_week().week(),
        week_start,
        week_end,
        formatted_start: format_display_date(week_start),
        formatted_end: format_display_date(week_end),
    }
}

/// Monday of the ISO week containing `date`
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Format a date as zero-padded DD.MM.YYYY
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
