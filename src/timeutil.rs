// Date and time helpers shared by the availability, booking and fixture modules.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `HH:MM` string into its hour and minute components.
///
/// Only the shape is checked here; range validation (hour < 24, minute < 60)
/// is the booking validator's job.
pub fn parse_time(time: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = time.split_once(':')?;
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Convert a `HH:MM` string to minutes since midnight.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = parse_time(time)?;
    Some(hours * 60 + minutes)
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date as seen by the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date N days from today, formatted as `YYYY-MM-DD`.
pub fn days_from_now(days: i64) -> String {
    format_date(today() + Duration::days(days))
}

/// Whether `date` falls strictly before `today`. `None` if the string does
/// not parse as `YYYY-MM-DD`; same-day is not "in the past".
pub fn is_date_in_past(date: &str, today: NaiveDate) -> Option<bool> {
    parse_date(date).map(|d| d < today)
}

/// English weekday name ("Monday", ...) for a `YYYY-MM-DD` string.
pub fn day_of_week_name(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%A").to_string())
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
