//! Date and time utility functions
//!
//! This module provides parsing and human-readable formatting for the date
//! strings carried by calendar events and selections.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::calendar::EventTime;

/// Date format used for all-day starts/ends and selection date strings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time format used for timed starts/ends
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Short human date: month abbreviation, numeric day, numeric year ("Sep 28, 2022").
///
/// Accepts anything [`EventTime::parse`] accepts. Unparseable input is returned
/// unchanged so the sidebar still shows something.
pub fn format_short_date(date_str: &str) -> String {
    match EventTime::parse(date_str) {
        Some(time) => time.date().format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// First day of the week (Sunday) containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Same day-of-month `months` months away, clamped to the target month's length
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let (year, month0) = (total.div_euclid(12), total.rem_euclid(12) as u32);
    let mut day = date.day();
    loop {
        if let Some(d) = NaiveDate::from_ymd_opt(year, month0 + 1, day) {
            return d;
        }
        if day <= 28 {
            return date;
        }
        day -= 1;
    }
}
