//! Calendar event model and its date/time representation.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::utils::datetime::{self, DATE_FORMAT, DATE_TIME_FORMAT};

/// One occurrence on the board.
///
/// `id` is derived once at creation time and is opaque afterwards. It is not
/// guaranteed unique: two events created on the same date with the same title
/// share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl CalendarEvent {
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start: start.into(),
            end: None,
        }
    }

    #[must_use]
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Parsed start, if `start` is a recognizable date or date-time.
    pub fn start_time(&self) -> Option<EventTime> {
        EventTime::parse(&self.start)
    }

    /// Parsed end, if present and recognizable.
    pub fn end_time(&self) -> Option<EventTime> {
        self.end.as_deref().and_then(EventTime::parse)
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self.start_time(), Some(EventTime::AllDay(_)))
    }

    /// Whether any part of the event falls on `date`.
    ///
    /// `end` is exclusive. An all-day event without an end covers its start day
    /// only; a timed event ending exactly at midnight does not spill into that day.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let Some(start) = self.start_time() else {
            return false;
        };
        let first = start.date();
        let last = match self.end_time() {
            Some(EventTime::AllDay(end)) => end.pred_opt().unwrap_or(end),
            Some(EventTime::Timed(end)) if end.num_seconds_from_midnight() == 0 => end.date().pred_opt().unwrap_or(end.date()),
            Some(EventTime::Timed(end)) => end.date(),
            None => first,
        };
        date >= first && date <= last.max(first)
    }

    /// Whether a timed event covers the hour slot starting at `hour` on `date`.
    ///
    /// All-day events never occupy hour slots. Timed events without an end last
    /// one hour.
    pub fn occupies_hour(&self, date: NaiveDate, hour: u32) -> bool {
        let Some(EventTime::Timed(start)) = self.start_time() else {
            return false;
        };
        let end = match self.end_time() {
            Some(EventTime::Timed(end)) if end > start => end,
            Some(EventTime::AllDay(end)) => match end.and_hms_opt(0, 0, 0) {
                Some(midnight) if midnight > start => midnight,
                _ => start + Duration::hours(1),
            },
            _ => start + Duration::hours(1),
        };
        let Some(slot_start) = date.and_hms_opt(hour, 0, 0) else {
            return false;
        };
        let slot_end = slot_start + Duration::hours(1);
        start < slot_end && end > slot_start
    }
}

/// Parsed form of an event's `start` or `end` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventTime {
    AllDay(NaiveDate),
    Timed(NaiveDateTime),
}

impl EventTime {
    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` or an RFC 3339 timestamp.
    ///
    /// An RFC 3339 offset is dropped and the wall-clock part kept.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(date) = datetime::parse_date(s) {
            return Some(Self::AllDay(date));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT) {
            return Some(Self::Timed(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Some(Self::Timed(dt));
        }
        DateTime::parse_from_rfc3339(s).ok().map(|dt| Self::Timed(dt.naive_local()))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::AllDay(date) => *date,
            Self::Timed(dt) => dt.date(),
        }
    }

    pub fn hour(&self) -> Option<u32> {
        match self {
            Self::AllDay(_) => None,
            Self::Timed(dt) => Some(dt.hour()),
        }
    }

    /// Shift by whole days, keeping the wall-clock time.
    #[must_use]
    pub fn shifted(self, days: i64) -> Self {
        match self {
            Self::AllDay(date) => Self::AllDay(date + Duration::days(days)),
            Self::Timed(dt) => Self::Timed(dt + Duration::days(days)),
        }
    }

    /// Canonical string form, the inverse of [`EventTime::parse`] for canonical input.
    pub fn format(&self) -> String {
        match self {
            Self::AllDay(date) => date.format(DATE_FORMAT).to_string(),
            Self::Timed(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
        }
    }
}
