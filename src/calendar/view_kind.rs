use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grid layouts the calendar can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Six-week day grid around the focused month
    #[default]
    Month,
    /// Seven-day time grid starting on Sunday
    Week,
    /// Single-day time grid
    Day,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Month, ViewKind::Week, ViewKind::Day];

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Month => "month",
            ViewKind::Week => "week",
            ViewKind::Day => "day",
        }
    }

    pub fn is_time_grid(self) -> bool {
        !matches!(self, ViewKind::Month)
    }

    /// Toolbar title for the range this view shows around `focus`.
    pub fn title(self, focus: NaiveDate, first: NaiveDate, last: NaiveDate) -> String {
        match self {
            ViewKind::Month => focus.format("%B %Y").to_string(),
            ViewKind::Day => focus.format("%B %-d, %Y").to_string(),
            ViewKind::Week => week_title(first, last),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" | "dayGridMonth" => Ok(ViewKind::Month),
            "week" | "timeGridWeek" => Ok(ViewKind::Week),
            "day" | "timeGridDay" => Ok(ViewKind::Day),
            other => Err(format!("unknown view '{}'", other)),
        }
    }
}

fn week_title(first: NaiveDate, last: NaiveDate) -> String {
    if first.year() != last.year() {
        format!("{} – {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
    } else if first.month() != last.month() {
        format!("{} – {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
    } else {
        format!("{} – {}", first.format("%b %-d"), last.format("%-d, %Y"))
    }
}
