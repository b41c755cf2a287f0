//! Grid cells and range selections.

use chrono::{Duration, NaiveDate};

use crate::utils::datetime::format_ymd;

/// A grid position: a day, optionally narrowed to one hour slot.
///
/// `hour == None` is a month-view day cell or the all-day row of a time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub date: NaiveDate,
    pub hour: Option<u32>,
}

impl Cell {
    pub fn day(date: NaiveDate) -> Self {
        Self { date, hour: None }
    }

    pub fn slot(date: NaiveDate, hour: u32) -> Self {
        Self {
            date,
            hour: Some(hour.min(23)),
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.hour.is_none()
    }

    /// This cell coerced to the same kind (all-day or timed) as `other`.
    #[must_use]
    pub fn like(self, other: Cell) -> Cell {
        match (self.hour, other.hour) {
            (Some(_), None) => Cell::day(self.date),
            (None, Some(hour)) => Cell::slot(self.date, hour),
            _ => self,
        }
    }
}

/// A user range selection spanning one or more cells, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    start: Cell,
    end: Cell,
}

impl DateSelection {
    /// Selection between two cells in either order.
    ///
    /// `b` is coerced to the kind of `a`, so a selection is always all-day or
    /// always timed.
    pub fn between(a: Cell, b: Cell) -> Self {
        let b = b.like(a);
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn single(cell: Cell) -> Self {
        Self { start: cell, end: cell }
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day()
    }

    /// Whether `cell` lies in the range. Cells of the other kind never do.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_all_day() == self.is_all_day() && cell >= self.start && cell <= self.end
    }

    /// Date of the first selected cell, `YYYY-MM-DD`. Used to derive event ids.
    pub fn date_str(&self) -> String {
        format_ymd(self.start.date)
    }

    /// Inclusive start: a date for all-day selections, a date-time otherwise.
    pub fn start_str(&self) -> String {
        match self.start.hour {
            None => format_ymd(self.start.date),
            Some(hour) => format!("{}T{:02}:00:00", format_ymd(self.start.date), hour),
        }
    }

    /// Exclusive end: the day after the last cell, or the hour after the last slot.
    pub fn end_str(&self) -> String {
        match self.end.hour {
            None => format_ymd(self.end.date + Duration::days(1)),
            Some(23) => format!("{}T00:00:00", format_ymd(self.end.date + Duration::days(1))),
            Some(hour) => format!("{}T{:02}:00:00", format_ymd(self.end.date), hour + 1),
        }
    }
}
