//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{HEADER_HEIGHT, HOUR_GUTTER_WIDTH, STACKED_SIDEBAR_HEIGHT};
use crate::view::LayoutMode;

/// Screen regions of the board page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardAreas {
    pub header: Rect,
    pub sidebar: Rect,
    pub calendar: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, sidebar, calendar and status line.
    ///
    /// Stacked mode puts the sidebar above the calendar; side-by-side mode
    /// gives the sidebar `sidebar_percent` of the width on the left.
    #[must_use]
    pub fn board_layout(area: Rect, mode: LayoutMode) -> BoardAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let (header, body, status) = (rows[0], rows[1], rows[2]);

        let (sidebar, calendar) = match mode {
            LayoutMode::Stacked => {
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(STACKED_SIDEBAR_HEIGHT), Constraint::Min(0)])
                    .split(body);
                (parts[0], parts[1])
            }
            LayoutMode::SideBySide { sidebar_percent } => {
                let parts = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(sidebar_percent),
                        Constraint::Percentage(100 - sidebar_percent),
                    ])
                    .split(body);
                (parts[0], parts[1])
            }
        };

        BoardAreas {
            header,
            sidebar,
            calendar,
            status,
        }
    }

    /// Split the calendar area into toolbar (1 line) and grid
    #[must_use]
    pub fn calendar_layout(area: Rect) -> (Rect, Rect) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        (parts[0], parts[1])
    }

    /// Equal-width columns covering `area`
    #[must_use]
    pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count as u32); count])
            .split(area)
            .to_vec()
    }

    /// Month grid: a weekday header line, then `weeks` rows of 7 cells
    #[must_use]
    pub fn month_cells(area: Rect, weeks: usize) -> (Vec<Rect>, Vec<Vec<Rect>>) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        let weekday_header = Self::columns(parts[0], 7);

        let rows = if weeks == 0 {
            Vec::new()
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Ratio(1, weeks as u32); weeks])
                .split(parts[1])
                .to_vec()
        };
        let cells = rows.iter().map(|row| Self::columns(*row, 7)).collect();
        (weekday_header, cells)
    }

    /// Time grid: (day header line, all-day row, hour rows area), each split
    /// into an hour gutter and `days` columns
    #[must_use]
    pub fn time_grid_areas(area: Rect, all_day_height: u16) -> (Rect, Rect, Rect) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(all_day_height),
                Constraint::Min(0),
            ])
            .split(area);
        (parts[0], parts[1], parts[2])
    }

    /// Split a time-grid row into the hour gutter and the day columns
    #[must_use]
    pub fn gutter_and_columns(area: Rect, days: usize) -> (Rect, Vec<Rect>) {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(HOUR_GUTTER_WIDTH), Constraint::Min(0)])
            .split(area);
        (parts[0], Self::columns(parts[1], days))
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Whether a terminal position falls inside `rect`
    #[must_use]
    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    }
}
