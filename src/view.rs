//! Pure projection of board state into a renderable view.
//!
//! [`BoardView::project`] reads an [`EventBoard`] and a [`ViewConfig`] and
//! returns plain data. The ratatui components draw from that data and never
//! look at the board directly, so equal inputs always draw the same screen.

use chrono::{Datelike, NaiveDate};

use crate::board::{EventBoard, Prompt};
use crate::calendar::{CalendarWidget, Cell, InstanceKey, ViewKind};
use crate::config::Config;
use crate::constants::{PAGE_SUBTITLE, PAGE_TITLE, SIDEBAR_TITLE};
use crate::theme::Palette;
use crate::utils::datetime::format_short_date;

/// Inputs to the projection besides the board itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub palette: Palette,
    pub medium_breakpoint: u16,
    pub sidebar_percent: u16,
}

impl ViewConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            palette: config.ui.palette(),
            medium_breakpoint: config.ui.medium_breakpoint,
            sidebar_percent: config.ui.sidebar_percent,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Sidebar/grid arrangement for the current terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Below the breakpoint: sidebar above the grid
    Stacked,
    /// At or above the breakpoint: sidebar left, grid right
    SideBySide { sidebar_percent: u16 },
}

impl LayoutMode {
    pub fn for_width(width: u16, config: &ViewConfig) -> Self {
        if width < config.medium_breakpoint {
            LayoutMode::Stacked
        } else {
            LayoutMode::SideBySide {
                sidebar_percent: config.sidebar_percent,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub title: String,
    pub rows: Vec<SidebarRow>,
}

/// One mirrored event as listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    pub id: String,
    pub title: String,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub key: InstanceKey,
    pub title: String,
    pub focused: bool,
}

/// One grid cell: a month day, an all-day slot or an hour slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub cell: Cell,
    pub in_range: bool,
    pub is_today: bool,
    pub is_cursor: bool,
    pub highlighted: bool,
    pub chips: Vec<Chip>,
}

impl CellView {
    /// Chips to draw given room for `room` lines and the configured cap
    /// (`0` = no cap), plus how many were left out.
    pub fn visible_chips(&self, room: usize, max_events: usize) -> (&[Chip], usize) {
        let len = self.chips.len();
        let mut shown = if max_events > 0 { len.min(max_events) } else { len };
        // a truncated cell spends one line on "+N more"
        if shown > room || (shown < len && shown + 1 > room) {
            shown = room.saturating_sub(1);
        }
        (&self.chips[..shown], len - shown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridBody {
    Month {
        weeks: Vec<Vec<CellView>>,
    },
    TimeGrid {
        days: Vec<NaiveDate>,
        all_day: Vec<CellView>,
        /// 24 rows, one per hour, each with one cell per day
        hours: Vec<Vec<CellView>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub title: String,
    pub view: ViewKind,
    pub cursor: Cell,
    pub day_max_events: usize,
    pub editable: bool,
    pub body: GridBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptView {
    Title { message: String, range: String },
    RemovalConfirmation { message: String },
}

impl PromptView {
    pub fn from_prompt(prompt: &Prompt) -> Self {
        match prompt {
            Prompt::Title { selection } => PromptView::Title {
                message: prompt.message(),
                range: format!("{} → {}", selection.start_str(), selection.end_str()),
            },
            Prompt::RemovalConfirmation { .. } => PromptView::RemovalConfirmation {
                message: prompt.message(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub header: HeaderView,
    pub layout: LayoutMode,
    pub sidebar: SidebarView,
    pub grid: GridView,
    pub prompt: Option<PromptView>,
    pub palette: Palette,
}

impl BoardView {
    /// Project the board for a terminal `width` columns wide.
    pub fn project(board: &EventBoard, config: &ViewConfig, width: u16) -> Self {
        Self {
            header: HeaderView {
                title: PAGE_TITLE.to_string(),
                subtitle: PAGE_SUBTITLE.to_string(),
            },
            layout: LayoutMode::for_width(width, config),
            sidebar: project_sidebar(board),
            grid: project_grid(board.calendar()),
            prompt: board.prompt().map(PromptView::from_prompt),
            palette: config.palette.clone(),
        }
    }
}

fn project_sidebar(board: &EventBoard) -> SidebarView {
    SidebarView {
        title: SIDEBAR_TITLE.to_string(),
        rows: board
            .events()
            .iter()
            .map(|event| SidebarRow {
                id: event.id.clone(),
                title: event.title.clone(),
                date_label: format_short_date(&event.start),
            })
            .collect(),
    }
}

fn project_grid(calendar: &CalendarWidget) -> GridView {
    let days = calendar.visible_days();
    let body = match calendar.view() {
        ViewKind::Month => GridBody::Month {
            weeks: days
                .chunks(7)
                .map(|week| week.iter().map(|d| project_cell(calendar, Cell::day(*d))).collect())
                .collect(),
        },
        ViewKind::Week | ViewKind::Day => GridBody::TimeGrid {
            all_day: days.iter().map(|d| project_cell(calendar, Cell::day(*d))).collect(),
            hours: (0..24)
                .map(|hour| days.iter().map(|d| project_cell(calendar, Cell::slot(*d, hour))).collect())
                .collect(),
            days,
        },
    };
    GridView {
        title: calendar.title(),
        view: calendar.view(),
        cursor: calendar.cursor(),
        day_max_events: calendar.day_max_events(),
        editable: calendar.is_editable(),
        body,
    }
}

fn project_cell(calendar: &CalendarWidget, cell: Cell) -> CellView {
    let focused = calendar.focused_event();
    let cursor = calendar.cursor();
    let in_range = match calendar.view() {
        ViewKind::Month => cell.date.month() == cursor.date.month() && cell.date.year() == cursor.date.year(),
        ViewKind::Week | ViewKind::Day => true,
    };
    CellView {
        cell,
        in_range,
        is_today: cell.date == calendar.today(),
        is_cursor: cell == cursor,
        highlighted: calendar.is_highlighted(cell),
        chips: calendar
            .events_at(cell)
            .into_iter()
            .map(|instance| Chip {
                key: instance.key,
                title: instance.event.title.clone(),
                focused: cell == cursor && focused == Some(instance.key),
            })
            .collect(),
    }
}
