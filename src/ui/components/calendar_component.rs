//! Calendar grid component.
//!
//! Draws a projected [`GridView`]: the toolbar (navigation, range title and
//! view switches) above either the month grid or a time grid with an all-day
//! row and one row per hour. Areas drawn in the last frame are remembered so
//! mouse presses can be mapped back to toolbar buttons, event chips and cells.

use crate::calendar::{Cell, Direction, InstanceKey, ViewKind};
use crate::theme::{ColorRole, Palette};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::view::{CellView, Chip, GridBody, GridView};
use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Hour shown at the top of a time grid before the cursor moves
const FIRST_VISIBLE_HOUR: usize = 8;

/// Tallest the all-day row grows, in lines
const MAX_ALL_DAY_HEIGHT: u16 = 3;

pub struct CalendarComponent {
    grid: Option<GridView>,
    palette: Palette,
    hour_offset: usize,
    dragging: bool,
    toolbar_areas: Vec<(Rect, Action)>,
    cell_areas: Vec<(Rect, Cell)>,
    chip_areas: Vec<(Rect, InstanceKey)>,
}

impl Default for CalendarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarComponent {
    pub fn new() -> Self {
        Self {
            grid: None,
            palette: Palette::default(),
            hour_offset: FIRST_VISIBLE_HOUR,
            dragging: false,
            toolbar_areas: Vec::new(),
            cell_areas: Vec::new(),
            chip_areas: Vec::new(),
        }
    }

    pub fn update_data(&mut self, grid: GridView, palette: Palette) {
        self.grid = Some(grid);
        self.palette = palette;
    }

    /// Event focused on the cursor cell, if any
    pub fn focused_key(&self) -> Option<InstanceKey> {
        let grid = self.grid.as_ref()?;
        let cells: Box<dyn Iterator<Item = &CellView>> = match &grid.body {
            GridBody::Month { weeks } => Box::new(weeks.iter().flatten()),
            GridBody::TimeGrid { all_day, hours, .. } => Box::new(all_day.iter().chain(hours.iter().flatten())),
        };
        cells
            .filter(|c| c.is_cursor)
            .flat_map(|c| c.chips.iter())
            .find(|chip| chip.focused)
            .map(|chip| chip.key)
    }

    /// Grid cell drawn at a terminal position in the last frame
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Cell> {
        self.cell_areas
            .iter()
            .find(|(rect, _)| LayoutManager::contains(*rect, column, row))
            .map(|(_, cell)| *cell)
    }

    /// Event chip drawn at a terminal position in the last frame
    pub fn chip_at(&self, column: u16, row: u16) -> Option<InstanceKey> {
        self.chip_areas
            .iter()
            .find(|(rect, _)| LayoutManager::contains(*rect, column, row))
            .map(|(_, key)| *key)
    }

    fn toolbar_action_at(&self, column: u16, row: u16) -> Option<Action> {
        self.toolbar_areas
            .iter()
            .find(|(rect, _)| LayoutManager::contains(*rect, column, row))
            .map(|(_, action)| action.clone())
    }

    fn edit_focused(&self, edit: impl FnOnce(InstanceKey) -> Action) -> Action {
        match self.focused_key() {
            Some(key) if self.grid.as_ref().is_some_and(|g| g.editable) => edit(key),
            _ => Action::None,
        }
    }

    fn style(&self, role: ColorRole) -> Style {
        Style::default().fg(self.palette.color(role))
    }

    fn chip_style(&self, chip: &Chip) -> Style {
        let style = Style::default()
            .fg(self.palette.color(ColorRole::EventText))
            .bg(self.palette.color(ColorRole::Event));
        if chip.focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    fn cell_style(&self, cell: &CellView) -> Style {
        let mut style = if cell.in_range {
            self.style(ColorRole::Text)
        } else {
            self.style(ColorRole::Muted)
        };
        if cell.highlighted {
            style = style.bg(self.palette.color(ColorRole::Selection));
        }
        style
    }

    fn render_toolbar(&mut self, f: &mut Frame, area: Rect, grid: &GridView) {
        let title = Paragraph::new(Span::styled(
            grid.title.clone(),
            self.style(ColorRole::Text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(title, area);

        let button = self.style(ColorRole::Text).bg(self.palette.color(ColorRole::Surface));
        let active = Style::default()
            .fg(self.palette.color(ColorRole::Background))
            .bg(self.palette.color(ColorRole::Accent))
            .add_modifier(Modifier::BOLD);

        let mut x = area.x;
        for (label, action) in [
            (" ‹ ", Action::PreviousRange),
            (" › ", Action::NextRange),
            (" today ", Action::Today),
        ] {
            x = self.render_button(f, area, x, label, button, action) + 1;
        }

        let switch_width: u16 = ViewKind::ALL.iter().map(|v| v.name().len() as u16 + 3).sum();
        let mut x = (area.x + area.width).saturating_sub(switch_width).max(area.x);
        for kind in ViewKind::ALL {
            let label = format!(" {} ", kind.name());
            let style = if kind == grid.view { active } else { button };
            x = self.render_button(f, area, x, &label, style, Action::ChangeView(kind)) + 1;
        }
    }

    /// Draw a toolbar button at column `x`; returns the column after it.
    fn render_button(&mut self, f: &mut Frame, area: Rect, x: u16, label: &str, style: Style, action: Action) -> u16 {
        let right = area.x + area.width;
        if x >= right {
            return x;
        }
        let width = (label.chars().count() as u16).min(right - x);
        let rect = Rect::new(x, area.y, width, 1);
        f.render_widget(Paragraph::new(Span::styled(label.to_string(), style)), rect);
        self.toolbar_areas.push((rect, action));
        x + width
    }

    fn render_month(&mut self, f: &mut Frame, area: Rect, weeks: &[Vec<CellView>], max_events: usize) {
        let (header, rows) = LayoutManager::month_cells(area, weeks.len());
        for (name, rect) in WEEKDAYS.iter().zip(header) {
            f.render_widget(
                Paragraph::new(*name).alignment(Alignment::Center).style(self.style(ColorRole::Muted)),
                rect,
            );
        }

        for (week, rects) in weeks.iter().zip(rows) {
            for (cell, rect) in week.iter().zip(rects) {
                self.render_month_cell(f, rect, cell, max_events);
            }
        }
    }

    fn render_month_cell(&mut self, f: &mut Frame, rect: Rect, cell: &CellView, max_events: usize) {
        self.cell_areas.push((rect, cell.cell));

        let border_style = if cell.is_cursor {
            self.style(ColorRole::Accent).add_modifier(Modifier::BOLD)
        } else if cell.is_today {
            self.style(ColorRole::Today)
        } else {
            self.style(ColorRole::Border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if cell.is_cursor { BorderType::Thick } else { BorderType::Plain })
            .border_style(border_style)
            .style(self.cell_style(cell));
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let day_style = if cell.is_today {
            self.style(ColorRole::Today).add_modifier(Modifier::BOLD)
        } else {
            self.cell_style(cell)
        };
        f.render_widget(
            Paragraph::new(Span::styled(cell.cell.date.day().to_string(), day_style)).alignment(Alignment::Right),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );

        let room = inner.height.saturating_sub(1) as usize;
        let (chips, hidden) = cell.visible_chips(room, max_events);
        let mut y = inner.y + 1;
        for chip in chips {
            let line = Rect::new(inner.x, y, inner.width, 1);
            f.render_widget(Paragraph::new(Span::styled(chip.title.clone(), self.chip_style(chip))), line);
            self.chip_areas.push((line, chip.key));
            y += 1;
        }
        if hidden > 0 && y < inner.y + inner.height {
            f.render_widget(
                Paragraph::new(Span::styled(format!("+{} more", hidden), self.style(ColorRole::Muted))),
                Rect::new(inner.x, y, inner.width, 1),
            );
        }
    }

    fn render_time_grid(
        &mut self,
        f: &mut Frame,
        area: Rect,
        days: &[NaiveDate],
        all_day: &[CellView],
        hours: &[Vec<CellView>],
        cursor: Cell,
    ) {
        let tallest = all_day.iter().map(|c| c.chips.len()).max().unwrap_or(0) as u16;
        let all_day_height = tallest.clamp(1, MAX_ALL_DAY_HEIGHT);
        let (header, all_day_area, hours_area) = LayoutManager::time_grid_areas(area, all_day_height);

        let (_, header_columns) = LayoutManager::gutter_and_columns(header, days.len());
        for (date, rect) in days.iter().zip(header_columns) {
            let is_today = all_day.iter().any(|c| c.cell.date == *date && c.is_today);
            let style = if is_today {
                self.style(ColorRole::Today).add_modifier(Modifier::BOLD)
            } else {
                self.style(ColorRole::Muted)
            };
            let label = format!("{} {}/{}", WEEKDAYS[date.weekday().num_days_from_sunday() as usize], date.month(), date.day());
            f.render_widget(Paragraph::new(label).alignment(Alignment::Center).style(style), rect);
        }

        let (gutter, columns) = LayoutManager::gutter_and_columns(all_day_area, days.len());
        f.render_widget(Paragraph::new("all-day").style(self.style(ColorRole::Muted)), gutter);
        for (cell, rect) in all_day.iter().zip(columns) {
            self.render_all_day_cell(f, rect, cell);
        }

        let visible = hours_area.height as usize;
        if let Some(hour) = cursor.hour {
            let hour = hour as usize;
            if hour < self.hour_offset {
                self.hour_offset = hour;
            } else if visible > 0 && hour >= self.hour_offset + visible {
                self.hour_offset = hour + 1 - visible;
            }
        }
        self.hour_offset = self.hour_offset.min(hours.len().saturating_sub(visible));

        for (i, row) in hours.iter().skip(self.hour_offset).take(visible).enumerate() {
            let line = Rect::new(hours_area.x, hours_area.y + i as u16, hours_area.width, 1);
            let (gutter, columns) = LayoutManager::gutter_and_columns(line, days.len());
            f.render_widget(
                Paragraph::new(format!("{:02}:00", self.hour_offset + i)).style(self.style(ColorRole::Muted)),
                gutter,
            );
            for (cell, rect) in row.iter().zip(columns) {
                self.render_hour_cell(f, rect, cell);
            }
        }
    }

    fn render_all_day_cell(&mut self, f: &mut Frame, rect: Rect, cell: &CellView) {
        self.cell_areas.push((rect, cell.cell));
        let mut style = self.cell_style(cell);
        if cell.is_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        f.render_widget(Block::default().style(style), rect);

        let room = rect.height as usize;
        let (chips, hidden) = cell.visible_chips(room, 0);
        for (i, chip) in chips.iter().enumerate() {
            let line = Rect::new(rect.x, rect.y + i as u16, rect.width, 1);
            f.render_widget(Paragraph::new(Span::styled(chip.title.clone(), self.chip_style(chip))), line);
            self.chip_areas.push((line, chip.key));
        }
        if hidden > 0 {
            let y = rect.y + chips.len() as u16;
            f.render_widget(
                Paragraph::new(Span::styled(format!("+{} more", hidden), self.style(ColorRole::Muted))),
                Rect::new(rect.x, y, rect.width, 1),
            );
        }
    }

    fn render_hour_cell(&mut self, f: &mut Frame, rect: Rect, cell: &CellView) {
        self.cell_areas.push((rect, cell.cell));
        let mut style = self.cell_style(cell);
        if cell.is_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let content = match cell.chips.as_slice() {
            [] => Line::from(Span::styled("·", self.style(ColorRole::Border))),
            chips => {
                let shown = chips.iter().find(|c| c.focused).unwrap_or(&chips[0]);
                self.chip_areas.push((rect, shown.key));
                let mut spans = vec![Span::styled(shown.title.clone(), self.chip_style(shown))];
                if chips.len() > 1 {
                    spans.push(Span::styled(format!(" +{}", chips.len() - 1), self.style(ColorRole::Muted)));
                }
                Line::from(spans)
            }
        };
        f.render_widget(Paragraph::new(content).style(style), rect);
    }
}

impl Component for CalendarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let direction = match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Direction::Right),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Direction::Down),
            _ => None,
        };
        if let Some(direction) = direction {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return Action::None;
            }
            let extend = shift || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase());
            return Action::MoveCursor { direction, extend };
        }

        match key.code {
            KeyCode::Enter => match self.focused_key() {
                Some(key) => Action::ClickEvent(key),
                None => Action::CompleteSelection,
            },
            KeyCode::Tab => Action::FocusNextEvent,
            KeyCode::Char('n') | KeyCode::PageDown => Action::NextRange,
            KeyCode::Char('p') | KeyCode::PageUp => Action::PreviousRange,
            KeyCode::Char('t') => Action::Today,
            KeyCode::Char('m') => Action::ChangeView(ViewKind::Month),
            KeyCode::Char('w') => Action::ChangeView(ViewKind::Week),
            KeyCode::Char('d') => Action::ChangeView(ViewKind::Day),
            KeyCode::Char('[') => self.edit_focused(|key| Action::MoveEvent { key, days: -1 }),
            KeyCode::Char(']') => self.edit_focused(|key| Action::MoveEvent { key, days: 1 }),
            KeyCode::Char('-') => self.edit_focused(|key| Action::ResizeEvent { key, days: -1 }),
            KeyCode::Char('+') | KeyCode::Char('=') => self.edit_focused(|key| Action::ResizeEvent { key, days: 1 }),
            _ => Action::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.toolbar_action_at(column, row) {
                    return action;
                }
                if let Some(key) = self.chip_at(column, row) {
                    return Action::ClickEvent(key);
                }
                match self.cell_at(column, row) {
                    Some(cell) => {
                        self.dragging = true;
                        Action::BeginSelection(cell)
                    }
                    None => Action::None,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => match self.cell_at(column, row) {
                Some(cell) => Action::ExtendSelection(cell),
                None => Action::None,
            },
            MouseEventKind::Up(MouseButton::Left) if self.dragging => {
                self.dragging = false;
                Action::CompleteSelection
            }
            MouseEventKind::ScrollUp if self.cell_at(column, row).is_some() => Action::MoveCursor {
                direction: Direction::Up,
                extend: false,
            },
            MouseEventKind::ScrollDown if self.cell_at(column, row).is_some() => Action::MoveCursor {
                direction: Direction::Down,
                extend: false,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.toolbar_areas.clear();
        self.cell_areas.clear();
        self.chip_areas.clear();

        let Some(grid) = self.grid.clone() else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.style(ColorRole::Border))
            .style(Style::default().bg(self.palette.color(ColorRole::Background)));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let (toolbar, body) = LayoutManager::calendar_layout(inner);
        self.render_toolbar(f, toolbar, &grid);

        match &grid.body {
            GridBody::Month { weeks } => self.render_month(f, body, weeks, grid.day_max_events),
            GridBody::TimeGrid { days, all_day, hours } => {
                self.render_time_grid(f, body, days, all_day, hours, grid.cursor)
            }
        }
    }
}
