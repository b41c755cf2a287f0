//! Sidebar listing the mirrored events.
//!
//! One row per event in mirrored order: the title in the event color and the
//! short start date underneath. The list scrolls with Ctrl+Up/Down or the
//! mouse wheel when it does not fit.

use crate::theme::{ColorRole, Palette};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::view::SidebarView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem},
    Frame,
};

/// Lines used by one event row
const ROW_HEIGHT: usize = 2;

pub struct SidebarComponent {
    view: SidebarView,
    palette: Palette,
    scroll_offset: usize,
    area: Rect,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            view: SidebarView {
                title: String::new(),
                rows: Vec::new(),
            },
            palette: Palette::default(),
            scroll_offset: 0,
            area: Rect::default(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(&mut self, view: SidebarView, palette: Palette) {
        self.view = view;
        self.palette = palette;
        self.clamp_scroll();
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn row_count(&self) -> usize {
        self.view.rows.len()
    }

    fn visible_rows(&self) -> usize {
        (self.area.height.saturating_sub(2) as usize / ROW_HEIGHT).max(1)
    }

    fn scroll_by(&mut self, delta: i32) {
        self.scroll_offset = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = ScrollbarHelper::max_offset(self.view.rows.len(), self.visible_rows());
        self.scroll_offset = self.scroll_offset.min(max);
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => Action::SidebarScroll(-1),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => Action::SidebarScroll(1),
            _ => Action::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !LayoutManager::contains(self.area, mouse.column, mouse.row) {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Action::SidebarScroll(-1),
            MouseEventKind::ScrollDown => Action::SidebarScroll(1),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SidebarScroll(delta) => {
                self.scroll_by(delta);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        self.clamp_scroll();

        let event_style = Style::default()
            .fg(self.palette.color(ColorRole::Event))
            .add_modifier(Modifier::BOLD);
        let date_style = Style::default().fg(self.palette.color(ColorRole::Muted));

        let items: Vec<ListItem> = self
            .view
            .rows
            .iter()
            .skip(self.scroll_offset)
            .map(|row| {
                ListItem::new(vec![
                    Line::from(vec![Span::styled("● ", event_style), Span::styled(row.title.clone(), event_style)]),
                    Line::from(Span::styled(format!("  {}", row.date_label), date_style)),
                ])
            })
            .collect();

        let total_lines = self.view.rows.len() * ROW_HEIGHT;
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_lines);
        self.scrollbar_helper.update_state(
            self.view.rows.len(),
            self.scroll_offset,
            self.visible_rows(),
        );

        let title = format!("{} ({})", self.view.title, self.view.rows.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .title_style(Style::default().fg(self.palette.color(ColorRole::Text)))
                    .border_style(Style::default().fg(self.palette.color(ColorRole::Border))),
            )
            .style(
                Style::default()
                    .fg(self.palette.color(ColorRole::Text))
                    .bg(self.palette.color(ColorRole::Surface)),
            );

        f.render_widget(list, list_area);
        self.scrollbar_helper
            .render(f, scrollbar_area, self.palette.color(ColorRole::Muted));
    }
}
