//! Page header banner

use crate::theme::{ColorRole, Palette};
use crate::ui::core::{actions::Action, Component};
use crate::view::HeaderView;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

/// Title and subtitle banner at the top of the page.
pub struct HeaderComponent {
    view: HeaderView,
    palette: Palette,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self {
            view: HeaderView {
                title: String::new(),
                subtitle: String::new(),
            },
            palette: Palette::default(),
        }
    }

    pub fn update_data(&mut self, view: HeaderView, palette: Palette) {
        self.view = view;
        self.palette = palette;
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.view.title.clone(),
                Style::default()
                    .fg(self.palette.color(ColorRole::Text))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(
                self.view.subtitle.clone(),
                Style::default().fg(self.palette.color(ColorRole::Accent)),
            ),
        ]);

        let banner = Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.palette.color(ColorRole::Border)))
                .style(Style::default().bg(self.palette.color(ColorRole::Background))),
        );

        f.render_widget(banner, rect);
    }
}
