//! Status bar component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::theme::{ColorRole, Palette};

/// Last outcome shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hint shown when there is nothing else to report
    pub const HINT: &'static str =
        "Arrows: move • Shift+Arrows: extend • Enter: select • Tab: events • n/p: page • m/w/d: view • ?: help • q: quit";

    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, palette: &Palette, message: Option<&StatusMessage>) {
        let (status_text, role) = match message {
            Some(StatusMessage::Info(text)) => (text.as_str(), ColorRole::Accent),
            Some(StatusMessage::Error(text)) => (text.as_str(), ColorRole::Danger),
            None => (Self::HINT, ColorRole::Muted),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.color(role)));

        f.render_widget(status_bar, area);
    }
}
