use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::{ColorRole, Palette};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
        .style(Style::default().bg(palette.color(ColorRole::Surface)))
}

/// Creates an input field block with a visual cursor at `cursor_position` (in chars)
pub fn create_input_paragraph<'a>(
    input_buffer: &str,
    cursor_position: usize,
    field_title: &str,
    palette: &Palette,
) -> Paragraph<'a> {
    let before: String = input_buffer.chars().take(cursor_position).collect();
    let after: String = input_buffer.chars().skip(cursor_position).collect();
    let text_style = Style::default().fg(palette.color(ColorRole::Text));

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(text_style)
        .border_style(Style::default().fg(palette.color(ColorRole::Muted)));

    Paragraph::new(Line::from(vec![
        Span::styled(before, text_style),
        Span::styled("█", Style::default().fg(palette.color(ColorRole::Accent))),
        Span::styled(after, text_style),
    ]))
    .block(input_block)
}

/// Creates a read-only field block with a title
pub fn create_selection_paragraph(value: String, field_title: &str, palette: &Palette) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(palette.color(ColorRole::Text)))
        .border_style(Style::default().fg(palette.color(ColorRole::Muted)));

    Paragraph::new(value)
        .block(block)
        .style(Style::default().fg(palette.color(ColorRole::Muted)))
}

/// Instruction shortcut definition: (key, color role, description)
pub type InstructionShortcut = (&'static str, ColorRole, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], palette: &Palette) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, role, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(palette.color(*role)).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(palette.color(ColorRole::Muted))));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", ColorRole::Muted, "");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", ColorRole::Accent, " Save");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", ColorRole::Danger, " Cancel");
    pub const YES_DELETE: InstructionShortcut = ("y/Enter", ColorRole::Danger, " Delete");
    pub const NO_KEEP: InstructionShortcut = ("n/Esc", ColorRole::Accent, " Keep");
}
