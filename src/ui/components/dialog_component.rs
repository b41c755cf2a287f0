//! Modal dialog component.
//!
//! Hosts the two board prompts (event title input and removal confirmation)
//! plus the help and logs overlays. Prompt dialogs never change board state
//! themselves; they turn keys into [`Action::SubmitTitle`] or
//! [`Action::ConfirmRemoval`] and the app resolves the board.

use crate::logger::Logger;
use crate::theme::Palette;
use crate::ui::components::dialogs::{board_dialogs, system_dialogs, ScrollPosition};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    scroll: ScrollPosition,
    palette: Palette,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            scroll: ScrollPosition::default(),
            palette: Palette::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn update_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Whether the open dialog is one of the board prompts
    pub fn is_prompt(&self) -> bool {
        matches!(
            self.dialog_type,
            Some(DialogType::EventTitle { .. }) | Some(DialogType::RemovalConfirmation { .. })
        )
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    fn byte_position(&self) -> usize {
        self.input_buffer
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::SubmitTitle(None),
            KeyCode::Enter => Action::SubmitTitle(Some(self.input_buffer.clone())),
            KeyCode::Char(c) => {
                let byte_pos = self.byte_position();
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = self.byte_position();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    let byte_pos = self.byte_position();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input_buffer.chars().count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::EventTitle { .. }) => self.handle_input_key(key),
            Some(DialogType::RemovalConfirmation { .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmRemoval(true),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Action::ConfirmRemoval(false),
                _ => Action::None,
            },
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::EventTitle { message, range } => board_dialogs::render_event_title_dialog(
                f,
                rect,
                &self.palette,
                &message,
                &range,
                &self.input_buffer,
                self.cursor_position,
            ),
            DialogType::RemovalConfirmation { message } => {
                board_dialogs::render_removal_confirmation_dialog(f, rect, &self.palette, &message)
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &self.palette, &mut self.scroll),
            DialogType::Logs => {
                system_dialogs::render_logs_dialog(f, rect, &self.palette, self.logger.as_ref(), &mut self.scroll)
            }
        }
    }
}
