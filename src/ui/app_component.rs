use crate::board::EventBoard;
use crate::config::Config;
use crate::error::BoardError;
use crate::logger::Logger;
use crate::theme::ColorRole;
use crate::ui::components::{
    CalendarComponent, DialogComponent, HeaderComponent, SidebarComponent, StatusBar, StatusMessage,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use crate::view::{BoardView, PromptView, ViewConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};

/// Root component: owns the board and the child components.
///
/// Every frame projects the board into a [`BoardView`] and hands each child
/// its slice of it. Children turn input into [`Action`]s; actions that touch
/// the board are applied here.
pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    sidebar: SidebarComponent,
    calendar: CalendarComponent,
    dialog: DialogComponent,

    // Application state
    board: EventBoard,
    view_config: ViewConfig,
    mouse_enabled: bool,
    status: Option<StatusMessage>,
    logger: Logger,
    last_width: u16,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(board: EventBoard, view_config: ViewConfig, mouse_enabled: bool, logger: Logger) -> Self {
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());
        dialog.update_palette(view_config.palette.clone());

        let mut app = Self {
            header: HeaderComponent::new(),
            sidebar: SidebarComponent::new(),
            calendar: CalendarComponent::new(),
            dialog,
            board,
            view_config,
            mouse_enabled,
            status: None,
            logger,
            last_width: 0,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    /// Mount a fresh board as described by `config`
    pub fn from_config(config: &Config, logger: Logger) -> anyhow::Result<Self> {
        let options = config.calendar.calendar_options(datetime::today())?;
        let board = EventBoard::mount(options);
        logger.log(format!("Board mounted with {} event(s)", board.events().len()));
        Ok(Self::new(
            board,
            ViewConfig::from_config(config),
            config.ui.mouse_enabled,
            logger,
        ))
    }

    pub fn board(&self) -> &EventBoard {
        &self.board
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.dialog.is_visible() {
            return Action::None;
        }
        match self.sidebar.handle_mouse(mouse) {
            Action::None => self.calendar.handle_mouse(mouse),
            action => action,
        }
    }

    /// Route one input event through the component tree and apply the result
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_event(mouse),
            EventType::Resize(width, _) => {
                self.last_width = width;
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();
        Ok(())
    }

    /// Apply an action that reached the top of the tree
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::MoveCursor { direction, extend } => {
                self.board.calendar_mut().move_cursor(direction, extend);
                Action::None
            }
            Action::PreviousRange => {
                self.board.calendar_mut().prev();
                Action::None
            }
            Action::NextRange => {
                self.board.calendar_mut().next();
                Action::None
            }
            Action::Today => {
                self.board.calendar_mut().go_today();
                Action::None
            }
            Action::ChangeView(view) => {
                self.board.calendar_mut().set_view(view);
                Action::None
            }
            Action::FocusNextEvent => {
                self.board.calendar_mut().focus_next_event();
                Action::None
            }
            Action::BeginSelection(cell) => {
                self.board.calendar_mut().begin_selection(cell);
                Action::None
            }
            Action::ExtendSelection(cell) => {
                self.board.calendar_mut().extend_selection_to(cell);
                Action::None
            }
            Action::CompleteSelection => {
                let Some(selection) = self.board.calendar_mut().complete_selection() else {
                    self.set_info("Selection is disabled");
                    return Action::None;
                };
                match self.board.select_range(selection) {
                    Ok(()) => self.open_prompt(),
                    Err(e) => self.report(e),
                }
                Action::None
            }
            Action::ClickEvent(key) => {
                self.board.calendar_mut().focus_event(key);
                match self.board.click_event(key) {
                    Ok(()) => self.open_prompt(),
                    Err(e) => self.report(e),
                }
                Action::None
            }
            Action::MoveEvent { key, days } => {
                if let Err(e) = self.board.move_event(key, days) {
                    self.report(e);
                }
                Action::None
            }
            Action::ResizeEvent { key, days } => {
                if let Err(e) = self.board.resize_event(key, days) {
                    self.report(e);
                }
                Action::None
            }
            Action::SubmitTitle(title) => {
                match self.board.submit_title(title.as_deref()) {
                    Ok(Some(event)) => self.set_info(&format!("Added '{}'", event.title)),
                    Ok(None) => self.set_info("No event added"),
                    Err(e) => self.report(e),
                }
                self.dialog.update(Action::HideDialog)
            }
            Action::ConfirmRemoval(accepted) => {
                match self.board.confirm_removal(accepted) {
                    Ok(Some(event)) => self.set_info(&format!("Deleted '{}'", event.title)),
                    Ok(None) => self.set_info("Event kept"),
                    Err(e) => self.report(e),
                }
                self.dialog.update(Action::HideDialog)
            }
            Action::ShowDialog(_) | Action::HideDialog => self.dialog.update(action),
            Action::Quit => {
                self.logger.log("Quitting".to_string());
                self.should_quit = true;
                Action::Quit
            }
            Action::SidebarScroll(_) | Action::None => Action::None,
        }
    }

    /// Show the dialog for the prompt the board just opened
    fn open_prompt(&mut self) {
        if let Some(prompt) = self.board.prompt() {
            let dialog = DialogType::from(PromptView::from_prompt(prompt));
            self.dialog.update(Action::ShowDialog(dialog));
        }
    }

    fn set_info(&mut self, message: &str) {
        self.logger.log(message.to_string());
        self.status = Some(StatusMessage::Info(message.to_string()));
    }

    fn report(&mut self, error: BoardError) {
        match &error {
            BoardError::NotEditable | BoardError::InvalidResize(_) => log::debug!("Edit refused: {}", error),
            _ => log::warn!("Board error: {}", error),
        }
        self.logger.log(format!("Error: {}", error));
        self.status = Some(StatusMessage::Error(error.to_string()));
    }

    /// Project the board and hand each child component its part of the view
    fn sync_component_data(&mut self) -> BoardView {
        let view = BoardView::project(&self.board, &self.view_config, self.last_width);
        self.header.update_data(view.header.clone(), view.palette.clone());
        self.sidebar.update_data(view.sidebar.clone(), view.palette.clone());
        self.calendar.update_data(view.grid.clone(), view.palette.clone());
        self.dialog.update_palette(view.palette.clone());
        view
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.handle_global_key(key) {
            Action::None => {}
            action => return action,
        }
        match self.sidebar.handle_key_events(key) {
            Action::None => self.calendar.handle_key_events(key),
            action => action,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        self.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.sidebar.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_width = rect.width;
        let view = self.sync_component_data();

        f.render_widget(
            Block::default().style(Style::default().bg(view.palette.color(ColorRole::Background))),
            rect,
        );

        let areas = LayoutManager::board_layout(rect, view.layout);
        self.header.render(f, areas.header);
        self.sidebar.render(f, areas.sidebar);
        self.calendar.render(f, areas.calendar);
        StatusBar::render(f, areas.status, &view.palette, self.status.as_ref());

        // Dialog overlays everything else
        self.dialog.render(f, rect);
    }
}
