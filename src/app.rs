//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that owns the navigation stack and delegates event handling and rendering
//! to the active screen or the top modal.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_header, split_header, EntryComponent, HelpDialog, MenuComponent, QuitDialog,
};
use crate::config::Config;
use crate::model::{Modal, ModalStack, Navigator, Route};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    pub config: Config,

    /// Route stack, starts at Home
    pub navigator: Navigator,

    /// Modal overlay stack
    pub modals: ModalStack,

    // ─────────────────────────────────────────────────────────────────────────
    // Screens & Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Entry screen, alive for the whole session
    pub entry: EntryComponent,
    /// Menu screen instance for the current Menu route, if any
    pub menu: Option<MenuComponent>,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> App {
        App {
            should_quit: false,
            navigator: Navigator::new(),
            modals: ModalStack::new(),
            entry: EntryComponent::new(&config),
            menu: None,
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            config,
        }
    }

    /// Process an action and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current_action = Some(action);
        while let Some(a) = current_action {
            current_action = self.update(a)?;
        }
        Ok(())
    }

    fn on_menu(&self) -> bool {
        matches!(self.navigator.current(), Route::Menu(_))
    }

    /// Menu screen for the current route, built from the route parameters
    /// on first use
    fn active_menu(&mut self) -> &mut MenuComponent {
        let params = self.navigator.current().menu_params();
        let config = &self.config;
        self.menu
            .get_or_insert_with(|| MenuComponent::from_params(params, config))
    }

    fn view_menu(&mut self) {
        let params = self.entry.state.snapshot();
        self.navigator.push(Route::Menu(params));
        self.menu = Some(MenuComponent::from_params(
            self.navigator.current().menu_params(),
            &self.config,
        ));
    }

    fn go_back(&mut self) {
        if self.navigator.pop().is_some() {
            self.menu = None;
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        if self.on_menu() {
            self.active_menu().handle_key_event(key)
        } else {
            self.entry.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                tracing::info!(dishes = self.entry.state.len(), "quit");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Form Editing (delegate to EntryComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext
            | Action::FocusPrev
            | Action::Input(_)
            | Action::Backspace
            | Action::SubmitDish => {
                return self.entry.update(action);
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::ViewMenu => self.view_menu(),
            Action::GoBack => self.go_back(),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to the active screen)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                return if self.on_menu() {
                    self.active_menu().update(action)
                } else {
                    self.entry.update(action)
                };
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.dish_count = self.entry.state.len();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                if self.modals.top() != Some(&Modal::Help) {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (header, body) = split_header(area);
        draw_header(
            frame,
            header,
            self.navigator.current(),
            self.navigator.previous(),
        );

        if self.on_menu() {
            self.active_menu().draw(frame, body)?;
        } else {
            self.entry.draw(frame, body)?;
        }

        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        if let Some(action) = app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap() {
            app.dispatch(action).unwrap();
        }
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill the four inputs (name, description, course, price) and submit
    fn add_dish(app: &mut App, name: &str, description: &str, course: &str, price: &str) {
        for (i, value) in [name, description, course, price].into_iter().enumerate() {
            if i > 0 {
                press(app, KeyCode::Tab);
            }
            type_str(app, value);
        }
        press(app, KeyCode::Enter);
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.draw(frame, area).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_app_starts_on_home() {
        let app = App::default();
        assert_eq!(app.navigator.current(), &Route::Home);
        assert!(app.menu.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_end_to_end_add_two_dishes_and_view_menu() {
        let mut app = App::default();
        add_dish(&mut app, "Bunny Chow", "", "", "");
        add_dish(&mut app, "Malva Pudding", "Sweet dessert", "Dessert", "35.50");
        press_with(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);

        assert_eq!(app.navigator.current().name(), "Menu");
        let menu = app.menu.as_ref().unwrap();
        assert_eq!(menu.card_count(), 2);

        let first = &menu.items()[0];
        assert_eq!(first.dish_name, "Malva Pudding");
        assert_eq!(first.course, "Dessert");
        assert_eq!(first.description, "Sweet dessert");
        assert_eq!(app.config.format_price(&first.price), "R35.50");

        let second = &menu.items()[1];
        assert_eq!(second.dish_name, "Bunny Chow");
        assert_eq!(second.course, "Main");
        assert_eq!(second.description, "");
        assert_eq!(app.config.format_price(&second.price), "R0.00");
    }

    #[test]
    fn test_blank_name_submit_is_noop() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "orphan description");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.entry.state.len(), 0);
        assert_eq!(app.entry.state.form.description, "orphan description");
    }

    #[test]
    fn test_menu_snapshot_isolated_from_later_adds() {
        let mut app = App::default();
        add_dish(&mut app, "Soup", "", "", "");
        app.dispatch(Action::ViewMenu).unwrap();

        // entries added while the menu instance exists are not visible to it
        app.entry.update(Action::Input('X')).unwrap();
        app.entry.update(Action::SubmitDish).unwrap();

        assert_eq!(app.entry.state.len(), 2);
        assert_eq!(app.menu.as_ref().unwrap().card_count(), 1);
    }

    #[test]
    fn test_go_back_keeps_entry_state() {
        let mut app = App::default();
        add_dish(&mut app, "Soup", "", "", "");
        type_str(&mut app, "half typed");
        app.dispatch(Action::ViewMenu).unwrap();

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator.current(), &Route::Home);
        assert!(app.menu.is_none());
        assert_eq!(app.entry.state.len(), 1);
        assert_eq!(app.entry.state.form.dish_name, "half typed");
    }

    #[test]
    fn test_renavigate_takes_fresh_snapshot() {
        let mut app = App::default();
        add_dish(&mut app, "Soup", "", "", "");
        app.dispatch(Action::ViewMenu).unwrap();
        app.dispatch(Action::GoBack).unwrap();
        add_dish(&mut app, "Bread", "", "", "");
        app.dispatch(Action::ViewMenu).unwrap();

        assert_eq!(app.menu.as_ref().unwrap().card_count(), 2);
        assert_eq!(app.navigator.depth(), 2);
    }

    #[test]
    fn test_go_back_at_home_is_noop() {
        let mut app = App::default();
        app.dispatch(Action::GoBack).unwrap();
        assert_eq!(app.navigator.current(), &Route::Home);
        assert_eq!(app.navigator.depth(), 1);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        // typing goes to the dialog, not the form
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(app.entry.state.form.is_empty());

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = App::default();
        app.dispatch(Action::ViewMenu).unwrap();
        app.dispatch(Action::OpenHelp).unwrap();
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_does_not_stack_twice() {
        let mut app = App::default();
        app.dispatch(Action::OpenHelp).unwrap();
        app.dispatch(Action::OpenHelp).unwrap();
        app.dispatch(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_draw_menu_route_shows_header_and_cards() {
        let mut app = App::default();
        add_dish(&mut app, "Bunny Chow", "", "", "");
        app.dispatch(Action::ViewMenu).unwrap();

        let screen = render(&mut app);
        assert!(screen.contains("Add Dishes"));
        assert!(screen.contains("Bunny Chow"));
        assert!(screen.contains("R0.00"));
        assert!(screen.contains("Back to Add Dishes"));
    }

    #[test]
    fn test_draw_empty_menu_route() {
        let mut app = App::default();
        app.dispatch(Action::ViewMenu).unwrap();
        let screen = render(&mut app);
        assert!(screen.contains("No dishes added yet."));
    }
}
