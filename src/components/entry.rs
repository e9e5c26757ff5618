//! Entry component - the "Add Dishes" screen
//!
//! Owns the dish list and the form through `EntryState`, plus focus and
//! preview scroll for presentation.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_entry_layout, draw_button};
use crate::components::text::{fit_tail, truncate};
use crate::config::Config;
use crate::model::{DishEntry, EntryState, FormField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const ADD_COLOR: Color = Color::Rgb(0x07, 0x47, 0x34);
const VIEW_COLOR: Color = Color::Rgb(0x11, 0x66, 0xd6);

/// Message shown in place of an empty dish list
pub const EMPTY_MESSAGE: &str = "No dishes added yet.";

// ═══════════════════════════════════════════════════════════════════════════════
// Focus
// ═══════════════════════════════════════════════════════════════════════════════

/// Control that currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    AddButton,
    ViewButton,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Field(FormField::DishName) => Focus::Field(FormField::Description),
            Focus::Field(FormField::Description) => Focus::Field(FormField::Course),
            Focus::Field(FormField::Course) => Focus::Field(FormField::Price),
            Focus::Field(FormField::Price) => Focus::AddButton,
            Focus::AddButton => Focus::ViewButton,
            Focus::ViewButton => Focus::Field(FormField::DishName),
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Field(FormField::DishName) => Focus::ViewButton,
            Focus::Field(FormField::Description) => Focus::Field(FormField::DishName),
            Focus::Field(FormField::Course) => Focus::Field(FormField::Description),
            Focus::Field(FormField::Price) => Focus::Field(FormField::Course),
            Focus::AddButton => Focus::Field(FormField::Price),
            Focus::ViewButton => Focus::AddButton,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Entry Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct EntryComponent {
    /// Dish list and form values
    pub state: EntryState,

    /// Focused control
    pub focus: Focus,

    /// Number of preview rows scrolled past
    pub preview_scroll: usize,

    config: Config,
}

impl EntryComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            state: EntryState::new(),
            focus: Focus::Field(FormField::DishName),
            preview_scroll: 0,
            config: config.clone(),
        }
    }

    /// Label of the navigation control, including the entry count
    pub fn view_menu_label(&self) -> String {
        format!("View Menu ({})", self.state.len())
    }

    fn submit(&mut self) {
        if self.state.submit() {
            self.focus = Focus::Field(FormField::DishName);
            self.preview_scroll = 0;
        }
    }

    fn scroll_preview(&mut self, delta: isize) {
        let max = self.state.len().saturating_sub(1);
        self.preview_scroll = self.preview_scroll.saturating_add_signed(delta).min(max);
    }
}

impl Component for EntryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('n') if ctrl => Some(Action::ViewMenu),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::Input(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => match self.focus {
                Focus::ViewButton => Some(Action::ViewMenu),
                Focus::Field(_) | Focus::AddButton => Some(Action::SubmitDish),
            },
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::F(1) => Some(Action::OpenHelp),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Input(c) => {
                if let Focus::Field(field) = self.focus {
                    self.state.form.value_mut(field).push(c);
                }
            }
            Action::Backspace => {
                if let Focus::Field(field) = self.focus {
                    self.state.form.value_mut(field).pop();
                }
            }
            Action::SubmitDish => self.submit(),
            Action::ScrollUp => self.scroll_preview(-1),
            Action::ScrollDown => self.scroll_preview(1),
            Action::PageUp => self.scroll_preview(-5),
            Action::PageDown => self.scroll_preview(5),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_entry_layout(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " Add Dish",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, layout.title);

        for (field, input_area) in FormField::all().into_iter().zip(layout.inputs) {
            self.draw_input(frame, input_area, field);
        }

        draw_button(
            frame,
            layout.add_button,
            "Add Dish",
            ADD_COLOR,
            self.focus == Focus::AddButton,
        );
        draw_button(
            frame,
            layout.view_button,
            &self.view_menu_label(),
            VIEW_COLOR,
            self.focus == Focus::ViewButton,
        );

        self.draw_preview(frame, layout.preview);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Next  "),
            Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("Add  "),
            Span::styled(" ^N ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Span::raw("Menu  "),
            Span::styled(" F1 ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Help  "),
            Span::styled(" Esc ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("Quit"),
        ]));
        frame.render_widget(help, layout.help);

        Ok(())
    }
}

impl EntryComponent {
    fn draw_input(&self, frame: &mut Frame, area: Rect, field: FormField) {
        let focused = self.focus == Focus::Field(field);
        let value = self.state.form.value(field);
        let inner_width = area.width.saturating_sub(2) as usize;

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::default().borders(Borders::ALL).border_style(border_style);
        if field.numeric_hint() {
            block = block.title_bottom(Line::from(" 0-9 ").right_aligned());
        }

        let content = if value.is_empty() {
            Line::from(Span::styled(
                field.placeholder().to_string(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            // leave one column for the cursor
            Line::from(fit_tail(value, inner_width.saturating_sub(1)).to_string())
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        if focused && area.width > 2 && area.height > 2 {
            let shown = if value.is_empty() {
                0
            } else {
                fit_tail(value, inner_width.saturating_sub(1)).width()
            };
            frame.set_cursor_position(Position::new(area.x + 1 + shown as u16, area.y + 1));
        }
    }

    fn draw_preview(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.state.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(Color::Gray),
            )))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .state
            .entries()
            .iter()
            .skip(self.preview_scroll)
            .map(|entry| {
                let (title, sub) = preview_lines(entry, &self.config);
                ListItem::new(vec![
                    Line::from(Span::styled(
                        truncate(&title, width),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        truncate(&sub, width),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

/// Title and subtitle of a preview row
pub fn preview_lines(entry: &DishEntry, config: &Config) -> (String, String) {
    (
        format!("{} — {}", entry.dish_name, config.format_price(&entry.price)),
        format!("{} · {}", entry.course, entry.description),
    )
}
