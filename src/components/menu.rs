//! Menu component - read-only cards for a snapshot of dishes
//!
//! Built once per navigation from the Menu route parameters. It never sees
//! the entry screen's live state, only the copy it was given.

use crate::action::Action;
use crate::component::Component;
use crate::components::entry::EMPTY_MESSAGE;
use crate::components::layout::{calculate_menu_layout, draw_button};
use crate::components::text::truncate;
use crate::config::Config;
use crate::model::{DishEntry, MenuParams};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows per card: four lines of content plus the border
const CARD_HEIGHT: u16 = 6;

const BRAND_GREEN: Color = Color::Rgb(0x07, 0x47, 0x34);
const COURSE_BLUE: Color = Color::Rgb(0x11, 0x66, 0xd6);
const PRICE_CORAL: Color = Color::Rgb(0xff, 0x6f, 0x61);

pub struct MenuComponent {
    items: Vec<DishEntry>,

    /// Index of the first visible card
    pub scroll: usize,

    /// Cards that fit on screen, as of the last draw
    page_size: usize,

    config: Config,
}

impl MenuComponent {
    /// Build the screen from the route parameters; absent parameters mean
    /// an empty menu.
    pub fn from_params(params: Option<&MenuParams>, config: &Config) -> Self {
        let items = params.map(|p| p.menu_items.clone()).unwrap_or_default();
        Self {
            items,
            scroll: 0,
            page_size: 1,
            config: config.clone(),
        }
    }

    pub fn items(&self) -> &[DishEntry] {
        &self.items
    }

    pub fn card_count(&self) -> usize {
        self.items.len()
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.items.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }
}

impl Component for MenuComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('b') => {
                Some(Action::GoBack)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::F(1) => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let page = self.page_size.max(1) as isize;
        match action {
            Action::ScrollDown => self.scroll_by(1),
            Action::ScrollUp => self.scroll_by(-1),
            Action::PageDown => self.scroll_by(page),
            Action::PageUp => self.scroll_by(-page),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_menu_layout(area);

        let title = Paragraph::new(Line::from(Span::styled(
            self.config.menu_title.clone(),
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(title, layout.title);

        if self.items.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )))
            .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(empty, layout.cards);
        } else {
            self.draw_cards(frame, layout.cards);
        }

        draw_button(frame, layout.back_button, "Back to Add Dishes", COURSE_BLUE, true);

        let position = if self.items.is_empty() {
            String::new()
        } else {
            format!("  {}/{}", self.scroll + 1, self.items.len())
        };
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Esc/b ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Back  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Scroll  "),
            Span::styled(" F1 ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Help  "),
            Span::styled(" q ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("Quit"),
            Span::styled(position, Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(help, layout.help);

        Ok(())
    }
}

impl MenuComponent {
    fn draw_cards(&mut self, frame: &mut Frame, area: Rect) {
        self.page_size = (area.height / CARD_HEIGHT).max(1) as usize;
        let inner_width = area.width.saturating_sub(4) as usize;

        let mut y = area.y;
        for entry in self.items.iter().skip(self.scroll).take(self.page_size) {
            let height = CARD_HEIGHT.min(area.y + area.height - y);
            if height < 3 {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, height);

            let lines = card_lines(entry, &self.config)
                .into_iter()
                .map(|line| truncate_line(line, inner_width))
                .collect::<Vec<_>>();
            let card = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(card, card_area);
            y += height;
        }
    }
}

fn truncate_line(line: Line<'static>, width: usize) -> Line<'static> {
    let style = line.spans.first().map(|s| s.style).unwrap_or_default();
    Line::from(Span::styled(truncate(&line.to_string(), width), style))
}

/// Content of one card: name, course, description, price
pub fn card_lines(entry: &DishEntry, config: &Config) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            entry.dish_name.clone(),
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            entry.course.clone(),
            Style::default().fg(COURSE_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            entry.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            config.format_price(&entry.price),
            Style::default().fg(PRICE_CORAL).add_modifier(Modifier::BOLD),
        )),
    ]
}
