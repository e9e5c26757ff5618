//! Layout calculations and shared chrome for both screens

use crate::model::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the route header bar
pub const HEADER_HEIGHT: u16 = 3;

/// Entry screen layout areas
pub struct EntryLayout {
    pub title: Rect,
    pub inputs: [Rect; 4],
    pub add_button: Rect,
    pub view_button: Rect,
    pub preview: Rect,
    pub help: Rect,
}

/// Menu screen layout areas
pub struct MenuLayout {
    pub title: Rect,
    pub cards: Rect,
    pub back_button: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Split the full frame into the header bar and the screen body
pub fn split_header(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn calculate_entry_layout(area: Rect) -> EntryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Dish name
            Constraint::Length(3), // Description
            Constraint::Length(3), // Course
            Constraint::Length(3), // Price
            Constraint::Length(3), // Buttons
            Constraint::Min(0),    // Preview list
            Constraint::Length(1), // Help
        ])
        .split(area);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[5]);

    EntryLayout {
        title: chunks[0],
        inputs: [chunks[1], chunks[2], chunks[3], chunks[4]],
        add_button: buttons[0],
        view_button: buttons[1],
        preview: chunks[6],
        help: chunks[7],
    }
}

pub fn calculate_menu_layout(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(0),    // Cards
            Constraint::Length(3), // Back button
            Constraint::Length(1), // Help
        ])
        .split(area);

    MenuLayout {
        title: chunks[0],
        cards: chunks[1],
        back_button: chunks[2],
        help: chunks[3],
    }
}

/// Draw the navigation header: back hint (if any) and the route title
pub fn draw_header(frame: &mut Frame, area: Rect, current: &Route, previous: Option<&Route>) {
    let mut spans = Vec::new();
    if let Some(prev) = previous {
        spans.push(Span::styled(
            format!(" ← {} ", prev.title()),
            Style::default().fg(Color::Rgb(0x11, 0x66, 0xd6)),
        ));
        spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled(
        format!(" {} ", current.title()),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Draw a full-width action control
pub fn draw_button(frame: &mut Frame, area: Rect, label: &str, color: Color, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let label_style = if focused {
        Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), label_style)))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(button, area);
}
