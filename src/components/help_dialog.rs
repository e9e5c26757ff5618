//! Help dialog component
//!
//! Lists the keyboard shortcuts of both screens.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let total = content.len();

        let dialog_area = centered_popup(area, 56, (total as u16).saturating_add(2));
        frame.render_widget(Clear, dialog_area);

        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Add Dishes");
    add_shortcut(&mut lines, "Tab / ↓", "Next field or button");
    add_shortcut(&mut lines, "Shift+Tab / ↑", "Previous field or button");
    add_shortcut(&mut lines, "Enter", "Add dish (View Menu when focused)");
    add_shortcut(&mut lines, "Ctrl+n", "View menu");
    add_shortcut(&mut lines, "PgUp / PgDn", "Scroll added dishes");
    add_shortcut(&mut lines, "Esc", "Quit");

    add_section(&mut lines, "Menu");
    add_shortcut(&mut lines, "Esc / b", "Back to Add Dishes");
    add_shortcut(&mut lines, "j / k", "Scroll cards");
    add_shortcut(&mut lines, "PgUp / PgDn", "Scroll a page");
    add_shortcut(&mut lines, "q", "Quit");

    add_section(&mut lines, "Anywhere");
    add_shortcut(&mut lines, "F1", "Show this help");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or F1 to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_help_covers_both_screens() {
        let text: Vec<String> = build_help_content().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Add Dishes")));
        assert!(text.iter().any(|l| l.contains("Back to Add Dishes")));
    }

    #[test]
    fn test_help_keys() {
        let mut dialog = HelpDialog::default();
        let down = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(down, None);
        assert_eq!(dialog.scroll_offset, 1);

        let close = dialog
            .handle_key_event(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(close, Some(Action::CloseModal));
    }
}
