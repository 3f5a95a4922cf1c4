//! # Status View Component
//!
//! Full-screen, vertically centered message used for the loading, error,
//! and not-found states of both screens. Replaces the screen body entirely.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Failure,
}

pub struct StatusView<'a> {
    pub kind: StatusKind,
    pub headline: &'a str,
    /// Recovery hint shown under the headline (e.g. "[r] Retry")
    pub action: Option<&'a str>,
    pub spinner_frame: usize,
}

impl<'a> StatusView<'a> {
    pub fn loading(headline: &'a str, spinner_frame: usize) -> Self {
        Self {
            kind: StatusKind::Loading,
            headline,
            action: None,
            spinner_frame,
        }
    }

    pub fn failure(headline: &'a str, action: &'a str) -> Self {
        Self {
            kind: StatusKind::Failure,
            headline,
            action: Some(action),
            spinner_frame: 0,
        }
    }
}

impl Component for StatusView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        match self.kind {
            StatusKind::Loading => {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                lines.push(Line::from(vec![
                    Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        self.headline,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            StatusKind::Failure => {
                lines.push(Line::from(Span::styled(
                    self.headline,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
            }
        }
        if let Some(action) = self.action {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                action,
                Style::default().fg(Color::White).bg(Color::Red),
            )));
        }

        let height = lines.len() as u16;
        let [center] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_rows, buffer_text};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_failure_shows_headline_and_action() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| StatusView::failure("Failed to Load Pokemon", "[r] Retry").render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Failed to Load Pokemon"));
        assert!(text.contains("[r] Retry"));
    }

    #[test]
    fn test_loading_is_vertically_centered() {
        let mut terminal = Terminal::new(TestBackend::new(60, 11)).unwrap();
        terminal
            .draw(|f| StatusView::loading("Loading Pokemon...", 1).render(f, f.area()))
            .unwrap();

        let rows = buffer_rows(terminal.backend().buffer());
        let row = rows.iter().position(|r| r.contains("Loading Pokemon...")).unwrap();
        assert_eq!(row, 5);
        assert!(rows[row].contains("/ Loading"));
    }
}
