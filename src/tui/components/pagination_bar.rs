//! # Pagination Bar Component
//!
//! `[p] Previous   Page 3 of 6   Next [n]`, with each button dimmed when
//! the list screen says it is disabled. Stateless.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct PaginationBar {
    pub page: u32,
    pub total_pages: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for PaginationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" [p] Previous ", button_style(self.previous_enabled)),
            Span::raw("   "),
            Span::styled(
                format!("Page {} of {}", self.page, self.total_pages),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(" Next [n] ", button_style(self.next_enabled)),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
