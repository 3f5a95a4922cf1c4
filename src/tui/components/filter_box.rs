//! # FilterBox Component
//!
//! Single-line search field above the list grid. The text itself is list
//! screen state in core; the box keeps a synced copy to edit and reports
//! every change as a `FilterEvent`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search Pokemon...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    Changed(String),
    /// Editing finished (Enter or Esc)
    Done,
}

#[derive(Debug, Default)]
pub struct FilterBox {
    pub buffer: String,
    /// Whether keystrokes currently go to this box (prop)
    pub focused: bool,
}

impl FilterBox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for FilterBox {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FilterEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(FilterEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                Some(FilterEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Submit | TuiEvent::Escape => Some(FilterEvent::Done),
            _ => None,
        }
    }
}

impl Component for FilterBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(
            paragraph.block(Block::bordered().title(" / ").border_style(border_style)),
            area,
        );

        if self.focused {
            let width = self.buffer.width() as u16;
            let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}
