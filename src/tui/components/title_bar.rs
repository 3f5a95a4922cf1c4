//! # TitleBar Component
//!
//! Top status bar: application name, the current route, and a key hint
//! for the mounted screen.
//!
//! Stateless: it receives everything as props and renders a single line.
//!
//! ```text
//! Pokemon Explorer | / | / filter  ←/→ select  n/p page  g go to  q quit
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "Pokemon Explorer";

/// Top status bar component.
pub struct TitleBar {
    /// Current route path (e.g. `/pokemon/25`)
    pub route_path: String,
    /// Key hint for the mounted screen; omitted when empty
    pub hint: String,
}

impl TitleBar {
    pub fn new(route_path: String, hint: String) -> Self {
        Self { route_path, hint }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.route_path.clone(), Style::default().fg(Color::Cyan)),
        ];
        if !self.hint.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.hint.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
