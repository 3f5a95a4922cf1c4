//! # Go-To Prompt Component
//!
//! Small overlay for jumping straight to a detail route. Opened with `g`.
//! The typed id becomes `/pokemon/<id>`; submitting an empty prompt goes
//! to `/pokemon/`, the route with no id.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GotoPromptState` lives in `TuiState` while the overlay is open
//! - `GotoPrompt` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::Route;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const OVERLAY_WIDTH: u16 = 40;
const OVERLAY_HEIGHT: u16 = 3;
const PREFIX: &str = "/pokemon/";

/// Persistent state for the prompt overlay.
#[derive(Debug, Default)]
pub struct GotoPromptState {
    pub buffer: String,
}

/// Events emitted by the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoEvent {
    Go(Route),
    Dismiss,
}

impl GotoPromptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The route the current buffer points at.
    pub fn route(&self) -> Route {
        let id = self.buffer.trim();
        Route::Detail((!id.is_empty()).then(|| id.to_string()))
    }
}

impl EventHandler for GotoPromptState {
    type Event = GotoEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GotoEvent> {
        match event {
            TuiEvent::Escape => Some(GotoEvent::Dismiss),
            TuiEvent::Submit => Some(GotoEvent::Go(self.route())),
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            // Ids and names are ASCII letters, digits and '-'; anything else
            // would change the meaning of the request path.
            TuiEvent::InputChar(c) if c.is_ascii_alphanumeric() || *c == '-' => {
                self.buffer.push(*c);
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the prompt overlay.
pub struct GotoPrompt<'a> {
    state: &'a mut GotoPromptState,
}

impl<'a> GotoPrompt<'a> {
    pub fn new(state: &'a mut GotoPromptState) -> Self {
        Self { state }
    }
}

impl Component for GotoPrompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(OVERLAY_WIDTH, OVERLAY_HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Go to ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Go  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let text = format!("{PREFIX}{}", self.state.buffer);
        frame.render_widget(Paragraph::new(text.as_str()).block(block), overlay);

        let x = overlay.x + 2 + text.width() as u16;
        frame.set_cursor_position((x.min(overlay.right().saturating_sub(2)), overlay.y + 1));
    }
}

/// A `width` x `height` rect centered in `outer`, shrunk to fit.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}
