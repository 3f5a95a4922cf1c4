//! # Entry Grid Component
//!
//! The list screen's grid of cards, one per visible (filtered) entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EntryGridState` lives in `TuiState` (cursor, column count, scroll row)
//! - `EntryGrid` is created each frame with borrowed state and entries
//!
//! The column count depends on the terminal width, so it is recorded during
//! render and used by the next key event to move the cursor up and down.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::api::DetailRecord;
use crate::core::detail_view::display_case;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub const CELL_WIDTH: u16 = 22;
pub const CELL_HEIGHT: u16 = 4;
const MAX_COLUMNS: usize = 5;

/// Persistent state for the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGridState {
    pub selected: usize,
    pub columns: usize,
    /// First grid row drawn (scrolls to keep the cursor visible)
    pub scroll_row: usize,
}

impl Default for EntryGridState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// Open the detail screen for this route id.
    Open(String),
}

impl EntryGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            columns: 1,
            scroll_row: 0,
        }
    }

    /// Keeps the cursor inside `len` entries.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Handle a key event against the currently visible entries.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        visible: &[&DetailRecord],
    ) -> Option<GridEvent> {
        let len = visible.len();
        if len == 0 {
            return None;
        }
        self.clamp(len);
        let columns = self.columns.max(1);
        match event {
            TuiEvent::CursorLeft => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorRight => self.selected = (self.selected + 1).min(len - 1),
            TuiEvent::CursorUp => self.selected = self.selected.saturating_sub(columns),
            TuiEvent::CursorDown => {
                if self.selected + columns < len {
                    self.selected += columns;
                }
            }
            TuiEvent::Submit => {
                return visible
                    .get(self.selected)
                    .map(|entry| GridEvent::Open(entry.route_id()));
            }
            _ => {}
        }
        None
    }
}

/// Number of columns that fit in `width`.
pub fn columns_for(width: u16) -> usize {
    ((width / CELL_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

/// Transient render wrapper for the grid.
pub struct EntryGrid<'a> {
    pub state: &'a mut EntryGridState,
    pub entries: &'a [&'a DetailRecord],
    pub filter: &'a str,
}

impl<'a> EntryGrid<'a> {
    pub fn new(state: &'a mut EntryGridState, entries: &'a [&'a DetailRecord], filter: &'a str) -> Self {
        Self {
            state,
            entries,
            filter,
        }
    }
}

impl Component for EntryGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.entries.is_empty() {
            let message = if self.filter.is_empty() {
                "No Pokemon on this page".to_string()
            } else {
                format!("No Pokemon match \"{}\" on this page", self.filter)
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let columns = columns_for(area.width);
        self.state.columns = columns;
        self.state.clamp(self.entries.len());

        let visible_rows = ((area.height / CELL_HEIGHT) as usize).max(1);
        let cursor_row = self.state.selected / columns;
        if cursor_row < self.state.scroll_row {
            self.state.scroll_row = cursor_row;
        } else if cursor_row >= self.state.scroll_row + visible_rows {
            self.state.scroll_row = cursor_row + 1 - visible_rows;
        }

        let row_areas = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); visible_rows]).split(area);
        let chunks = self.entries.chunks(columns).enumerate().skip(self.state.scroll_row);
        for ((row_index, row), row_area) in chunks.zip(row_areas.iter()) {
            let cell_areas =
                Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); columns]).split(*row_area);
            for (col_index, (entry, cell_area)) in row.iter().zip(cell_areas.iter()).enumerate() {
                let index = row_index * columns + col_index;
                render_cell(frame, *cell_area, entry, index == self.state.selected);
            }
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, entry: &DetailRecord, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let inner_width = area.width.saturating_sub(2) as usize;
    let name = truncate(&display_case(&entry.name), inner_width);
    let name_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let lines = vec![
        Line::from(Span::styled(name, name_style)),
        Line::from(Span::styled(
            format!("#{:03}", entry.id),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border_style));
    frame.render_widget(card, area);
}

/// Truncate to `max_width` display columns, adding "..." if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.to_string().width() > max_width - 3 {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}
