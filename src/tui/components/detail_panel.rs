//! # Detail Panel Component
//!
//! Scrollable body of the detail screen. Renders a `DetailView` as a stack
//! of sections inside a `ScrollView`:
//!
//! ```text
//! [b] ← Go Back
//!                 Pikachu
//! Artwork: https://.../25.png
//! ┌ Info ─────────────────────┐
//! │Type: electric             │
//! │Abilities: static, ...     │
//! └───────────────────────────┘
//! ┌ Stats ────────────────────┐
//! │Hp                       35│
//! └───────────────────────────┘
//! ┌ Moves ────────────────────┐
//! │mega-punch    pay-day   ...│
//! └───────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::detail_view::{DetailView, display_case};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MOVE_COLUMNS: usize = 2;

/// Persistent state for the detail panel.
#[derive(Default)]
pub struct DetailPanelState {
    pub scroll_state: ScrollViewState,
}

impl DetailPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }
}

impl EventHandler for DetailPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the detail panel.
pub struct DetailPanel<'a> {
    pub state: &'a mut DetailPanelState,
    pub view: &'a DetailView,
}

impl<'a> DetailPanel<'a> {
    pub fn new(state: &'a mut DetailPanelState, view: &'a DetailView) -> Self {
        Self { state, view }
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn section<'a>(title: &'a str, lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
}

/// Stat lines with the value right-aligned to `width`.
fn stat_lines(stats: &[(String, u32)], width: usize) -> Vec<Line<'static>> {
    stats
        .iter()
        .map(|(name, value)| {
            let name = display_case(name);
            let value = value.to_string();
            let gap = width.saturating_sub(name.chars().count() + value.len()).max(1);
            Line::from(vec![
                Span::raw(name),
                Span::raw(" ".repeat(gap)),
                Span::styled(value, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ])
        })
        .collect()
}

fn move_lines(moves: &[String], width: usize) -> Vec<Line<'static>> {
    let column_width = (width / MOVE_COLUMNS).max(1);
    moves
        .chunks(MOVE_COLUMNS)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|name| Span::raw(format!("{name:<column_width$}")))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let view = self.view;
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let inner_width = content_width.saturating_sub(2) as usize; // borders

        let back = Paragraph::new(Line::from(Span::styled(
            "[b] ← Go Back",
            Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        let title = Paragraph::new(Line::from(Span::styled(
            view.title.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        let artwork = Paragraph::new(vec![
            Line::from(vec![
                label("Artwork: "),
                Span::raw(view.artwork_url.as_deref().unwrap_or("unavailable")),
            ]),
            Line::from(vec![
                label("Sprite: "),
                Span::styled(
                    view.sprite_url.as_deref().unwrap_or("unavailable"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ])
        .wrap(Wrap { trim: false });
        let info = section(
            "Info",
            vec![
                Line::from(vec![
                    label("Type: "),
                    Span::styled(view.types.as_str(), Style::default().fg(Color::Blue)),
                ]),
                Line::from(vec![
                    label("Abilities: "),
                    Span::styled(view.abilities.as_str(), Style::default().fg(Color::Green)),
                ]),
            ],
        );
        let stats = section("Stats", stat_lines(&view.stats, inner_width));
        let moves = section("Moves", move_lines(&view.moves, inner_width));

        let blocks = [back, title, artwork, info, stats, moves];
        let spacing: u16 = 1;
        let heights: Vec<u16> = blocks
            .iter()
            .map(|p| p.line_count(content_width) as u16)
            .collect();
        let total_height = heights.iter().sum::<u16>() + spacing * (blocks.len() as u16 - 1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        for (paragraph, height) in blocks.into_iter().zip(heights) {
            scroll_view.render_widget(paragraph, Rect::new(0, y, content_width, height));
            y += height + spacing;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
