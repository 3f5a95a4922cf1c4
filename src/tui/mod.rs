//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a screen is loading): draws every ~80ms for the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results,
//!   or terminal resize.
//!
//! ## Fetches
//!
//! `update()` returns an `Effect` naming the fetch a screen needs. The loop
//! spawns it on the tokio runtime, and the task sends the settled result
//! back over an mpsc channel as `PageLoaded` / `DetailLoaded`. In-flight
//! fetches are never cancelled; a result whose screen is gone is dropped by
//! `update()`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::api::{CatalogSource, PokeApiClient, load_detail, load_page};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, DetailStatus, Route, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailPanelState, EntryGridState, FilterBox, FilterEvent, GotoEvent, GotoPromptState,
    GridEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode for the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands: paging, grid cursor, reload.
    Browse,
    /// Keys edit the filter box. Enter or Esc returns to Browse.
    Filter,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub filter_box: FilterBox,
    pub grid: EntryGridState,
    pub detail_panel: DetailPanelState,
    // Go-to overlay (None = hidden)
    pub goto_prompt: Option<GotoPromptState>,
    pub input_mode: InputMode,
    // Route and page last drawn; a change resets cursor and scroll
    mounted: Option<(Route, u32)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            filter_box: FilterBox::new(),
            grid: EntryGridState::new(),
            detail_panel: DetailPanelState::new(),
            goto_prompt: None,
            input_mode: InputMode::Browse,
            mounted: None,
        }
    }

    /// Brings presentation state in line with the mounted screen.
    pub fn sync(&mut self, app: &App) {
        let page = app.list().map_or(0, |list| list.page);
        let key = (app.route(), page);
        if self.mounted.as_ref() != Some(&key) {
            debug!("Presentation reset for {} (page {})", key.0.path(), page);
            self.grid = EntryGridState::new();
            self.detail_panel.reset();
            self.mounted = Some(key);
        }

        match app.list() {
            Some(list) if !list.is_loading && !list.error => {
                self.filter_box.buffer.clone_from(&list.filter);
            }
            Some(list) => {
                self.filter_box.buffer.clone_from(&list.filter);
                self.input_mode = InputMode::Browse;
            }
            None => self.input_mode = InputMode::Browse,
        }
        self.filter_box.focused = self.input_mode == InputMode::Filter;
    }
}

/// Translates a key event into the action it stands for, updating
/// presentation state on the way. `None` means the key was consumed
/// locally or ignored.
pub fn translate(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // Ctrl+C always quits regardless of mode or overlay
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // When the go-to overlay is open, route all events to it
    if let Some(prompt) = tui.goto_prompt.as_mut() {
        return match prompt.handle_event(event)? {
            GotoEvent::Go(route) => {
                tui.goto_prompt = None;
                Some(Action::Navigate(route))
            }
            GotoEvent::Dismiss => {
                tui.goto_prompt = None;
                None
            }
        };
    }

    match &app.screen {
        Screen::List(list) => {
            if tui.input_mode == InputMode::Filter {
                return match tui.filter_box.handle_event(event)? {
                    FilterEvent::Changed(text) => Some(Action::FilterChanged(text)),
                    FilterEvent::Done => {
                        tui.input_mode = InputMode::Browse;
                        tui.filter_box.focused = false;
                        None
                    }
                };
            }

            let ready = !list.is_loading && !list.error;
            match event {
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::InputChar('g') => {
                    tui.goto_prompt = Some(GotoPromptState::new());
                    None
                }
                TuiEvent::InputChar('r') if !list.is_loading => Some(Action::Reload),
                TuiEvent::InputChar('n') | TuiEvent::PageDown if ready => Some(Action::NextPage),
                TuiEvent::InputChar('p') | TuiEvent::PageUp if ready => {
                    Some(Action::PreviousPage)
                }
                TuiEvent::InputChar('/') if ready => {
                    tui.input_mode = InputMode::Filter;
                    tui.filter_box.focused = true;
                    None
                }
                // Esc in browse mode clears an active filter
                TuiEvent::Escape if ready && !list.filter.is_empty() => {
                    Some(Action::FilterChanged(String::new()))
                }
                TuiEvent::CursorUp
                | TuiEvent::CursorDown
                | TuiEvent::CursorLeft
                | TuiEvent::CursorRight
                | TuiEvent::Submit
                    if ready =>
                {
                    let visible = list.visible_entries();
                    match tui.grid.handle_event(event, &visible)? {
                        GridEvent::Open(id) => Some(Action::OpenDetail(id)),
                    }
                }
                _ => None,
            }
        }
        Screen::Detail(detail) => {
            let not_found = detail.status() == DetailStatus::NotFound;
            match event {
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::InputChar('g') => {
                    tui.goto_prompt = Some(GotoPromptState::new());
                    None
                }
                TuiEvent::InputChar('b') | TuiEvent::Escape | TuiEvent::Backspace => {
                    Some(Action::Back)
                }
                TuiEvent::InputChar('h') => Some(Action::GoHome),
                TuiEvent::Submit if not_found => Some(Action::GoHome),
                TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::PageUp | TuiEvent::PageDown => {
                    tui.detail_panel.handle_event(event);
                    None
                }
                _ => None,
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Release events are reported and then ignored in event.rs; terminals
        // without the protocol just skip the push.
        execute!(
            stdout(),
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the catalog source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> std::io::Result<Arc<dyn CatalogSource>> {
    let client = PokeApiClient::new(&config.base_url, config.timeout).map_err(|e| {
        std::io::Error::other(format!("failed to build HTTP client: {e}"))
    })?;
    Ok(Arc::new(client))
}

pub fn run(config: ResolvedConfig, start: Route) -> std::io::Result<()> {
    let source = build_source(&config)?;
    info!("Catalog source: {} at {}", source.name(), config.base_url);

    let (mut app, first_effect) = App::start(start);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_effect(first_effect, &source, &tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(&app);

        let animating = match &app.screen {
            Screen::List(list) => list.is_loading,
            Screen::Detail(detail) => detail.is_loading,
        };
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = translate(&app, &mut tui, &event) else {
                continue;
            };
            debug!("Key {:?} -> {:?}", event, action);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            spawn_effect(effect, &source, &tx);
            tui.sync(&app);
        }

        if should_quit {
            break;
        }

        // Handle settled fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            spawn_effect(effect, &source, &tx);
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Starts the fetch an effect asks for. `None` and `Quit` start nothing.
fn spawn_effect(effect: Effect, source: &Arc<dyn CatalogSource>, tx: &mpsc::Sender<Action>) {
    match effect {
        Effect::FetchPage { page } => {
            info!("Spawning page {} load", page);
            let source = Arc::clone(source);
            let tx = tx.clone();
            tokio::spawn(async move {
                let started = Instant::now();
                let result = load_page(source.as_ref(), page).await;
                debug!(
                    "Page {} settled in {}ms (ok={})",
                    page,
                    started.elapsed().as_millis(),
                    result.is_ok()
                );
                if tx.send(Action::PageLoaded { page, result }).is_err() {
                    warn!("Failed to send page {} result: receiver dropped", page);
                }
            });
        }
        Effect::FetchDetail { id } => {
            info!("Spawning detail {} load", id);
            let source = Arc::clone(source);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = load_detail(source.as_ref(), &id).await;
                debug!("Detail {} settled (ok={})", id, result.is_ok());
                if tx.send(Action::DetailLoaded { id: id.clone(), result }).is_err() {
                    warn!("Failed to send detail {} result: receiver dropped", id);
                }
            });
        }
        Effect::None | Effect::Quit => {}
    }
}
