//! # Application State
//!
//! Core state for the viewer. Domain logic only, no TUI types.
//! Presentation state (grid cursor, scroll offsets, input mode) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen               // the mounted screen and its local state
//! │   ├── List(ListScreen)         // page, entries, filter, flags
//! │   └── Detail(DetailScreen)     // id, record, flags
//! └── history: Vec<Route>          // routes to return to on Back
//! ```
//!
//! Screens own their state outright. Navigating away drops it; navigating
//! back mounts a fresh screen that fetches again.
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::DetailRecord;
use crate::core::pager;

/// Navigation target. The list is `/`, a detail screen is `/pokemon/<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// `None` while the identifier is not yet resolved.
    Detail(Option<String>),
}

impl Route {
    /// Parses a route path. Unknown paths, and ids with characters other
    /// than ASCII letters, digits and `-`, yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::List);
        }
        let rest = trimmed.strip_prefix("/pokemon")?;
        if rest.is_empty() {
            return Some(Route::Detail(None));
        }
        let id = rest.strip_prefix('/')?;
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return None;
        }
        Some(Route::Detail(Some(id.to_string())))
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(Some(id)) => format!("/pokemon/{id}"),
            Route::Detail(None) => "/pokemon/".to_string(),
        }
    }
}

/// List screen local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListScreen {
    pub page: u32,
    /// Full records for the current page, revealed all at once.
    pub entries: Vec<DetailRecord>,
    pub filter: String,
    pub is_loading: bool,
    pub error: bool,
    pub total_pages: u32,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            page: 1,
            entries: Vec::new(),
            filter: String::new(),
            is_loading: true,
            error: false,
            total_pages: 1,
        }
    }

    /// Entries whose name contains the filter text, ignoring case.
    pub fn visible_entries(&self) -> Vec<&DetailRecord> {
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn can_go_previous(&self) -> bool {
        pager::can_go_previous(self.page)
    }

    pub fn can_go_next(&self) -> bool {
        pager::can_go_next(self.page, self.total_pages)
    }
}

/// What the detail screen should show right now.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailStatus<'a> {
    Loading,
    NotFound,
    Ready(&'a DetailRecord),
}

/// Detail screen local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScreen {
    pub id: Option<String>,
    pub record: Option<DetailRecord>,
    pub is_loading: bool,
    pub error: bool,
}

impl Default for DetailScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            id: None,
            record: None,
            is_loading: true,
            error: false,
        }
    }

    /// Sets the route identifier. Returns the id to fetch when it became
    /// available or changed; an unchanged or missing id fetches nothing.
    ///
    /// Any change drops the shown record and goes back to loading, so a
    /// screen whose id became unavailable waits instead of showing stale data.
    pub fn set_id(&mut self, id: Option<String>) -> Option<String> {
        if self.id == id {
            return None;
        }
        self.id = id;
        self.record = None;
        self.is_loading = true;
        self.error = false;
        self.id.clone()
    }

    pub fn status(&self) -> DetailStatus<'_> {
        if self.is_loading {
            return DetailStatus::Loading;
        }
        match (&self.record, self.error) {
            (Some(record), false) => DetailStatus::Ready(record),
            _ => DetailStatus::NotFound,
        }
    }
}

/// The mounted screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(ListScreen),
    Detail(DetailScreen),
}

pub struct App {
    pub screen: Screen,
    pub history: Vec<Route>,
}

impl App {
    /// Current route, derived from the mounted screen.
    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::List(_) => Route::List,
            Screen::Detail(detail) => Route::Detail(detail.id.clone()),
        }
    }

    pub fn list(&self) -> Option<&ListScreen> {
        match &self.screen {
            Screen::List(list) => Some(list),
            Screen::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailScreen> {
        match &self.screen {
            Screen::Detail(detail) => Some(detail),
            Screen::List(_) => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailScreen> {
        match &mut self.screen {
            Screen::Detail(detail) => Some(detail),
            Screen::List(_) => None,
        }
    }
}
