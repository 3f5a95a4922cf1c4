//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User presses Next? That's `Action::NextPage`.
//! A page load settles? That's `Action::PageLoaded { .. }`.
//!
//! `update()` takes the current state and an action, mutates the state,
//! and returns an `Effect` telling the adapter which I/O to start.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Responses are applied to whichever screen of the matching kind is
//! mounted when they arrive. There is no request token: a superseded page
//! load that settles late still overwrites the list.

use log::{debug, info, warn};

use crate::api::{DetailRecord, FetchError, LoadedPage};
use crate::core::pager;
use crate::core::state::{App, DetailScreen, ListScreen, Route, Screen};

#[derive(Debug)]
pub enum Action {
    NextPage,
    PreviousPage,
    FilterChanged(String),
    /// Full reload of the list screen: initial state, then fetch.
    Reload,
    /// Open the detail screen for an entry.
    OpenDetail(String),
    /// Go to a route, pushing the current one onto the history.
    Navigate(Route),
    /// Return to the previous route in history.
    Back,
    /// Explicit navigation to the list (the "not found" recovery).
    GoHome,
    PageLoaded {
        page: u32,
        result: Result<LoadedPage, FetchError>,
    },
    DetailLoaded {
        id: String,
        result: Result<DetailRecord, FetchError>,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchPage { page: u32 },
    FetchDetail { id: String },
}

impl App {
    /// Mounts the screen for `route` and returns the fetch it needs.
    pub fn start(route: Route) -> (Self, Effect) {
        let mut app = App {
            screen: Screen::List(ListScreen::new()),
            history: Vec::new(),
        };
        let effect = app.mount(route);
        (app, effect)
    }

    fn mount(&mut self, route: Route) -> Effect {
        debug!("Mounting {}", route.path());
        match route {
            Route::List => {
                let list = ListScreen::new();
                let page = list.page;
                self.screen = Screen::List(list);
                Effect::FetchPage { page }
            }
            Route::Detail(id) => {
                let mut detail = DetailScreen::new();
                let fetch = detail.set_id(id);
                self.screen = Screen::Detail(detail);
                fetch.map_or(Effect::None, |id| Effect::FetchDetail { id })
            }
        }
    }

    fn push_and_mount(&mut self, route: Route) -> Effect {
        let current = self.route();
        self.history.push(current);
        self.mount(route)
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::NextPage => match &mut app.screen {
            Screen::List(list) if list.can_go_next() => {
                list.page += 1;
                begin_page_load(list)
            }
            _ => Effect::None,
        },

        Action::PreviousPage => match &mut app.screen {
            Screen::List(list) if list.can_go_previous() => {
                list.page -= 1;
                begin_page_load(list)
            }
            _ => Effect::None,
        },

        Action::FilterChanged(text) => {
            if let Screen::List(list) = &mut app.screen {
                list.filter = text;
            }
            Effect::None
        }

        Action::Reload => {
            if app.list().is_none() {
                return Effect::None;
            }
            info!("Reloading list screen");
            app.mount(Route::List)
        }

        Action::OpenDetail(id) => app.push_and_mount(Route::Detail(Some(id))),

        // A detail route on a mounted detail screen keeps the screen and only
        // swaps the identifier, so an unchanged id fetches nothing and leaves
        // the history alone.
        Action::Navigate(Route::Detail(id)) if app.detail().is_some() => {
            let current = app.route();
            if current == Route::Detail(id.clone()) {
                return Effect::None;
            }
            app.history.push(current);
            app.detail_mut()
                .and_then(|detail| detail.set_id(id))
                .map_or(Effect::None, |id| Effect::FetchDetail { id })
        }

        Action::Navigate(route) => app.push_and_mount(route),

        Action::Back => {
            let route = app.history.pop().unwrap_or(Route::List);
            app.mount(route)
        }

        Action::GoHome => app.push_and_mount(Route::List),

        Action::PageLoaded { page, result } => {
            let Screen::List(list) = &mut app.screen else {
                debug!("Dropping page {} result: list screen not mounted", page);
                return Effect::None;
            };
            if page != list.page {
                debug!("Page {} settled while page {} is current", page, list.page);
            }
            list.is_loading = false;
            match result {
                Ok(loaded) => {
                    list.total_pages = pager::total_pages(loaded.count);
                    list.entries = loaded.entries;
                    list.error = false;
                }
                Err(e) => {
                    warn!("Page {} failed to load: {}", page, e);
                    list.entries.clear();
                    list.error = true;
                }
            }
            Effect::None
        }

        Action::DetailLoaded { id, result } => {
            let Screen::Detail(detail) = &mut app.screen else {
                debug!("Dropping detail {} result: detail screen not mounted", id);
                return Effect::None;
            };
            if detail.id.as_deref() != Some(id.as_str()) {
                debug!("Detail {} settled while {:?} is current", id, detail.id);
            }
            detail.is_loading = false;
            match result {
                Ok(record) => {
                    detail.record = Some(record);
                    detail.error = false;
                }
                Err(e) => {
                    warn!("Detail {} failed to load: {}", id, e);
                    detail.error = true;
                }
            }
            Effect::None
        }
    }
}

fn begin_page_load(list: &mut ListScreen) -> Effect {
    list.is_loading = true;
    list.error = false;
    Effect::FetchPage { page: list.page }
}
