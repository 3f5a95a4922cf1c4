//! # Core Application Logic
//!
//! This module contains the viewer's screen logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screens)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No network. No UI.     │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ── spawns fetches ──────▶│    API     │
//!     │  Adapter   │ ◀── Action::*Loaded ──── │  (reqwest) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App`, `Route` and the per-screen state structs
//! - [`action`]: the `Action` enum, `Effect`, and `update()`
//! - [`pager`]: page size and page arithmetic
//! - [`detail_view`]: display-ready data for the detail screen
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod detail_view;
pub mod pager;
pub mod state;
