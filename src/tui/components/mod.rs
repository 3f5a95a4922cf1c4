//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top bar with the app name, current route, and key hint
//! - `StatusView`: Centered loading / failure / not-found message
//! - `PaginationBar`: Previous / "Page X of Y" / Next row
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames:
//! - `FilterBox`: Search field for the list screen
//! - `EntryGrid`: Card grid with a keyboard cursor
//! - `DetailPanel`: Scrollable detail body
//! - `GotoPrompt`: Overlay for typing a detail route
//!
//! Screen data (entries, filter text, loaded record) lives in `core`.
//! Components only hold what the terminal needs on top of it: cursor
//! position, scroll offset, the text being typed.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top bar)
//! ├── status_view.rs    (Loading / error body)
//! ├── filter_box.rs     (List search field)
//! ├── entry_grid.rs     (List card grid)
//! ├── pagination_bar.rs (List paging row)
//! ├── detail_panel.rs   (Detail body)
//! └── goto_prompt.rs    (Route overlay)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod detail_panel;
pub mod entry_grid;
pub mod filter_box;
pub mod goto_prompt;
pub mod pagination_bar;
pub mod status_view;
pub use detail_panel::{DetailPanel, DetailPanelState};
pub use entry_grid::{EntryGrid, EntryGridState, GridEvent};
pub use filter_box::{FilterBox, FilterEvent};
pub use goto_prompt::{GotoEvent, GotoPrompt, GotoPromptState};
pub use pagination_bar::PaginationBar;
pub use status_view::StatusView;
