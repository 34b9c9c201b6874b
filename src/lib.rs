//! courseoutline - a terminal browser for paginated course outlines
//!
//! This library provides the backend client, the incremental page loading
//! controller, and the TUI built on top of them.

// Core modules
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod pagination;
pub mod screens;
pub mod services;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use api::{ApiClient, FetchError, OutlineRecord, OutlineSource, PageRequest};
pub use config::Config;
pub use pagination::{PageState, PaginationController, ScrollMetrics};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
