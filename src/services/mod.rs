//! Application services layer.
//!
//! Services run work off the UI thread and report back through handles the
//! event loop polls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, OutlinesScreen, PaginationController)    │
//! └─────────────────────┬───────────────────────────┘
//!                       │ FetchTicket / FetchHandle
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │               Services Layer                    │
//! │  ┌──────────────┐                               │
//! │  │ FetchService │                               │
//! │  └──────────────┘                               │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │             Infrastructure Layer                │
//! │  (ApiClient, Config)                            │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod fetch_service;

pub use fetch_service::{FetchHandle, FetchService};
