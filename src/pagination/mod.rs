//! Incremental page loading for the outline list.
//!
//! The controller is a plain state machine: it never performs I/O itself.
//! Triggers (mount, scroll, search) hand back a [`FetchTicket`] describing the
//! request to issue, and the caller feeds the result back as a
//! [`FetchOutcome`]. This keeps the protocol testable without a runtime and
//! lets the UI decide how fetches are executed.
//!
//! ```text
//!            start / scroll near bottom
//!  Ready(k) ───────────────────────────▶ Loading(k)
//!     ▲                                     │
//!     │ failure (items untouched)           │ success
//!     └─────────────────────────────────────┤
//!                                           ├── next != null ─▶ Ready(k+1)
//!                                           └── next == null ─▶ Idle
//!
//!  search / refresh ──▶ Ready(1) ──▶ Loading(1)   (page 1 replaces items)
//! ```

mod controller;
mod scroll;
mod state;

pub use controller::{Completion, FetchOutcome, FetchTicket, PaginationController};
pub use scroll::ScrollMetrics;
pub use state::PageState;
