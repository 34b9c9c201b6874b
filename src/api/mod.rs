//! Remote data source for the course outline backend.
//!
//! The backend exposes a small set of paginated REST collections. This module
//! provides the endpoint table, the wire model, a configured HTTP client, and
//! the [`OutlineSource`] seam the pagination controller is fed through.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐     PageRequest      ┌──────────────────────┐
//! │  FetchService        │ ───────────────────▶ │  impl OutlineSource  │
//! │  (tokio task)        │ ◀─────────────────── │  ApiClient / doubles │
//! └──────────────────────┘  Result<OutlinePage> └──────────────────────┘
//! ```

mod client;
mod endpoints;
mod error;
mod model;

pub use client::{join_url, ApiClient};
pub use endpoints::Endpoint;
pub use error::FetchError;
pub use model::{Credit, OutlinePage, OutlineRecord, Page};

use std::future::Future;

/// A request for one page of the outlines collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Optional name filter forwarded to the backend as `q`.
    pub query: Option<String>,
}

impl PageRequest {
    /// Request a page without any filter.
    pub fn new(page: u32) -> Self {
        Self { page, query: None }
    }

    /// Attach a search query. Blank queries are dropped.
    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query.filter(|q| !q.trim().is_empty());
        self
    }
}

/// Anything that can serve pages of outline records.
///
/// `ApiClient` is the production implementation; tests plug in scripted
/// sources so the controller can be driven without a network.
pub trait OutlineSource: Send + Sync + 'static {
    /// Fetch a single page.
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<OutlinePage, FetchError>> + Send;
}
