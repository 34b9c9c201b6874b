use super::{PageState, ScrollMetrics};
use crate::api::{FetchError, OutlinePage, OutlineRecord, PageRequest};
use std::num::NonZeroU32;
use tracing::{debug, info, warn};

/// A fetch the caller should issue on behalf of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Session the fetch belongs to
    pub generation: u64,
    pub request: PageRequest,
}

/// Result of an issued fetch, handed back to the controller
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub page: u32,
    pub result: Result<OutlinePage, FetchError>,
}

impl FetchOutcome {
    /// Pair a result with the ticket it answers
    pub fn new(ticket: &FetchTicket, result: Result<OutlinePage, FetchError>) -> Self {
        Self {
            generation: ticket.generation,
            page: ticket.request.page,
            result,
        }
    }
}

/// What applying a [`FetchOutcome`] did
#[derive(Debug)]
pub enum Completion {
    /// Records were merged into the list
    Applied {
        page: u32,
        received: usize,
        /// The server reported this as the last page
        exhausted: bool,
    },
    /// The fetch failed; the list is unchanged and the page can be retried
    Failed { page: u32, error: FetchError },
    /// A search was submitted while this page was loading. The result was
    /// dropped and page 1 of the new query must be fetched.
    Superseded(FetchTicket),
    /// The outcome belonged to an old session or a torn-down view
    Discarded,
}

/// Owns the paginated outline list and its fetch-more protocol
#[derive(Debug)]
pub struct PaginationController {
    state: PageState,
    items: Vec<OutlineRecord>,
    /// Query the current items were loaded for
    query: Option<String>,
    /// Query sent with the next or in-flight page
    requested_query: Option<String>,
    /// A search arrived while a fetch was in flight and must replace it
    search_deferred: bool,
    generation: u64,
    scroll_threshold: u16,
    torn_down: bool,
}

impl PaginationController {
    pub fn new(scroll_threshold: u16) -> Self {
        Self {
            state: PageState::FIRST,
            items: Vec::new(),
            query: None,
            requested_query: None,
            search_deferred: false,
            generation: 0,
            scroll_threshold,
            torn_down: false,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// 0 when no further pages exist, otherwise the next or in-flight page
    pub fn page(&self) -> u32 {
        self.state.page()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn items(&self) -> &[OutlineRecord] {
        &self.items
    }

    /// Query the listed items belong to; changes only once page 1 of a new
    /// search has loaded
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Most recently submitted query, which may still be loading or may
    /// have failed
    pub fn requested_query(&self) -> Option<&str> {
        self.requested_query.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scroll_threshold(&self) -> u16 {
        self.scroll_threshold
    }

    /// Initial load when the list is first shown
    pub fn start(&mut self) -> Option<FetchTicket> {
        debug!("Starting outline list in state {}", self.state);
        self.fetch_next()
    }

    /// Request the next page if one can be requested right now
    pub fn fetch_next(&mut self) -> Option<FetchTicket> {
        if self.torn_down {
            return None;
        }
        match self.state {
            PageState::Ready { page } => Some(self.begin_fetch(page)),
            PageState::Loading { .. } | PageState::Idle => None,
        }
    }

    /// React to a scroll event; fetches the next page when the viewport is
    /// within the threshold of the bottom
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<FetchTicket> {
        if !metrics.is_close_to_bottom(self.scroll_threshold) {
            return None;
        }
        self.fetch_next()
    }

    /// Start over at page 1 for a new query. Blank text clears the query.
    ///
    /// If a fetch is in flight the reset is deferred until its result arrives
    /// (see [`Completion::Superseded`]).
    pub fn submit_search(&mut self, text: &str) -> Option<FetchTicket> {
        if self.torn_down {
            return None;
        }

        let query = normalize_query(text);
        if self.state.is_loading() {
            debug!("Search {:?} deferred until the in-flight page completes", query);
            self.requested_query = query;
            self.search_deferred = true;
            return None;
        }

        info!("Resetting outline list for query {:?}", query);
        self.requested_query = query;
        self.generation += 1;
        Some(self.begin_fetch(NonZeroU32::MIN))
    }

    /// Reload from page 1 with the most recently submitted query
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        let query = self.requested_query.clone().unwrap_or_default();
        self.submit_search(&query)
    }

    /// Apply the result of a previously issued ticket
    pub fn complete(&mut self, outcome: FetchOutcome) -> Completion {
        if self.torn_down || outcome.generation != self.generation {
            debug!(
                "Discarding page {} from generation {} (current {})",
                outcome.page, outcome.generation, self.generation
            );
            return Completion::Discarded;
        }

        let page = match self.state {
            PageState::Loading { page } if page.get() == outcome.page => page,
            _ => {
                debug!("Discarding unexpected page {} in state {}", outcome.page, self.state);
                return Completion::Discarded;
            }
        };

        if self.search_deferred {
            self.search_deferred = false;
            info!("Page {} superseded by search {:?}", page, self.requested_query);
            self.generation += 1;
            return Completion::Superseded(self.begin_fetch(NonZeroU32::MIN));
        }

        match outcome.result {
            Ok(result) => {
                let received = result.results.len();
                let exhausted = !result.has_next();

                if page == NonZeroU32::MIN {
                    self.items = result.results;
                    self.query.clone_from(&self.requested_query);
                } else {
                    self.items.extend(result.results);
                }

                self.state = if exhausted {
                    PageState::Idle
                } else {
                    page.get().checked_add(1).map_or(PageState::Idle, PageState::ready)
                };

                debug!(
                    "Page {} applied: {} records, {} total, now {}",
                    page,
                    received,
                    self.items.len(),
                    self.state
                );

                Completion::Applied {
                    page: page.get(),
                    received,
                    exhausted,
                }
            }
            Err(error) => {
                warn!("Failed to load outlines page {}: {}", page, error);
                self.state = PageState::Ready { page };
                Completion::Failed {
                    page: page.get(),
                    error,
                }
            }
        }
    }

    /// The view is going away: every outstanding result will be discarded
    /// and no further fetches are issued
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.generation += 1;
        self.search_deferred = false;
    }

    fn begin_fetch(&mut self, page: NonZeroU32) -> FetchTicket {
        self.state = PageState::Loading { page };
        FetchTicket {
            generation: self.generation,
            request: PageRequest {
                page: page.get(),
                query: self.requested_query.clone(),
            },
        }
    }
}

fn normalize_query(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
