//! Background page fetching for the outline list.
//!
//! The pagination controller decides *what* to fetch. This service runs the
//! request on the tokio runtime so the event loop stays responsive, and hands
//! the result back through a oneshot channel that the UI polls every tick.

use crate::api::{FetchError, OutlineSource};
use crate::pagination::{FetchOutcome, FetchTicket};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Handle for polling an in-flight page fetch
pub struct FetchHandle {
    ticket: FetchTicket,
    receiver: oneshot::Receiver<FetchOutcome>,
}

impl FetchHandle {
    /// The ticket this fetch is answering
    pub fn ticket(&self) -> &FetchTicket {
        &self.ticket
    }

    /// Try to receive the outcome without blocking
    ///
    /// A task that died without reporting yields an [`FetchError::Interrupted`]
    /// outcome so the controller can leave its loading state.
    pub fn try_recv(&mut self) -> Option<FetchOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!("Fetch channel for page {} closed unexpectedly", self.ticket.request.page);
                Some(FetchOutcome::new(&self.ticket, Err(FetchError::Interrupted)))
            }
        }
    }

    /// Wait for the outcome
    pub async fn wait(self) -> FetchOutcome {
        match self.receiver.await {
            Ok(outcome) => outcome,
            Err(_) => FetchOutcome::new(&self.ticket, Err(FetchError::Interrupted)),
        }
    }
}

/// Service that executes [`FetchTicket`]s against an [`OutlineSource`]
pub struct FetchService;

impl FetchService {
    /// Start fetching the ticket's page asynchronously
    ///
    /// Returns a `FetchHandle` that can be polled for the outcome.
    pub fn start<S: OutlineSource>(
        runtime: &Handle,
        source: Arc<S>,
        ticket: FetchTicket,
    ) -> FetchHandle {
        let (sender, receiver) = oneshot::channel();
        let task_ticket = ticket.clone();

        debug!(
            "Spawning fetch for page {} (generation {})",
            ticket.request.page, ticket.generation
        );

        runtime.spawn(async move {
            let result = source.fetch_page(task_ticket.request.clone()).await;
            // The receiver is gone when the view was torn down
            let _ = sender.send(FetchOutcome::new(&task_ticket, result));
        });

        FetchHandle { ticket, receiver }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{OutlinePage, Page, PageRequest};
    use std::time::Duration;

    struct EmptySource;

    impl OutlineSource for EmptySource {
        async fn fetch_page(&self, request: PageRequest) -> Result<OutlinePage, FetchError> {
            Ok(Page {
                count: Some(0),
                next: (request.page < 2).then(|| "more".to_string()),
                previous: None,
                results: Vec::new(),
            })
        }
    }

    struct PanickingSource;

    impl OutlineSource for PanickingSource {
        async fn fetch_page(&self, _request: PageRequest) -> Result<OutlinePage, FetchError> {
            panic!("source exploded")
        }
    }

    fn ticket(page: u32) -> FetchTicket {
        FetchTicket {
            generation: 4,
            request: PageRequest::new(page),
        }
    }

    fn poll_until_done(handle: &mut FetchHandle) -> FetchOutcome {
        for _ in 0..200 {
            if let Some(outcome) = handle.try_recv() {
                return outcome;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("fetch did not complete");
    }

    #[test]
    fn test_outcome_matches_ticket() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut handle = FetchService::start(runtime.handle(), Arc::new(EmptySource), ticket(1));
        assert_eq!(handle.ticket().request.page, 1);

        let outcome = poll_until_done(&mut handle);
        assert_eq!(outcome.generation, 4);
        assert_eq!(outcome.page, 1);
        assert!(outcome.result.unwrap().has_next());
    }

    #[test]
    fn test_dead_task_reports_interrupted() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut handle =
            FetchService::start(runtime.handle(), Arc::new(PanickingSource), ticket(3));

        let outcome = poll_until_done(&mut handle);
        assert_eq!(outcome.page, 3);
        assert!(matches!(outcome.result, Err(FetchError::Interrupted)));
    }

    #[tokio::test]
    async fn test_wait() {
        let handle =
            FetchService::start(&Handle::current(), Arc::new(EmptySource), ticket(2));
        let outcome = handle.wait().await;
        assert!(!outcome.result.unwrap().has_next());
    }
}
