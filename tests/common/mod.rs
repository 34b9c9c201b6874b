//! Shared test utilities for the integration tests.
//!
//! Provides `ScriptedSource`, an in-memory [`OutlineSource`] that replays a
//! fixed list of results and records every request, and `StubServer`, a
//! loopback HTTP server with canned responses for exercising the real
//! client.

#![allow(dead_code)]

use courseoutline::api::{Credit, FetchError, OutlinePage, OutlineRecord, Page};
use courseoutline::{OutlineSource, PageRequest};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Build a record with predictable field values
pub fn record(id: u64) -> OutlineRecord {
    OutlineRecord {
        id,
        name: format!("Outline {}", id),
        image: None,
        credit: Credit::Integer(3),
        overview: String::new(),
        created_date: None,
    }
}

/// A page holding `ids`, with a continuation when `has_next` is set
pub fn page(ids: &[u64], has_next: bool) -> OutlinePage {
    Page {
        count: None,
        next: has_next.then(|| "http://backend/outlines/?page=next".to_string()),
        previous: None,
        results: ids.iter().copied().map(record).collect(),
    }
}

/// Replays scripted results in order; runs out with `FetchError::Interrupted`
#[derive(Default)]
pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<OutlinePage, FetchError>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new(results: Vec<Result<OutlinePage, FetchError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request served so far, in order
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests().iter().map(|r| r.page).collect()
    }
}

impl OutlineSource for ScriptedSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<OutlinePage, FetchError> {
        self.requests.lock().unwrap().push(request);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::Interrupted))
    }
}

/// Canned HTTP response
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Loopback HTTP/1.1 server answering by request target (path plus query).
/// Unknown targets get a 404.
pub struct StubServer {
    addr: SocketAddr,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<(&str, StubResponse)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Arc<HashMap<String, StubResponse>> = Arc::new(
            routes
                .into_iter()
                .map(|(target, response)| (target.to_string(), response))
                .collect(),
        );
        let seen = Arc::new(Mutex::new(Vec::new()));

        let task_seen = Arc::clone(&seen);
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let routes = Arc::clone(&routes);
                let seen = Arc::clone(&task_seen);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let head = String::from_utf8_lossy(&buf);
                    let target = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or_default()
                        .to_string();
                    seen.lock().unwrap().push(target.clone());

                    let response = routes
                        .get(&target)
                        .cloned()
                        .unwrap_or_else(|| StubResponse::status(404, r#"{"detail":"Not found."}"#));
                    let reply = format!(
                        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        response.status,
                        response.body.len(),
                        response.body
                    );
                    let _ = stream.write_all(reply.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self { addr, seen }
    }

    /// Base URL with a trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Request targets received so far
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}
