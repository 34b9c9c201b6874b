use super::{Endpoint, FetchError, OutlinePage, OutlineSource, PageRequest};
use crate::config::ApiConfig;
use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// User agent sent with every request
const USER_AGENT: &str = concat!("courseoutline/", env!("CARGO_PKG_VERSION"));

/// Max characters of an error body kept for logs and messages
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client bound to the backend base address
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base URL: {}", config.base_url))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        info!("API client ready for {}", config.base_url);

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    /// The configured base address
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint collection
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, FetchError> {
        join_url(&self.base_url, endpoint.path())
    }

    /// Absolute URL of one page of an endpoint collection
    pub fn page_url(&self, endpoint: Endpoint, request: &PageRequest) -> Result<Url, FetchError> {
        let mut url = self.endpoint_url(endpoint)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &request.page.to_string());
            if let Some(query) = request.query.as_deref().filter(|q| !q.is_empty()) {
                pairs.append_pair("q", query);
            }
        }
        Ok(url)
    }

    /// GET a URL and decode its JSON body
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("GET {} failed with status {}", url, status);
            return Err(FetchError::Status {
                status,
                body: excerpt(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("GET {} returned an undecodable body: {}", url, e);
            FetchError::Decode(e)
        })
    }

    /// Fetch one page of outlines
    pub async fn outlines(&self, request: &PageRequest) -> Result<OutlinePage, FetchError> {
        let url = self.page_url(Endpoint::Outlines, request)?;
        let page: OutlinePage = self.get(url).await?;

        info!(
            page = request.page,
            results = page.results.len(),
            has_next = page.has_next(),
            "Fetched outlines page"
        );

        Ok(page)
    }
}

impl OutlineSource for ApiClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<OutlinePage, FetchError> {
        self.outlines(&request).await
    }
}

/// Join a base address and a relative path with exactly one `/` between them
///
/// Any path prefix on the base (e.g. `http://host/api/`) is preserved.
pub fn join_url(base: &str, path: &str) -> Result<Url, FetchError> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| FetchError::InvalidUrl {
        url: joined.clone(),
        reason: e.to_string(),
    })
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > ERROR_BODY_LIMIT {
        let mut short: String = trimmed.chars().take(ERROR_BODY_LIMIT).collect();
        short.push('…');
        short
    } else {
        trimmed.to_string()
    }
}
