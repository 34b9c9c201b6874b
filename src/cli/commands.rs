use super::common::{format_outline, print_error, print_info};
use crate::api::{ApiClient, Endpoint, OutlineRecord, OutlineSource, PageRequest};
use crate::config::Config;
use crate::pagination::{Completion, FetchOutcome, PaginationController};
use crate::utils::{get_log_dir, path::LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use tokio::runtime::Runtime;
use tracing::info;

/// Fetch every page for `query` in order, following the continuation until
/// the server reports the end.
pub async fn walk_pages<S: OutlineSource>(
    source: &S,
    threshold: u16,
    query: Option<String>,
) -> Result<Vec<OutlineRecord>> {
    let mut controller = PaginationController::new(threshold);
    let mut next = controller.submit_search(query.as_deref().unwrap_or_default());

    while let Some(ticket) = next.take() {
        let result = source.fetch_page(ticket.request.clone()).await;
        match controller.complete(FetchOutcome::new(&ticket, result)) {
            Completion::Applied { .. } => next = controller.fetch_next(),
            Completion::Superseded(ticket) => next = Some(ticket),
            Completion::Failed { page, error } => {
                return Err(anyhow::Error::new(error).context(format!("Failed to load page {}", page)));
            }
            Completion::Discarded => break,
        }
    }

    Ok(controller.items().to_vec())
}

pub(super) fn cmd_outlines(
    config: &Config,
    page: u32,
    query: Option<String>,
    all: bool,
    json: bool,
) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;

    let records = if all {
        info!("Walking all outline pages (query {:?})", query);
        runtime.block_on(walk_pages(&client, config.scroll_threshold, query))?
    } else {
        let request = PageRequest::new(page).with_query(query);
        let page_data = runtime
            .block_on(client.fetch_page(request))
            .with_context(|| format!("Failed to load page {}", page))?;
        if !json && !page_data.has_next() {
            print_info("This is the last page");
        }
        page_data.results
    };

    if json {
        let output =
            serde_json::to_string_pretty(&records).context("Failed to serialize outlines")?;
        println!("{}", output);
        return Ok(());
    }

    if records.is_empty() {
        print_error("No outlines found");
        return Ok(());
    }

    let now = Utc::now();
    for record in &records {
        print!("{}", format_outline(record, now));
    }
    println!();
    println!("{} outline(s)", records.len());
    Ok(())
}

pub(super) fn cmd_endpoints(config: &Config) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    println!("Base URL: {}", client.base_url());
    for endpoint in Endpoint::ALL {
        let url = client
            .endpoint_url(endpoint)
            .with_context(|| format!("Failed to resolve the {} endpoint", endpoint))?;
        println!("  {:<12} {}", endpoint.name(), url);
    }
    Ok(())
}

pub(super) fn cmd_logs() {
    println!("{}", get_log_dir().join(LOG_FILE_NAME).display());
}
