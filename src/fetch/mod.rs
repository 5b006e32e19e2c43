//! Fetch module for retrieving robots.txt
//!
//! This module is the only part of Robolens that touches the network. It
//! turns a target into analyzable robots.txt text, or into an error that
//! stops the run before any analysis happens.

mod fetcher;

pub use fetcher::{build_http_client, fetch_robots, looks_like_html, FetchOutcome, FetchedRobots};

use crate::config::FetchConfig;
use crate::RobolensError;

/// Fetches the robots.txt for a user-supplied target
///
/// This is the main entry point for the network side. It will:
/// 1. Validate the target and derive its robots.txt URL
/// 2. Build the HTTP client
/// 3. Fetch and classify the response
///
/// # Arguments
///
/// * `config` - The fetch configuration
/// * `target` - A site URL or bare host
///
/// # Returns
///
/// * `Ok(FetchedRobots)` - Text to analyze (possibly empty)
/// * `Err(RobolensError)` - Invalid target or failed fetch
pub async fn fetch(config: &FetchConfig, target: &str) -> Result<FetchedRobots, RobolensError> {
    let robots_url = crate::url::robots_url(target)?;
    let client = build_http_client(config).map_err(|source| RobolensError::Http {
        url: robots_url.to_string(),
        source,
    })?;
    fetch_robots(&client, &robots_url).await
}
