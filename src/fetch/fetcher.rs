//! HTTP fetcher implementation
//!
//! This module handles the single HTTP request Robolens makes:
//! - Building the HTTP client with timeout, redirect and User-Agent settings
//! - GET of the robots.txt URL
//! - Mapping the response onto "analyze this text" or an error

use crate::config::FetchConfig;
use crate::RobolensError;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// How a fetched robots.txt turned into analyzable text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A plain-text robots.txt was served
    Found,
    /// HTTP 404: no robots.txt, everything allowed by default
    NotFound,
    /// A success status with an HTML page instead of robots.txt
    NotPlainText,
}

/// Robots.txt text ready for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedRobots {
    /// The robots URL that was requested
    pub robots_url: String,
    /// Body to analyze (empty for `NotFound` and `NotPlainText`)
    pub content: String,
    pub outcome: FetchOutcome,
    /// User-facing warning to show alongside the analysis
    pub notice: Option<String>,
}

impl FetchedRobots {
    /// Wraps text that did not come from the network (e.g. a local file)
    pub fn local(robots_url: &Url, content: String) -> Self {
        Self {
            robots_url: robots_url.to_string(),
            content,
            outcome: FetchOutcome::Found,
            notice: None,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use robolens::config::FetchConfig;
/// use robolens::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches robots.txt and classifies the response
///
/// # Response Handling
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx, plain text | `Found`, body analyzed |
/// | 2xx, HTML body | `NotPlainText`, empty text plus a notice |
/// | HTTP 404 | `NotFound`, empty text (default allow) |
/// | Other status | `Err(HttpStatus)` |
/// | Timeout | `Err(Timeout)` |
/// | Too many redirects | `Err(RedirectLimit)` |
/// | Other network error | `Err(Http)` |
///
/// Redirects are followed by the client up to the configured limit.
pub async fn fetch_robots(client: &Client, robots_url: &Url) -> Result<FetchedRobots, RobolensError> {
    let url = robots_url.as_str();
    tracing::info!("Fetching robots.txt from: {}", url);

    let response = client
        .get(robots_url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    tracing::debug!("{} answered {} (final URL {})", url, status, response.url());

    if status == StatusCode::NOT_FOUND {
        tracing::info!("robots.txt not found at {}. Assuming default allow.", url);
        return Ok(FetchedRobots {
            robots_url: url.to_string(),
            content: String::new(),
            outcome: FetchOutcome::NotFound,
            notice: None,
        });
    }

    if !status.is_success() {
        return Err(RobolensError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| classify_error(url, e))?;

    if looks_like_html(&body) {
        let notice = format!(
            "The content at {} appears to be an HTML page, not a valid robots.txt file. It was analyzed as an empty robots.txt.",
            url
        );
        tracing::warn!("{}", notice);
        return Ok(FetchedRobots {
            robots_url: url.to_string(),
            content: String::new(),
            outcome: FetchOutcome::NotPlainText,
            notice: Some(notice),
        });
    }

    Ok(FetchedRobots {
        robots_url: url.to_string(),
        content: body,
        outcome: FetchOutcome::Found,
        notice: None,
    })
}

/// True when a body starts like an HTML document
pub fn looks_like_html(body: &str) -> bool {
    let head = body.trim_start();
    let head = head.get(..16).unwrap_or(head).to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

/// Maps a reqwest failure onto the error users see
fn classify_error(url: &str, error: reqwest::Error) -> RobolensError {
    if error.is_timeout() {
        RobolensError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_redirect() {
        RobolensError::RedirectLimit {
            url: url.to_string(),
        }
    } else {
        RobolensError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
