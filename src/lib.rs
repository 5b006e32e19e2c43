//! Robolens: an AI-crawler audit for robots.txt
//!
//! This crate fetches a site's robots.txt, resolves root access for a catalogue
//! of known AI crawlers, and turns the result into scored, human-readable
//! recommendations.

pub mod analysis;
pub mod config;
pub mod fetch;
pub mod output;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Robolens operations
#[derive(Debug, Error)]
pub enum RobolensError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Too many redirects from {url}")]
    RedirectLimit { url: String },

    #[error("Failed to fetch robots.txt. Status: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid catalogue entry: {0}")]
    InvalidAgent(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid URL format provided: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Robolens operations
pub type Result<T> = std::result::Result<T, RobolensError>;

// Re-export commonly used types
pub use analysis::{analyze, AnalysisResult, Finding, Severity};
pub use config::{AgentCatalogue, Config};
pub use robots::{extract_rules, AgentRule, RootAccess};
pub use url::robots_url;
