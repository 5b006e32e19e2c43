//! Configuration module for Robolens
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and owns the tracked AI-crawler catalogue.
//!
//! # Example
//!
//! ```no_run
//! use robolens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robolens.toml")).unwrap();
//! println!("Tracking {} agents", config.catalogue.agents.len());
//! ```

mod catalogue;
mod parser;
mod types;
mod validation;

// Re-export types
pub use catalogue::{AgentCatalogue, WILDCARD_AGENT};
pub use types::{AnalysisConfig, CatalogueConfig, Config, FetchConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
