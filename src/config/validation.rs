use crate::config::catalogue::WILDCARD_AGENT;
use crate::config::types::{AnalysisConfig, CatalogueConfig, Config, FetchConfig};
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_catalogue(&config.catalogue)?;
    validate_fetch_config(&config.fetch)?;
    validate_analysis_config(&config.analysis)?;
    Ok(())
}

/// Validates the tracked agent catalogue
fn validate_catalogue(config: &CatalogueConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for agent in &config.agents {
        let trimmed = agent.trim();

        if trimmed.is_empty() {
            return Err(ConfigError::InvalidAgent(
                "Agent name cannot be empty".to_string(),
            ));
        }

        if trimmed != agent {
            return Err(ConfigError::InvalidAgent(format!(
                "Agent name '{}' has leading or trailing whitespace",
                agent
            )));
        }

        // The wildcard is always evaluated; listing it would evaluate it twice
        if trimmed == WILDCARD_AGENT {
            return Err(ConfigError::InvalidAgent(
                "The wildcard agent '*' is implicit and cannot be listed".to_string(),
            ));
        }

        if agent.contains(':') || agent.contains('#') {
            return Err(ConfigError::InvalidAgent(format!(
                "Agent name '{}' cannot contain ':' or '#'",
                agent
            )));
        }

        // Exact duplicates only: the default catalogue lists both spellings
        // of Meta's agents on purpose
        if !seen.insert(agent.as_str()) {
            return Err(ConfigError::InvalidAgent(format!(
                "Agent '{}' is listed more than once",
                agent
            )));
        }
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_seconds < 1 || config.timeout_seconds > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout-seconds must be between 1 and 120, got {}",
            config.timeout_seconds
        )));
    }

    if config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= 20, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates engine thresholds
fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.max_file_size_kb < 1 {
        return Err(ConfigError::Validation(format!(
            "max-file-size-kb must be >= 1, got {}",
            config.max_file_size_kb
        )));
    }

    Ok(())
}
