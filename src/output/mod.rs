//! Output module for rendering analysis reports
//!
//! This module handles:
//! - Building the serializable report from an analysis
//! - Rendering it as terminal text, markdown or JSON
//! - Writing the rendered report to a file

mod markdown;
mod report;
mod text;

pub use markdown::format_markdown_report;
pub use report::{AgentAnalysis, AnalysisReport, ScoreLine, SitemapField};
pub use text::{format_text_report, print_report};

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while rendering or writing a report
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown report format: {0}")]
    Format(String),
}

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(OutputError::Format(other.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Renders a report in the requested format
///
/// # Arguments
///
/// * `report` - The report to render
/// * `format` - Output format
///
/// # Returns
///
/// * `Ok(String)` - The rendered report
/// * `Err(OutputError)` - JSON serialization failed
pub fn render_report(report: &AnalysisReport, format: ReportFormat) -> OutputResult<String> {
    match format {
        ReportFormat::Text => Ok(format_text_report(report)),
        ReportFormat::Markdown => Ok(format_markdown_report(report)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes a rendered report to a file, replacing any existing content
pub fn write_report(path: &Path, rendered: &str) -> OutputResult<()> {
    std::fs::write(path, rendered)?;
    tracing::info!("Report written to: {}", path.display());
    Ok(())
}
