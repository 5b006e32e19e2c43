//! Markdown report generation
//!
//! This module generates a human-readable markdown report of an analysis,
//! including the score, the recommendations and the per-agent access table.

use crate::output::report::{AnalysisReport, SitemapField};

/// Formats a report as markdown
///
/// # Arguments
///
/// * `report` - The analysis report
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(report: &AnalysisReport) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Robots.txt AI Crawler Report\n\n");

    md.push_str(&format!("- **Source**: {}\n", report.source));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "- **Optimization Score**: {}/100\n",
        report.optimization_score
    ));
    if let Some(ceiling) = report.score_ceiling {
        md.push_str(&format!("- **Score Ceiling**: {}\n", ceiling));
    }
    md.push('\n');

    // Recommendations, already in display order
    md.push_str("## Recommendations\n\n");
    for recommendation in &report.detailed_recommendations {
        md.push_str(&format!("- {}\n", recommendation));
    }
    md.push('\n');

    // Sitemaps
    md.push_str("## Sitemaps\n\n");
    match &report.sitemap {
        None => md.push_str("No sitemaps declared.\n\n"),
        Some(SitemapField::One(url)) => md.push_str(&format!("- {}\n\n", url)),
        Some(SitemapField::Many(urls)) => {
            for url in urls {
                md.push_str(&format!("- {}\n", url));
            }
            md.push('\n');
        }
    }

    // Agent table
    md.push_str("## Agent Access\n\n");
    md.push_str("| User Agent | Root Access | Rules |\n");
    md.push_str("|------------|-------------|-------|\n");
    for agent in &report.analysis {
        let access = match agent.is_allowed_root {
            Some(true) => "Allowed",
            Some(false) => "Disallowed",
            None => "Unspecified",
        };
        let rules = if agent.specific_rules.is_empty() {
            "-".to_string()
        } else {
            agent
                .specific_rules
                .iter()
                .map(|rule| format!("`{}`", rule.replace('|', "\\|")))
                .collect::<Vec<_>>()
                .join("<br>")
        };
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            agent.user_agent.replace('|', "\\|"),
            access,
            rules
        ));
    }
    md.push('\n');

    // Score breakdown
    if !report.score_breakdown.is_empty() {
        md.push_str("## Score Breakdown\n\n");
        md.push_str("| Check | Delta |\n");
        md.push_str("|-------|-------|\n");
        for line in &report.score_breakdown {
            md.push_str(&format!("| {} | {:+} |\n", line.check, line.delta));
        }
        md.push('\n');
    }

    // Raw content
    if !report.robots_content.is_empty() {
        md.push_str("## robots.txt\n\n");
        md.push_str("```text\n");
        md.push_str(report.robots_content.trim_end());
        md.push_str("\n```\n");
    }

    md
}
