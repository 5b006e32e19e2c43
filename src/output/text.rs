//! Plain-text report for the terminal

use crate::output::report::AnalysisReport;

/// Formats a report for terminal output
pub fn format_text_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("=== Robots.txt AI Crawler Report ===\n\n");
    out.push_str(&format!("Source: {}\n", report.source));
    out.push_str(&format!(
        "Optimization score: {}/100\n\n",
        report.optimization_score
    ));

    out.push_str("Recommendations:\n");
    for recommendation in &report.detailed_recommendations {
        out.push_str(&format!("  - {}\n", recommendation));
    }

    let width = report
        .analysis
        .iter()
        .map(|agent| agent.user_agent.len())
        .max()
        .unwrap_or(0);

    out.push_str("\nAgent access to '/':\n");
    for agent in &report.analysis {
        let access = match agent.is_allowed_root {
            Some(true) => "allowed",
            Some(false) => "disallowed",
            None => "unspecified",
        };
        out.push_str(&format!(
            "  {:<width$}  {:<11}  {} rule line(s)\n",
            agent.user_agent,
            access,
            agent.specific_rules.len(),
            width = width
        ));
    }

    out
}

/// Prints a report to stdout
pub fn print_report(report: &AnalysisReport) {
    print!("{}", format_text_report(report));
}
