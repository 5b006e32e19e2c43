//! Analysis module: robots.txt text in, scored recommendations out
//!
//! This module contains the recommendation engine and the types it produces:
//! - Findings with a first-class severity
//! - A score ledger recording every delta and the finding behind it
//! - The closing summary

mod engine;
mod finding;
mod score;

pub use engine::{RecommendationEngine, Recommendations};
pub use finding::{Check, Finding, Rating, Severity, Summary};
pub use score::{ScoreAdjustment, ScoreCeiling, ScoreLedger, BASE_SCORE};

use crate::config::{AgentCatalogue, AnalysisConfig};
use crate::robots::{extract_rules, AgentRule};

/// Complete result of analyzing one robots.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// One record per tracked agent, wildcard first
    pub agent_rules: Vec<AgentRule>,
    pub sitemaps: Vec<String>,
    /// Closing verdict, rendered ahead of the findings
    pub summary: Summary,
    /// Deduplicated findings in emission order (summary excluded)
    pub findings: Vec<Finding>,
    pub positive_practices: Vec<String>,
    pub ledger: ScoreLedger,
    /// Final score in 0..=100
    pub score: u8,
}

impl AnalysisResult {
    /// Findings ordered by severity, most severe first; emission order is
    /// kept within a severity
    pub fn prioritized(&self) -> Vec<&Finding> {
        let mut findings: Vec<&Finding> = self.findings.iter().collect();
        findings.sort_by_key(|finding| finding.severity);
        findings
    }

    /// Rendered recommendation lines: the summary, then prioritized findings
    pub fn rendered_recommendations(&self) -> Vec<String> {
        std::iter::once(self.summary.render())
            .chain(self.prioritized().into_iter().map(Finding::render))
            .collect()
    }

    /// Number of findings with the given severity (the summary never counts)
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }

    /// Record for `user_agent`, if it was tracked
    pub fn agent_rule(&self, user_agent: &str) -> Option<&AgentRule> {
        self.agent_rules
            .iter()
            .find(|rule| rule.user_agent == user_agent)
    }
}

/// Extracts per-agent rules and evaluates them in one pass
///
/// # Arguments
///
/// * `robots_text` - Raw robots.txt content; empty means "no robots.txt"
/// * `robots_url` - The robots URL, context only
/// * `catalogue` - Tracked AI crawlers; the wildcard is added automatically
/// * `settings` - Engine thresholds
///
/// # Example
///
/// ```
/// use robolens::analysis::analyze;
/// use robolens::config::{AgentCatalogue, AnalysisConfig};
///
/// let catalogue = AgentCatalogue::new(["GPTBot"]);
/// let result = analyze(
///     "User-agent: *\nDisallow: /",
///     "https://example.com/robots.txt",
///     &catalogue,
///     AnalysisConfig::default(),
/// );
/// assert!(result.score <= 10);
/// ```
pub fn analyze(
    robots_text: &str,
    robots_url: &str,
    catalogue: &AgentCatalogue,
    settings: AnalysisConfig,
) -> AnalysisResult {
    let extraction = extract_rules(robots_text, robots_url, catalogue.tracked_agents());

    let recommendations = RecommendationEngine::new(catalogue, settings).evaluate(
        &extraction.agent_rules,
        &extraction.sitemaps,
        robots_text,
    );

    tracing::info!(
        "Analyzed {}: score {}, {} findings",
        robots_url,
        recommendations.score,
        recommendations.findings.len()
    );

    AnalysisResult {
        agent_rules: extraction.agent_rules,
        sitemaps: extraction.sitemaps,
        summary: recommendations.summary,
        findings: recommendations.findings,
        positive_practices: recommendations.positive_practices,
        ledger: recommendations.ledger,
        score: recommendations.score,
    }
}
