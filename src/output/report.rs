//! Report data model
//!
//! The serialized shape mirrors the analysis endpoint payload:
//! `{source, robotsContent, analysis, sitemap?, detailedRecommendations,
//! optimizationScore}`, plus the score breakdown and a timestamp.

use crate::analysis::AnalysisResult;
use crate::fetch::FetchedRobots;
use crate::robots::AgentRule;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-agent entry of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAnalysis {
    pub user_agent: String,
    /// `null` when unspecified
    pub is_allowed_root: Option<bool>,
    pub specific_rules: Vec<String>,
}

impl From<&AgentRule> for AgentAnalysis {
    fn from(rule: &AgentRule) -> Self {
        Self {
            user_agent: rule.user_agent.clone(),
            is_allowed_root: rule.root_access.as_option(),
            specific_rules: rule.specific_rules.clone(),
        }
    }
}

/// A single sitemap serializes as a string, several as a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SitemapField {
    One(String),
    Many(Vec<String>),
}

impl SitemapField {
    fn from_list(sitemaps: &[String]) -> Option<Self> {
        match sitemaps {
            [] => None,
            [only] => Some(Self::One(only.clone())),
            many => Some(Self::Many(many.to_vec())),
        }
    }
}

/// One line of the score breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    pub check: String,
    pub delta: i32,
    pub finding: String,
}

/// Everything a renderer needs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// The robots URL
    pub source: String,
    pub robots_content: String,
    pub analysis: Vec<AgentAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<SitemapField>,
    /// Fetch notice, summary, then findings by severity
    pub detailed_recommendations: Vec<String>,
    pub optimization_score: u8,
    pub score_breakdown: Vec<ScoreLine>,
    /// Ceiling imposed on the score, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_ceiling: Option<i32>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Builds a report stamped with the current time
    pub fn new(fetched: &FetchedRobots, result: &AnalysisResult) -> Self {
        Self::with_timestamp(fetched, result, Utc::now())
    }

    pub fn with_timestamp(
        fetched: &FetchedRobots,
        result: &AnalysisResult,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let mut detailed_recommendations = Vec::new();
        if let Some(notice) = &fetched.notice {
            detailed_recommendations.push(format!("Warning: {}", notice));
        }
        detailed_recommendations.extend(result.rendered_recommendations());

        let score_breakdown = result
            .ledger
            .adjustments()
            .iter()
            .map(|adjustment| ScoreLine {
                check: format!("{:?}", adjustment.check),
                delta: adjustment.delta,
                finding: adjustment.finding.clone(),
            })
            .collect();

        Self {
            source: fetched.robots_url.clone(),
            robots_content: fetched.content.clone(),
            analysis: result.agent_rules.iter().map(AgentAnalysis::from).collect(),
            sitemap: SitemapField::from_list(&result.sitemaps),
            detailed_recommendations,
            optimization_score: result.score,
            score_breakdown,
            score_ceiling: result.ledger.ceiling().map(|ceiling| ceiling.max),
            generated_at,
        }
    }
}
