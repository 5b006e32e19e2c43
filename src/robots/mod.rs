//! Robots.txt handling module
//!
//! This module turns raw robots.txt text into one access record per tracked
//! user agent, plus the sitemap URLs the file declares.

mod extractor;
mod parser;

pub use extractor::{collect_directive_lines, extract_rules};
pub use parser::ParsedRobots;

use std::fmt;

/// Tri-state root-path access for one user agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootAccess {
    /// A rule resolves `/` as allowed
    Allowed,
    /// A rule resolves `/` as disallowed
    Disallowed,
    /// No group applies to this agent at all
    Unspecified,
}

impl RootAccess {
    /// Maps to the `true | false | null` form used in reports
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::Allowed => Some(true),
            Self::Disallowed => Some(false),
            Self::Unspecified => None,
        }
    }
}

impl fmt::Display for RootAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Allowed => "allowed",
            Self::Disallowed => "disallowed",
            Self::Unspecified => "unspecified",
        };
        write!(f, "{}", s)
    }
}

/// Access record for one (site, agent) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRule {
    /// The agent name, or `*`
    pub user_agent: String,

    /// Resolved access to `/`
    pub root_access: RootAccess,

    /// Literal `User-agent`/`Allow`/`Disallow`/`Crawl-delay` lines of this
    /// agent's blocks, in source order
    pub specific_rules: Vec<String>,
}

/// Output of the rule extractor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// One record per requested agent, in request order
    pub agent_rules: Vec<AgentRule>,

    /// `Sitemap:` values in document order
    pub sitemaps: Vec<String>,
}
