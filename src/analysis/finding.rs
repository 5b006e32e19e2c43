//! Finding, severity and summary types
//!
//! Severity is carried as data; the `Warning:`-style prefixes exist only when a
//! finding is rendered.

use std::fmt;

/// Severity class of a finding, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    MajorIssue,
    Warning,
    Consideration,
    Info,
    Good,
}

impl Severity {
    /// Display prefix used when rendering a finding
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::MajorIssue => "Major Issue",
            Self::Warning => "Warning",
            Self::Consideration => "Consideration",
            Self::Info => "Info",
            Self::Good => "Good",
        }
    }

    /// Critical or MajorIssue
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Critical | Self::MajorIssue)
    }

    /// Anything that asks the site owner to act
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Info | Self::Good)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The heuristic that produced a finding or a score delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    FileSize,
    AgentDisallowed,
    AgentAllowed,
    AgentBlockedByWildcard,
    AgentFollowsWildcard,
    RestrictiveDisallow,
    HighCrawlDelay,
    CrawlDelay,
    InheritedHighCrawlDelay,
    InheritedCrawlDelay,
    UnlistedAgentBlocked,
    UnlistedAgentAllowed,
    UnlistedAgentDefault,
    WildcardBlocksAll,
    WildcardPermissive,
    NoWildcardBlock,
    WildcardHighCrawlDelay,
    WildcardCrawlDelay,
    MissingSitemap,
    SitemapFound,
}

impl Check {
    /// Crawl-delay checks that fired above the high threshold
    pub fn is_high_crawl_delay(&self) -> bool {
        matches!(
            self,
            Self::HighCrawlDelay | Self::InheritedHighCrawlDelay | Self::WildcardHighCrawlDelay
        )
    }

    /// Per-agent findings about a crawl-delay inherited from `*`
    pub fn is_inherited_crawl_delay(&self) -> bool {
        matches!(self, Self::InheritedHighCrawlDelay | Self::InheritedCrawlDelay)
    }
}

/// One natural-language diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Finding {
    pub check: Check,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(check: Check, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            check,
            severity,
            message: message.into(),
        }
    }

    /// `"<Severity>: <message>"`
    pub fn render(&self) -> String {
        format!("{}: {}", self.severity.label(), self.message)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)
    }
}

/// Overall verdict band of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Excellent,
    Good,
    Okay,
    NeedsImprovement,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Closing summary, rendered ahead of every finding
///
/// Kept apart from the findings so severity statistics never count it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rating: Rating,
    pub message: String,
}

impl Summary {
    pub fn render(&self) -> String {
        format!("{}: {}", self.rating.label(), self.message)
    }
}
