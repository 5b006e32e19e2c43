use crate::config::catalogue::AgentCatalogue;
use serde::Deserialize;

/// Default fetch timeout, in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 8;

/// Default number of redirects followed before giving up
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Browser-like User-Agent sent when fetching robots.txt
pub const DEFAULT_FETCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Robolens
///
/// Every section is optional; a missing section falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalogue: CatalogueConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Tracked AI-crawler catalogue
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueConfig {
    /// Agent names to evaluate, in report order
    #[serde(default = "default_agents")]
    pub agents: Vec<String>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            agents: default_agents(),
        }
    }
}

impl CatalogueConfig {
    /// Builds the injected catalogue from the configured names
    pub fn to_catalogue(&self) -> AgentCatalogue {
        AgentCatalogue::new(self.agents.clone())
    }
}

fn default_agents() -> Vec<String> {
    AgentCatalogue::default().agents().to_vec()
}

/// HTTP behaviour when fetching robots.txt
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum redirects to follow
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header for the robots.txt request
    #[serde(rename = "user-agent", default = "default_fetch_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_FETCH_USER_AGENT.to_string(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_fetch_user_agent() -> String {
    DEFAULT_FETCH_USER_AGENT.to_string()
}

/// Thresholds used by the recommendation engine
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// Files above this size (KB) are penalized
    #[serde(rename = "max-file-size-kb", default = "default_max_file_size_kb")]
    pub max_file_size_kb: u64,

    /// Crawl-delays strictly above this many seconds count as high
    #[serde(
        rename = "high-crawl-delay-seconds",
        default = "default_high_crawl_delay_seconds"
    )]
    pub high_crawl_delay_seconds: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_size_kb: default_max_file_size_kb(),
            high_crawl_delay_seconds: default_high_crawl_delay_seconds(),
        }
    }
}

fn default_max_file_size_kb() -> u64 {
    512
}

fn default_high_crawl_delay_seconds() -> u64 {
    5
}
