//! Tracked AI-crawler catalogue
//!
//! The catalogue is plain data handed to the extractor and the engine, so tests
//! can run against a handful of agents and the list can change without touching
//! the evaluation logic.

/// The wildcard user agent, matched when no more specific group applies
pub const WILDCARD_AGENT: &str = "*";

/// Known AI crawler identifiers evaluated by default
const DEFAULT_AI_CRAWLERS: &[&str] = &[
    "AI2Bot",
    "Ai2Bot-Dolma",
    "aiHitBot",
    "Amazonbot",
    "anthropic-ai",
    "Applebot",
    "Applebot-Extended",
    "Brightbot 1.0",
    "Bytespider",
    "CCBot",
    "ChatGPT-User",
    "Claude-Web",
    "ClaudeBot",
    "cohere-ai",
    "cohere-training-data-crawler",
    "Cotoyogi",
    "Crawlspace",
    "Diffbot",
    "DuckAssistBot",
    "FacebookBot",
    "Factset_spyderbot",
    "FirecrawlAgent",
    "FriendlyCrawler",
    "Google-Extended",
    "GoogleOther",
    "GoogleOther-Image",
    "GoogleOther-Video",
    "GPTBot",
    "iaskspider/2.0",
    "ICC-Crawler",
    "ImagesiftBot",
    "img2dataset",
    "imgproxy",
    "ISSCyberRiskCrawler",
    "Kangaroo Bot",
    "meta-externalagent",
    "Meta-ExternalAgent",
    "meta-externalfetcher",
    "Meta-ExternalFetcher",
    "NovaAct",
    "OAI-SearchBot",
    "omgili",
    "omgilibot",
    "Operator",
    "PanguBot",
    "Perplexity-User",
    "PerplexityBot",
    "PetalBot",
    "Scrapy",
    "SemrushBot-OCOB",
    "SemrushBot-SWA",
    "Sidetrade indexer bot",
    "TikTokSpider",
    "Timpibot",
    "VelenPublicWebCrawler",
    "Webzio-Extended",
    "YouBot",
];

/// Ordered, immutable list of tracked agent names
///
/// Names are case-insensitive match keys but are kept verbatim for display.
/// The wildcard is never stored here; [`AgentCatalogue::tracked_agents`]
/// prepends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCatalogue {
    agents: Vec<String>,
}

impl AgentCatalogue {
    /// Creates a catalogue from agent names, keeping their order
    pub fn new<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
        }
    }

    /// The catalogue agents, wildcard excluded
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Whether `name` is a catalogue agent (exact match, as rule records are keyed)
    pub fn contains(&self, name: &str) -> bool {
        self.agents.iter().any(|agent| agent == name)
    }

    /// Extraction order: the wildcard first, then catalogue order
    pub fn tracked_agents(&self) -> Vec<&str> {
        std::iter::once(WILDCARD_AGENT)
            .chain(self.agents.iter().map(String::as_str))
            .collect()
    }
}

impl Default for AgentCatalogue {
    fn default() -> Self {
        Self::new(DEFAULT_AI_CRAWLERS.iter().copied())
    }
}
