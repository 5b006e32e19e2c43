//! Robots.txt parser implementation
//!
//! This module provides root-access checks using the robotstxt crate. The
//! document is first reduced to well-formed directives, then tokenized once to
//! record which user agents it names and which sitemaps it declares. Allow and
//! disallow resolution is left to the crate's longest-match matcher.

use crate::robots::RootAccess;
use robotstxt::{parse_robotstxt, DefaultMatcher, RobotsParseHandler};

/// Directive names both passes obey; anything else is ignored
const KNOWN_DIRECTIVES: [&str; 5] = ["user-agent", "allow", "disallow", "crawl-delay", "sitemap"];

/// Parsed robots.txt data
///
/// Holds the sanitized document together with the user agents and sitemaps it
/// declares.
#[derive(Debug, Clone, Default)]
pub struct ParsedRobots {
    /// Well-formed directive lines only; what the matcher sees
    content: String,
    /// Every `User-agent` value, in document order
    agents: Vec<String>,
    sitemaps: Vec<String>,
}

impl ParsedRobots {
    /// Parses raw robots.txt content
    ///
    /// # Arguments
    ///
    /// * `source` - The robots URL (log context only, never fetched)
    /// * `content` - The raw robots.txt file content
    ///
    /// # Returns
    ///
    /// A ParsedRobots instance; malformed lines are skipped, never rejected
    pub fn parse(source: &str, content: &str) -> Self {
        // The tokenizer accepts typos like `Dissallow` and whitespace-separated
        // directives; only exact `name: value` lines reach it
        let sanitized = content
            .lines()
            .map(|line| {
                let line = strip_comment(line);
                if directive_key(line).is_some_and(|key| KNOWN_DIRECTIVES.contains(&key.as_str())) {
                    line
                } else {
                    ""
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut collector = DeclarationCollector::default();
        parse_robotstxt(&sanitized, &mut collector);

        tracing::debug!(
            "Parsed robots.txt from {}: {} user-agent lines, {} sitemaps",
            source,
            collector.agents.len(),
            collector.sitemaps.len()
        );

        Self {
            content: sanitized,
            agents: collector.agents,
            sitemaps: collector.sitemaps,
        }
    }

    /// Sitemap URLs in document order, duplicates preserved
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Root-path (`/`) access for `user_agent`
    ///
    /// The wildcard agent `*` resolves through the `*` groups. Any other agent
    /// resolves only through the groups that name it; with no such group the
    /// answer is `Unspecified` and the caller decides how general rules apply.
    pub fn root_access(&self, user_agent: &str) -> RootAccess {
        self.access("/", user_agent)
    }

    fn access(&self, path: &str, user_agent: &str) -> RootAccess {
        if !self.names(user_agent) {
            return RootAccess::Unspecified;
        }

        // A named agent never falls back to `*` inside the matcher, and `*`
        // itself only ever matches the global groups
        let mut matcher = DefaultMatcher::default();
        if matcher.one_agent_allowed_by_robots(&self.content, matcher_token(user_agent), path) {
            RootAccess::Allowed
        } else {
            RootAccess::Disallowed
        }
    }

    /// Whether some `User-agent` line selects `user_agent` the way the matcher does
    fn names(&self, user_agent: &str) -> bool {
        if is_wildcard(user_agent) {
            return self.agents.iter().any(|agent| is_wildcard(agent));
        }

        let token = matcher_token(user_agent);
        self.agents
            .iter()
            .filter(|agent| !is_wildcard(agent))
            .any(|agent| matcher_token(agent).eq_ignore_ascii_case(token))
    }
}

/// Lower-cased directive name of `line`, the text before its first colon
///
/// Returns `None` when the line has no colon.
fn directive_key(line: &str) -> Option<String> {
    let (key, _) = line.split_once(':')?;
    Some(key.trim().to_ascii_lowercase())
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

/// `*`, optionally followed by whitespace and trailing text
fn is_wildcard(agent: &str) -> bool {
    let agent = agent.trim();
    agent == "*" || agent.strip_prefix('*').is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// The part of an agent name the matcher compares: `*`, or the leading run of
/// `[A-Za-z_-]` (`iaskspider/2.0` becomes `iaskspider`)
fn matcher_token(agent: &str) -> &str {
    let agent = agent.trim();
    if is_wildcard(agent) {
        return "*";
    }
    let end = agent
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-' || c == '_'))
        .unwrap_or(agent.len());
    &agent[..end]
}

/// Records declared user agents and sitemaps
#[derive(Debug, Default)]
struct DeclarationCollector {
    agents: Vec<String>,
    sitemaps: Vec<String>,
}

impl RobotsParseHandler for DeclarationCollector {
    fn handle_robots_start(&mut self) {}

    fn handle_robots_end(&mut self) {}

    fn handle_user_agent(&mut self, _line_num: u32, user_agent: &str) {
        self.agents.push(user_agent.trim().to_string());
    }

    fn handle_allow(&mut self, _line_num: u32, _value: &str) {}

    fn handle_disallow(&mut self, _line_num: u32, _value: &str) {}

    fn handle_sitemap(&mut self, _line_num: u32, value: &str) {
        self.sitemaps.push(value.trim().to_string());
    }

    fn handle_unknown_action(&mut self, _line_num: u32, _action: &str, _value: &str) {}
}
