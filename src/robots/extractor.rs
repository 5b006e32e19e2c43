//! Per-agent rule extraction
//!
//! Combines the resolver's root-access answer with a literal line scan that
//! recovers what each agent's block actually says.

use crate::robots::parser::ParsedRobots;
use crate::robots::{AgentRule, Extraction};

/// Extracts one [`AgentRule`] per agent, in the order given
///
/// # Arguments
///
/// * `robots_text` - Raw robots.txt content (may be empty)
/// * `robots_url` - The robots URL, used as context only
/// * `agents` - Agent names; pass the wildcard `*` first for general-rule semantics
///
/// # Example
///
/// ```
/// use robolens::robots::{extract_rules, RootAccess};
///
/// let extraction = extract_rules(
///     "User-agent: GPTBot\nAllow: /\nSitemap: https://x.com/s.xml",
///     "https://x.com/robots.txt",
///     ["*", "GPTBot"],
/// );
/// assert_eq!(extraction.agent_rules[1].root_access, RootAccess::Allowed);
/// assert_eq!(extraction.sitemaps, vec!["https://x.com/s.xml"]);
/// ```
pub fn extract_rules<'a, I>(robots_text: &str, robots_url: &str, agents: I) -> Extraction
where
    I: IntoIterator<Item = &'a str>,
{
    let robots = ParsedRobots::parse(robots_url, robots_text);

    let agent_rules: Vec<AgentRule> = agents
        .into_iter()
        .map(|agent| {
            let root_access = robots.root_access(agent);
            let specific_rules = collect_directive_lines(robots_text, agent);

            tracing::trace!(
                "{}: root access {:?}, {} directive lines",
                agent,
                root_access,
                specific_rules.len()
            );

            AgentRule {
                user_agent: agent.to_string(),
                root_access,
                specific_rules,
            }
        })
        .collect();

    Extraction {
        agent_rules,
        sitemaps: robots.sitemaps().to_vec(),
    }
}

/// Collects the literal directive lines of every block belonging to `agent`
///
/// A block opens on a `User-agent` line whose value starts with the agent name
/// (case-insensitive) and closes on any other `User-agent` line. The opening
/// line and the block's `Allow`, `Disallow` and `Crawl-delay` lines are kept,
/// trimmed but otherwise verbatim, in document order.
pub fn collect_directive_lines(robots_text: &str, agent: &str) -> Vec<String> {
    let agent = agent.to_lowercase();
    let mut lines = Vec::new();
    let mut in_block = false;

    for raw_line in robots_text.lines() {
        let line = raw_line.trim();

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        match key.trim().to_ascii_lowercase().as_str() {
            "user-agent" => {
                in_block = value.trim().to_lowercase().starts_with(&agent);
                if in_block {
                    lines.push(line.to_string());
                }
            }
            "allow" | "disallow" | "crawl-delay" if in_block => {
                lines.push(line.to_string());
            }
            _ => {}
        }
    }

    lines
}
