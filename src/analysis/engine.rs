//! Recommendation engine
//!
//! Turns extracted agent records into findings, a score ledger and a closing
//! summary. Checks run in a fixed order and the engine holds no state between
//! calls, so identical inputs always produce identical output.

use crate::analysis::finding::{Check, Finding, Rating, Severity, Summary};
use crate::analysis::score::ScoreLedger;
use crate::config::{AgentCatalogue, AnalysisConfig, WILDCARD_AGENT};
use crate::robots::{AgentRule, RootAccess};
use std::collections::HashSet;

/// Score ceiling when `*` blocks `/` and no catalogue agent is let back in
const BLANKET_BLOCK_CEILING: i32 = 10;

/// Percentage of catalogue agents that must reach `/` to count as a majority
const MAJORITY_PERCENT: usize = 70;

/// Engine output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    /// Deduplicated findings, in emission order
    pub findings: Vec<Finding>,
    pub summary: Summary,
    /// Deduplicated positive-practice phrases used by the summary
    pub positive_practices: Vec<String>,
    pub ledger: ScoreLedger,
    /// Clamped to 0..=100
    pub score: u8,
}

/// What the `*` record says about `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WildcardPolicy {
    Allowed,
    Disallowed,
    /// No `*` record, or no `*` group in the file
    Absent,
}

impl WildcardPolicy {
    fn of(record: Option<&AgentRule>) -> Self {
        match record.map(|rule| rule.root_access) {
            Some(RootAccess::Allowed) => Self::Allowed,
            Some(RootAccess::Disallowed) => Self::Disallowed,
            Some(RootAccess::Unspecified) | None => Self::Absent,
        }
    }
}

/// Mutable state of a single evaluation
#[derive(Debug, Default)]
struct Evaluation {
    findings: Vec<Finding>,
    ledger: ScoreLedger,
    positive_practices: Vec<String>,
}

impl Evaluation {
    fn emit(&mut self, check: Check, severity: Severity, message: String) {
        self.emit_scored(check, severity, message, 0);
    }

    fn emit_scored(&mut self, check: Check, severity: Severity, message: String, delta: i32) {
        tracing::debug!("{:?} ({:+}): {}", check, delta, message);
        self.ledger.record(check, delta, message.as_str());
        self.findings.push(Finding::new(check, severity, message));
    }

    fn practice(&mut self, phrase: impl Into<String>) {
        let phrase = phrase.into();
        if !self.positive_practices.contains(&phrase) {
            self.positive_practices.push(phrase);
        }
    }

    fn fired(&self, predicate: impl Fn(Check) -> bool) -> bool {
        self.findings.iter().any(|finding| predicate(finding.check))
    }
}

/// Evaluates agent records against an injected catalogue
#[derive(Debug, Clone)]
pub struct RecommendationEngine<'a> {
    catalogue: &'a AgentCatalogue,
    settings: AnalysisConfig,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalogue: &'a AgentCatalogue, settings: AnalysisConfig) -> Self {
        Self {
            catalogue,
            settings,
        }
    }

    /// Runs every check and builds the summary
    ///
    /// # Arguments
    ///
    /// * `agent_rules` - Extracted records; the `*` record carries the general rules
    /// * `sitemaps` - Declared sitemap URLs
    /// * `robots_text` - Raw robots.txt content, used for the size check
    pub fn evaluate(
        &self,
        agent_rules: &[AgentRule],
        sitemaps: &[String],
        robots_text: &str,
    ) -> Recommendations {
        let mut eval = Evaluation::default();
        let wildcard = find_rule(agent_rules, WILDCARD_AGENT);
        let policy = WildcardPolicy::of(wildcard);

        self.check_file_size(&mut eval, robots_text);

        for agent in self.catalogue.agents() {
            match find_rule(agent_rules, agent) {
                Some(rule) => self.check_listed_agent(&mut eval, agent, rule, wildcard, policy),
                None => check_unlisted_agent(&mut eval, agent, policy),
            }
        }

        self.check_wildcard(&mut eval, agent_rules, wildcard, policy);
        check_sitemaps(&mut eval, sitemaps);
        self.collect_positive_practices(&mut eval, agent_rules, policy);

        let score = eval.ledger.total();
        let findings = deduplicate(eval.findings);
        let summary = summarize(score, &findings, &eval.positive_practices);

        tracing::debug!(
            "Evaluated {} agents: {} findings, raw score {}, final score {}",
            self.catalogue.len(),
            findings.len(),
            eval.ledger.raw_total(),
            score
        );

        Recommendations {
            findings,
            summary,
            positive_practices: eval.positive_practices,
            ledger: eval.ledger,
            score,
        }
    }

    fn check_file_size(&self, eval: &mut Evaluation, robots_text: &str) {
        let size_kb = robots_text.len() as f64 / 1024.0;
        let max_kb = self.settings.max_file_size_kb;

        if size_kb > max_kb as f64 {
            eval.emit_scored(
                Check::FileSize,
                Severity::Warning,
                format!(
                    "The robots.txt file size ({:.1}KB) exceeds the recommended maximum of {}KB. Very large files can be problematic for crawlers. Consider simplifying your robots.txt.",
                    size_kb, max_kb
                ),
                -20,
            );
        } else {
            eval.practice("maintaining an optimal robots.txt file size");
        }
    }

    fn check_listed_agent(
        &self,
        eval: &mut Evaluation,
        agent: &str,
        rule: &AgentRule,
        wildcard: Option<&AgentRule>,
        policy: WildcardPolicy,
    ) {
        match rule.root_access {
            RootAccess::Disallowed => eval.emit_scored(
                Check::AgentDisallowed,
                Severity::MajorIssue,
                format!(
                    "Specific rule for {agent} disallows access to '/'. If this is unintentional, change to 'Allow: /' or remove the block (e.g., `User-agent: {agent}\\nAllow: /`)."
                ),
                -30,
            ),
            RootAccess::Allowed => eval.emit_scored(
                Check::AgentAllowed,
                Severity::Good,
                format!("{agent} is explicitly allowed access to '/'."),
                2,
            ),
            RootAccess::Unspecified if policy == WildcardPolicy::Disallowed => eval.emit_scored(
                Check::AgentBlockedByWildcard,
                Severity::Warning,
                format!(
                    "{agent} has no specific '/' rule and is likely disallowed by a general `User-agent: *\\nDisallow: /` rule. To allow {agent}, add `User-agent: {agent}\\nAllow: /`."
                ),
                -20,
            ),
            RootAccess::Unspecified => eval.emit(
                Check::AgentFollowsWildcard,
                Severity::Info,
                format!(
                    "{agent} has no specific '/' rule. It will follow general access rules for '/'. For clarity, consider adding an explicit `User-agent: {agent}\\nAllow: /`."
                ),
            ),
        }

        let mut has_own_crawl_delay = false;

        for line in &rule.specific_rules {
            if let Some(path) = directive_value(line, "disallow") {
                if !path.is_empty() && path != "/" {
                    eval.emit_scored(
                        Check::RestrictiveDisallow,
                        Severity::Consideration,
                        format!(
                            "For AI crawler {agent}, the rule `{line}` might be overly restrictive. Review if {agent} needs access to this path for better context or functionality."
                        ),
                        -3,
                    );
                }
            } else if let Some(value) = directive_value(line, "crawl-delay") {
                has_own_crawl_delay = true;
                let Some(delay) = parse_delay(value) else {
                    continue;
                };

                if self.is_high_delay(delay) {
                    eval.emit_scored(
                        Check::HighCrawlDelay,
                        Severity::Warning,
                        format!(
                            "Crawl-delay for {agent} is {delay} seconds. This is high and might slow down content discovery. Consider reducing it if not essential."
                        ),
                        -5,
                    );
                } else {
                    eval.emit_scored(
                        Check::CrawlDelay,
                        Severity::Info,
                        format!(
                            "Crawl-delay of {delay} seconds is set for {agent}. Ensure this aligns with your server capacity and crawling goals for AI."
                        ),
                        -1,
                    );
                }
            }
        }

        if has_own_crawl_delay {
            return;
        }

        if let Some(delay) = wildcard.and_then(wildcard_crawl_delay) {
            let (check, delta) = if self.is_high_delay(delay) {
                (Check::InheritedHighCrawlDelay, -3)
            } else {
                (Check::InheritedCrawlDelay, -1)
            };
            eval.emit_scored(
                check,
                Severity::Info,
                format!(
                    "{agent} may inherit a Crawl-delay of {delay} from general rules (*). If this is high (e.g. >{}s), consider a specific, lower crawl-delay for {agent} or setting it to 0.",
                    self.settings.high_crawl_delay_seconds
                ),
                delta,
            );
        }
    }

    fn check_wildcard(
        &self,
        eval: &mut Evaluation,
        agent_rules: &[AgentRule],
        wildcard: Option<&AgentRule>,
        policy: WildcardPolicy,
    ) {
        let any_allowed = self.any_catalogue_agent(agent_rules, RootAccess::Allowed);
        let any_disallowed = self.any_catalogue_agent(agent_rules, RootAccess::Disallowed);

        match policy {
            WildcardPolicy::Disallowed if !any_allowed => {
                let message = "General access (`User-agent: *`) disallows access to '/', and no specific AI crawlers are explicitly allowed. This will prevent most AI crawlers from accessing your site.".to_string();
                eval.ledger
                    .cap(Check::WildcardBlocksAll, BLANKET_BLOCK_CEILING, message.as_str());
                eval.emit(Check::WildcardBlocksAll, Severity::Critical, message);
            }
            WildcardPolicy::Allowed | WildcardPolicy::Absent if !any_disallowed => {
                eval.emit(
                    Check::WildcardPermissive,
                    Severity::Good,
                    "General access (`User-agent: *`) allows access to '/', and no key AI crawlers are specifically disallowed. This is a positive setup for AI visibility.".to_string(),
                );
            }
            _ => {}
        }

        if policy == WildcardPolicy::Absent {
            eval.emit(
                Check::NoWildcardBlock,
                Severity::Info,
                "No general `User-agent: *` block found. This typically means all paths are allowed by default unless specified otherwise for particular user-agents. This is generally good for crawlability.".to_string(),
            );
        }

        if eval.fired(|check| check.is_inherited_crawl_delay()) {
            return;
        }

        if let Some(delay) = wildcard.and_then(wildcard_crawl_delay) {
            let (check, delta) = if self.is_high_delay(delay) {
                (Check::WildcardHighCrawlDelay, -5)
            } else {
                (Check::WildcardCrawlDelay, -2)
            };
            eval.emit_scored(
                check,
                Severity::Warning,
                format!(
                    "A general Crawl-delay of {delay} seconds is set for `*`. This will affect all crawlers not having their own specific crawl-delay, including potentially some AI crawlers. If this is high (e.g. >{}s), it might slow them down.",
                    self.settings.high_crawl_delay_seconds
                ),
                delta,
            );
        }
    }

    fn collect_positive_practices(
        &self,
        eval: &mut Evaluation,
        agent_rules: &[AgentRule],
        policy: WildcardPolicy,
    ) {
        let total = self.catalogue.len();
        let reachable = self
            .catalogue
            .agents()
            .iter()
            .filter(|agent| {
                find_rule(agent_rules, agent)
                    .is_some_and(|rule| rule.root_access != RootAccess::Disallowed)
            })
            .count();
        let all_reachable = total > 0 && reachable == total;

        if all_reachable {
            eval.practice(format!(
                "ensuring root access for all {total} monitored AI crawlers"
            ));
        } else if reachable > 0 && reachable * 100 >= total * MAJORITY_PERCENT {
            eval.practice(format!(
                "providing root access for a majority ({reachable}/{total}) of monitored AI crawlers"
            ));
        }

        // Disallowed is the only blanket block; a `*` Disallow with an agent
        // explicitly allowed still fails this test
        let permissive = policy != WildcardPolicy::Disallowed;
        if permissive {
            eval.practice("maintaining a generally permissive crawling policy (`User-agent: *`)");
        }

        let pitfalls = eval.fired(|check| check == Check::RestrictiveDisallow || check.is_high_crawl_delay());
        if !pitfalls && reachable > 0 && permissive {
            eval.practice(
                "avoiding common pitfalls like overly broad disallows or high crawl-delays for AI agents",
            );
        }
    }

    fn any_catalogue_agent(&self, agent_rules: &[AgentRule], access: RootAccess) -> bool {
        agent_rules
            .iter()
            .any(|rule| rule.root_access == access && self.catalogue.contains(&rule.user_agent))
    }

    fn is_high_delay(&self, delay: i64) -> bool {
        delay > self.settings.high_crawl_delay_seconds as i64
    }
}

fn check_unlisted_agent(eval: &mut Evaluation, agent: &str, policy: WildcardPolicy) {
    match policy {
        WildcardPolicy::Disallowed => eval.emit_scored(
            Check::UnlistedAgentBlocked,
            Severity::MajorIssue,
            format!(
                "No specific rule for {agent}, and general access (`User-agent: *`) disallows access to '/'. To allow {agent}, add `User-agent: {agent}\\nAllow: /`."
            ),
            -25,
        ),
        WildcardPolicy::Allowed => eval.emit(
            Check::UnlistedAgentAllowed,
            Severity::Info,
            format!(
                "No specific rules found for {agent}. It will follow general access rules (`User-agent: *`), which currently allow access to '/'. Consider adding specific rules if you need granular control or to ensure future changes to '*' don't unintentionally block it."
            ),
        ),
        WildcardPolicy::Absent => eval.emit(
            Check::UnlistedAgentDefault,
            Severity::Info,
            format!(
                "No specific rules found for {agent}. It will likely follow default access rules (generally allowed for '/'). Consider adding specific rules (`User-agent: {agent}\\nAllow: /`) for clarity and granular control."
            ),
        ),
    }
}

fn check_sitemaps(eval: &mut Evaluation, sitemaps: &[String]) {
    if sitemaps.is_empty() {
        eval.emit_scored(
            Check::MissingSitemap,
            Severity::Warning,
            "No sitemap(s) found in robots.txt. Add a sitemap directive (e.g., `Sitemap: https://yourdomain.com/sitemap.xml`) to help all crawlers, including AI, discover your content efficiently.".to_string(),
            -10,
        );
    } else {
        eval.emit_scored(
            Check::SitemapFound,
            Severity::Good,
            format!("Sitemap(s) found: {}.", sitemaps.join(", ")),
            5,
        );
        eval.practice("including sitemap(s) for content discovery");
    }
}

fn summarize(score: u8, findings: &[Finding], positive_practices: &[String]) -> Summary {
    let has_blocking = findings.iter().any(|f| f.severity.is_blocking());
    let has_warnings = findings.iter().any(|f| f.severity == Severity::Warning);
    let has_actionable = findings.iter().any(|f| f.severity.is_actionable());
    let practices = positive_practices.join("; ");

    if score >= 90 && !has_blocking && !has_warnings {
        let mut message = "Your robots.txt is well-optimized for AI crawlers.".to_string();
        if positive_practices.is_empty() {
            message.push_str(" It effectively allows access and follows key best practices.");
        } else {
            message.push_str(&format!(" Key good practices observed: {practices}."));
        }
        Summary {
            rating: Rating::Excellent,
            message,
        }
    } else if score >= 75 && !has_blocking {
        let mut message = "Your robots.txt is reasonably configured for AI crawlers.".to_string();
        if !positive_practices.is_empty() {
            message.push_str(&format!(" Positive aspects include: {practices}."));
        }
        if has_actionable {
            message.push_str(" Some suggestions for further refinement are listed below.");
        } else if !positive_practices.is_empty() {
            message.push_str(" Keep up the good work!");
        }
        Summary {
            rating: Rating::Good,
            message,
        }
    } else if score >= 50 {
        Summary {
            rating: Rating::Okay,
            message: "Your robots.txt has areas for improvement for AI crawler optimization. Please review the suggestions below, focusing on warnings and major issues.".to_string(),
        }
    } else {
        Summary {
            rating: Rating::NeedsImprovement,
            message: "Your robots.txt requires significant attention to better support AI crawlers. Focus on the critical issues and warnings listed below.".to_string(),
        }
    }
}

/// Keeps the first occurrence of each rendered finding
fn deduplicate(findings: Vec<Finding>) -> Vec<Finding> {
    let mut seen = HashSet::new();
    findings
        .into_iter()
        .filter(|finding| seen.insert((finding.severity, finding.message.clone())))
        .collect()
}

fn find_rule<'r>(agent_rules: &'r [AgentRule], agent: &str) -> Option<&'r AgentRule> {
    agent_rules.iter().find(|rule| rule.user_agent == agent)
}

/// Value of `line` when its directive name equals `directive` (case-insensitive)
fn directive_value<'l>(line: &'l str, directive: &str) -> Option<&'l str> {
    let (key, value) = line.split_once(':')?;
    key.trim()
        .eq_ignore_ascii_case(directive)
        .then(|| value.trim())
}

/// Leading integer of a crawl-delay value; `2.5` reads as 2, `abc` as nothing
fn parse_delay(value: &str) -> Option<i64> {
    let value = value.trim();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|delay| sign * delay)
}

/// First positive crawl-delay declared in the `*` blocks
fn wildcard_crawl_delay(wildcard: &AgentRule) -> Option<i64> {
    wildcard
        .specific_rules
        .iter()
        .filter_map(|line| directive_value(line, "crawl-delay"))
        .filter_map(parse_delay)
        .find(|&delay| delay > 0)
}
