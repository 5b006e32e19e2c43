//! End-to-end analysis tests over complete robots.txt files

use robolens::analysis::{analyze, AnalysisResult, Check, Severity};
use robolens::config::{AgentCatalogue, AnalysisConfig};
use robolens::RootAccess;

const ROBOTS_URL: &str = "https://example.com/robots.txt";

fn run(text: &str, agents: &[&str]) -> AnalysisResult {
    let catalogue = AgentCatalogue::new(agents.iter().copied());
    analyze(text, ROBOTS_URL, &catalogue, AnalysisConfig::default())
}

fn run_default(text: &str) -> AnalysisResult {
    analyze(
        text,
        ROBOTS_URL,
        &AgentCatalogue::default(),
        AnalysisConfig::default(),
    )
}

#[test]
fn test_score_stays_in_bounds() {
    let inputs = [
        "",
        "User-agent: *\nDisallow: /",
        "User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.xml",
        "User-agent: GPTBot\nDisallow: /\nUser-agent: CCBot\nDisallow: /\nCrawl-delay: 60",
        "User-agent: *\nCrawl-delay: 30\nDisallow: /private\nDisallow: /tmp",
        "garbage without any colon\n\n# comment only",
    ];

    for text in inputs {
        let result = run_default(text);
        assert!(result.score <= 100, "score out of range for {:?}", text);
    }
}

#[test]
fn test_empty_robots_is_default_allow() {
    let result = run("", &["GPTBot", "CCBot"]);

    assert!(result
        .agent_rules
        .iter()
        .all(|rule| rule.root_access == RootAccess::Unspecified && rule.specific_rules.is_empty()));
    assert!(result.sitemaps.is_empty());
    assert_eq!(result.ledger.delta_for(Check::MissingSitemap), -10);
    assert!(result.findings.iter().any(|f| f.check == Check::NoWildcardBlock));
    assert_eq!(result.score, 90);
    assert_eq!(result.count(Severity::Critical), 0);
}

#[test]
fn test_blanket_block_is_capped_and_critical_first() {
    let result = run_default("User-agent: *\nDisallow: /\nSitemap: https://example.com/sitemap.xml");

    assert!(result.score <= 10);
    assert_eq!(result.count(Severity::Critical), 1);

    let prioritized = result.prioritized();
    assert_eq!(prioritized[0].severity, Severity::Critical);
    assert_eq!(prioritized[0].check, Check::WildcardBlocksAll);

    let rendered = result.rendered_recommendations();
    assert_eq!(rendered[0], result.summary.render());
    assert!(rendered[1].starts_with("Critical:"));
}

#[test]
fn test_explicit_allow_lifts_blanket_block() {
    let result = run(
        "User-agent: *\nDisallow: /\n\nUser-agent: GPTBot\nAllow: /",
        &["GPTBot"],
    );

    assert_eq!(result.count(Severity::Critical), 0);
    assert!(result.ledger.ceiling().is_none());
    assert_eq!(
        result.agent_rule("GPTBot").map(|rule| rule.root_access),
        Some(RootAccess::Allowed)
    );
}

#[test]
fn test_allowed_agent_with_sitemap() {
    let result = run(
        "User-agent: GPTBot\nAllow: /\n\nSitemap: https://example.com/sitemap.xml",
        &["GPTBot"],
    );

    assert_eq!(result.ledger.delta_for(Check::AgentAllowed), 2);
    assert_eq!(result.ledger.delta_for(Check::SitemapFound), 5);
    assert_eq!(result.score, 100);
    assert_eq!(result.sitemaps, vec!["https://example.com/sitemap.xml".to_string()]);

    let gptbot = result.agent_rule("GPTBot").unwrap();
    assert_eq!(
        gptbot.specific_rules,
        vec!["User-agent: GPTBot".to_string(), "Allow: /".to_string()]
    );
}

#[test]
fn test_high_crawl_delay_costs_more_than_low() {
    let high = run("User-agent: GPTBot\nAllow: /\nCrawl-delay: 10", &["GPTBot"]);
    let low = run("User-agent: GPTBot\nAllow: /\nCrawl-delay: 2", &["GPTBot"]);

    assert_eq!(high.ledger.delta_for(Check::HighCrawlDelay), -5);
    assert_eq!(high.count(Severity::Warning), 2); // crawl-delay and missing sitemap
    assert_eq!(low.ledger.delta_for(Check::CrawlDelay), -1);
    assert_eq!(low.ledger.delta_for(Check::HighCrawlDelay), 0);
    assert!(high.score < low.score);
}

#[test]
fn test_inherited_crawl_delay_replaces_wildcard_finding() {
    let result = run("User-agent: *\nAllow: /\nCrawl-delay: 20", &["GPTBot"]);

    assert_eq!(result.ledger.delta_for(Check::InheritedHighCrawlDelay), -3);
    assert_eq!(result.ledger.delta_for(Check::WildcardHighCrawlDelay), 0);
}

#[test]
fn test_duplicate_lines_render_once_but_score_twice() {
    let result = run(
        "User-agent: GPTBot\nAllow: /\nDisallow: /a\nDisallow: /a",
        &["GPTBot"],
    );

    let restrictive: Vec<_> = result
        .findings
        .iter()
        .filter(|finding| finding.check == Check::RestrictiveDisallow)
        .collect();
    assert_eq!(restrictive.len(), 1);
    assert_eq!(result.ledger.delta_for(Check::RestrictiveDisallow), -6);
}

#[test]
fn test_analysis_is_idempotent() {
    let text = "User-agent: *\nDisallow: /admin\nCrawl-delay: 3\n\nUser-agent: GPTBot\nDisallow: /\n\nSitemap: https://example.com/a.xml\nSitemap: https://example.com/b.xml";

    let first = run_default(text);
    let second = run_default(text);
    assert_eq!(first, second);
}

#[test]
fn test_agent_matching_ignores_case() {
    let result = run("user-agent: gptbot\ndisallow: /", &["GPTBot"]);

    assert_eq!(
        result.agent_rule("GPTBot").map(|rule| rule.root_access),
        Some(RootAccess::Disallowed)
    );
    assert_eq!(result.ledger.delta_for(Check::AgentDisallowed), -30);
}

#[test]
fn test_oversized_file_is_penalized() {
    let settings = AnalysisConfig {
        max_file_size_kb: 1,
        ..AnalysisConfig::default()
    };
    let mut text = String::from("User-agent: *\nAllow: /\n");
    while text.len() <= 2048 {
        text.push_str("# padding comment line\n");
    }

    let result = analyze(&text, ROBOTS_URL, &AgentCatalogue::new(["GPTBot"]), settings);
    assert_eq!(result.ledger.delta_for(Check::FileSize), -20);
}

#[test]
fn test_misspelled_disallow_costs_nothing() {
    let result = run("User-agent: GPTBot\nDissallow: /", &["GPTBot"]);

    let gptbot = result.agent_rule("GPTBot").unwrap();
    assert_eq!(gptbot.root_access, RootAccess::Allowed);
    assert_eq!(gptbot.specific_rules, vec!["User-agent: GPTBot".to_string()]);
    assert_eq!(result.ledger.delta_for(Check::AgentDisallowed), 0);
    assert_eq!(result.ledger.delta_for(Check::AgentAllowed), 2);
}

#[test]
fn test_colon_in_trailing_comment_is_not_a_directive() {
    let result = run("User-agent: GPTBot\nDisallow / # see: docs", &["GPTBot"]);

    assert_eq!(
        result.agent_rule("GPTBot").map(|rule| rule.root_access),
        Some(RootAccess::Allowed)
    );
    assert_eq!(result.ledger.delta_for(Check::AgentDisallowed), 0);
    assert_eq!(result.count(Severity::MajorIssue), 0);
}

#[test]
fn test_misspelled_user_agent_names_no_group() {
    let result = run("User agent: GPTBot\nDisallow: /", &["GPTBot"]);

    let gptbot = result.agent_rule("GPTBot").unwrap();
    assert_eq!(gptbot.root_access, RootAccess::Unspecified);
    assert!(gptbot.specific_rules.is_empty());
    assert_eq!(
        result.agent_rule("*").map(|rule| rule.root_access),
        Some(RootAccess::Unspecified)
    );
    assert_eq!(result.ledger.delta_for(Check::AgentDisallowed), 0);
    assert!(result.findings.iter().any(|f| f.check == Check::NoWildcardBlock));
}

#[test]
fn test_unknown_directive_inside_block_is_ignored() {
    let result = run(
        "User-agent: *\nNoindex: /\nDisallow: /tmp\n\nUser-agent: GPTBot\nDisalow: /",
        &["GPTBot"],
    );

    assert_eq!(
        result.agent_rule("*").map(|rule| rule.root_access),
        Some(RootAccess::Allowed)
    );
    assert_eq!(
        result.agent_rule("GPTBot").map(|rule| rule.root_access),
        Some(RootAccess::Allowed)
    );
    assert_eq!(result.count(Severity::Critical), 0);
    assert_eq!(result.count(Severity::MajorIssue), 0);
}
