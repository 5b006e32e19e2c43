//! Fetch tests against a mock HTTP server

use robolens::analysis::analyze;
use robolens::config::{AgentCatalogue, AnalysisConfig, FetchConfig};
use robolens::fetch::{fetch, FetchOutcome};
use robolens::output::{render_report, AnalysisReport, ReportFormat};
use robolens::RobolensError;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_robots(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_plain_text_robots() {
    let server = MockServer::start().await;
    mount_robots(
        &server,
        ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"),
    )
    .await;

    let fetched = fetch(&FetchConfig::default(), &server.uri()).await.unwrap();

    assert_eq!(fetched.outcome, FetchOutcome::Found);
    assert_eq!(fetched.content, "User-agent: *\nAllow: /");
    assert_eq!(fetched.robots_url, format!("{}/robots.txt", server.uri()));
    assert!(fetched.notice.is_none());
}

#[tokio::test]
async fn test_fetch_not_found_is_empty_robots() {
    let server = MockServer::start().await;
    mount_robots(&server, ResponseTemplate::new(404)).await;

    let fetched = fetch(&FetchConfig::default(), &server.uri()).await.unwrap();

    assert_eq!(fetched.outcome, FetchOutcome::NotFound);
    assert!(fetched.content.is_empty());
    assert!(fetched.notice.is_none());
}

#[tokio::test]
async fn test_fetch_html_page_is_flagged() {
    let server = MockServer::start().await;
    mount_robots(
        &server,
        ResponseTemplate::new(200)
            .set_body_string("<!DOCTYPE html>\n<html><body>Not here</body></html>"),
    )
    .await;

    let fetched = fetch(&FetchConfig::default(), &server.uri()).await.unwrap();

    assert_eq!(fetched.outcome, FetchOutcome::NotPlainText);
    assert!(fetched.content.is_empty());
    assert!(fetched
        .notice
        .as_deref()
        .is_some_and(|notice| notice.contains("HTML page")));
}

#[tokio::test]
async fn test_fetch_server_error_fails() {
    let server = MockServer::start().await;
    mount_robots(&server, ResponseTemplate::new(500)).await;

    let result = fetch(&FetchConfig::default(), &server.uri()).await;

    match result {
        Err(RobolensError::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_follows_redirect() {
    let server = MockServer::start().await;
    let location = format!("{}/moved.txt", server.uri());
    mount_robots(
        &server,
        ResponseTemplate::new(301).insert_header("Location", location.as_str()),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/moved.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: GPTBot\nDisallow: /"))
        .mount(&server)
        .await;

    let fetched = fetch(&FetchConfig::default(), &server.uri()).await.unwrap();

    assert_eq!(fetched.outcome, FetchOutcome::Found);
    assert_eq!(fetched.content, "User-agent: GPTBot\nDisallow: /");
    // The requested URL is reported, not the redirect target
    assert_eq!(fetched.robots_url, format!("{}/robots.txt", server.uri()));
}

#[tokio::test]
async fn test_fetch_redirect_limit() {
    let server = MockServer::start().await;
    let location = format!("{}/moved.txt", server.uri());
    mount_robots(
        &server,
        ResponseTemplate::new(302).insert_header("Location", location.as_str()),
    )
    .await;

    let config = FetchConfig {
        max_redirects: 0,
        ..FetchConfig::default()
    };
    let result = fetch(&config, &server.uri()).await;

    assert!(matches!(result, Err(RobolensError::RedirectLimit { .. })));
}

#[tokio::test]
async fn test_fetch_timeout() {
    let server = MockServer::start().await;
    mount_robots(
        &server,
        ResponseTemplate::new(200)
            .set_body_string("User-agent: *\nAllow: /")
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = FetchConfig {
        timeout_seconds: 1,
        ..FetchConfig::default()
    };
    let result = fetch(&config, &server.uri()).await;

    assert!(matches!(result, Err(RobolensError::Timeout { .. })));
}

#[tokio::test]
async fn test_invalid_target_fails_before_fetching() {
    let result = fetch(&FetchConfig::default(), "ftp://example.com").await;

    assert!(matches!(result, Err(RobolensError::UrlError(_))));
}

#[tokio::test]
async fn test_fetched_robots_json_report() {
    let server = MockServer::start().await;
    mount_robots(
        &server,
        ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /\n\nUser-agent: GPTBot\nAllow: /\n\nSitemap: https://example.com/sitemap.xml",
        ),
    )
    .await;

    let fetched = fetch(&FetchConfig::default(), &server.uri()).await.unwrap();
    let catalogue = AgentCatalogue::new(["GPTBot", "CCBot"]);
    let result = analyze(
        &fetched.content,
        &fetched.robots_url,
        &catalogue,
        AnalysisConfig::default(),
    );
    let report = AnalysisReport::new(&fetched, &result);
    let rendered = render_report(&report, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["source"], format!("{}/robots.txt", server.uri()));
    assert_eq!(value["analysis"][0]["userAgent"], "*");
    assert_eq!(value["analysis"][0]["isAllowedRoot"], false);
    assert_eq!(value["analysis"][1]["userAgent"], "GPTBot");
    assert_eq!(value["analysis"][1]["isAllowedRoot"], true);
    assert!(value["analysis"][2]["isAllowedRoot"].is_null());
    assert_eq!(value["sitemap"], "https://example.com/sitemap.xml");
    assert_eq!(value["optimizationScore"], result.score);
}

#[tokio::test]
async fn test_html_notice_leads_recommendations() {
    let server = MockServer::start().await;
    mount_robots(
        &server,
        ResponseTemplate::new(200).set_body_string("<html><head></head></html>"),
    )
    .await;

    let fetched = fetch(&FetchConfig::default(), &server.uri()).await.unwrap();
    let result = analyze(
        &fetched.content,
        &fetched.robots_url,
        &AgentCatalogue::new(["GPTBot"]),
        AnalysisConfig::default(),
    );
    let report = AnalysisReport::new(&fetched, &result);

    assert!(report.detailed_recommendations[0].starts_with("Warning: The content at"));
    assert_eq!(report.detailed_recommendations[1], result.summary.render());
}
