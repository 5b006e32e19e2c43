//! Integration tests for Robolens
//!
//! These tests drive the public API end-to-end: analysis of whole robots.txt
//! files, and fetching against a wiremock server.

mod analyze_tests;
mod fetch_tests;
