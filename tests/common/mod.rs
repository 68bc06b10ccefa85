// ABOUTME: Shared fixtures for integration tests - test page data and the
// ABOUTME: credential gate for tests that talk to live services.

#![allow(dead_code)]

use agentql_tools::config::{Credentials, LiveCredentials};

/// A page and query known to produce data.
pub struct TestingData {
    pub test_url: String,
    pub test_query: String,
}

/// Test page and query. `TEST_URL` / `TEST_QUERY` override the defaults.
pub fn get_testing_data() -> TestingData {
    TestingData {
        test_url: std::env::var("TEST_URL")
            .unwrap_or_else(|_| "https://scrapeme.live/?s=fish&post_type=product".to_string()),
        test_query: std::env::var("TEST_QUERY").unwrap_or_else(|_| {
            "{ products[] { product_name product_price(integer) } }".to_string()
        }),
    }
}

/// The extraction prompt the agent is given.
pub fn extraction_prompt(data: &TestingData) -> String {
    format!(
        "extract the data from {} with the following agentql query: {}",
        data.test_url, data.test_query
    )
}

/// Both API keys, or `None` after printing which are missing. Tests that
/// need live services return early on `None`.
pub fn live_credentials(test: &str) -> Option<LiveCredentials> {
    let creds = Credentials::from_env();
    let live = creds.live();
    if live.is_none() {
        eprintln!(
            "skipping {}: {} not set",
            test,
            creds.missing().join(" or ")
        );
    }
    live
}
