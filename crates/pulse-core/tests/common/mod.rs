#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared helpers for runner integration tests.

use chrono::{DateTime, TimeZone, Utc};
use httpmock::MockServer;
use pulse_core::ports::FixedClock;
use pulse_core::{Credentials, Endpoint, EndpointCatalog, RunnerBuilder, RunnerConfig};
use url::Url;

/// Port 1 is reserved and nothing listens on it; connecting fails fast.
pub const UNREACHABLE: &str = "http://127.0.0.1:1/unreachable";

pub fn token_json(access_token: &str) -> String {
    format!(r#"{{"token_type":"Bearer","expires_in":3599,"access_token":"{access_token}"}}"#)
}

pub fn credentials() -> Credentials {
    Credentials::new("refresh-tok", "client-id", "client-secret")
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn config_for(token_server: &MockServer) -> RunnerConfig {
    RunnerConfig::default().with_token_endpoint(Url::parse(&token_server.url("/token")).unwrap())
}

/// `n` endpoints that all hit `/api` on `server`, told apart by query string.
pub fn api_catalog(server: &MockServer, n: usize) -> EndpointCatalog {
    EndpointCatalog::new(
        (0..n)
            .map(|i| Endpoint::new(server.url(format!("/api?i={i}")), format!("task {i}")))
            .collect(),
    )
}

pub fn runner_builder(token_server: &MockServer) -> RunnerBuilder {
    RunnerBuilder::new(credentials())
        .config(config_for(token_server))
        .clock(FixedClock::new(fixed_time()))
        .seed(1)
}
