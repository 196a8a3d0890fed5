//! Runner - authenticate, sample, call, summarize.
//!
//! # Flow (per round)
//! 1. `authenticate()`: refresh-token grant against the token endpoint
//! 2. `select_endpoints()`: shuffled suffix of the catalog
//! 3. `execute_round()`: one GET per sampled endpoint, strictly in order
//! 4. summary log
//!
//! `run()` repeats this [`ROUNDS`] times. A failed authentication skips its
//! round; nothing else stops the run.

use std::sync::Arc;

use rand::RngCore;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{Instrument, error, info, info_span, warn};

use super::builder::RunnerBuilder;
use super::sampling;
use crate::config::{ROUNDS, RunnerConfig};
use crate::domain::{
    AccessToken, AuthError, CallRecord, CallResult, Credentials, Endpoint, EndpointCatalog,
    RoundReport, RoundSummary, RunReport, SecretString,
};
use crate::ports::{Clock, TokenStore};

/// Fields of the token endpoint response the runner cares about.
///
/// Both are optional so that error bodies such as
/// `{"error":"invalid_grant"}` still deserialize.
#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Form body of the refresh-token grant.
pub(crate) fn token_form<'a>(
    credentials: &'a Credentials,
    redirect_uri: &'a str,
) -> [(&'static str, &'a str); 5] {
    [
        ("grant_type", "refresh_token"),
        ("refresh_token", credentials.refresh_token.expose()),
        ("client_id", credentials.client_id.expose()),
        ("client_secret", credentials.client_secret.expose()),
        ("redirect_uri", redirect_uri),
    ]
}

pub struct Runner {
    pub(crate) client: reqwest::Client,
    pub(crate) config: RunnerConfig,
    pub(crate) credentials: Credentials,
    pub(crate) catalog: EndpointCatalog,
    pub(crate) rng: Box<dyn RngCore + Send + Sync>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) token_store: Arc<dyn TokenStore>,
}

impl Runner {
    pub fn builder(credentials: Credentials) -> RunnerBuilder {
        RunnerBuilder::new(credentials)
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &EndpointCatalog {
        &self.catalog
    }

    /// Exchange the refresh token for an access token. Single attempt.
    ///
    /// A rotated refresh token in the response is handed to the token store;
    /// a store failure is logged and does not fail authentication.
    pub async fn authenticate(&self) -> Result<AccessToken, AuthError> {
        let form = token_form(&self.credentials, &self.config.redirect_uri);

        let response = self
            .client
            .post(self.config.token_endpoint.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let parsed: TokenResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) => return Err(AuthError::InvalidResponse { body }),
        };

        let Some(access_token) = parsed.access_token.filter(|t| !t.is_empty()) else {
            return Err(AuthError::MissingAccessToken { body });
        };

        if let Some(rotated) = parsed.refresh_token.filter(|t| !t.is_empty()) {
            self.persist_refresh_token(SecretString::new(rotated)).await;
        }

        info!(status = status.as_u16(), "access token acquired");
        Ok(AccessToken::new(access_token))
    }

    async fn persist_refresh_token(&self, refresh_token: SecretString) {
        if let Err(e) = self.token_store.save(&refresh_token).await {
            warn!(error = %e, "could not persist rotated refresh token");
        }
    }

    /// Shuffled suffix of the catalog, drawn from the runner's random source.
    pub fn select_endpoints(&mut self) -> Vec<Endpoint> {
        sampling::select_endpoints(&self.catalog, &mut self.rng)
    }

    /// Call every endpoint once, in order. Never fails: non-200 responses
    /// and transport errors are recorded and logged.
    pub async fn execute_round(
        &self,
        round: u32,
        endpoints: &[Endpoint],
        token: &AccessToken,
    ) -> RoundSummary {
        let authorization = self.config.auth_scheme.header_value(token.expose());
        let mut calls = Vec::with_capacity(endpoints.len());
        let mut succeeded = 0usize;

        for endpoint in endpoints {
            let result = self.call(endpoint, &authorization).await;
            match &result {
                CallResult::Success { status } => {
                    succeeded += 1;
                    info!(
                        n = succeeded,
                        status,
                        url = %endpoint.url,
                        task = %endpoint.task,
                        "call succeeded"
                    );
                }
                CallResult::Failed { status, body } => {
                    warn!(
                        status,
                        url = %endpoint.url,
                        task = %endpoint.task,
                        body = %body,
                        "call failed"
                    );
                }
                CallResult::Error { message } => {
                    error!(
                        url = %endpoint.url,
                        task = %endpoint.task,
                        error = %message,
                        "call errored"
                    );
                }
            }
            calls.push(CallRecord {
                endpoint: endpoint.clone(),
                result,
            });
        }

        let summary = RoundSummary::from_calls(round, self.clock.now(), calls);
        info!(
            completed_at = %summary.completed_at.to_rfc3339(),
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            failed = summary.failed,
            errored = summary.errored,
            "round completed"
        );
        summary
    }

    async fn call(&self, endpoint: &Endpoint, authorization: &str) -> CallResult {
        let response = self
            .client
            .get(&endpoint.url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                if status == 200 {
                    return CallResult::from_status(status, String::new());
                }
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
                CallResult::from_status(status, body)
            }
            Err(e) => CallResult::transport(e.to_string()),
        }
    }

    /// authenticate -> select -> execute, for one round.
    pub async fn run_round(&mut self, round: u32) -> Result<RoundSummary, AuthError> {
        let token = self.authenticate().await?;
        let endpoints = self.select_endpoints();
        info!(
            selected = endpoints.len(),
            catalog = self.catalog.len(),
            "endpoints selected"
        );
        Ok(self.execute_round(round, &endpoints, &token).await)
    }

    /// Run all rounds. Rounds share nothing but the random source.
    pub async fn run(&mut self) -> RunReport {
        let mut report = RunReport::default();

        for round in 1..=ROUNDS {
            let outcome = self
                .run_round(round)
                .instrument(info_span!("round", round))
                .await;

            let entry = match outcome {
                Ok(summary) => RoundReport::Completed(summary),
                Err(e) => {
                    error!(round, error = %e, "authentication failed, skipping round");
                    RoundReport::Skipped {
                        round,
                        reason: e.to_string(),
                    }
                }
            };
            report.rounds.push(entry);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_form_has_refresh_grant_fields() {
        let creds = Credentials::new("rt", "cid", "csecret");
        let form = token_form(&creds, "http://localhost:53682/");
        assert_eq!(
            form,
            [
                ("grant_type", "refresh_token"),
                ("refresh_token", "rt"),
                ("client_id", "cid"),
                ("client_secret", "csecret"),
                ("redirect_uri", "http://localhost:53682/"),
            ]
        );
    }

    #[test]
    fn token_response_tolerates_error_bodies() {
        let r: TokenResponse = serde_json::from_str(r#"{"error":"invalid_grant"}"#).unwrap();
        assert!(r.access_token.is_none());
        assert!(r.refresh_token.is_none());

        let r: TokenResponse =
            serde_json::from_str(r#"{"access_token":"a","refresh_token":"r","expires_in":3599}"#)
                .unwrap();
        assert_eq!(r.access_token.as_deref(), Some("a"));
        assert_eq!(r.refresh_token.as_deref(), Some("r"));
    }
}
