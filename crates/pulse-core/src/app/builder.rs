//! RunnerBuilder - wiring of the runner and its ports.
//!
//! Construction is fail-fast: an unusable token endpoint or HTTP client is
//! reported by `build()`, before any round starts.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::runner::Runner;
use crate::config::RunnerConfig;
use crate::domain::{Credentials, EndpointCatalog};
use crate::ports::{Clock, NoopTokenStore, SystemClock, TokenStore};

/// Builds a [`Runner`].
///
/// # Example
/// ```ignore
/// let runner = RunnerBuilder::new(Credentials::from_env()?)
///     .config(RunnerConfig::default().with_auth_scheme(AuthScheme::Raw))
///     .seed(42)
///     .build()?;
/// ```
///
/// Only credentials are required. Defaults: built-in Graph catalog,
/// entropy-seeded `StdRng`, `SystemClock`, `NoopTokenStore`.
pub struct RunnerBuilder {
    credentials: Credentials,
    config: RunnerConfig,
    catalog: EndpointCatalog,
    rng: Option<Box<dyn RngCore + Send + Sync>>,
    clock: Arc<dyn Clock>,
    token_store: Arc<dyn TokenStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("token endpoint must be an http(s) URL, got scheme {0:?}")]
    InvalidTokenEndpoint(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl RunnerBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: RunnerConfig::default(),
            catalog: EndpointCatalog::graph(),
            rng: None,
            clock: Arc::new(SystemClock),
            token_store: Arc::new(NoopTokenStore),
        }
    }

    pub fn config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(mut self, catalog: EndpointCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Random source for endpoint sampling.
    pub fn rng<R: RngCore + Send + Sync + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Shorthand for a seeded `StdRng`; makes sampling reproducible.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(StdRng::seed_from_u64(seed))
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn token_store<S: TokenStore + 'static>(mut self, store: S) -> Self {
        self.token_store = Arc::new(store);
        self
    }

    pub fn build(self) -> Result<Runner, BuildError> {
        let scheme = self.config.token_endpoint.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(BuildError::InvalidTokenEndpoint(scheme.to_string()));
        }

        let mut client = reqwest::Client::builder();
        if let Some(timeout) = self.config.request_timeout {
            client = client.timeout(timeout);
        }
        let client = client.build()?;

        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(StdRng::from_entropy()));

        Ok(Runner {
            client,
            config: self.config,
            credentials: self.credentials,
            catalog: self.catalog,
            rng,
            clock: self.clock,
            token_store: self.token_store,
        })
    }
}
