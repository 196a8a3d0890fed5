//! pulse-core
//!
//! Core building blocks for graph-pulse: a runner that refreshes an OAuth2
//! access token and exercises a randomized subset of REST endpoints.
//!
//! # Module layout
//! - **domain**: credentials, endpoint catalog, call results, round summaries, errors
//! - **ports**: seams for time and refresh-token persistence (Clock, TokenStore)
//! - **impls**: port implementations (file-backed TokenStore)
//! - **app**: sampling, runner, builder
//! - **config**: runner configuration and constants

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{Runner, RunnerBuilder};
pub use config::{AuthScheme, RunnerConfig};
pub use domain::{
    AccessToken, AuthError, CallResult, Credentials, Endpoint, EndpointCatalog, RoundReport,
    RoundSummary, RunReport,
};
