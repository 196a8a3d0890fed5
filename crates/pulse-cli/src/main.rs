use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pulse_core::config::DEFAULT_REFRESH_TOKEN_FILE;
use pulse_core::impls::FileTokenStore;
use pulse_core::{AuthScheme, Credentials, Runner, RunnerConfig};
use tracing::{error, info};
use url::Url;

mod logging;

/// Refresh an OAuth2 access token and call a random subset of Microsoft
/// Graph / Power BI endpoints, three rounds per invocation.
///
/// Credentials come from REFRESH_TOKEN, CONFIG_ID and CONFIG_KEY.
#[derive(Parser, Debug, Clone)]
#[command(name = "graph-pulse", version)]
struct Args {
    /// Append log lines to this file (stdout is always written)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Quiet mode - only warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Send the access token without the "Bearer " prefix
    #[arg(long)]
    raw_authorization: bool,

    /// Write a rotated refresh token to this file (default: Secret.txt)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_REFRESH_TOKEN_FILE)]
    persist_refresh_token: Option<PathBuf>,

    /// Seed for endpoint sampling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// OAuth2 token endpoint
    #[arg(long)]
    token_endpoint: Option<Url>,
}

impl Args {
    fn runner_config(&self) -> RunnerConfig {
        let mut config = RunnerConfig::default();
        if let Some(endpoint) = &self.token_endpoint {
            config = config.with_token_endpoint(endpoint.clone());
        }
        if self.raw_authorization {
            config = config.with_auth_scheme(AuthScheme::Raw);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.quiet)?;

    // Nothing touches the network before credentials are validated.
    let credentials = Credentials::from_env().inspect_err(|e| {
        error!(error = %e, "configuration error");
    })?;

    let mut builder = Runner::builder(credentials).config(args.runner_config());
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(path) = &args.persist_refresh_token {
        builder = builder.token_store(FileTokenStore::new(path));
    }
    let mut runner = builder.build()?;

    let report = runner.run().await;
    info!(
        completed = report.completed_rounds(),
        skipped = report.skipped_rounds(),
        attempted = report.total_attempted(),
        "run finished"
    );

    Ok(())
}
