//! Log sink setup: stdout, plus an append-only file when requested.

use std::path::Path;

use anyhow::{Context, anyhow};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

fn default_directives(quiet: bool) -> &'static str {
    if quiet {
        "pulse_core=warn,graph_pulse=warn"
    } else {
        "pulse_core=info,graph_pulse=info"
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(log_file: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(quiet)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match log_file {
        Some(path) => {
            let file = file_appender(path)?;
            builder
                .with_ansi(false)
                .with_writer(std::io::stdout.and(file))
                .try_init()
        }
        None => builder.try_init(),
    };

    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Non-rotating appender; existing content is kept.
fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
