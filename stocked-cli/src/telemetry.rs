use anyhow::{anyhow, Context, Result};
use stocked_config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so stdout carries only results.
///
/// `RUST_LOG` wins over the configured level; each `-v` raises the default one step.
pub fn init_tracing(log: &LogConfig, verbosity: u8) -> Result<()> {
    let default_directive = match verbosity {
        0 => log.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .with_context(|| format!("invalid log level '{default_directive}'"))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
