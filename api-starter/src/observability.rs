//! Logging setup
//!
//! Diagnostics go through `tracing` to stderr so that stdout stays reserved
//! for command output (including `--json`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "API_STARTER_LOG";

/// Initialize the tracing subscriber
///
/// The filter comes from `API_STARTER_LOG` when set, otherwise `warn`, or
/// `debug` for this crate when `verbose` is true.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,api_starter=debug")
    } else {
        EnvFilter::new("warn")
    }
}
