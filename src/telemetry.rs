use crate::config::LogFormat;
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,sqlx=warn,tower_http=info";

/// Installs the process-wide subscriber. `RUST_LOG` takes precedence over the
/// default filter.
pub fn init(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let installed = match format {
        LogFormat::Json => builder
            .json()
            .with_current_span(false)
            .flatten_event(true)
            .try_init(),
        LogFormat::Pretty => builder.with_target(false).compact().try_init(),
    };

    installed.map_err(|e| Error::Config(format!("Failed to install log subscriber: {}", e)))
}
