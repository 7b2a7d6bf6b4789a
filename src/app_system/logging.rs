use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::settings::{LogFormat, LoggingSettings};

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Call once, before the system starts.
pub fn setup_tracing(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match settings.format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(false)).try_init(),
    };
    if let Err(e) = installed {
        tracing::warn!(error = %e, "Tracing subscriber already installed");
    }
}
