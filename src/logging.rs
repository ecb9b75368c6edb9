use crate::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from logging settings
///
/// Host applications call this once at startup. `RUST_LOG` overrides the
/// configured level when set. Calling it twice is a no-op (init would
/// panic, so the second call is swallowed via `try_init`).
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}
