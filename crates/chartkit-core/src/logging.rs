//! Logging setup on top of `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,chartkit_geometry=debug";

/// Install a global fmt subscriber.
///
/// Honours `RUST_LOG` when present and falls back to [`DEFAULT_FILTER`].
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_with_filter(filter);
}

/// Install a global fmt subscriber with an explicit filter directive.
pub fn init_with_filter(filter: impl Into<EnvFilter>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter.into())
        .with_target(true)
        .try_init();

    if result.is_err() {
        tracing::trace!("global subscriber already installed");
    }
}
