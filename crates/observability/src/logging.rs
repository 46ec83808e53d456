//! JSON log output with a catalog-aware default filter.

use tracing_subscriber::EnvFilter;

/// Directives applied when `RUST_LOG` is unset or unparsable.
///
/// Catalog mutations and search hit counts are logged at `debug`, so the
/// catalog crate is raised above the global level.
pub const DEFAULT_FILTER: &str = "info,storefront_catalog=debug";

/// Resolve the active filter: `RUST_LOG` when it parses, else [`DEFAULT_FILTER`].
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(default_filter = DEFAULT_FILTER, "storefront logging ready");
    }
}
