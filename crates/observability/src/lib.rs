//! Structured logging for storefront processes.

/// Install the process-wide subscriber using `RUST_LOG` or [`logging::DEFAULT_FILTER`].
///
/// Safe to call repeatedly; only the first call installs anything.
pub fn init() {
    logging::init();
}

/// Subscriber setup and filter selection.
pub mod logging;
