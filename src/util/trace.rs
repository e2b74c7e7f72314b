//! Installs a `tracing_subscriber` formatter, filtered by the
//! environment.
//!
//! ```bash
//! RUST_LOG=vrp_insert=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
///
/// Calling it more than once is harmless; only the first
/// subscriber is installed.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init();
}
