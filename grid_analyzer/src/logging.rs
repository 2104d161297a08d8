//! Diagnostics for the puzzle binaries.
//!
//! Answers go to stdout, log events go to stderr so the two never mix.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber.
///
/// Reads `RUST_LOG`, defaults to `warn` if unset, e.g.
/// `RUST_LOG=grid_analyzer=debug cargo run --bin day6_part1 -- inputs.txt`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
