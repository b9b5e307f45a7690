//! Subscriber setup for the binary. The library crates only emit events.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,setgame_engine=info,setgame_cli=info";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
