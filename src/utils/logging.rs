//! Diagnostic logging on stderr using tracing

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered at `level` for this crate.
///
/// Stdout carries the interactive session, so diagnostics never go there.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::new(format!("warn,unicon={}", level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
