//! Tracing subscriber for tests.

use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per process; later calls are no-ops.
///
/// Honors `RUST_LOG` and defaults to `debug` for the workspace crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nousui_catalog=debug,nousui_config=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn repeated_initialisation_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
