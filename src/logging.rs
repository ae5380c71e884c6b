//! Tracing subscriber setup.
//!
//! Report tables go to stdout, so all log output is written to stderr.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `filter` uses `RUST_LOG` syntax (`warn`, `link_reports=debug`, ...); an
/// unparsable filter falls back to `warn`. A second call is a no-op.
pub fn init_tracing(filter: &str, format: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
