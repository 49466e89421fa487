//! Diagnostic tracing, separate from the user-facing status lines in `cli::output`.
//!
//! Reads `RUST_LOG` and defaults to `warn`. Output goes to stderr in compact form:
//!
//! ```bash
//! RUST_LOG=spellgate=debug spellgate files
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
