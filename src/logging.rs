//! Tracing initialisation for the command-line tool.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `SEQSYNTH_LOG=seqsynth=debug`.
pub const LOG_ENV: &str = "SEQSYNTH_LOG";

/// Installs a stderr subscriber filtered by `SEQSYNTH_LOG`, falling back to `seqsynth=info`.
///
/// Calling it more than once has no further effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("seqsynth=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
