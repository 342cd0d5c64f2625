//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the status lines on stdout.
//! `--debug` or `LOGCOPY_DEBUG_LOG=1` turns on debug output for this tool's
//! crates; otherwise `RUST_LOG` applies, defaulting to `info`.

use std::env;
use tracing_subscriber::EnvFilter;

pub const DEBUG_ENV: &str = "LOGCOPY_DEBUG_LOG";
const DEBUG_DIRECTIVES: &str = "logcopy=debug,logcopy_core=debug";

pub fn init(debug_flag: bool) {
    let debug_enabled = debug_flag || env::var(DEBUG_ENV).map(|v| is_truthy(&v)).unwrap_or(false);
    let filter = if debug_enabled {
        EnvFilter::new(DEBUG_DIRECTIVES)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "TRUE" | "yes" | "YES")
}
