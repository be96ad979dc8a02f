//! Logger initialisation for the demo binaries.
//!
//! Logs go to stderr so that stdout carries exactly the demo output. The
//! default filter is `warn` (`debug` with `verbose`); `RUST_LOG` overrides
//! both.

use env_logger::Env;

/// Install the global `env_logger`. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .try_init();
}
