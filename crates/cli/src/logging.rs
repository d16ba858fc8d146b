// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays clean for the JSON report. The filter
//! comes from `TIERCHECK_LOG` (standard `EnvFilter` syntax); without it the
//! level is `warn`, or `debug` for this crate with `--verbose`.

use tracing_subscriber::EnvFilter;

use crate::config::defaults::env;

/// Filter used when `TIERCHECK_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "warn,tiercheck=debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(env::LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
