// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "tiercheck.toml";

/// The only config schema version understood.
pub const CONFIG_VERSION: u32 = 1;

/// Where the last finalized report is cached, relative to the project root.
pub const LATEST_REPORT: &str = ".tiercheck/latest.json";

/// Environment variables that override the file's mode strings.
pub mod env {
    pub const TIMING_MODE: &str = "TIERCHECK_TIMING_MODE";
    pub const HERMETICITY_MODE: &str = "TIERCHECK_HERMETICITY_MODE";
    pub const DISTRIBUTION_MODE: &str = "TIERCHECK_DISTRIBUTION_MODE";

    /// Log filter for `tracing-subscriber` (e.g. `tiercheck=debug`).
    pub const LOG: &str = "TIERCHECK_LOG";
}
