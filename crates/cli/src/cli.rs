// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults::env;
use crate::mode::ModeSettings;
use crate::violation::PolicyDomain;

/// Enforce test size tiers: time budgets, hermeticity, and suite distribution
#[derive(Parser)]
#[command(name = "tiercheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TIERCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Enforce the configured policy over a recorded test run
    Check(CheckArgs),
    /// Validate configuration and print the resolved policy
    Config(ConfigArgs),
    /// Print the tier catalog
    Tiers,
    /// Print the most recently saved report
    Report(ReportArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Results file written by the test-framework integration (JSON)
    #[arg(value_name = "RESULTS")]
    pub results: PathBuf,

    #[command(flatten)]
    pub modes: ModeOverrides,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Do not write .tiercheck/latest.json
    #[arg(long)]
    pub no_save: bool,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub modes: ModeOverrides,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Per-domain mode overrides, applied on top of the config file.
#[derive(clap::Args, Default)]
pub struct ModeOverrides {
    /// Timing enforcement mode: off, warn, or strict
    #[arg(long, value_name = "MODE", env = env::TIMING_MODE)]
    pub timing_mode: Option<String>,

    /// Hermeticity enforcement mode: off, warn, or strict
    #[arg(long, value_name = "MODE", env = env::HERMETICITY_MODE)]
    pub hermeticity_mode: Option<String>,

    /// Distribution enforcement mode: off, warn, or strict
    #[arg(long, value_name = "MODE", env = env::DISTRIBUTION_MODE)]
    pub distribution_mode: Option<String>,
}

impl ModeOverrides {
    /// Overlay these overrides onto the file's mode strings.
    ///
    /// Values are not validated here; resolution reports bad strings.
    pub fn apply(&self, settings: &mut ModeSettings) {
        settings.override_with(PolicyDomain::Timing, self.timing_mode.as_deref());
        settings.override_with(PolicyDomain::Hermeticity, self.hermeticity_mode.as_deref());
        settings.override_with(PolicyDomain::Distribution, self.distribution_mode.as_deref());
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
