// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tiercheck config` and `tiercheck tiers` command implementations.

use serde_json::json;

use tiercheck::cli::{Cli, ConfigArgs};
use tiercheck::config;
use tiercheck::error::ExitCode;
use tiercheck::tier::catalog;

use tiercheck::output::print_json;

/// Validate configuration and print the resolved policy.
pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (mut config, path) = config::find_and_load(cli.config.as_deref(), &cwd)?;
    args.modes.apply(&mut config.enforcement);
    let policy = config.policy()?;

    tracing::info!(
        timing = %policy.modes.timing,
        hermeticity = %policy.modes.hermeticity,
        distribution = %policy.modes.distribution,
        "resolved enforcement modes"
    );

    print_json(
        &json!({
            "config": path,
            "modes": policy.modes,
            "distribution": policy.constraints,
        }),
        false,
    )?;
    Ok(ExitCode::Success)
}

/// Print the tier catalog.
pub fn tiers() -> anyhow::Result<ExitCode> {
    print_json(catalog::all(), false)?;
    Ok(ExitCode::Success)
}
