// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tiercheck check` command implementation.

use anyhow::Context;

use tiercheck::cli::{CheckArgs, Cli};
use tiercheck::config::{self, defaults};
use tiercheck::error::ExitCode;
use tiercheck::latest::LatestReport;
use tiercheck::results::RunResults;
use tiercheck::runner;

use tiercheck::output::print_json;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Configuration is validated in full before the results are read.
    let (mut config, _) = config::find_and_load(cli.config.as_deref(), &cwd)?;
    args.modes.apply(&mut config.enforcement);
    let policy = config.policy()?;

    let results_path = cwd.join(&args.results);
    let results = RunResults::load(&results_path)
        .with_context(|| format!("failed to load results from {}", results_path.display()))?;

    let report = runner::run(&results, &policy)?;
    print_json(&report, args.compact)?;

    if !args.no_save {
        let latest = LatestReport::new(report.clone(), Some(results_path));
        if let Err(e) = latest.save(&cwd.join(defaults::LATEST_REPORT)) {
            tracing::warn!("failed to save latest report: {e:#}");
        }
    }

    Ok(if report.verdict.is_failure() { ExitCode::CheckFailed } else { ExitCode::Success })
}
