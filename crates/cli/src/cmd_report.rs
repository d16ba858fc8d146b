// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tiercheck report` command implementation.

use anyhow::Context;

use tiercheck::cli::ReportArgs;
use tiercheck::config::defaults;
use tiercheck::error::ExitCode;
use tiercheck::latest::LatestReport;

use tiercheck::output::print_json;

/// Print the most recently saved report.
pub fn run(args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join(defaults::LATEST_REPORT);
    let latest = LatestReport::load(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match latest {
        Some(latest) => print_json(&latest, args.compact)?,
        None => eprintln!("No report found. Run `tiercheck check` first."),
    }
    Ok(ExitCode::Success)
}
