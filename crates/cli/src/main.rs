// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use tiercheck::cli::{Cli, Command};
use tiercheck::error::{Error, ExitCode};

mod cmd_check;
mod cmd_config;
mod cmd_report;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    tiercheck::logging::init(cli.verbose);

    let result = match &cli.command {
        Command::Check(args) => cmd_check::run(&cli, args),
        Command::Config(args) => cmd_config::run(&cli, args),
        Command::Tiers => cmd_config::tiers(),
        Command::Report(args) => cmd_report::run(args),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("tiercheck: {err:#}");
            let code = match err.downcast_ref::<Error>() {
                Some(e) if e.is_config_error() => ExitCode::ConfigError,
                _ => ExitCode::InternalError,
            };
            code.into()
        }
    }
}
