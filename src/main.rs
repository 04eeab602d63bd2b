// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> seed Env from env file --> Command Dispatch
//!   Version | Get | Lookup | Require | Check | Run
//! ```

use std::process::ExitCode;

use envseed::cli::global::GlobalOptions;
use envseed::cli::{self, Command};
use envseed::cmd::check::run_check_command;
use envseed::cmd::query::{run_get_command, run_lookup_command, run_require_command};
use envseed::cmd::run::run_run_command;
use envseed::cmd::{seeded_additions, seeded_env};
use envseed::env::current_env;
use envseed::logging::init_logging;
use envseed::logging::{LogConfig, LogLevel};

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or_default();

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> anyhow::Result<ExitCode> {
    let Some(command) = &cli.command else {
        anyhow::bail!("no command specified, use --help for usage information");
    };

    match command {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => {
            // Checked against the environment as it was before loading.
            run_check_command(args, &current_env(), cli.global.loader().as_ref())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Get(args) => Ok(run_get_command(args, &seeded_env(&cli.global)?)),
        Command::Lookup(args) => Ok(run_lookup_command(args, &seeded_env(&cli.global)?)),
        Command::Require(args) => run_require_command(args, &seeded_env(&cli.global)?),
        Command::Run(args) => run_run_command(args, &seeded_additions(&cli.global)?),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_missing_command_is_reported_once() {
        let cli = cli::Cli::try_parse_from(["envseed"]).unwrap();
        let err = dispatch_command(&cli).unwrap_err();
        insta::assert_snapshot!(format!("Error: {err:#}"), @"Error: no command specified, use --help for usage information");
    }
}
