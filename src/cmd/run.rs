// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run` command implementation.

use std::process::{Command, ExitCode, ExitStatus};

use anyhow::Context;
use tracing::debug;

use crate::cli::run::RunArgs;
use crate::env::Env;
use crate::error::Result;

/// Builds the child command: it inherits our environment plus `added`.
#[must_use]
pub fn build_command(args: &RunArgs, added: &Env) -> Command {
    let mut command = Command::new(&args.program);
    command.args(&args.args).envs(added.iter());
    command
}

/// Maps a child exit status onto our own exit code.
///
/// Codes outside `0..=255` and deaths by signal map to failure.
#[must_use]
pub fn exit_code_for(status: ExitStatus) -> ExitCode {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}

/// Main handler for the `run` command.
///
/// # Errors
///
/// Returns an error if the program cannot be started.
pub fn run_run_command(args: &RunArgs, added: &Env) -> Result<ExitCode> {
    debug!(program = %args.program, args = ?args.args, added = added.len(), "starting program");
    let status = build_command(args, added)
        .status()
        .with_context(|| format!("failed to run '{}'", args.program))?;
    debug!(%status, "program exited");
    Ok(exit_code_for(status))
}
