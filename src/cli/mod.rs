// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envseed using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envseed [global options] <command>
//! get KEY [-d DEFAULT]
//! lookup KEY
//! require KEY...
//! check [--json]
//! run -- PROGRAM [ARGS...]
//! version
//! ```

pub mod global;
pub mod query;
pub mod run;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::query::{CheckArgs, GetArgs, LookupArgs, RequireArgs};
use crate::cli::run::RunArgs;
use clap::{Parser, Subcommand};

/// Environment variables with dotenv seeding.
///
/// Reads `.env` (or --file) into the environment, without overriding
/// variables that are already set, then answers queries or runs a program.
#[derive(Debug, Parser)]
#[command(
    name = "envseed",
    author,
    version,
    about = "Environment variables with dotenv seeding",
    long_about = "envseed Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Seeds the environment from a dotenv file before reading it.\n\
                  Variables already set in the environment always win over\n\
                  values from the file.",
    after_help = "ENV FILES:\n\n\
                  Each non-blank line not starting with '#' is KEY=VALUE, split\n\
                  at the first '='. Whitespace around key and value is ignored.\n\
                  Quotes and escapes are not interpreted. Lines without '=' are\n\
                  skipped. A missing `.env` is fine; a missing --file is an error."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints a variable, or a default if it is not set.
    Get(GetArgs),

    /// Prints a variable; exits with status 1 if it is not set.
    Lookup(LookupArgs),

    /// Prints variables that must be set and non-empty.
    Require(RequireArgs),

    /// Lists the entries of the env file and whether each would apply.
    Check(CheckArgs),

    /// Runs a program with the seeded environment.
    Run(RunArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
