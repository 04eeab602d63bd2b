// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the read-only commands.

use clap::Args;

/// Arguments for the `get` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GetArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Printed when the variable is not set. An empty value is printed as is.
    #[arg(short = 'd', long = "default", value_name = "VALUE")]
    pub default: Option<String>,
}

/// Arguments for the `lookup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LookupArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `require` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RequireArgs {
    /// Variable names, all of which must be set and non-empty.
    #[arg(value_name = "KEY", required = true, num_args = 1..)]
    pub keys: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Prints the result as JSON.
    #[arg(long)]
    pub json: bool,
}
