// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --file FILE       ← env file (or ENVSEED_FILE); missing file is an error
//! --no-load         ← skip the env file entirely (wins over --file)
//! --log-level N     ← console verbosity (0-5)
//! --log-file FILE   ← also log to FILE
//!
//! No --file: `.env` in the working directory, optional
//! ```

use std::path::PathBuf;

use clap::Args;

use crate::dotenv::Loader;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Env file to load. Defaults to `.env`, which may be absent.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        env = "ENVSEED_FILE",
        global = true
    )]
    pub file: Option<PathBuf>,

    /// Does not load any env file. Takes precedence over --file.
    #[arg(long = "no-load", global = true)]
    pub no_load: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Returns the loader for the selected env file, or `None` with --no-load.
    #[must_use]
    pub fn loader(&self) -> Option<Loader> {
        if self.no_load {
            return None;
        }
        Some(Loader::builder().maybe_with_path(self.file.clone()).build())
    }
}
