// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! current_env() --load--> seeded Env --> get, lookup, require, check
//!
//! ProcessEnv --Overlay + load--> added vars --> run
//!   (the child inherits the real environment, plus only what the load adds)
//! ```

pub mod check;
pub mod query;
pub mod run;


use tracing::info;

use crate::cli::global::GlobalOptions;
use crate::dotenv::LoadReport;
use crate::env::{Env, Overlay, ProcessEnv, current_env};
use crate::error::EnvResult;

/// Snapshots the process environment and seeds it from the selected env file.
///
/// # Errors
///
/// Returns an error if an explicit env file is missing or cannot be read.
pub fn seeded_env(global: &GlobalOptions) -> EnvResult<Env> {
    let mut env = current_env();
    if let Some(loader) = global.loader() {
        log_seeded(&loader.load(&mut env)?);
    }
    Ok(env)
}

/// Returns only the variables the selected env file adds to the process
/// environment. Inherited variables are never read into memory.
///
/// # Errors
///
/// Returns an error if an explicit env file is missing or cannot be read.
pub fn seeded_additions(global: &GlobalOptions) -> EnvResult<Env> {
    let mut overlay = Overlay::new(&ProcessEnv);
    if let Some(loader) = global.loader() {
        log_seeded(&loader.load(&mut overlay)?);
    }
    Ok(overlay.into_added())
}

fn log_seeded(report: &LoadReport) {
    if report.found {
        info!(
            path = %report.path.display(),
            applied = report.applied,
            kept = report.kept,
            "seeded environment"
        );
    }
}
