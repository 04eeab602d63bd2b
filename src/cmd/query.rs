// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `get`, `lookup` and `require` command implementations.

use std::process::ExitCode;

use tracing::error;

use crate::cli::query::{GetArgs, LookupArgs, RequireArgs};
use crate::env::{self, EnvStore};
use crate::error::{EnvError, Result};

/// Value printed by `get`.
#[must_use]
pub fn resolve_get<S: EnvStore + ?Sized>(args: &GetArgs, store: &S) -> String {
    match &args.default {
        Some(default) => env::get_or(store, &args.key, default),
        None => env::get(store, &args.key),
    }
}

/// Values printed by `require`, or every failure when any key is unusable.
///
/// # Errors
///
/// Returns one [`EnvError`] per missing or empty key, in argument order.
pub fn resolve_require<S: EnvStore + ?Sized>(
    keys: &[String],
    store: &S,
) -> std::result::Result<Vec<String>, Vec<EnvError>> {
    let mut values = Vec::with_capacity(keys.len());
    let mut errors = Vec::new();
    for key in keys {
        match env::require(store, key) {
            Ok(value) => values.push(value),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Main handler for the `get` command.
pub fn run_get_command<S: EnvStore + ?Sized>(args: &GetArgs, store: &S) -> ExitCode {
    println!("{}", resolve_get(args, store));
    ExitCode::SUCCESS
}

/// Main handler for the `lookup` command.
pub fn run_lookup_command<S: EnvStore + ?Sized>(args: &LookupArgs, store: &S) -> ExitCode {
    match env::lookup(store, &args.key) {
        Some(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

/// Main handler for the `require` command.
///
/// # Errors
///
/// Returns an error if any key is missing or empty.
pub fn run_require_command<S: EnvStore + ?Sized>(
    args: &RequireArgs,
    store: &S,
) -> Result<ExitCode> {
    match resolve_require(&args.keys, store) {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            for e in &errors {
                error!("{e}");
            }
            let keys: Vec<_> = errors.iter().filter_map(EnvError::key).collect();
            Err(anyhow::anyhow!(
                "missing required variables: {}",
                keys.join(", ")
            ))
        }
    }
}
