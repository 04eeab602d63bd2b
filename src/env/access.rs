// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read accessors over any [`EnvStore`].
//!
//! ```text
//! lookup(K)        Some(v) | None        (never an error)
//! get(K)           v | ""
//! get_or(K, D)     v | D                 (D only when K is absent)
//! require(K)       Ok(v) | MissingVariable | EmptyVariable
//! ```

use tracing::debug;

use super::EnvStore;
use crate::error::{EnvError, EnvResult};

/// Returns the value of `key`, or `None` if it is not set.
#[must_use]
pub fn lookup<S: EnvStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    store.lookup(key)
}

/// Returns the value of `key`, or the empty string if it is not set.
///
/// A key set to `""` and an unset key look the same here; use [`lookup`]
/// to tell them apart.
#[must_use]
pub fn get<S: EnvStore + ?Sized>(store: &S, key: &str) -> String {
    store.lookup(key).unwrap_or_default()
}

/// Returns the value of `key`, or `default` if it is not set.
///
/// A key set to `""` returns `""`, not `default`.
#[must_use]
pub fn get_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
    store.lookup(key).unwrap_or_else(|| default.to_owned())
}

/// Returns the value of a variable that must be set and non-empty.
///
/// # Errors
///
/// Returns [`EnvError::MissingVariable`] if `key` is not set, or
/// [`EnvError::EmptyVariable`] if it is set to the empty string.
pub fn require<S: EnvStore + ?Sized>(store: &S, key: &str) -> EnvResult<String> {
    match store.lookup(key) {
        Some(value) if value.is_empty() => {
            debug!(key, "required variable is empty");
            Err(EnvError::EmptyVariable {
                key: key.to_owned(),
            })
        }
        Some(value) => Ok(value),
        None => {
            debug!(key, "required variable is not set");
            Err(EnvError::MissingVariable {
                key: key.to_owned(),
            })
        }
    }
}
