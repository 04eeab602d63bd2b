// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable stores and accessors.
//!
//! # Architecture
//!
//! ```text
//! EnvStore (trait): lookup / set / set_if_absent
//!    |
//!    +-- Env         copy-on-write BTreeMap<EnvKey, String>
//!    +-- ProcessEnv  OS environment, one process-wide lock
//!    +-- Overlay     in-memory writes over a read-only base
//!
//! Accessors (generic over EnvStore):
//!   lookup -> Option<String>
//!   get / get_or -> String
//!   require -> EnvResult<String>
//! ```
//!
//! - **Case-insensitive keys on Windows**, exact elsewhere
//! - **First writer wins**: loaders only use [`EnvStore::set_if_absent`]

pub mod access;
pub mod container;
pub mod overlay;
pub mod process;
mod types;

#[cfg(test)]
mod tests;

pub use access::{get, get_or, lookup, require};
pub use container::Env;
pub use overlay::Overlay;
pub use process::ProcessEnv;

/// A mutable environment table.
///
/// Implemented by the in-memory [`Env`] and by [`ProcessEnv`], which
/// forwards to the real process environment.
pub trait EnvStore {
    /// Returns the value of `key`, or `None` if it is not set.
    ///
    /// A key set to the empty string is present.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, replacing any existing value.
    ///
    /// [`ProcessEnv`] ignores pairs the OS cannot hold: an empty key, a key
    /// containing `=` or NUL, or a value containing NUL. [`Env`] stores them.
    fn set(&mut self, key: &str, value: &str);

    /// Sets `key` only if it is not already present.
    ///
    /// Returns `true` if the value was written.
    fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.lookup(key).is_some() {
            return false;
        }
        self.set(key, value);
        true
    }
}

/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are converted lossily,
/// so the snapshot is for lookups only. `run` never rebuilds a child
/// environment from it.
#[must_use]
pub fn current_env() -> Env {
    let vars = process::snapshot()
        .into_iter()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect();
    Env::from_map(vars)
}
