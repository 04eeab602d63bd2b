// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Adapter over the real process environment.
//!
//! ```text
//! ProcessEnv (zero-sized)
//!   lookup / set / set_if_absent / remove
//!        |
//!        v
//!   ENV_LOCK: Mutex<()>  -- held for every read and write
//!        |
//!        v
//!   std::env::{var_os, set_var, remove_var}
//! ```

use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::EnvStore;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    // The guarded value is `()`, so a poisoned lock carries no broken state.
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Zero-sized type that delegates to `std::env`.
///
/// Every access goes through one process-wide lock, and
/// [`EnvStore::set_if_absent`] holds it across the check and the write.
/// Code that touches `std::env` directly bypasses the lock; keep all
/// environment writes behind this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Removes `key` from the process environment.
    pub fn remove(&mut self, key: &str) {
        if !is_valid_key(key) {
            return;
        }
        let _guard = lock();
        // SAFETY: all mutation through ProcessEnv is serialised by ENV_LOCK.
        unsafe { std::env::remove_var(key) };
    }
}

impl EnvStore for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if !is_valid_key(key) {
            return None;
        }
        let _guard = lock();
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        if !is_valid_pair(key, value) {
            debug!(key, "ignoring variable the OS cannot store");
            return;
        }
        let _guard = lock();
        // SAFETY: all mutation through ProcessEnv is serialised by ENV_LOCK.
        unsafe { std::env::set_var(key, value) };
    }

    fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        if !is_valid_pair(key, value) {
            debug!(key, "ignoring variable the OS cannot store");
            return false;
        }
        let _guard = lock();
        if std::env::var_os(key).is_some() {
            return false;
        }
        // SAFETY: all mutation through ProcessEnv is serialised by ENV_LOCK.
        unsafe { std::env::set_var(key, value) };
        true
    }
}

/// Copies every variable out of the process environment under the lock.
pub(super) fn snapshot() -> Vec<(OsString, OsString)> {
    let _guard = lock();
    std::env::vars_os().collect()
}

// `std::env::set_var` panics on these; `var_os` would return None anyway.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

fn is_valid_pair(key: &str, value: &str) -> bool {
    is_valid_key(key) && !value.contains('\0')
}
