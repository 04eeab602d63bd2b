// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Write layer over a read-only store.
//!
//! ```text
//! lookup: added --miss--> base
//! set:    added only (base is never written)
//! ```

use super::{Env, EnvStore};

/// Collects writes in memory while reading through to `base`.
///
/// Loading into an overlay over [`ProcessEnv`](super::ProcessEnv) yields
/// exactly the variables a load would add, and leaves the inherited
/// environment byte for byte as it was.
#[derive(Debug)]
pub struct Overlay<'a, S: ?Sized> {
    base: &'a S,
    added: Env,
}

impl<'a, S: EnvStore + ?Sized> Overlay<'a, S> {
    pub fn new(base: &'a S) -> Self {
        Self {
            base,
            added: Env::new(),
        }
    }

    /// Variables written through this overlay.
    #[must_use]
    pub const fn added(&self) -> &Env {
        &self.added
    }

    #[must_use]
    pub fn into_added(self) -> Env {
        self.added
    }
}

impl<S: EnvStore + ?Sized> EnvStore for Overlay<'_, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.added
            .get(key)
            .map(str::to_owned)
            .or_else(|| self.base.lookup(key))
    }

    fn set(&mut self, key: &str, value: &str) {
        self.added.set(key, value);
    }
}
