// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment table with copy-on-write semantics.
//!
//! ```text
//! Env
//! vars: Arc<BTreeMap<EnvKey, String>>
//! clone shares the Arc until the first write (Arc::make_mut)
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use super::EnvStore;
use super::types::EnvKey;

/// A set of environment variables held in memory.
///
/// Cloning is cheap: clones share data until one of them is modified.
/// Used as an isolated store in tests and as the snapshot the binary seeds
/// and hands to child processes.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: Arc<BTreeMap<EnvKey, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: Arc::new(
                vars.into_iter()
                    .map(|(k, v)| (EnvKey::new(k), v))
                    .collect(),
            ),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.vars).insert(EnvKey::new(key), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Returns true if `key` is set, even to the empty string.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(&EnvKey::new(key))
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.contains(key) {
            Arc::make_mut(&mut self.vars).remove(&EnvKey::new(key));
        }
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl EnvStore for Env {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }

    fn set(&mut self, key: &str, value: &str) {
        Arc::make_mut(&mut self.vars).insert(EnvKey::new(key), value.to_owned());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}
