// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 EnvError
//!                    |
//!     +--------+-----+-----+-----------+
//!     |        |           |           |
//!     v        v           v           v
//! MissingFile Open       Read    MissingVariable
//!  (explicit  (other    (path,    EmptyVariable
//!   path)     open)     line)     (require only)
//!
//! Default `.env` absent => not an error (LoadReport::found == false)
//! Malformed lines       => never an error (skipped)
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`, used by command handlers.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Errors raised while loading env files or resolving required variables.
#[derive(Debug, Error)]
pub enum EnvError {
    /// An explicitly named env file does not exist.
    #[error("env file not found: {}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The env file exists but could not be opened.
    #[error("failed to open env file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the env file failed partway through.
    #[error("failed to read env file '{}' at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A required variable is not set.
    #[error("required environment variable '{key}' is not set")]
    MissingVariable { key: String },

    /// A required variable is set but empty.
    #[error("required environment variable '{key}' is empty")]
    EmptyVariable { key: String },
}

impl EnvError {
    /// Classifies an error from opening `path`.
    pub(crate) fn from_open(path: &Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingFile { path, source }
        } else {
            Self::Open { path, source }
        }
    }

    /// Returns the variable name for `require` failures.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingVariable { key } | Self::EmptyVariable { key } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
