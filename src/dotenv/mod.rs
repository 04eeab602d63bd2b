// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv file loading.
//!
//! # Loader Pipeline
//!
//! ```text
//! Loader::builder()
//!   .maybe_with_path()   None / "" => ".env" (optional)
//!                        Some(p)   => p      (required)
//!   .maybe_with_dir()    relative paths resolve against dir
//!   .build()
//!        |
//!        v
//!   load(&mut store)
//!        |
//!   open --NotFound + default--> Ok(LoadReport { found: false })
//!        |--NotFound----------> EnvError::MissingFile
//!        |--other-------------> EnvError::Open
//!        v
//!   Lines (parser) --read error--> EnvError::Read { line }
//!        |
//!        v
//!   store.set_if_absent(key, value)   (first writer wins)
//!        |
//!        v
//!   LoadReport { applied, kept, malformed }
//! ```

pub mod parser;


use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::Serialize;
use tracing::{debug, trace};

use crate::env::EnvStore;
use crate::error::{EnvError, EnvResult};

pub use parser::{
    Entry, Line, LineError, Lines, ParsedLine, SkipReason, parse_bytes, parse_line, parse_str,
};

/// File name used when no path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Summary of a completed load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// The file that was (or would have been) read.
    pub path: PathBuf,
    /// False when the default file was absent and nothing was read.
    pub found: bool,
    /// Entries written to the store.
    pub applied: usize,
    /// Entries ignored because the key was already set.
    pub kept: usize,
    /// Lines skipped as malformed.
    pub malformed: usize,
}

/// Loads a dotenv file into an [`EnvStore`].
#[derive(Debug, Clone, Builder)]
pub struct Loader {
    /// Explicit file to load. A missing explicit file is an error.
    #[builder(into, setters(name = with_path))]
    path: Option<PathBuf>,
    /// Directory relative paths resolve against, instead of the working directory.
    #[builder(into, setters(name = with_dir))]
    dir: Option<PathBuf>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Loader {
    /// Returns the file this loader reads.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        let file = self
            .explicit_path()
            .unwrap_or_else(|| Path::new(DEFAULT_ENV_FILE));
        match &self.dir {
            Some(dir) => dir.join(file),
            None => file.to_path_buf(),
        }
    }

    /// True when no explicit path was given and `.env` is used.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.explicit_path().is_none()
    }

    fn explicit_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Opens the file for reading.
    ///
    /// Returns `Ok(None)` when the default file does not exist.
    ///
    /// # Errors
    ///
    /// - [`EnvError::MissingFile`] if an explicit path does not exist.
    /// - [`EnvError::Open`] if the file exists but cannot be opened.
    pub fn open(&self) -> EnvResult<Option<BufReader<File>>> {
        let path = self.path();
        match File::open(&path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && self.is_default() => {
                debug!(path = %path.display(), "no env file, nothing to load");
                Ok(None)
            }
            Err(e) => Err(EnvError::from_open(&path, e)),
        }
    }

    /// Reads the file and writes every entry whose key is not yet set.
    ///
    /// Entries read before a failing line stay applied.
    ///
    /// # Errors
    ///
    /// - [`EnvError::MissingFile`] if an explicit path does not exist.
    /// - [`EnvError::Open`] if the file exists but cannot be opened.
    /// - [`EnvError::Read`] if an I/O error interrupts reading. Lines that
    ///   are not UTF-8 are skipped as malformed.
    pub fn load<S: EnvStore + ?Sized>(&self, store: &mut S) -> EnvResult<LoadReport> {
        let path = self.path();
        match self.open()? {
            Some(reader) => load_reader(store, reader, &path),
            None => Ok(LoadReport {
                path,
                ..LoadReport::default()
            }),
        }
    }

    /// Like [`Loader::load`], but a failure is fatal.
    ///
    /// # Panics
    ///
    /// Panics with the error message if [`Loader::load`] fails.
    pub fn must_load<S: EnvStore + ?Sized>(&self, store: &mut S) -> LoadReport {
        match self.load(store) {
            Ok(report) => report,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Loads `path`, or `.env` when `path` is `None` or empty.
///
/// # Errors
///
/// See [`Loader::load`].
pub fn load<S: EnvStore + ?Sized>(store: &mut S, path: Option<&Path>) -> EnvResult<LoadReport> {
    Loader::builder().maybe_with_path(path).build().load(store)
}

/// Loads `path`, or `.env` when `path` is `None` or empty, and panics on failure.
///
/// # Panics
///
/// Panics with the error message if loading fails.
pub fn must_load<S: EnvStore + ?Sized>(store: &mut S, path: Option<&Path>) -> LoadReport {
    Loader::builder().maybe_with_path(path).build().must_load(store)
}

/// Applies dotenv text from `reader` to `store`.
///
/// `path` is only used for the report and error messages.
///
/// # Errors
///
/// Returns [`EnvError::Read`] if reading fails.
pub fn load_reader<S, R>(store: &mut S, reader: R, path: &Path) -> EnvResult<LoadReport>
where
    S: EnvStore + ?Sized,
    R: BufRead,
{
    let mut report = LoadReport {
        path: path.to_path_buf(),
        found: true,
        ..LoadReport::default()
    };

    for item in Lines::new(reader) {
        let line = item.map_err(|e| EnvError::Read {
            path: path.to_path_buf(),
            line: e.line,
            source: e.source,
        })?;
        match line {
            Line::Entry(entry) => {
                if store.set_if_absent(&entry.key, &entry.value) {
                    report.applied += 1;
                } else {
                    trace!(line = entry.line, key = %entry.key, "keeping existing value");
                    report.kept += 1;
                }
            }
            Line::Skipped { line, reason } if reason.is_malformed() => {
                trace!(line, ?reason, "skipping malformed line");
                report.malformed += 1;
            }
            Line::Skipped { .. } => {}
        }
    }

    debug!(
        path = %path.display(),
        applied = report.applied,
        kept = report.kept,
        malformed = report.malformed,
        "loaded env file"
    );
    Ok(report)
}
