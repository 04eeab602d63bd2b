// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `check` command implementation.
//!
//! Dry run of a load: every entry is classified against a clone of the
//! base environment, nothing is written to the real one.
//!
//! ```text
//! apply      key not set, this line would set it
//! kept       key already set in the environment
//! duplicate  an earlier line already set the key
//! ```

use std::fmt::Write as _;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::query::CheckArgs;
use crate::dotenv::{Line, Lines, Loader, SkipReason};
use crate::env::{Env, EnvStore};
use crate::error::{EnvError, EnvResult, Result};

/// What loading would do with one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Apply,
    Kept,
    Duplicate,
}

impl EntryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Kept => "kept",
            Self::Duplicate => "duplicate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedEntry {
    pub line: usize,
    pub key: String,
    pub status: EntryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    pub line: usize,
    pub reason: SkipReason,
}

/// Result of checking an env file. Values are never included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub path: PathBuf,
    pub found: bool,
    pub entries: Vec<CheckedEntry>,
    pub malformed: Vec<MalformedLine>,
}

/// Classifies every line of `reader` against `base`.
///
/// # Errors
///
/// Returns [`EnvError::Read`] if reading fails.
pub fn check_reader<R: BufRead>(base: &Env, reader: R, path: &Path) -> EnvResult<CheckReport> {
    let mut probe = base.clone();
    let mut report = CheckReport {
        path: path.to_path_buf(),
        found: true,
        ..CheckReport::default()
    };

    for item in Lines::new(reader) {
        let line = item.map_err(|e| EnvError::Read {
            path: path.to_path_buf(),
            line: e.line,
            source: e.source,
        })?;
        match line {
            Line::Entry(entry) => {
                let status = if probe.set_if_absent(&entry.key, &entry.value) {
                    EntryStatus::Apply
                } else if base.contains(&entry.key) {
                    EntryStatus::Kept
                } else {
                    EntryStatus::Duplicate
                };
                report.entries.push(CheckedEntry {
                    line: entry.line,
                    key: entry.key,
                    status,
                });
            }
            Line::Skipped { line, reason } if reason.is_malformed() => {
                report.malformed.push(MalformedLine { line, reason });
            }
            Line::Skipped { .. } => {}
        }
    }
    Ok(report)
}

/// Checks the file selected by `loader` against `base`.
///
/// # Errors
///
/// Returns an error if an explicit file is missing or reading fails.
pub fn check_env_file(base: &Env, loader: &Loader) -> EnvResult<CheckReport> {
    let path = loader.path();
    match loader.open()? {
        Some(reader) => check_reader(base, reader, &path),
        None => Ok(CheckReport {
            path,
            ..CheckReport::default()
        }),
    }
}

/// Renders a report as plain text, one line per entry.
#[must_use]
pub fn render_check(report: &CheckReport) -> String {
    let mut out = String::new();
    if !report.found {
        let _ = writeln!(out, "{}: not found, nothing to load", report.path.display());
        return out;
    }

    let _ = writeln!(
        out,
        "{}: {} entries, {} malformed",
        report.path.display(),
        report.entries.len(),
        report.malformed.len()
    );
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "{:>5}  {:<9}  {}",
            entry.line,
            entry.status.as_str(),
            entry.key
        );
    }
    for bad in &report.malformed {
        let _ = writeln!(out, "{:>5}  {:<9}  ({})", bad.line, "malformed", bad.reason.as_str());
    }
    out
}

/// Main handler for the `check` command.
///
/// `base` is the environment before loading.
///
/// # Errors
///
/// Returns an error if `--no-load` was given, the file cannot be read, or
/// JSON serialization fails.
pub fn run_check_command(args: &CheckArgs, base: &Env, loader: Option<&Loader>) -> Result<()> {
    let Some(loader) = loader else {
        anyhow::bail!("--no-load given, there is no env file to check");
    };
    let report = check_env_file(base, loader)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_check(&report));
    }
    Ok(())
}
