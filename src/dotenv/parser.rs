// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line parser for the dotenv format.
//!
//! ```text
//! raw line --trim--> ""        -> Skip(Blank)
//!                    "# ..."   -> Skip(Comment)
//!                    "no eq"   -> Skip(MissingSeparator)
//!                    " = v"    -> Skip(EmptyKey)
//!                    "K\0=v"   -> Skip(InvalidCharacter)
//!                    non-UTF-8 -> Skip(Comment) or Skip(InvalidEncoding)
//!                    " K = v " -> Entry { key: "K", value: "v" }
//! ```
//!
//! The first `=` splits key from value; later ones belong to the value.
//! No quoting, escapes, interpolation or `export` prefixes. Lines are read
//! as raw bytes, so a line that is not UTF-8 is skipped rather than
//! ending the read.

use std::io::{self, BufRead};

use serde::Serialize;

/// One `KEY=VALUE` pair read from an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based line number in the source.
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// Why a line produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Blank,
    Comment,
    MissingSeparator,
    EmptyKey,
    InvalidCharacter,
    InvalidEncoding,
}

impl SkipReason {
    /// Short name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Comment => "comment",
            Self::MissingSeparator => "missing_separator",
            Self::EmptyKey => "empty_key",
            Self::InvalidCharacter => "invalid_character",
            Self::InvalidEncoding => "invalid_encoding",
        }
    }

    /// True for lines that look like entries but cannot be applied.
    #[must_use]
    pub const fn is_malformed(self) -> bool {
        matches!(
            self,
            Self::MissingSeparator
                | Self::EmptyKey
                | Self::InvalidCharacter
                | Self::InvalidEncoding
        )
    }
}

/// Result of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Entry { key: &'a str, value: &'a str },
    Skip(SkipReason),
}

/// Parses one raw line.
#[must_use]
pub fn parse_line(raw: &str) -> ParsedLine<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return ParsedLine::Skip(SkipReason::Blank);
    }
    if line.starts_with('#') {
        return ParsedLine::Skip(SkipReason::Comment);
    }
    let Some((key, value)) = line.split_once('=') else {
        return ParsedLine::Skip(SkipReason::MissingSeparator);
    };
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() {
        return ParsedLine::Skip(SkipReason::EmptyKey);
    }
    if key.contains('\0') || value.contains('\0') {
        return ParsedLine::Skip(SkipReason::InvalidCharacter);
    }
    ParsedLine::Entry { key, value }
}

/// Parses one line read as raw bytes.
///
/// Bytes that are not UTF-8 still count as a comment after a leading `#`;
/// anything else is skipped as [`SkipReason::InvalidEncoding`].
#[must_use]
pub fn parse_bytes(raw: &[u8]) -> ParsedLine<'_> {
    match std::str::from_utf8(raw) {
        Ok(text) => parse_line(text),
        Err(_) if raw.trim_ascii_start().starts_with(b"#") => {
            ParsedLine::Skip(SkipReason::Comment)
        }
        Err(_) => ParsedLine::Skip(SkipReason::InvalidEncoding),
    }
}

/// One line of a dotenv source after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Entry(Entry),
    Skipped { line: usize, reason: SkipReason },
}

/// A read failure at a 1-based line number.
#[derive(Debug)]
pub struct LineError {
    pub line: usize,
    pub source: io::Error,
}

/// Iterator over the parsed lines of a dotenv source.
///
/// Iteration stops after the first read error. Content never fails a
/// read: undecodable lines come back as [`Line::Skipped`].
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    failed: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<Line, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.buf.clear();
        self.line += 1;
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(source) => {
                self.failed = true;
                return Some(Err(LineError {
                    line: self.line,
                    source,
                }));
            }
        }
        let raw = self.buf.strip_suffix(b"\n").unwrap_or(self.buf.as_slice());
        Some(Ok(match parse_bytes(raw) {
            ParsedLine::Entry { key, value } => Line::Entry(Entry {
                line: self.line,
                key: key.to_owned(),
                value: value.to_owned(),
            }),
            ParsedLine::Skip(reason) => Line::Skipped {
                line: self.line,
                reason,
            },
        }))
    }
}

/// Parses a whole dotenv document into its entries, in file order.
///
/// Skipped lines are dropped. Duplicate keys are all returned; when
/// loaded, the first one wins.
#[must_use]
pub fn parse_str(text: &str) -> Vec<Entry> {
    Lines::new(text.as_bytes())
        .filter_map(|item| match item {
            Ok(Line::Entry(entry)) => Some(entry),
            _ => None,
        })
        .collect()
}
