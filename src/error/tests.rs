// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::Path;

use super::EnvError;

#[test]
fn test_missing_variable_display() {
    let err = EnvError::MissingVariable {
        key: "DATABASE_URL".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"required environment variable 'DATABASE_URL' is not set");
}

#[test]
fn test_read_error_display() {
    let err = EnvError::Read {
        path: "conf/app.env".into(),
        line: 7,
        source: io::Error::other("Input/output error"),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to read env file 'conf/app.env' at line 7: Input/output error"
    );
}

#[test]
fn test_from_open_classifies_not_found() {
    let path = Path::new("missing.env");

    let not_found = EnvError::from_open(path, io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(not_found, EnvError::MissingFile { .. }));
    assert_eq!(not_found.to_string(), "env file not found: missing.env");

    let denied = EnvError::from_open(path, io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(denied, EnvError::Open { .. }));
}

#[test]
fn test_key_only_for_variable_errors() {
    let empty = EnvError::EmptyVariable {
        key: "TOKEN".to_string(),
    };
    assert_eq!(empty.key(), Some("TOKEN"));

    let missing_file = EnvError::from_open(
        Path::new(".env.local"),
        io::Error::from(io::ErrorKind::NotFound),
    );
    assert_eq!(missing_file.key(), None);
}
