// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envseed", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_get_with_default() {
    let cli = Cli::try_parse_from(["envseed", "get", "PORT", "-d", "8080"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.key, "PORT");
    assert_eq!(args.default.as_deref(), Some("8080"));
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["envseed", "lookup", "HOME", "-f", "dev.env", "-l", "4"]).unwrap();
    assert_eq!(cli.global.file.as_deref(), Some(Path::new("dev.env")));
    assert_eq!(cli.global.log_level, Some(4));
    assert!(matches!(cli.command, Some(Command::Lookup(ref a)) if a.key == "HOME"));
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envseed", "-l", "6", "version"]).is_err());
}

#[test]
fn test_parse_require_needs_a_key() {
    assert!(Cli::try_parse_from(["envseed", "require"]).is_err());

    let cli = Cli::try_parse_from(["envseed", "require", "A", "B"]).unwrap();
    let Some(Command::Require(args)) = cli.command else {
        panic!("expected require command");
    };
    assert_eq!(args.keys, ["A", "B"]);
}

#[test]
fn test_parse_run_passes_hyphen_args_through() {
    let cli = Cli::try_parse_from(["envseed", "run", "--", "ls", "-la", "--color"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.program, "ls");
    assert_eq!(args.args, ["-la", "--color"]);
}

#[test]
fn test_no_load_disables_loader() {
    let cli = Cli::try_parse_from(["envseed", "--no-load", "-f", "x.env", "check"]).unwrap();
    assert!(cli.global.loader().is_none());

    let cli = Cli::try_parse_from(["envseed", "check", "--json"]).unwrap();
    let loader = cli.global.loader().unwrap();
    assert!(loader.is_default() || std::env::var_os("ENVSEED_FILE").is_some());
}
