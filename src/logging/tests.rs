// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    let filters: Vec<_> = (0..=6)
        .map(|n| LogLevel::from_u8(n).map(LogLevel::to_filter_string))
        .collect();
    assert_eq!(
        filters,
        [
            Some("off"),
            Some("error"),
            Some("warn"),
            Some("info"),
            Some("debug"),
            Some("trace"),
            None,
        ]
    );
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::TRACE > LogLevel::DEBUG);
    assert_eq!(LogLevel::default(), LogLevel::WARN);
    assert_eq!(LogLevel::INFO.as_u8(), 3);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::TRACE)
        .maybe_with_log_file(Some("logs/envseed.log".to_string()))
        .build();
    assert_eq!(config.console_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some("logs/envseed.log"));
}
