// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use std::collections::BTreeMap;

use super::{
    Env, EnvStore, Overlay, ProcessEnv, current_env, get, get_or, lookup, require,
};
use crate::error::EnvError;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);

    env.remove("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_env_key_case_follows_platform() {
    let mut env = Env::new();
    env.set("Path", "/usr/bin");

    if cfg!(windows) {
        assert_eq!(env.get("PATH"), Some("/usr/bin"));
    } else {
        assert_eq!(env.get("PATH"), None);
        assert_eq!(env.get("Path"), Some("/usr/bin"));
    }
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    env2.set("KEY2", "value2");
    env2.set("KEY1", "changed");

    assert_eq!(env1.get("KEY1"), Some("value1"));
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("changed"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_env_from_map_and_to_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), String::new());

    let env = Env::from_map(map.clone());
    assert_eq!(env.to_map(), map);
    assert!(env.contains("KEY2"));
}

#[test]
fn test_env_from_iterator() {
    let env: Env = [("A", "1"), ("B", "2")].into_iter().collect();
    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["A", "B"]);
}

#[test]
fn test_set_if_absent_keeps_existing_values() {
    let mut env: Env = [("SET", "original"), ("EMPTY", "")].into_iter().collect();

    assert!(!env.set_if_absent("SET", "file"));
    assert!(!env.set_if_absent("EMPTY", "file"));
    assert!(env.set_if_absent("NEW", "file"));

    assert_eq!(env.get("SET"), Some("original"));
    assert_eq!(env.get("EMPTY"), Some(""));
    assert_eq!(env.get("NEW"), Some("file"));
}

#[test]
fn test_lookup_distinguishes_empty_from_unset() {
    let env: Env = [("EMPTY", "")].into_iter().collect();

    assert_eq!(lookup(&env, "EMPTY"), Some(String::new()));
    assert_eq!(lookup(&env, "UNSET"), None);
}

#[test]
fn test_get_defaults() {
    let env: Env = [("SET", "value"), ("EMPTY", "")].into_iter().collect();

    assert_eq!(get(&env, "SET"), "value");
    assert_eq!(get(&env, "UNSET"), "");
    assert_eq!(get(&env, "EMPTY"), "");

    assert_eq!(get_or(&env, "SET", "D"), "value");
    assert_eq!(get_or(&env, "UNSET", "D"), "D");
    assert_eq!(get_or(&env, "EMPTY", "D"), "");
}

#[test]
fn test_require() {
    let env: Env = [("SET", "value"), ("EMPTY", "")].into_iter().collect();

    assert_eq!(require(&env, "SET").unwrap(), "value");
    assert!(matches!(
        require(&env, "EMPTY"),
        Err(EnvError::EmptyVariable { key }) if key == "EMPTY"
    ));
    assert!(matches!(
        require(&env, "UNSET"),
        Err(EnvError::MissingVariable { key }) if key == "UNSET"
    ));
}

#[test]
fn test_process_env_round_trip() {
    let key = "ENVSEED_UNIT_PROCESS_ROUND_TRIP";
    let mut env = ProcessEnv;

    assert_eq!(env.lookup(key), None);
    assert!(env.set_if_absent(key, "first"));
    assert!(!env.set_if_absent(key, "second"));
    assert_eq!(env.lookup(key).as_deref(), Some("first"));
    assert_eq!(std::env::var(key).as_deref(), Ok("first"));

    env.set(key, "");
    assert_eq!(env.lookup(key).as_deref(), Some(""));
    assert!(!env.set_if_absent(key, "third"));

    env.remove(key);
    assert_eq!(env.lookup(key), None);
}

#[test]
fn test_process_env_ignores_invalid_keys() {
    let mut env = ProcessEnv;

    assert!(!env.set_if_absent("", "value"));
    assert!(!env.set_if_absent("ENVSEED_UNIT_NUL", "a\0b"));
    env.set("", "value");
    env.set("ENVSEED_UNIT_EQ=SIGN", "value");
    env.set("ENVSEED_UNIT_NUL", "a\0b");
    assert_eq!(env.lookup(""), None);
    assert_eq!(env.lookup("A=B"), None);
    assert_eq!(env.lookup("ENVSEED_UNIT_NUL"), None);
}

#[test]
fn test_current_env() {
    let key = "ENVSEED_UNIT_CURRENT_ENV";
    let mut process = ProcessEnv;
    process.set(key, "snapshot");

    let env = current_env();
    process.remove(key);

    assert_eq!(env.get(key), Some("snapshot"));
    assert_eq!(process.lookup(key), None);
}

#[test]
fn test_overlay_reads_through_and_writes_aside() {
    let base: Env = [("HOME", "/home/user"), ("EMPTY", "")].into_iter().collect();
    let mut overlay = Overlay::new(&base);

    assert!(!overlay.set_if_absent("HOME", "/tmp"));
    assert!(!overlay.set_if_absent("EMPTY", "x"));
    assert!(overlay.set_if_absent("NEW", "1"));
    assert!(!overlay.set_if_absent("NEW", "2"));

    assert_eq!(overlay.lookup("HOME").as_deref(), Some("/home/user"));
    assert_eq!(overlay.lookup("NEW").as_deref(), Some("1"));
    assert_eq!(overlay.added().len(), 1);

    let added = overlay.into_added();
    assert_eq!(added.get("NEW"), Some("1"));
    assert!(!base.contains("NEW"));
}

#[test]
fn test_overlay_over_process_env_leaves_process_untouched() {
    let key = "ENVSEED_UNIT_OVERLAY_ADDED";
    let mut overlay = Overlay::new(&ProcessEnv);

    assert!(overlay.set_if_absent(key, "1"));
    assert_eq!(overlay.lookup(key).as_deref(), Some("1"));
    assert_eq!(ProcessEnv.lookup(key), None);
}
