// envseed: Environment Variables with Dotenv Seeding
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! Environment variable lookups with defaults, plus a dotenv loader that
//! seeds an environment table without overriding what is already set.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        get / lookup / require / check / run
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          dotenv           |
//!              |  Loader, line parser,     |
//!              |  first writer wins        |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |            env            |
//!              |  EnvStore: Env/ProcessEnv |
//!              |  get / lookup / require   |
//!              '---------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envseed::dotenv::load_reader;
//! use envseed::env::{Env, get_or, lookup};
//! use std::path::Path;
//!
//! let mut env: Env = [("PORT", "9000")].into_iter().collect();
//! load_reader(&mut env, "PORT=8080\nHOST = localhost\n".as_bytes(), Path::new(".env")).unwrap();
//!
//! assert_eq!(lookup(&env, "PORT").as_deref(), Some("9000"));
//! assert_eq!(get_or(&env, "HOST", "0.0.0.0"), "localhost");
//! assert_eq!(get_or(&env, "USER", "nobody"), "nobody");
//! ```

pub mod cli;
pub mod cmd;
pub mod dotenv;
pub mod env;
pub mod error;
pub mod logging;
