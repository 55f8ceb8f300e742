// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations on disk.

use std::fs;

use envpatch::config::Config;
use envpatch::core::env::list::EnvList;
use envpatch::logging::LogLevel;

const BASE: &str = r#"
[global]
output_log_level = 2

[env]
set = ["CC=gcc", "MAKEFLAGS=-j4"]

[propagate]
keys = ["HOME"]
"#;

const CI: &str = r#"
[global]
output_log_level = 4
json_log = true

[session]
library = "/usr/lib/bear/libexec.so"
reporter = "/usr/bin/intercept"
destination = "/tmp/bear"
verbose = true

[env]
set = ["CC=clang"]
"#;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("envpatch.toml");
    fs::write(&path, BASE).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.env.set, ["CC=gcc", "MAKEFLAGS=-j4"]);
    assert!(!config.has_session());
}

#[test]
fn config_layered_files() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("envpatch.toml");
    let ci = dir.path().join("ci.toml");
    fs::write(&base, BASE).unwrap();
    fs::write(&ci, CI).unwrap();

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&ci)
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert!(config.global.json_log);
    // arrays are replaced, not merged
    assert_eq!(config.env.set, ["CC=clang"]);
    assert_eq!(config.propagate.keys, ["HOME"]);
    assert!(config.session.is_valid());
}

#[test]
fn config_optional_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::builder()
        .add_toml_file_optional(dir.path().join("envpatch.toml"))
        .build()
        .unwrap();
    assert!(config.env.set.is_empty());
}

#[test]
fn config_required_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
}

// =============================================================================
// Applying to an environment
// =============================================================================

#[test]
fn config_apply_full() {
    let config = Config::builder()
        .add_toml_str(BASE)
        .add_toml_str(CI)
        .build()
        .unwrap();
    let parent = EnvList::from_entries(["HOME=/home/dev", "USER=dev"]);
    let env = EnvList::from_entries(["CC=cc", "INTERCEPT_VERBOSE=0", "TERM=xterm"]);

    let env = config.apply(env, &parent).unwrap();
    insta::assert_snapshot!(env.to_string().trim_end(), @r"
    TERM=xterm
    CC=clang
    INTERCEPT_LIBRARY=/usr/lib/bear/libexec.so
    INTERCEPT_REPORT_COMMAND=/usr/bin/intercept
    INTERCEPT_REPORT_DESTINATION=/tmp/bear
    INTERCEPT_VERBOSE=1
    HOME=/home/dev
    ");
}

#[test]
fn config_apply_missing_propagated_key() {
    let config = Config::parse(BASE).unwrap();
    let err = config.apply(EnvList::new(), &EnvList::new()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no value for environment variable 'HOME'");
}
