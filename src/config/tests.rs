// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::core::env::list::EnvList;
use crate::logging::LogLevel;
use std::io::Write;

const FULL: &str = r#"
[global]
output_log_level = 4

[session]
library = "/usr/lib/libexec.so"
reporter = "/usr/bin/intercept-report"
destination = "/tmp/intercept"

[env]
set = ["CC=clang", "CXX=clang++"]

[propagate]
keys = ["TOOLCHAIN"]
"#;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.env.set.is_empty());
    assert!(!config.has_session());
}

#[test]
fn test_config_parse() {
    let config = Config::parse(FULL).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.env.assignments().unwrap(),
        [
            ("CC".to_string(), "clang".to_string()),
            ("CXX".to_string(), "clang++".to_string()),
        ]
    );
    assert_eq!(config.propagate.keys, ["TOOLCHAIN"]);
    assert!(config.session.is_valid());
}

#[test]
fn test_config_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn test_config_rejects_invalid_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_config_rejects_malformed_assignment() {
    let err = Config::parse("[env]\nset = [\"NOVALUE\"]\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"failed to parse 'NOVALUE': expected KEY=VALUE");

    let err = Config::parse("[env]\nset = [\"=x\"]\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"failed to parse '=x': invalid environment variable name '': name is empty");
}

#[test]
fn test_config_rejects_invalid_propagate_key() {
    let err = Config::parse("[propagate]\nkeys = [\"\"]\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for '' in section '[propagate]': invalid environment variable name '': name is empty");
}

#[test]
fn test_config_env_keys_keep_case() {
    let config = Config::parse("[env]\nset = [\"Path=/bin\", \"PATH=/usr/bin\"]\n").unwrap();
    let env = config.apply(EnvList::new(), &EnvList::new()).unwrap();
    assert_eq!(env.entries(), ["Path=/bin", "PATH=/usr/bin"]);
}

#[test]
fn test_config_apply() {
    let config = Config::parse(FULL).unwrap();
    let reader = EnvList::from_entries(["TOOLCHAIN=llvm"]);
    let env = EnvList::from_entries(["CC=gcc", "HOME=/root"]);

    let env = config.apply(env, &reader).unwrap();
    insta::assert_snapshot!(env.to_string().trim_end(), @r"
    HOME=/root
    CC=clang
    CXX=clang++
    INTERCEPT_LIBRARY=/usr/lib/libexec.so
    INTERCEPT_REPORT_COMMAND=/usr/bin/intercept-report
    INTERCEPT_REPORT_DESTINATION=/tmp/intercept
    TOOLCHAIN=llvm
    ");
}

#[test]
fn test_config_apply_missing_propagated_key() {
    let config = Config::parse("[propagate]\nkeys = [\"ABSENT\"]\n").unwrap();
    let err = config.apply(EnvList::new(), &EnvList::new()).unwrap_err();
    assert_eq!(err.key(), "ABSENT");
}

#[test]
fn test_config_apply_partial_session() {
    let config = Config::parse("[session]\nlibrary = \"/lib.so\"\n").unwrap();
    let err = config.apply(EnvList::new(), &EnvList::new()).unwrap_err();
    assert_eq!(err.key(), "INTERCEPT_REPORT_COMMAND");
}

#[test]
fn test_config_apply_verbose_only_session() {
    let config = Config::parse("[session]\nverbose = true\n").unwrap();
    assert!(config.has_session());
    let err = config.apply(EnvList::new(), &EnvList::new()).unwrap_err();
    assert_eq!(err.key(), "INTERCEPT_LIBRARY");
}

#[test]
fn test_format_options() {
    let config = Config::parse("[env]\nset = [\"CC=clang\"]\n").unwrap();
    let lines: Vec<_> = config
        .format_options()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    env.set                 = CC=clang
    global.file_log_level   = 5
    global.json_log         = false
    global.log_file         =
    global.output_log_level = 3
    propagate.keys          =
    session.destination     =
    session.library         =
    session.reporter        =
    session.verbose         = false
    ");
}

#[test]
fn test_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str(FULL)
        .set("session.verbose", true)
        .unwrap()
        .build()
        .unwrap();
    assert!(config.session.verbose);
}

#[test]
fn test_loader_later_file_wins() {
    let mut first = tempfile::NamedTempFile::new().unwrap();
    writeln!(first, "[env]\nset = [\"CC=gcc\"]\n[propagate]\nkeys = [\"HOME\"]").unwrap();
    let mut second = tempfile::NamedTempFile::new().unwrap();
    writeln!(second, "[env]\nset = [\"CC=clang\"]").unwrap();

    let loader = Config::builder()
        .add_toml_file(first.path())
        .add_toml_file(second.path());
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.env.set, ["CC=clang"]);
    assert_eq!(config.propagate.keys, ["HOME"]);
}

#[test]
fn test_loader_missing_required_file() {
    let result = Config::from_file("/nonexistent/envpatch.toml");
    assert!(result.is_err());
}

#[test]
fn test_loader_missing_optional_file() {
    let loader = Config::builder().add_toml_file_optional("/nonexistent/envpatch.toml");
    assert!(loader.format_loaded_files().is_empty());
    assert!(loader.build().is_ok());
}
