// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::Path;
use std::process;

use clap::Parser;
use envpatch::cli::{Cli, Command};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    assert!(matches!(parse(&["envpatch", "version"]).command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    assert!(matches!(parse(&["envpatch", "-v"]).command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = parse(&["envpatch"]);
    assert!(cli.command.is_none());
    assert!(cli.global.inis.is_empty());
}

// =============================================================================
// Show Command
// =============================================================================

#[test]
fn cli_show_all_flags() {
    let cli = parse(&[
        "envpatch",
        "show",
        "--clear",
        "-s",
        "CC=clang",
        "--set",
        "CFLAGS=-O2 -DX=1",
        "-u",
        "LD_PRELOAD",
        "-p",
        "HOME",
        "--no-config",
        "--json",
    ]);
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert!(args.clear);
    assert!(args.no_config);
    assert!(args.json);
    insta::assert_debug_snapshot!((args.set, args.unset, args.propagate), @r#"
    (
        [
            (
                "CC",
                "clang",
            ),
            (
                "CFLAGS",
                "-O2 -DX=1",
            ),
        ],
        [
            "LD_PRELOAD",
        ],
        [
            "HOME",
        ],
    )
    "#);
}

#[test]
fn cli_show_rejects_bad_input() {
    for args in [
        ["envpatch", "show", "-s", "NOVALUE"],
        ["envpatch", "show", "-s", "=value"],
        ["envpatch", "show", "-u", "A=B"],
        ["envpatch", "show", "-p", ""],
    ] {
        assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
    }
}

// =============================================================================
// Session Command
// =============================================================================

#[test]
fn cli_session_json() {
    let Some(Command::Session(args)) = parse(&["envpatch", "session", "--json"]).command else {
        panic!("expected session command");
    };
    assert!(args.json);
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = parse(&[
        "envpatch",
        "-i",
        "a.toml",
        "--ini",
        "b.toml",
        "-l",
        "5",
        "--no-default-inis",
        "options",
    ]);
    assert!(matches!(cli.command, Some(Command::Options)));
    assert_eq!(cli.global.inis.len(), 2);
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.no_default_inis);
}

#[test]
fn cli_global_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envpatch", "-l", "7", "inis"]).is_err());
}

// =============================================================================
// Binary: ENVPATCH_* configuration source
// =============================================================================

/// Runs the binary in `dir` with only the given `ENVPATCH_*` variables set.
fn run_envpatch(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> String {
    let mut cmd = process::Command::new(env!("CARGO_BIN_EXE_envpatch"));
    cmd.current_dir(dir).args(args);
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("ENVPATCH_") {
            cmd.env_remove(key);
        }
    }
    cmd.envs(vars.iter().copied());

    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn bin_env_prefix_sets_lists() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_envpatch(
        dir.path(),
        &["--no-default-inis", "show", "--clear"],
        &[
            ("ENVPATCH_ENV__SET", "CC=clang"),
            ("ENVPATCH_PROPAGATE__KEYS", "HOME,USER"),
            ("HOME", "/home/dev"),
            ("USER", "dev"),
        ],
    );
    insta::assert_snapshot!(stdout.trim_end(), @r"
    CC=clang
    HOME=/home/dev
    USER=dev
    ");
}

#[test]
fn bin_env_prefix_overrides_ini() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ci.toml"),
        "[env]\nset = [\"CC=gcc\", \"LD=ld\"]\n",
    )
    .unwrap();

    let stdout = run_envpatch(
        dir.path(),
        &["--no-default-inis", "--ini", "ci.toml", "show", "--clear"],
        &[("ENVPATCH_ENV__SET", "CC=clang")],
    );
    assert_eq!(stdout, "CC=clang\n");
}

#[test]
fn bin_cli_log_level_overrides_env_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let vars = [("ENVPATCH_GLOBAL__OUTPUT_LOG_LEVEL", "2")];

    let stdout = run_envpatch(dir.path(), &["--no-default-inis", "options"], &vars);
    assert!(stdout.contains("global.output_log_level = 2"), "{stdout}");

    let stdout = run_envpatch(dir.path(), &["--no-default-inis", "-l", "4", "options"], &vars);
    assert!(stdout.contains("global.output_log_level = 4"), "{stdout}");
}
