// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envpatch using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envpatch [global options] <command>
//! version
//! options
//! inis
//! show [--clear] [-s KEY=VALUE]... [-u KEY]... [-p KEY]... [--json]
//! session [--json]
//! ```

pub mod global;
pub mod show;


use crate::cli::global::GlobalOptions;
use crate::cli::show::{SessionArgs, ShowArgs};
use clap::{Parser, Subcommand};

/// Edits the environment handed to child processes.
#[derive(Debug, Parser)]
#[command(
    name = "envpatch",
    author,
    version,
    about = "Edits child-process environment lists",
    long_about = "envpatch Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds the KEY=VALUE environment for a child process. Every\n\
                  assignment replaces earlier entries for the same key and is\n\
                  placed last, so each key appears exactly once.",
    after_help = "CONFIG FILES:\n\n\
                  envpatch loads `envpatch.toml` from the current directory if it\n\
                  exists, then every --ini in order; later files override earlier\n\
                  ones. ENVPATCH_SECTION__KEY variables override the files; list\n\
                  values are split on ',', so values containing a comma belong in\n\
                  a file or --set. Use --no-default-inis to only load --ini files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in use.
    Inis,

    /// Prints the edited environment.
    Show(ShowArgs),

    /// Prints the intercept session found in the current environment.
    Session(SessionArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
