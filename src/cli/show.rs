// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `show` and `session` commands.
//!
//! ```text
//! show
//!   --clear            start from an empty list instead of the current env
//!   -s KEY=VALUE       insert or replace (repeatable, applied in order)
//!   -u KEY             remove every entry for KEY (repeatable)
//!   -p KEY             copy KEY from the current env, must exist (repeatable)
//!   --no-config        skip [env], [session] and [propagate]
//!   --json             print a JSON array instead of one entry per line
//! ```

use clap::Args;

use crate::config::types::parse_assignment;
use crate::core::env::entry::validate_key;
use crate::error::{ConfigError, EnvError};

/// Arguments for the show command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Start from an empty environment.
    #[arg(long)]
    pub clear: bool,

    /// Sets KEY=VALUE, replacing earlier entries for KEY.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_set, action = clap::ArgAction::Append)]
    pub set: Vec<(String, String)>,

    /// Removes every entry for KEY.
    #[arg(short = 'u', long = "unset", value_name = "KEY", value_parser = parse_key, action = clap::ArgAction::Append)]
    pub unset: Vec<String>,

    /// Copies KEY from the current environment; fails if it is not set.
    #[arg(short = 'p', long = "propagate", value_name = "KEY", value_parser = parse_key, action = clap::ArgAction::Append)]
    pub propagate: Vec<String>,

    /// Ignores the configured environment edits.
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Prints a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the session command.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Prints the session as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_set(input: &str) -> Result<(String, String), ConfigError> {
    parse_assignment(input)
}

fn parse_key(input: &str) -> Result<String, EnvError> {
    validate_key(input)?;
    Ok(input.to_string())
}
