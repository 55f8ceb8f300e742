// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation for envpatch.
//!
//! ```text
//! base (current env | empty)
//!   --> config: [env] set, [session], [propagate]   (unless --no-config)
//!   --> --set KEY=VALUE ...
//!   --> --unset KEY ...
//!   --> --propagate KEY ...
//!   --> stdout
//! ```

use std::io::Write;

use anyhow::Context;

use crate::cli::show::ShowArgs;
use crate::config::Config;
use crate::core::env::current_env;
use crate::core::env::list::EnvList;
use crate::core::env::read::{ReadEnv, SystemEnv, propagate_all};
use crate::error::{EnvResult, Result};

/// Main handler for show command.
///
/// # Errors
///
/// Returns an error if an edit fails (for example a propagated variable is
/// not set) or stdout cannot be written.
pub fn run_show_command(args: &ShowArgs, config: &Config) -> Result<()> {
    let base = if args.clear {
        EnvList::new()
    } else {
        current_env()
    };
    tracing::debug!(entries = base.len(), clear = args.clear, "base environment");

    let env = edit_env(base, args, config, &SystemEnv).context("failed to build environment")?;

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &env)?;
        writeln!(out)?;
    } else {
        write!(out, "{env}")?;
    }
    out.flush()?;
    Ok(())
}

/// Applies the configured and command-line edits to `env`.
///
/// # Errors
///
/// Returns the first [`crate::error::EnvError`] raised by an edit.
pub fn edit_env<R: ReadEnv + ?Sized>(
    mut env: EnvList,
    args: &ShowArgs,
    config: &Config,
    reader: &R,
) -> EnvResult<EnvList> {
    if !args.no_config {
        env = config.apply(env, reader)?;
    }

    for (key, value) in &args.set {
        env.insert_or_replace(key, value)?;
    }

    for key in &args.unset {
        let removed = env.remove_key(key);
        tracing::debug!(key = key.as_str(), removed, "environment entry unset");
    }

    propagate_all(env, &args.propagate, reader)
}
