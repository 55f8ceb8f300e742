// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session command implementation for envpatch.

use crate::cli::show::SessionArgs;
use crate::core::env::current_env;
use crate::core::session::{KEY_DESTINATION, KEY_LIBRARY, KEY_REPORTER, KEY_VERBOSE, Session};
use crate::error::Result;

/// Prints the intercept session of the current process.
///
/// # Errors
///
/// Returns an error if the session cannot be serialized.
pub fn run_session_command(args: &SessionArgs) -> Result<()> {
    let session = Session::from_env(&current_env());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        for line in format_session(&session) {
            println!("{line}");
        }
    }

    match session.missing_key() {
        Some(key) => tracing::warn!(key, "session is incomplete"),
        None => session.write_message("session is complete"),
    }
    Ok(())
}

/// Formats a session as `KEY = value` lines.
#[must_use]
pub fn format_session(session: &Session) -> Vec<String> {
    let unset = || "(unset)".to_string();
    let rows = [
        (KEY_LIBRARY, session.library.clone().unwrap_or_else(unset)),
        (KEY_REPORTER, session.reporter.clone().unwrap_or_else(unset)),
        (KEY_DESTINATION, session.destination.clone().unwrap_or_else(unset)),
        (KEY_VERBOSE, session.verbose.to_string()),
    ];
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    rows.into_iter()
        .map(|(key, value)| format!("{key:<width$} = {value}"))
        .collect()
}
