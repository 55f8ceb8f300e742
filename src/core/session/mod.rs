// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Intercept session carried to child processes through the environment.
//!
//! ```text
//! INTERCEPT_LIBRARY             --> library
//! INTERCEPT_REPORT_COMMAND      --> reporter
//! INTERCEPT_REPORT_DESTINATION  --> destination
//! INTERCEPT_VERBOSE (any value) --> verbose
//!
//! Session::from_env(&EnvList) <--> Session::inject(EnvList)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::env::editor::insert_or_replace;
use crate::core::env::list::EnvList;
use crate::error::EnvResult;

pub const KEY_LIBRARY: &str = "INTERCEPT_LIBRARY";
pub const KEY_REPORTER: &str = "INTERCEPT_REPORT_COMMAND";
pub const KEY_DESTINATION: &str = "INTERCEPT_REPORT_DESTINATION";
pub const KEY_VERBOSE: &str = "INTERCEPT_VERBOSE";

/// Settings an intercepted child needs to report its executions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Session {
    /// Path of the preloaded intercept library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    /// Command that reports an execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    /// Directory the reports are written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Emit diagnostic messages.
    pub verbose: bool,
}

impl Session {
    /// Reads a session from an environment list.
    #[must_use]
    pub fn from_env(env: &EnvList) -> Self {
        Self {
            library: env.get(KEY_LIBRARY).map(str::to_owned),
            reporter: env.get(KEY_REPORTER).map(str::to_owned),
            destination: env.get(KEY_DESTINATION).map(str::to_owned),
            verbose: env.contains_key(KEY_VERBOSE),
        }
    }

    /// Returns true if library, reporter and destination are all set.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.library.is_some() && self.reporter.is_some() && self.destination.is_some()
    }

    /// Writes this session into `env`, replacing earlier values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EnvError::MissingValue`] for the first unset field, or any
    /// error from [`insert_or_replace`].
    pub fn inject(&self, env: EnvList) -> EnvResult<EnvList> {
        let env = insert_or_replace(env, KEY_LIBRARY, self.library.as_deref())?;
        let env = insert_or_replace(env, KEY_REPORTER, self.reporter.as_deref())?;
        let mut env = insert_or_replace(env, KEY_DESTINATION, self.destination.as_deref())?;

        if self.verbose {
            env.insert_or_replace(KEY_VERBOSE, "1")?;
        } else {
            env.remove_key(KEY_VERBOSE);
        }
        Ok(env)
    }

    /// Logs `message` when the session is verbose.
    pub fn write_message(&self, message: &str) {
        if self.verbose {
            tracing::info!(target: "envpatch::session", "{message}");
        }
    }

    /// Returns the first unset required key, if any.
    #[must_use]
    pub fn missing_key(&self) -> Option<&'static str> {
        [
            (KEY_LIBRARY, &self.library),
            (KEY_REPORTER, &self.reporter),
            (KEY_DESTINATION, &self.destination),
        ]
        .into_iter()
        .find_map(|(key, value)| value.is_none().then_some(key))
    }
}
