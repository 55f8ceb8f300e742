// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envpatch.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envpatch.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. ENVPATCH_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVPATCH_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ENVPATCH_SESSION__VERBOSE=true       → session.verbose = true
//! ENVPATCH_PROPAGATE__KEYS=HOME,USER   → propagate.keys = ["HOME", "USER"]
//! ENVPATCH_ENV__SET=CC=clang           → env.set = ["CC=clang"]
//! ```
//!
//! # Applying to an environment
//!
//! ```text
//! EnvList --> [env] set --> [session] (if any field set) --> [propagate] keys
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::entry::{split_entry, validate_key};
use crate::core::env::list::EnvList;
use crate::core::env::read::{ReadEnv, propagate_all};
use crate::core::session::Session;
use crate::error::{ConfigError, EnvResult, Result};

use loader::ConfigLoader;
use types::{EnvConfig, GlobalConfig, PropagateConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Intercept session written into the environment.
    pub session: Session,
    /// Fixed `KEY=VALUE` assignments.
    pub env: EnvConfig,
    /// Keys copied from the process environment.
    pub propagate: PropagateConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envpatch::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("ci/envpatch.toml")
    ///     .add_toml_file_optional("envpatch.toml")
    ///     .with_env_prefix("ENVPATCH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks every `[env]` assignment and `[propagate]` key.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for the first malformed entry.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.env.assignments()?;

        for key in &self.propagate.keys {
            validate_key(key).map_err(|e| ConfigError::InvalidValue {
                section: "propagate".to_string(),
                key: key.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Returns true if any session field is configured.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.session.library.is_some()
            || self.session.reporter.is_some()
            || self.session.destination.is_some()
            || self.session.verbose
    }

    /// Applies `[env]`, `[session]` and `[propagate]` to `env`, in that order.
    ///
    /// Assignments are expected to have passed [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if a session is partially configured, or a propagated
    /// key is missing from `reader`.
    pub fn apply<R: ReadEnv + ?Sized>(&self, mut env: EnvList, reader: &R) -> EnvResult<EnvList> {
        for assignment in &self.env.set {
            let (key, value) = split_entry(assignment);
            env.insert_or_replace(key, value)?;
        }

        if self.has_session() {
            env = self.session.inject(env)?;
            tracing::debug!("intercept session injected");
        }

        propagate_all(env, &self.propagate.keys, reader)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_session_options(&mut options);
        options.insert("env.set".into(), self.env.set.join(","));
        options.insert("propagate.keys".into(), self.propagate.keys.join(","));

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
        options.insert("global.json_log".into(), self.global.json_log.to_string());
    }

    fn format_session_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |v: &Option<String>| v.clone().unwrap_or_default();

        options.insert("session.library".into(), fmt(&self.session.library));
        options.insert("session.reporter".into(), fmt(&self.session.reporter));
        options.insert("session.destination".into(), fmt(&self.session.destination));
        options.insert("session.verbose".into(), self.session.verbose.to_string());
    }
}
