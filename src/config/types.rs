// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envpatch.
//!
//! ```text
//! Config: GlobalConfig, Session, EnvConfig, PropagateConfig
//! EnvConfig.set: ["KEY=VALUE", ...] applied in order
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::entry::validate_key;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, empty for none.
    pub log_file: PathBuf,
    /// Write the log file as JSON lines.
    pub json_log: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
            json_log: false,
        }
    }
}

/// Variables copied from the invoking process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropagateConfig {
    /// Keys that must be present in the process environment.
    pub keys: Vec<String>,
}

/// Fixed `KEY=VALUE` assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Assignments applied in the listed order.
    pub set: Vec<String>,
}

impl EnvConfig {
    /// Parses every assignment.
    ///
    /// # Errors
    ///
    /// Returns the first assignment that fails [`parse_assignment`].
    pub fn assignments(&self) -> Result<Vec<(String, String)>, ConfigError> {
        self.set.iter().map(|s| parse_assignment(s)).collect()
    }
}

/// Splits `KEY=VALUE` at the first `=` and checks the key.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` if there is no `=` or the key cannot
/// name an environment variable.
pub fn parse_assignment(input: &str) -> Result<(String, String), ConfigError> {
    let parse_error = |message: String| ConfigError::ParseError {
        input: input.to_string(),
        message,
    };

    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| parse_error("expected KEY=VALUE".to_string()))?;
    validate_key(key).map_err(|e| parse_error(e.to_string()))?;
    Ok((key.to_string(), value.to_string()))
}
