// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          AppError (~24 bytes)
//!                 |
//!   +--------+----+----+--------+
//!   |        |         |        |
//!   v        v         v        v
//!  Env     Config     Io      Other
//!  Box      Box       Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Env     MissingValue, InvalidKey, Allocation
//!   Config  ParseError, InvalidValue
//! ```
//!
//! Library code returns [`EnvResult`]; nothing below the binary exits the
//! process. The CLI layer uses [`Result`] (`anyhow`) and decides on the exit
//! status.

use std::collections::TryReserveError;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AppError`].
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Result type for environment list editing.
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum AppError {
    /// Environment list editing failed.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Environment Errors ---

/// Errors raised while editing an environment list.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The value to insert was not available from its source.
    #[error("no value for environment variable '{key}'")]
    MissingValue { key: String },

    /// The key cannot be used as an environment variable name.
    #[error("invalid environment variable name '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Storage for the `KEY=VALUE` entry could not be reserved.
    #[error("failed to build entry for '{key}'")]
    Allocation {
        key: String,
        #[source]
        source: TryReserveError,
    },
}

impl EnvError {
    /// Returns the variable name the error refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::MissingValue { key }
            | Self::InvalidKey { key, .. }
            | Self::Allocation { key, .. } => key,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration value or argument.
    #[error("failed to parse '{input}': {message}")]
    ParseError { input: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
