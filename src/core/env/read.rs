// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Trusted value lookup for propagated variables.
//!
//! ```text
//! ReadEnv::var(key) --> Ok(value) --> insert_or_replace(list, key, Some(value))
//!                   --> Err(_)    --> insert_or_replace(list, key, None) --> MissingValue
//! ```

use std::env;

use super::editor::insert_or_replace;
use super::list::EnvList;
use crate::error::EnvResult;

/// Source of environment variable values.
pub trait ReadEnv {
    /// Looks up a variable.
    ///
    /// # Errors
    ///
    /// Returns [`env::VarError`] if the variable is unset or not unicode.
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

impl ReadEnv for EnvList {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.get(key)
            .map(str::to_owned)
            .ok_or(env::VarError::NotPresent)
    }
}

/// Copies `key` from `reader` into `list`.
///
/// # Errors
///
/// Returns [`crate::error::EnvError::MissingValue`] if `reader` has no
/// unicode value for `key`, or any error from [`insert_or_replace`].
pub fn propagate<R: ReadEnv + ?Sized>(list: EnvList, key: &str, reader: &R) -> EnvResult<EnvList> {
    let value = reader.var(key).ok();
    if value.is_none() {
        tracing::debug!(key, "propagated variable is not set");
    }
    insert_or_replace(list, key, value.as_deref())
}

/// Copies each of `keys` from `reader` into `list`, in order.
///
/// # Errors
///
/// Stops at and returns the first error from [`propagate`].
pub fn propagate_all<R, I, S>(list: EnvList, keys: I, reader: &R) -> EnvResult<EnvList>
where
    R: ReadEnv + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .try_fold(list, |list, key| propagate(list, key.as_ref(), reader))
}
