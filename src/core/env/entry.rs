// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `KEY=VALUE` entry construction and matching.
//!
//! ```text
//! make_entry("PATH", "/bin")  --> "PATH=/bin"
//! key_prefix_matches("PATHEXT=.com", "PATH") --> false  ("PATH=" is compared)
//! ```

use crate::error::{EnvError, EnvResult};

/// Separator between key and value.
pub const SEPARATOR: char = '=';

/// Checks that `key` can name an environment variable.
///
/// # Errors
///
/// Returns [`EnvError::InvalidKey`] if the key is empty or contains `=` or NUL.
pub fn validate_key(key: &str) -> EnvResult<()> {
    let reason = if key.is_empty() {
        "name is empty"
    } else if key.contains(SEPARATOR) {
        "contains '='"
    } else if key.contains('\0') {
        "contains NUL"
    } else {
        return Ok(());
    };

    Err(EnvError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}

/// Builds a `KEY=VALUE` entry.
///
/// # Errors
///
/// Returns [`EnvError::Allocation`] if the entry's storage cannot be reserved.
pub fn make_entry(key: &str, value: &str) -> EnvResult<String> {
    let mut entry = String::new();
    entry
        .try_reserve_exact(key.len() + 1 + value.len())
        .map_err(|source| EnvError::Allocation {
            key: key.to_string(),
            source,
        })?;

    entry.push_str(key);
    entry.push(SEPARATOR);
    entry.push_str(value);
    Ok(entry)
}

/// Returns true if `entry` starts with `key` immediately followed by `=`.
///
/// Comparison is byte-wise and case-sensitive.
#[must_use]
pub fn key_prefix_matches(entry: &str, key: &str) -> bool {
    entry
        .as_bytes()
        .strip_prefix(key.as_bytes())
        .is_some_and(|rest| rest.first() == Some(&b'='))
}

/// Splits an entry at the first `=`.
///
/// Entries without a separator yield the whole entry as key and an empty value.
#[must_use]
pub fn split_entry(entry: &str) -> (&str, &str) {
    entry.split_once(SEPARATOR).unwrap_or((entry, ""))
}
