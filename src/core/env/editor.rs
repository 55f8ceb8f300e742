// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Insert-or-replace for environment lists.
//!
//! ```text
//! insert_or_replace(["A=1", "B=2"], "B", Some("3"))
//!   value?        --> MissingValue if None
//!   make_entry    --> "B=3"
//!   retain !"B="  --> ["A=1"]
//!   append        --> ["A=1", "B=3"]
//! ```

use super::entry::{make_entry, validate_key};
use super::list::EnvList;
use crate::error::{EnvError, EnvResult};

/// Returns `list` with every entry for `key` removed and `key=value` appended.
///
/// The result holds exactly one entry for `key`. Other entries keep their
/// relative order; the new entry is always last, even when it replaces one
/// from the middle of the list. Calling it twice with the same arguments
/// gives the same list as calling it once.
///
/// # Errors
///
/// - [`EnvError::MissingValue`] if `value` is `None`.
/// - [`EnvError::InvalidKey`] if `key` is empty or contains `=` or NUL.
/// - [`EnvError::Allocation`] if the entry cannot be built.
///
/// # Example
///
/// ```
/// use envpatch::core::env::editor::insert_or_replace;
/// use envpatch::core::env::list::EnvList;
///
/// let list = EnvList::from_entries(["PATH=/bin", "PATHEXT=.com"]);
/// let list = insert_or_replace(list, "PATH", Some("/usr/bin"))?;
/// assert_eq!(list.entries(), ["PATHEXT=.com", "PATH=/usr/bin"]);
/// # Ok::<(), envpatch::error::EnvError>(())
/// ```
pub fn insert_or_replace(
    mut list: EnvList,
    key: &str,
    value: Option<&str>,
) -> EnvResult<EnvList> {
    let Some(value) = value else {
        return Err(EnvError::MissingValue {
            key: key.to_string(),
        });
    };
    replace_entry(&mut list, key, value)?;
    Ok(list)
}

/// Replaces the entries for `key` in place.
///
/// The list is only modified once the new entry has been built.
pub(super) fn replace_entry(list: &mut EnvList, key: &str, value: &str) -> EnvResult<()> {
    validate_key(key)?;
    let entry = make_entry(key, value)?;

    let replaced = list.remove_key(key);
    tracing::trace!(key, replaced, "environment entry set");

    list.append(entry);
    Ok(())
}
