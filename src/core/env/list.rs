// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered list of `KEY=VALUE` entries.
//!
//! # Architecture
//!
//! ```text
//! EnvList
//! entries: Vec<String>   (insertion order, duplicates allowed)
//! append / remove (by value) / get / pairs
//! ```
//!
//! The container does not enforce one entry per key; that is established by
//! [`super::editor::insert_or_replace`].

use serde::{Deserialize, Serialize};

use super::entry::{key_prefix_matches, split_entry};
use crate::error::EnvResult;

/// An environment for a child process, as an ordered list of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvList {
    entries: Vec<String>,
}

impl EnvList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a list from existing entries, keeping their order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds an entry at the end of the list.
    pub fn append(&mut self, entry: String) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Removes the first entry equal to `entry`.
    ///
    /// Returns whether an entry was removed. The order of the remaining
    /// entries is preserved.
    pub fn remove(&mut self, entry: &str) -> bool {
        self.entries
            .iter()
            .position(|e| e == entry)
            .map(|index| self.entries.remove(index))
            .is_some()
    }

    /// Removes every entry for `key`, returning how many were dropped.
    pub fn remove_key(&mut self, key: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !key_prefix_matches(e, key));
        before - self.entries.len()
    }

    /// Inserts `key=value`, replacing any existing entries for `key`.
    ///
    /// The new entry is placed last.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the entry cannot be built.
    pub fn insert_or_replace(&mut self, key: &str, value: &str) -> EnvResult<()> {
        super::editor::replace_entry(self, key, value)
    }

    /// Gets the value of the first entry for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| key_prefix_matches(e, key))
            .map(|e| &e[key.len() + 1..])
    }

    /// Returns true if an entry for `key` exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| key_prefix_matches(e, key))
    }

    /// Returns an iterator over the raw entries.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Returns an iterator over `(key, value)` pairs.
    ///
    /// Suitable for `std::process::Command::envs` after `env_clear`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| split_entry(e))
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<String> for EnvList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for EnvList {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for EnvList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a EnvList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Display for EnvList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
