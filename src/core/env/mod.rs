// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment list management.
//!
//! # Architecture
//!
//! ```text
//! EnvList (Vec<String> of "KEY=VALUE", ordered)
//! Sources: current_env(), EnvList::from_entries(), EnvList::new()
//! Ops: append / remove / insert_or_replace / propagate
//! ```
//!
//! - **Byte-wise keys**: no case folding, `PATH` and `Path` differ
//! - **Replace moves to end**: a replaced entry is appended last

pub mod editor;
pub mod entry;
pub mod list;
pub mod read;


/// Captures the current process environment.
///
/// Variables whose name or value is not unicode are skipped.
#[must_use]
pub fn current_env() -> list::EnvList {
    std::env::vars_os()
        .filter_map(|(k, v)| {
            let key = k.into_string().ok()?;
            let value = v.into_string().ok()?;
            Some(format!("{key}={value}"))
        })
        .collect()
}
