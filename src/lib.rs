// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                   main.rs
//!                      |
//!           +----------+----------+
//!           v                     v
//!       cli (clap)          cmd (handlers)
//!                          show / session
//!           +----------+----------+
//!                      v
//!         ,-------------------------,
//!         |         config          |
//!         | TOML + ENVPATCH_* vars  |
//!         '------------+------------'
//!                      v
//!   +-----------------------------------------+
//!   |  core   env (EnvList, editor), session  |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
