// envpatch: child-process environment editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment editing.
//!
//! ```text
//!              core
//!               |
//!        +------+------+
//!        v             v
//!       env         session
//!        |             |
//!     EnvList      INTERCEPT_* keys
//!     editor       from_env / inject
//!     ReadEnv
//! ```

pub mod env;
pub mod session;
