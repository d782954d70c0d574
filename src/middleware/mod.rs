// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation guards.

pub mod auth;

pub use auth::{require_auth, require_no_auth, Access};
