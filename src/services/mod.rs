// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and the pure list transformations.

pub mod auth;
pub mod events;
pub mod filter;
mod http;
pub mod projector;

pub use auth::{AuthApi, AuthService};
pub use events::{EventApi, EventService};
pub use filter::{filter_events, ListFilter};
pub use projector::{count_attendance, project_event, project_events};
