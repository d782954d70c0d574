// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the client.

pub mod event;
pub mod user;
pub mod view;

pub use event::{
    ApiResponse, AttendanceStatus, Attendee, Event, EventForm, EventScope, InviteForm,
    InviteRequest, Role, SearchParams, UpdateEventRequest, UpdateStatusRequest,
};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use view::{AttendanceCounts, EventViewModel, OrganizerSummary, Rsvp, RsvpFilter};
