// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display-ready event shape computed on the client.
//!
//! None of these types are ever sent back to the API.

use super::{Attendee, AttendanceStatus, Role};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The current user's answer to an invitation, when they have given one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rsvp {
    Going,
    Maybe,
    NotGoing,
}

impl Rsvp {
    /// Map a wire status to an RSVP; `Pending` is no answer.
    pub fn from_status(status: AttendanceStatus) -> Option<Self> {
        match status {
            AttendanceStatus::Going => Some(Rsvp::Going),
            AttendanceStatus::Maybe => Some(Rsvp::Maybe),
            AttendanceStatus::NotGoing => Some(Rsvp::NotGoing),
            AttendanceStatus::Pending => None,
        }
    }

    /// Wire status sent when changing the RSVP.
    pub fn status(&self) -> AttendanceStatus {
        match self {
            Rsvp::Going => AttendanceStatus::Going,
            Rsvp::Maybe => AttendanceStatus::Maybe,
            Rsvp::NotGoing => AttendanceStatus::NotGoing,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rsvp::Going => "going",
            Rsvp::Maybe => "maybe",
            Rsvp::NotGoing => "notgoing",
        }
    }

    /// Human label, e.g. `Not Going`.
    pub fn label(&self) -> &'static str {
        self.status().as_str()
    }
}

impl fmt::Display for Rsvp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rsvp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "going" => Ok(Rsvp::Going),
            "maybe" => Ok(Rsvp::Maybe),
            "notgoing" | "not going" => Ok(Rsvp::NotGoing),
            other => Err(format!("unknown RSVP: {}", other)),
        }
    }
}

/// RSVP category selector for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RsvpFilter {
    #[default]
    All,
    Going,
    Maybe,
    NotGoing,
    /// Events the user has not answered
    Pending,
}

impl RsvpFilter {
    /// Whether an event with this RSVP passes the selector.
    pub fn matches(&self, rsvp: Option<Rsvp>) -> bool {
        match self {
            RsvpFilter::All => true,
            RsvpFilter::Going => rsvp == Some(Rsvp::Going),
            RsvpFilter::Maybe => rsvp == Some(Rsvp::Maybe),
            RsvpFilter::NotGoing => rsvp == Some(Rsvp::NotGoing),
            RsvpFilter::Pending => rsvp.is_none(),
        }
    }
}

impl FromStr for RsvpFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(RsvpFilter::All),
            "pending" => Ok(RsvpFilter::Pending),
            other => match other.parse::<Rsvp>()? {
                Rsvp::Going => Ok(RsvpFilter::Going),
                Rsvp::Maybe => Ok(RsvpFilter::Maybe),
                Rsvp::NotGoing => Ok(RsvpFilter::NotGoing),
            },
        }
    }
}

/// Organizer identity flattened to plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Event shaped for display, with the current user's role and RSVP resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventViewModel {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    /// Empty when the event has none
    pub description: String,
    pub organizer: OrganizerSummary,
    pub attendees: Vec<Attendee>,
    pub user_role: Role,
    #[serde(rename = "userRSVP", skip_serializing_if = "Option::is_none")]
    pub user_rsvp: Option<Rsvp>,
}

impl EventViewModel {
    pub fn is_organizer(&self) -> bool {
        self.user_role == Role::Organizer
    }

    /// Badge text for the list: `Organizer`, `No Response`, or the RSVP label.
    pub fn rsvp_label(&self) -> &'static str {
        if self.is_organizer() {
            return "Organizer";
        }
        match self.user_rsvp {
            Some(rsvp) => rsvp.label(),
            None => "No Response",
        }
    }
}

/// Attendee tally by status, shown on the details view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCounts {
    pub going: usize,
    pub maybe: usize,
    pub not_going: usize,
    pub pending: usize,
}

impl AttendanceCounts {
    pub fn total(&self) -> usize {
        self.going + self.maybe + self.not_going + self.pending
    }
}
