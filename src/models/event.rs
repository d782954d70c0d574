// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event records as the API returns them, plus request bodies.

use super::{EventViewModel, User};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Event as stored by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer: User,
    /// Attendees in the order the API returned them
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One user's membership in an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub user: User,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

/// Attendance status on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Going,
    Maybe,
    #[serde(rename = "Not Going")]
    NotGoing,
    #[default]
    Pending,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Going => "Going",
            AttendanceStatus::Maybe => "Maybe",
            AttendanceStatus::NotGoing => "Not Going",
            AttendanceStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a user relative to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Organizer,
    #[default]
    Attendee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Organizer => "organizer",
            Role::Attendee => "attendee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which collection of the current user's events to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventScope {
    /// Organized and invited
    #[default]
    All,
    Organized,
    Invited,
}

impl EventScope {
    /// Path segment under `/events`.
    pub fn path(&self) -> &'static str {
        match self {
            EventScope::All => "all",
            EventScope::Organized => "organized",
            EventScope::Invited => "invited",
        }
    }
}

impl FromStr for EventScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(EventScope::All),
            "organized" => Ok(EventScope::Organized),
            "invited" => Ok(EventScope::Invited),
            other => Err(format!("unknown event scope: {}", other)),
        }
    }
}

/// Create/edit form fields. Serializes as the `POST /events` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct EventForm {
    #[validate(length(min = 1))]
    pub title: String,
    /// `YYYY-MM-DD`
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub description: String,
}

impl EventForm {
    /// Pre-populate the form from a listed event (edit modal).
    pub fn from_view_model(event: &EventViewModel) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
        }
    }

    /// Copy of the form with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// `PUT /events/:id` body; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<EventForm> for UpdateEventRequest {
    fn from(form: EventForm) -> Self {
        Self {
            title: Some(form.title),
            description: Some(form.description),
            date: Some(form.date),
            time: Some(form.time),
            location: Some(form.location),
        }
    }
}

/// `POST /events/:id/invite` body.
#[derive(Debug, Clone, Serialize)]
pub struct InviteRequest {
    pub emails: Vec<String>,
}

/// Single invite address as typed into the invite modal.
#[derive(Debug, Clone, Default, Validate)]
pub struct InviteForm {
    #[validate(email)]
    pub email: String,
}

/// `PATCH /events/:id/status` body.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: AttendanceStatus,
}

/// Query for `GET /events/search`.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub role: Option<Role>,
}

impl SearchParams {
    /// Query pairs, skipping unset or blank values.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        let mut push = |key: &'static str, value: Option<&str>| {
            if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
                query.push((key, v.to_string()));
            }
        };
        push("keyword", self.keyword.as_deref());
        push("startDate", self.start_date.as_deref());
        push("endDate", self.end_date.as_deref());
        push("role", self.role.as_ref().map(Role::as_str));
        query
    }
}

/// Envelope shared by every `/events` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub event: Option<Event>,
    #[serde(default)]
    pub attendees: Option<Vec<Attendee>>,
    #[serde(default)]
    pub invited_emails: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT_JSON: &str = r#"{
        "_id": "e1",
        "title": "Team Building Workshop",
        "date": "2030-11-15",
        "time": "14:00",
        "location": "Conference Room A",
        "organizer": {"_id": "org1", "name": "Sarah Wilson", "email": "sarah@example.com"},
        "attendees": [
            {"user": {"_id": "u1", "name": "John", "email": "john@example.com"}, "status": "Not Going", "role": "attendee"},
            {"user": {"id": "u2", "name": "Bob", "email": "bob@example.com"}}
        ],
        "createdAt": "2030-01-01T00:00:00Z"
    }"#;

    #[test]
    fn test_event_deserialize() {
        let event: Event = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.id, "e1");
        assert_eq!(event.description, None);
        assert_eq!(event.organizer.user_id(), "org1");
        assert_eq!(event.attendees.len(), 2);
        assert_eq!(event.attendees[0].status, AttendanceStatus::NotGoing);
        assert_eq!(event.attendees[1].status, AttendanceStatus::Pending);
        assert_eq!(event.attendees[1].role, Role::Attendee);
        assert_eq!(event.created_at.as_deref(), Some("2030-01-01T00:00:00Z"));
    }

    #[test]
    fn test_status_wire_names() {
        let body = serde_json::to_string(&UpdateStatusRequest {
            status: AttendanceStatus::NotGoing,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"Not Going"}"#);
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let body = serde_json::to_value(UpdateEventRequest {
            title: Some("New".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"title": "New"}));
    }

    #[test]
    fn test_search_params_skip_blank() {
        let params = SearchParams {
            keyword: Some("workshop".to_string()),
            start_date: Some("  ".to_string()),
            end_date: None,
            role: Some(Role::Organizer),
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("keyword", "workshop".to_string()),
                ("role", "organizer".to_string())
            ]
        );
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!("Invited".parse::<EventScope>().unwrap(), EventScope::Invited);
        assert!("mine".parse::<EventScope>().is_err());
    }
}
