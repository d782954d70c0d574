// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Projection of API events into list/detail view models.

use crate::models::{
    AttendanceCounts, AttendanceStatus, Attendee, Event, EventViewModel, OrganizerSummary, Role,
    Rsvp,
};

/// Project every event for `current_user_id`, keeping input order.
pub fn project_events(events: &[Event], current_user_id: &str) -> Vec<EventViewModel> {
    events
        .iter()
        .map(|event| project_event(event, current_user_id))
        .collect()
}

/// Resolve the current user's role and RSVP for one event.
///
/// The organizer check wins over any attendee entry for the same user. An
/// empty user id matches nobody, so an undecodable session always projects
/// as a plain attendee with no answer.
pub fn project_event(event: &Event, current_user_id: &str) -> EventViewModel {
    let own_entry = find_attendee(&event.attendees, current_user_id);

    let user_role = if event.organizer.is(current_user_id) {
        Role::Organizer
    } else {
        own_entry.map(|a| a.role).unwrap_or_default()
    };
    let user_rsvp = own_entry.and_then(|a| Rsvp::from_status(a.status));

    EventViewModel {
        id: event.id.clone(),
        title: event.title.clone(),
        date: event.date.clone(),
        time: event.time.clone(),
        location: event.location.clone(),
        description: event.description.clone().unwrap_or_default(),
        organizer: OrganizerSummary {
            id: event.organizer.user_id().to_string(),
            name: event.organizer.name.clone(),
            email: event.organizer.email.clone(),
        },
        attendees: event.attendees.clone(),
        user_role,
        user_rsvp,
    }
}

/// Tally attendees by status.
pub fn count_attendance(attendees: &[Attendee]) -> AttendanceCounts {
    attendees
        .iter()
        .fold(AttendanceCounts::default(), |mut counts, a| {
            match a.status {
                AttendanceStatus::Going => counts.going += 1,
                AttendanceStatus::Maybe => counts.maybe += 1,
                AttendanceStatus::NotGoing => counts.not_going += 1,
                AttendanceStatus::Pending => counts.pending += 1,
            }
            counts
        })
}

fn find_attendee<'a>(attendees: &'a [Attendee], user_id: &str) -> Option<&'a Attendee> {
    attendees.iter().find(|a| a.user.is(user_id))
}
