// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side search and RSVP filtering of the projected list.

use crate::models::{EventViewModel, RsvpFilter};

/// Search text plus RSVP category, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub query: String,
    pub rsvp: RsvpFilter,
}

impl ListFilter {
    pub fn new(query: impl Into<String>, rsvp: RsvpFilter) -> Self {
        Self {
            query: query.into(),
            rsvp,
        }
    }

    /// Whether the filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.rsvp == RsvpFilter::All
    }

    pub fn matches(&self, event: &EventViewModel) -> bool {
        let needle = self.query.trim().to_lowercase();
        (needle.is_empty() || matches_text(event, &needle)) && self.rsvp.matches(event.user_rsvp)
    }

    /// Events that pass, in their original order.
    pub fn apply(&self, events: &[EventViewModel]) -> Vec<EventViewModel> {
        if self.is_empty() {
            return events.to_vec();
        }
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// `needle` must already be trimmed and lowercased.
fn matches_text(event: &EventViewModel, needle: &str) -> bool {
    [
        event.title.as_str(),
        event.description.as_str(),
        event.location.as_str(),
        event.date.as_str(),
        event.user_role.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Shorthand for `ListFilter::new(query, rsvp).apply(events)`.
pub fn filter_events(events: &[EventViewModel], query: &str, rsvp: RsvpFilter) -> Vec<EventViewModel> {
    ListFilter::new(query, rsvp).apply(events)
}
