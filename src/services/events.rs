// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the `/events` endpoints.
//!
//! Every call sends `Authorization: Bearer <token>` from the session. With no
//! token stored the call fails with [`AppError::Unauthorized`] without
//! touching the network.

use super::http::{check_response, check_response_json, network_error};
use crate::error::{AppError, Result};
use crate::models::{
    ApiResponse, Attendee, Event, EventForm, EventScope, InviteRequest, Rsvp, SearchParams,
    UpdateEventRequest, UpdateStatusRequest,
};
use crate::session::Session;
use reqwest::Method;

/// Event operations the view controllers depend on.
///
/// [`EventService`] is the HTTP implementation; tests substitute an
/// in-memory one.
#[allow(async_fn_in_trait)]
pub trait EventApi {
    async fn list_events(&self, scope: EventScope) -> Result<Vec<Event>>;
    async fn get_event(&self, event_id: &str) -> Result<Event>;
    async fn create_event(&self, form: &EventForm) -> Result<Option<Event>>;
    async fn update_event(
        &self,
        event_id: &str,
        update: &UpdateEventRequest,
    ) -> Result<Option<Event>>;
    async fn update_status(&self, event_id: &str, rsvp: Rsvp) -> Result<Option<Event>>;
    /// Returns the addresses the API accepted.
    async fn invite_users(&self, event_id: &str, emails: &[String]) -> Result<Vec<String>>;
    async fn get_attendees(&self, event_id: &str) -> Result<Vec<Attendee>>;
    async fn delete_event(&self, event_id: &str) -> Result<()>;
}

/// HTTP client for the event API.
#[derive(Clone)]
pub struct EventService {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl EventService {
    pub fn new(http: reqwest::Client, api_url: &str, session: Session) -> Self {
        Self {
            http,
            base_url: format!("{}/events", api_url.trim_end_matches('/')),
            session,
        }
    }

    /// Server-side search (`GET /events/search`).
    pub async fn search_events(&self, params: &SearchParams) -> Result<Vec<Event>> {
        let response = self
            .request(Method::GET, "/search")?
            .query(&params.to_query())
            .send()
            .await
            .map_err(network_error)?;

        let body: ApiResponse = check_response_json(response).await?;
        Ok(body.events.unwrap_or_default())
    }

    /// Build an authenticated request for `path` under `/events`.
    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let token = self.session.token().ok_or(AppError::Unauthorized(None))?;
        Ok(self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(token))
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<ApiResponse> {
        let response = builder.send().await.map_err(network_error)?;
        check_response_json(response).await
    }
}

const EVENT_NOT_FOUND: &str = "Event not found";

fn event_path(event_id: &str) -> String {
    format!("/{}", urlencoding::encode(event_id))
}

impl EventApi for EventService {
    async fn list_events(&self, scope: EventScope) -> Result<Vec<Event>> {
        tracing::debug!(scope = scope.path(), "Loading events");
        let body = self
            .send(self.request(Method::GET, &format!("/{}", scope.path()))?)
            .await?;
        Ok(body.events.unwrap_or_default())
    }

    async fn get_event(&self, event_id: &str) -> Result<Event> {
        let body = self
            .send(self.request(Method::GET, &event_path(event_id))?)
            .await?;
        body.event.ok_or_else(|| {
            tracing::warn!(event_id, "Response carried no event");
            AppError::NotFound(EVENT_NOT_FOUND.to_string())
        })
    }

    async fn create_event(&self, form: &EventForm) -> Result<Option<Event>> {
        let body = self.send(self.request(Method::POST, "")?.json(form)).await?;
        tracing::info!(event_id = ?body.event.as_ref().map(|e| &e.id), "Event created");
        Ok(body.event)
    }

    async fn update_event(
        &self,
        event_id: &str,
        update: &UpdateEventRequest,
    ) -> Result<Option<Event>> {
        let body = self
            .send(self.request(Method::PUT, &event_path(event_id))?.json(update))
            .await?;
        tracing::info!(event_id, "Event updated");
        Ok(body.event)
    }

    async fn update_status(&self, event_id: &str, rsvp: Rsvp) -> Result<Option<Event>> {
        let request = UpdateStatusRequest {
            status: rsvp.status(),
        };
        let body = self
            .send(
                self.request(Method::PATCH, &format!("{}/status", event_path(event_id)))?
                    .json(&request),
            )
            .await?;
        tracing::info!(event_id, status = %request.status, "Attendance updated");
        Ok(body.event)
    }

    async fn invite_users(&self, event_id: &str, emails: &[String]) -> Result<Vec<String>> {
        let request = InviteRequest {
            emails: emails.to_vec(),
        };
        let body = self
            .send(
                self.request(Method::POST, &format!("{}/invite", event_path(event_id)))?
                    .json(&request),
            )
            .await?;
        tracing::info!(event_id, count = emails.len(), "Invitations sent");
        Ok(body.invited_emails.unwrap_or_default())
    }

    async fn get_attendees(&self, event_id: &str) -> Result<Vec<Attendee>> {
        let body = self
            .send(self.request(Method::GET, &format!("{}/attendees", event_path(event_id)))?)
            .await?;
        Ok(body.attendees.unwrap_or_default())
    }

    async fn delete_event(&self, event_id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &event_path(event_id))?
            .send()
            .await
            .map_err(network_error)?;
        check_response(response).await?;
        tracing::info!(event_id, "Event deleted");
        Ok(())
    }
}
