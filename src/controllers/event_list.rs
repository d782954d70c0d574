// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event list view: loading, search/filter, and the create/edit/delete modals.

use super::{sign_in_redirect, validate_event_form, Modal};
use crate::error::{AppError, Result};
use crate::models::{EventForm, EventScope, EventViewModel, RsvpFilter, UpdateEventRequest};
use crate::routes::Route;
use crate::services::{project_events, EventApi, ListFilter};
use crate::session::Session;
use crate::time_utils;

const LOAD_FAILED: &str = "Failed to load events. Please try again.";
const CREATE_FAILED: &str = "Failed to create event. Please try again.";
const UPDATE_FAILED: &str = "Failed to update event. Please try again.";
const DELETE_FAILED: &str = "Failed to delete event. Please try again.";

/// Event being edited and its working copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub event_id: String,
    pub form: EventForm,
}

/// State behind the event list view.
pub struct EventListController<A> {
    api: A,
    session: Session,
    scope: EventScope,
    events: Vec<EventViewModel>,
    visible: Vec<EventViewModel>,
    filter: ListFilter,
    is_loading: bool,
    load_error: Option<String>,
    redirect: Option<Route>,
    pub create_modal: Modal<EventForm>,
    pub edit_modal: Modal<EditTarget>,
    /// Holds the id of the event pending deletion
    pub delete_modal: Modal<String>,
}

impl<A: EventApi> EventListController<A> {
    pub fn new(api: A, session: Session) -> Self {
        Self {
            api,
            session,
            scope: EventScope::All,
            events: Vec::new(),
            visible: Vec::new(),
            filter: ListFilter::default(),
            is_loading: false,
            load_error: None,
            redirect: None,
            create_modal: Modal::new(),
            edit_modal: Modal::new(),
            delete_modal: Modal::new(),
        }
    }

    /// Every loaded event, projected.
    pub fn events(&self) -> &[EventViewModel] {
        &self.events
    }

    /// Events passing the current search and RSVP filter.
    pub fn visible_events(&self) -> &[EventViewModel] {
        &self.visible
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn scope(&self) -> EventScope {
        self.scope
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Navigation requested by the last action, if any.
    pub fn take_redirect(&mut self) -> Option<Route> {
        self.redirect.take()
    }

    /// Fetch the current scope and re-project it. Prior events stay in place
    /// when the request fails.
    pub async fn load_events(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.api.list_events(self.scope).await;
        self.is_loading = false;

        match result {
            Ok(raw) => {
                let user_id = self.session.current_user_id();
                self.events = project_events(&raw, &user_id);
                self.load_error = None;
                self.apply_filters();
                tracing::debug!(
                    scope = self.scope.path(),
                    count = self.events.len(),
                    "Events loaded"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Loading events failed");
                self.handle_auth_failure(&err);
                self.load_error = Some(err.user_message(LOAD_FAILED));
                Err(err)
            }
        }
    }

    /// Switch between all / organized / invited and reload.
    pub async fn set_scope(&mut self, scope: EventScope) -> Result<()> {
        self.scope = scope;
        self.load_events().await
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.apply_filters();
    }

    pub fn set_rsvp_filter(&mut self, rsvp: RsvpFilter) {
        self.filter.rsvp = rsvp;
        self.apply_filters();
    }

    fn apply_filters(&mut self) {
        self.visible = self.filter.apply(&self.events);
    }

    fn find(&self, event_id: &str) -> Option<&EventViewModel> {
        self.events.iter().find(|e| e.id == event_id)
    }

    // ─── Create ──────────────────────────────────────────────────

    pub fn open_create_modal(&mut self) {
        self.create_modal.open(EventForm::default());
    }

    pub fn close_create_modal(&mut self) {
        self.create_modal.close();
    }

    pub async fn submit_create(&mut self) -> Result<()> {
        let form = self.create_modal.begin_submit().ok_or_else(not_open)?;
        let form = match validate_event_form(&form, time_utils::today()) {
            Ok(form) => form,
            Err(err) => {
                self.create_modal.fail(err.user_message(CREATE_FAILED));
                return Err(err);
            }
        };

        let result = self.api.create_event(&form).await.map(|_| ());
        self.finish_mutation(result, CREATE_FAILED, |c| &mut c.create_modal)
            .await
    }

    // ─── Edit ────────────────────────────────────────────────────

    /// Open the edit modal pre-filled from a listed event.
    pub fn open_edit_modal(&mut self, event_id: &str) -> Result<()> {
        let event = self
            .find(event_id)
            .ok_or_else(|| not_listed(event_id))?;
        let target = EditTarget {
            event_id: event.id.clone(),
            form: EventForm::from_view_model(event),
        };
        self.edit_modal.open(target);
        Ok(())
    }

    pub fn close_edit_modal(&mut self) {
        self.edit_modal.close();
    }

    pub async fn submit_edit(&mut self) -> Result<()> {
        let target = self.edit_modal.begin_submit().ok_or_else(not_open)?;
        let form = match validate_event_form(&target.form, time_utils::today()) {
            Ok(form) => form,
            Err(err) => {
                self.edit_modal.fail(err.user_message(UPDATE_FAILED));
                return Err(err);
            }
        };

        let update = UpdateEventRequest::from(form);
        let result = self
            .api
            .update_event(&target.event_id, &update)
            .await
            .map(|_| ());
        self.finish_mutation(result, UPDATE_FAILED, |c| &mut c.edit_modal)
            .await
    }

    // ─── Delete ──────────────────────────────────────────────────

    pub fn open_delete_confirm(&mut self, event_id: &str) -> Result<()> {
        let event = self
            .find(event_id)
            .ok_or_else(|| not_listed(event_id))?;
        let id = event.id.clone();
        self.delete_modal.open(id);
        Ok(())
    }

    pub fn close_delete_confirm(&mut self) {
        self.delete_modal.close();
    }

    pub async fn confirm_delete(&mut self) -> Result<()> {
        let event_id = self.delete_modal.begin_submit().ok_or_else(not_open)?;
        let result = self.api.delete_event(&event_id).await;
        self.finish_mutation(result, DELETE_FAILED, |c| &mut c.delete_modal)
            .await
    }

    // ─── Session ─────────────────────────────────────────────────

    /// Sign out and go to the sign-in view.
    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()?;
        self.events.clear();
        self.visible.clear();
        self.close_all_modals();
        self.redirect = Some(Route::SignIn);
        Ok(())
    }

    /// Settle a write: close or fail its modal, then reload on success.
    async fn finish_mutation<T: Clone>(
        &mut self,
        result: Result<()>,
        fallback: &str,
        modal: fn(&mut Self) -> &mut Modal<T>,
    ) -> Result<()> {
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Event mutation failed");
            if self.handle_auth_failure(err) {
                return result;
            }
        }

        modal(self).finish(&result, fallback);
        result?;

        // The write went through; a failed reload is reported on its own.
        if let Err(err) = self.load_events().await {
            tracing::warn!(error = %err, "Reload after mutation failed");
        }
        Ok(())
    }

    /// Handle 401 by clearing the session. Returns whether it did.
    fn handle_auth_failure(&mut self, err: &AppError) -> bool {
        if matches!(err, AppError::Unauthorized(_)) {
            self.redirect = Some(sign_in_redirect(&self.session));
            self.close_all_modals();
            return true;
        }
        false
    }

    fn close_all_modals(&mut self) {
        self.create_modal.close();
        self.edit_modal.close();
        self.delete_modal.close();
    }
}

fn not_listed(event_id: &str) -> AppError {
    tracing::debug!(event_id, "Event is not in the loaded list");
    AppError::NotFound("Event not found".to_string())
}

fn not_open() -> AppError {
    AppError::Validation("Nothing to submit".to_string())
}
