// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single event view: attendee tally, invites, RSVP changes and deletion.

use super::{sign_in_redirect, Modal};
use crate::error::{AppError, Result};
use crate::models::{AttendanceCounts, Attendee, EventViewModel, InviteForm, Rsvp};
use crate::routes::Route;
use crate::services::{count_attendance, project_event, EventApi};
use crate::session::Session;
use validator::Validate;

pub const NO_ACCESS_WARNING: &str = "You do not have access to this event";
const LOAD_FAILED: &str = "Failed to load event. Please try again.";
const INVITE_FAILED: &str = "Failed to send invitation. Please try again.";
const RSVP_FAILED: &str = "Failed to update your RSVP. Please try again.";
const DELETE_FAILED: &str = "Failed to delete event. Please try again.";

/// State behind the event details view.
pub struct EventDetailsController<A> {
    api: A,
    session: Session,
    event_id: String,
    event: Option<EventViewModel>,
    counts: AttendanceCounts,
    is_loading: bool,
    error_message: Option<String>,
    success_message: Option<String>,
    warning: Option<String>,
    redirect: Option<Route>,
    /// Holds the address being typed
    pub invite_modal: Modal<String>,
    pub delete_modal: Modal<()>,
}

impl<A: EventApi> EventDetailsController<A> {
    pub fn new(api: A, session: Session, event_id: impl Into<String>) -> Self {
        Self {
            api,
            session,
            event_id: event_id.into(),
            event: None,
            counts: AttendanceCounts::default(),
            is_loading: false,
            error_message: None,
            success_message: None,
            warning: None,
            redirect: None,
            invite_modal: Modal::new(),
            delete_modal: Modal::new(),
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event(&self) -> Option<&EventViewModel> {
        self.event.as_ref()
    }

    pub fn attendees(&self) -> &[Attendee] {
        self.event
            .as_ref()
            .map(|e| e.attendees.as_slice())
            .unwrap_or(&[])
    }

    pub fn counts(&self) -> AttendanceCounts {
        self.counts
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Warning to show after a redirect away from this view.
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    pub fn take_redirect(&mut self) -> Option<Route> {
        self.redirect.take()
    }

    /// Fetch the event. Organizers also get the full attendee list.
    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.api.get_event(&self.event_id).await;
        self.is_loading = false;

        let raw = match result {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(event_id = %self.event_id, error = %err, "Loading event failed");
                if matches!(err, AppError::Forbidden(_)) {
                    self.warning = Some(NO_ACCESS_WARNING.to_string());
                    self.redirect_to(Route::EventList);
                } else {
                    self.handle_auth_failure(&err);
                }
                self.error_message = Some(err.user_message(LOAD_FAILED));
                return Err(err);
            }
        };

        let mut event = project_event(&raw, &self.session.current_user_id());
        if event.is_organizer() {
            match self.api.get_attendees(&self.event_id).await {
                Ok(attendees) => event.attendees = attendees,
                // The embedded list is still usable
                Err(err) => tracing::warn!(error = %err, "Loading attendee list failed"),
            }
        }

        self.counts = count_attendance(&event.attendees);
        self.event = Some(event);
        self.error_message = None;
        Ok(())
    }

    /// Change the current user's answer, then reload.
    pub async fn update_rsvp(&mut self, rsvp: Rsvp) -> Result<()> {
        let result = self.api.update_status(&self.event_id, rsvp).await;
        match result {
            Ok(_) => {
                tracing::info!(event_id = %self.event_id, rsvp = %rsvp, "RSVP updated");
                self.error_message = None;
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(event_id = %self.event_id, error = %err, "RSVP update failed");
                self.handle_auth_failure(&err);
                self.error_message = Some(err.user_message(RSVP_FAILED));
                Err(err)
            }
        }
    }

    // ─── Invite ──────────────────────────────────────────────────

    pub fn open_invite_modal(&mut self) {
        self.success_message = None;
        self.invite_modal.open(String::new());
    }

    pub fn close_invite_modal(&mut self) {
        self.invite_modal.close();
    }

    pub async fn submit_invite(&mut self) -> Result<()> {
        let typed = self
            .invite_modal
            .begin_submit()
            .ok_or_else(|| AppError::Validation("Nothing to submit".to_string()))?;

        let email = match self.check_invite(&typed) {
            Ok(email) => email,
            Err(err) => {
                self.invite_modal.fail(err.user_message(INVITE_FAILED));
                return Err(err);
            }
        };

        let result = self
            .api
            .invite_users(&self.event_id, std::slice::from_ref(&email))
            .await
            .map(|_| ());
        if let Err(err) = &result {
            if self.handle_auth_failure(err) {
                return result;
            }
        }

        self.invite_modal.finish(&result, INVITE_FAILED);
        result?;

        self.success_message = Some(format!("Invitation sent to {}!", email));
        self.reload().await;
        Ok(())
    }

    /// Trimmed address, if it is present, well-formed and not yet invited.
    fn check_invite(&self, typed: &str) -> Result<String> {
        let email = typed.trim().to_string();
        if email.is_empty() {
            return Err(AppError::Validation(
                "Please enter an email address".to_string(),
            ));
        }

        let form = InviteForm {
            email: email.clone(),
        };
        if form.validate().is_err() {
            return Err(AppError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        if self
            .attendees()
            .iter()
            .any(|a| a.user.email.eq_ignore_ascii_case(&email))
        {
            return Err(AppError::Validation(
                "This person is already invited".to_string(),
            ));
        }

        Ok(email)
    }

    // ─── Delete ──────────────────────────────────────────────────

    pub fn open_delete_confirm(&mut self) {
        self.delete_modal.open(());
    }

    pub fn cancel_delete(&mut self) {
        self.delete_modal.close();
    }

    /// Delete the event and head back to the list.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        self.delete_modal
            .begin_submit()
            .ok_or_else(|| AppError::Validation("Nothing to submit".to_string()))?;

        let result = self.api.delete_event(&self.event_id).await;
        if let Err(err) = &result {
            if self.handle_auth_failure(err) {
                return result;
            }
        }

        self.delete_modal.finish(&result, DELETE_FAILED);
        result?;

        self.event = None;
        self.redirect = Some(Route::EventList);
        Ok(())
    }

    async fn reload(&mut self) {
        if let Err(err) = self.load().await {
            tracing::warn!(error = %err, "Reload after mutation failed");
        }
    }

    /// 401 clears the session and goes to sign-in. Returns whether it did.
    ///
    /// A 403 on a write stays on this view with the message shown inline;
    /// only a denied load sends the user back to the list.
    fn handle_auth_failure(&mut self, err: &AppError) -> bool {
        if !matches!(err, AppError::Unauthorized(_)) {
            return false;
        }
        let target = sign_in_redirect(&self.session);
        self.redirect_to(target);
        true
    }

    fn redirect_to(&mut self, target: Route) {
        self.invite_modal.close();
        self.delete_modal.close();
        self.redirect = Some(target);
    }
}
