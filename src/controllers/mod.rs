// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View controllers: form state, modal state and the request/reload cycle.
//!
//! Controllers never patch their event list after a write. Every successful
//! mutation is followed by a full reload through the projector.

pub mod auth_form;
pub mod event_details;
pub mod event_list;
pub mod modal;

pub use auth_form::AuthController;
pub use event_details::EventDetailsController;
pub use event_list::{EditTarget, EventListController};
pub use modal::{Modal, ModalPhase};

use crate::error::{AppError, Result};
use crate::models::EventForm;
use crate::routes::Route;
use crate::session::Session;
use crate::time_utils::{is_past, parse_event_date};
use chrono::NaiveDate;
use validator::Validate;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const FUTURE_DATE_MESSAGE: &str = "Please select a future date";
pub const INVALID_DATE_MESSAGE: &str = "Please enter a date as YYYY-MM-DD";

/// Trim and check a create/edit form, returning the form to send.
pub fn validate_event_form(form: &EventForm, today: NaiveDate) -> Result<EventForm> {
    let form = form.trimmed();
    if form.validate().is_err() {
        return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    let date = parse_event_date(&form.date)
        .ok_or_else(|| AppError::Validation(INVALID_DATE_MESSAGE.to_string()))?;
    if is_past(date, today) {
        return Err(AppError::Validation(FUTURE_DATE_MESSAGE.to_string()));
    }

    Ok(form)
}

/// Clear the session after a 401 and return where to go.
fn sign_in_redirect(session: &Session) -> Route {
    if let Err(e) = session.logout() {
        tracing::error!(error = %e, "Failed to clear session");
    }
    Route::SignIn
}
