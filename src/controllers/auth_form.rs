// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-up / sign-in forms.

use crate::error::{AppError, Result};
use crate::models::{LoginRequest, RegisterRequest};
use crate::routes::Route;
use crate::services::AuthApi;
use crate::session::Session;
use validator::Validate;

const REGISTER_REQUIRED: &str = "Please fill in all fields.";
const LOGIN_REQUIRED: &str = "Please enter your email and password.";
const REGISTER_FAILED: &str = "Registration failed.";
const LOGIN_FAILED: &str = "Invalid email or password.";

/// State behind the auth view.
pub struct AuthController<A> {
    api: A,
    session: Session,
    /// Whether the sign-up panel is showing
    sign_up_active: bool,
    pub sign_up: RegisterRequest,
    pub sign_in: LoginRequest,
    error_message: Option<String>,
    sign_in_error: Option<String>,
    success_message: Option<String>,
    redirect: Option<Route>,
}

impl<A: AuthApi> AuthController<A> {
    pub fn new(api: A, session: Session) -> Self {
        Self {
            api,
            session,
            sign_up_active: false,
            sign_up: RegisterRequest::default(),
            sign_in: LoginRequest::default(),
            error_message: None,
            sign_in_error: None,
            success_message: None,
            redirect: None,
        }
    }

    pub fn is_sign_up_active(&self) -> bool {
        self.sign_up_active
    }

    /// Error shown on the sign-up panel.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn sign_in_error(&self) -> Option<&str> {
        self.sign_in_error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn take_redirect(&mut self) -> Option<Route> {
        self.redirect.take()
    }

    /// Switch panels, clearing any messages.
    pub fn toggle_forms(&mut self, sign_up: bool) {
        self.sign_up_active = sign_up;
        self.error_message = None;
        self.sign_in_error = None;
        self.success_message = None;
    }

    pub async fn register(&mut self) -> Result<()> {
        let request = RegisterRequest {
            name: self.sign_up.name.trim().to_string(),
            email: self.sign_up.email.trim().to_string(),
            password: self.sign_up.password.clone(),
            role: self
                .sign_up
                .role
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        };
        if request.validate().is_err() {
            self.error_message = Some(REGISTER_REQUIRED.to_string());
            return Err(AppError::Validation(REGISTER_REQUIRED.to_string()));
        }

        match self.api.register(&request).await {
            Ok(response) => {
                tracing::info!(email = %request.email, "Registered");
                self.success_message = Some(
                    response
                        .message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| "Registration successful!".to_string()),
                );
                self.error_message = None;
                self.sign_up = RegisterRequest::default();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Registration failed");
                self.error_message = Some(err.user_message(REGISTER_FAILED));
                Err(err)
            }
        }
    }

    /// Sign in, store the token and head to the event list.
    pub async fn login(&mut self) -> Result<()> {
        let request = LoginRequest {
            email: self.sign_in.email.trim().to_string(),
            password: self.sign_in.password.clone(),
        };
        if request.validate().is_err() {
            self.sign_in_error = Some(LOGIN_REQUIRED.to_string());
            return Err(AppError::Validation(LOGIN_REQUIRED.to_string()));
        }

        let result = self.api.login(&request).await.and_then(|response| {
            let token = response
                .token
                .clone()
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| AppError::Decode("login response carried no token".to_string()))?;
            Ok((response, token))
        });

        let (response, token) = match result {
            Ok(ok) => ok,
            Err(err) => {
                tracing::warn!(error = %err, "Sign-in failed");
                self.sign_in_error = Some(err.user_message(LOGIN_FAILED));
                return Err(err);
            }
        };

        self.session.login(&token)?;
        let name = response
            .user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("User");
        self.success_message = Some(
            response
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("Welcome back, {}!", name)),
        );
        self.sign_in_error = None;
        self.sign_in = LoginRequest::default();
        self.redirect = Some(Route::EventList);
        Ok(())
    }
}
