// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the `/auth` endpoints.

use super::http::{check_response_json, network_error};
use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

/// Register / sign-in operations the auth form depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;
}

/// Register / sign-in client. These calls carry no bearer token.
#[derive(Clone)]
pub struct AuthService {
    http: reqwest::Client,
    base_url: String,
}

impl AuthService {
    pub fn new(http: reqwest::Client, api_url: &str) -> Self {
        Self {
            http,
            base_url: format!("{}/auth", api_url.trim_end_matches('/')),
        }
    }
}

impl AuthApi for AuthService {
    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        tracing::debug!(email = %request.email, "Registering");
        let response = self
            .http
            .post(format!("{}/register", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(network_error)?;

        check_response_json(response).await
    }

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        tracing::debug!(email = %request.email, "Signing in");
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(network_error)?;

        check_response_json(response).await
    }
}
