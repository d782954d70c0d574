// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response checking shared by the API clients.

use crate::error::{AppError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error body the API sends with non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Map a transport failure.
pub(crate) fn network_error(err: reqwest::Error) -> AppError {
    tracing::warn!(error = %err, "Request failed");
    AppError::Network(err.to_string())
}

/// Check response status, discarding the body on success.
pub(crate) async fn check_response(response: Response) -> Result<()> {
    if response.status().is_success() {
        return Ok(());
    }
    Err(error_from_response(response).await)
}

/// Check response status and parse the JSON body.
pub(crate) async fn check_response_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))
}

async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    error_for_status(status, message)
}

/// Classify a non-2xx status.
pub(crate) fn error_for_status(status: StatusCode, message: Option<String>) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => {
            tracing::warn!("API rejected the credentials (401)");
            AppError::Unauthorized(message)
        }
        StatusCode::FORBIDDEN => {
            tracing::warn!("API denied access (403)");
            AppError::Forbidden(message.unwrap_or_default())
        }
        StatusCode::NOT_FOUND => AppError::NotFound(message.unwrap_or_default()),
        _ => {
            tracing::warn!(status = status.as_u16(), message = ?message, "API error");
            AppError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
