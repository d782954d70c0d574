// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! Every failure the client can hit lands in one of three buckets: local
//! validation (nothing was sent), authorization (401/403, handled by
//! redirecting), or request failure (surfaced as a message).

/// Application error type shared by services and controllers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// 401, or no token stored. Carries the server's message when it sent one.
    #[error("Authentication required")]
    Unauthorized(Option<String>),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the error should end in a redirect rather than an inline message.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Unauthorized(_) | AppError::Forbidden(_))
    }

    /// Text to show the user.
    ///
    /// Validation errors and server-provided messages are shown as-is;
    /// everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Api {
                message: Some(msg), ..
            }
            | AppError::Unauthorized(Some(msg))
                if !msg.is_empty() =>
            {
                msg.clone()
            }
            AppError::Forbidden(msg) | AppError::NotFound(msg) if !msg.is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = AppError::Api {
            status: 400,
            message: Some("Title is required".to_string()),
        };
        assert_eq!(err.user_message("Failed"), "Title is required");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = AppError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to create event."), "Failed to create event.");

        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Try again"), "Try again");

        let err = AppError::Api {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.user_message("Try again"), "Try again");
    }

    #[test]
    fn test_unauthorized_message_is_shown() {
        let err = AppError::Unauthorized(Some("Account locked".to_string()));
        assert_eq!(err.user_message("Invalid email or password."), "Account locked");

        let err = AppError::Unauthorized(None);
        assert_eq!(
            err.user_message("Invalid email or password."),
            "Invalid email or password."
        );
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err = AppError::Validation("Please fill in all required fields".to_string());
        assert_eq!(err.user_message("ignored"), "Please fill in all required fields");
    }

    #[test]
    fn test_is_auth_error() {
        assert!(AppError::Unauthorized(None).is_auth_error());
        assert!(AppError::Forbidden("nope".to_string()).is_auth_error());
        assert!(!AppError::NotFound("event".to_string()).is_auth_error());
        assert!(!AppError::Validation("x".to_string()).is_auth_error());
    }
}
