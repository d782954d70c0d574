// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store: the bearer token and the user id derived from it.
//!
//! The user id is read from the token payload without verifying the
//! signature. It is only a label for comparing against event records; the
//! API remains the authority on who the caller is.

use crate::error::Result;
use crate::storage::{MemoryStorage, TokenStorage};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use serde_json::Value;
use std::sync::Arc;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Payload claims that may carry the user id, in lookup order.
const USER_ID_CLAIMS: [&str; 3] = ["userId", "id", "sub"];

/// JWT segments are unpadded base64url, but accept padded input too.
const TOKEN_SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Handle to the current session. Clones share the same storage.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn TokenStorage>,
}

impl Session {
    /// Session over the given storage. A token already present is picked up.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Session that forgets its token when the process exits.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store the token returned by a successful sign-in.
    pub fn login(&self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token.trim())?;
        tracing::info!("Session started");
        Ok(())
    }

    /// Forget the token.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// The stored token, if one is present and non-empty.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// User id carried in the token payload, or `""` when there is no token
    /// or it cannot be decoded.
    pub fn current_user_id(&self) -> String {
        self.token()
            .map(|token| user_id_from_token(&token))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Extract the user id from a JWT-shaped token without verifying it.
///
/// Returns `""` for anything that is not `header.payload[.signature]` with a
/// base64url JSON object payload holding a usable id claim.
pub fn user_id_from_token(token: &str) -> String {
    let Some(segment) = token.split('.').nth(1) else {
        return String::new();
    };

    let payload: Value = match TOKEN_SEGMENT
        .decode(segment)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    {
        Some(payload) => payload,
        None => {
            tracing::debug!("Token payload is not base64url JSON");
            return String::new();
        }
    };

    USER_ID_CLAIMS
        .iter()
        .filter_map(|claim| match payload.get(*claim)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .next()
        .unwrap_or_default()
}
