// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eventdesk: client for an event planning API
//!
//! This crate provides the session handling, navigation guards, view-model
//! projection and list filtering behind an event planning front end, plus
//! typed clients for the API it talks to.

pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod storage;
pub mod time_utils;

use config::Config;
use error::{AppError, Result};
use services::{AuthService, EventService};
use session::Session;
use std::sync::Arc;
use storage::{FileStorage, MemoryStorage, TokenStorage};

/// Shared client state, built once at startup.
pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub auth: AuthService,
    pub events: EventService,
}

impl AppState {
    /// Wire up storage, session and API clients from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let storage: Arc<dyn TokenStorage> = match &config.storage_dir {
            Some(dir) => Arc::new(FileStorage::open(dir)?),
            None => Arc::new(MemoryStorage::new()),
        };
        let session = Session::new(storage);

        let http = reqwest::Client::builder()
            .user_agent(concat!("eventdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok(Self {
            auth: AuthService::new(http.clone(), &config.api_url),
            events: EventService::new(http, &config.api_url, session.clone()),
            session,
            config,
        })
    }
}
