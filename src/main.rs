// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eventdesk command-line client
//!
//! Signs in (or reuses a stored session), loads the configured event scope,
//! applies the configured search and RSVP filter, and prints one JSON view
//! model per line.

use anyhow::{bail, Context};
use eventdesk::{
    config::Config,
    controllers::{AuthController, EventListController},
    routes::{Route, Router},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api_url = %config.api_url, "Starting eventdesk");

    let state = AppState::new(config).context("Failed to initialize client")?;
    let mut router = Router::new(state.session.clone());

    if router.current() == &Route::SignIn {
        let (Some(email), Some(password)) = (&state.config.email, &state.config.password) else {
            bail!("Not signed in: set EVENTDESK_EMAIL and EVENTDESK_PASSWORD");
        };

        let mut auth = AuthController::new(state.auth.clone(), state.session.clone());
        auth.sign_in.email = email.clone();
        auth.sign_in.password = password.clone();
        auth.login().await.context("Sign-in failed")?;
        if let Some(message) = auth.success_message() {
            tracing::info!(greeting = message, "Signed in");
        }
        if let Some(route) = auth.take_redirect() {
            router.navigate(route);
        }
    }

    let mut list = EventListController::new(state.events.clone(), state.session.clone());
    list.set_search_query(state.config.query.clone());
    list.set_rsvp_filter(state.config.rsvp_filter);

    if let Err(err) = list.set_scope(state.config.scope).await {
        if let Some(route) = list.take_redirect() {
            router.navigate(route);
        }
        bail!(
            "{} (now at {})",
            err.user_message("Failed to load events"),
            router.current()
        );
    }

    tracing::info!(
        loaded = list.events().len(),
        shown = list.visible_events().len(),
        "Events ready"
    );
    for event in list.visible_events() {
        println!("{}", serde_json::to_string(event)?);
    }

    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("eventdesk=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
