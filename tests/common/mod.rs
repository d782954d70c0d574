// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Days, Local};
use eventdesk::error::{AppError, Result};
use eventdesk::models::{
    AttendanceStatus, Attendee, Event, EventForm, EventScope, Role, Rsvp, UpdateEventRequest, User,
};
use eventdesk::services::EventApi;
use eventdesk::session::Session;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Claims the API puts in its session tokens.
#[derive(Serialize)]
struct TestClaims<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    exp: usize,
}

/// Mint an HS256 token carrying `userId`.
#[allow(dead_code)]
pub fn mint_token(user_id: &str) -> String {
    let claims = TestClaims {
        user_id,
        exp: 4_102_444_800,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test_signing_key_32_bytes_long!!"),
    )
    .expect("Failed to create JWT")
}

/// In-memory session signed in as `user_id`.
#[allow(dead_code)]
pub fn signed_in(user_id: &str) -> Session {
    let session = Session::in_memory();
    session.login(&mint_token(user_id)).unwrap();
    session
}

#[allow(dead_code)]
pub fn user(id: &str, name: &str) -> User {
    User {
        object_id: Some(id.to_string()),
        id: None,
        name: name.to_string(),
        email: format!("{}@example.com", id),
    }
}

#[allow(dead_code)]
pub fn attendee(id: &str, status: AttendanceStatus) -> Attendee {
    Attendee {
        user: user(id, id),
        status,
        role: Role::Attendee,
        record_id: None,
    }
}

#[allow(dead_code)]
pub fn event(id: &str, title: &str, organizer: &str, attendees: Vec<Attendee>) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        date: future_date(),
        time: "10:00".to_string(),
        location: "Room 1".to_string(),
        organizer: user(organizer, organizer),
        attendees,
        created_at: None,
        updated_at: None,
    }
}

/// A date comfortably in the future, as `YYYY-MM-DD`.
#[allow(dead_code)]
pub fn future_date() -> String {
    (Local::now().date_naive() + Days::new(30))
        .format("%Y-%m-%d")
        .to_string()
}

#[allow(dead_code)]
pub fn past_date() -> String {
    (Local::now().date_naive() - Days::new(1))
        .format("%Y-%m-%d")
        .to_string()
}

#[allow(dead_code)]
pub fn filled_form(title: &str) -> EventForm {
    EventForm {
        title: title.to_string(),
        date: future_date(),
        time: "18:30".to_string(),
        location: "Main Hall".to_string(),
        description: "Quarterly get-together".to_string(),
    }
}

/// Failure a [`FakeEventApi`] operation can be told to return.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Unauthorized,
    Forbidden,
    Server(&'static str),
    Network,
}

#[allow(dead_code)]
impl Failure {
    fn to_error(self) -> AppError {
        match self {
            Failure::Unauthorized => AppError::Unauthorized(None),
            Failure::Forbidden => AppError::Forbidden(String::new()),
            Failure::Server(msg) => AppError::Api {
                status: 500,
                message: Some(msg.to_string()).filter(|m| !m.is_empty()),
            },
            Failure::Network => AppError::Network("connection refused".to_string()),
        }
    }
}

#[allow(dead_code)]
#[derive(Default)]
struct FakeState {
    current_user: String,
    events: Vec<Event>,
    calls: Vec<String>,
    failures: HashMap<&'static str, Failure>,
    next_id: u32,
}

/// In-memory event API acting on behalf of one user.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FakeEventApi {
    state: Arc<Mutex<FakeState>>,
}

#[allow(dead_code)]
impl FakeEventApi {
    pub fn new(current_user: &str, events: Vec<Event>) -> Self {
        let state = FakeState {
            current_user: current_user.to_string(),
            events,
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Make every later call to `op` fail.
    pub fn fail(&self, op: &'static str, failure: Failure) {
        self.state.lock().unwrap().failures.insert(op, failure);
    }

    pub fn recover(&self, op: &'static str) {
        self.state.lock().unwrap().failures.remove(op);
    }

    /// Calls seen so far, e.g. `["list:all", "create"]`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn stored(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    fn enter(&self, op: &'static str, call: String) -> Result<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(failure) = state.failures.get(op).copied() {
            return Err(failure.to_error());
        }
        Ok(state)
    }
}

#[allow(dead_code)]
fn find<'a>(events: &'a mut [Event], event_id: &str) -> Result<&'a mut Event> {
    events
        .iter_mut()
        .find(|e| e.id == event_id)
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}

impl EventApi for FakeEventApi {
    async fn list_events(&self, scope: EventScope) -> Result<Vec<Event>> {
        let state = self.enter("list", format!("list:{}", scope.path()))?;
        let me = state.current_user.clone();
        Ok(state
            .events
            .iter()
            .filter(|e| match scope {
                EventScope::All => true,
                EventScope::Organized => e.organizer.is(&me),
                EventScope::Invited => {
                    !e.organizer.is(&me) && e.attendees.iter().any(|a| a.user.is(&me))
                }
            })
            .cloned()
            .collect())
    }

    async fn get_event(&self, event_id: &str) -> Result<Event> {
        let mut state = self.enter("get", format!("get:{}", event_id))?;
        find(&mut state.events, event_id).map(|e| e.clone())
    }

    async fn create_event(&self, form: &EventForm) -> Result<Option<Event>> {
        let mut state = self.enter("create", "create".to_string())?;
        state.next_id += 1;
        let me = state.current_user.clone();
        let created = Event {
            id: format!("new-{}", state.next_id),
            title: form.title.clone(),
            description: Some(form.description.clone()),
            date: form.date.clone(),
            time: form.time.clone(),
            location: form.location.clone(),
            organizer: user(&me, &me),
            attendees: vec![],
            created_at: None,
            updated_at: None,
        };
        state.events.push(created.clone());
        Ok(Some(created))
    }

    async fn update_event(
        &self,
        event_id: &str,
        update: &UpdateEventRequest,
    ) -> Result<Option<Event>> {
        let mut state = self.enter("update", format!("update:{}", event_id))?;
        let event = find(&mut state.events, event_id)?;
        if let Some(title) = &update.title {
            event.title = title.clone();
        }
        if let Some(description) = &update.description {
            event.description = Some(description.clone());
        }
        if let Some(date) = &update.date {
            event.date = date.clone();
        }
        if let Some(time) = &update.time {
            event.time = time.clone();
        }
        if let Some(location) = &update.location {
            event.location = location.clone();
        }
        Ok(Some(event.clone()))
    }

    async fn update_status(&self, event_id: &str, rsvp: Rsvp) -> Result<Option<Event>> {
        let mut state = self.enter("status", format!("status:{}:{}", event_id, rsvp))?;
        let me = state.current_user.clone();
        let event = find(&mut state.events, event_id)?;
        match event.attendees.iter_mut().find(|a| a.user.is(&me)) {
            Some(entry) => entry.status = rsvp.status(),
            None => return Err(AppError::Forbidden("Not invited".to_string())),
        }
        Ok(Some(event.clone()))
    }

    async fn invite_users(&self, event_id: &str, emails: &[String]) -> Result<Vec<String>> {
        let mut state = self.enter("invite", format!("invite:{}", emails.join(",")))?;
        let event = find(&mut state.events, event_id)?;
        for email in emails {
            let id = email.split('@').next().unwrap_or_default().to_string();
            event.attendees.push(Attendee {
                user: User {
                    object_id: Some(id.clone()),
                    id: None,
                    name: id,
                    email: email.clone(),
                },
                status: AttendanceStatus::Pending,
                role: Role::Attendee,
                record_id: None,
            });
        }
        Ok(emails.to_vec())
    }

    async fn get_attendees(&self, event_id: &str) -> Result<Vec<Attendee>> {
        let mut state = self.enter("attendees", format!("attendees:{}", event_id))?;
        find(&mut state.events, event_id).map(|e| e.attendees.clone())
    }

    async fn delete_event(&self, event_id: &str) -> Result<()> {
        let mut state = self.enter("delete", format!("delete:{}", event_id))?;
        find(&mut state.events, event_id)?;
        state.events.retain(|e| e.id != event_id);
        Ok(())
    }
}

/// Serve `app` on an ephemeral port and return the API base URL.
#[allow(dead_code)]
pub async fn spawn_api(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}
