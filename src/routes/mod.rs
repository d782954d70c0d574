// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route table and the router that enforces it.

use crate::middleware::auth::{require_auth, require_no_auth, Access};
use crate::session::Session;
use std::fmt;

/// Views the client can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Register / sign-in forms
    SignIn,
    EventList,
    EventDetails(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::SignIn => "/auth".to_string(),
            Route::EventList => "/event-list".to_string(),
            Route::EventDetails(id) => format!("/event-details/{}", urlencoding::encode(id)),
        }
    }

    /// Resolve a path. The empty path maps to sign-in.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim().trim_matches('/');
        match path.split_once('/') {
            None => match path {
                "" | "auth" => Some(Route::SignIn),
                "event-list" => Some(Route::EventList),
                _ => None,
            },
            Some(("event-details", id)) if !id.is_empty() && !id.contains('/') => {
                let id = urlencoding::decode(id).ok()?;
                Some(Route::EventDetails(id.into_owned()))
            }
            Some(_) => None,
        }
    }

    /// Guard that must pass before entering this route.
    fn check(&self, session: &Session) -> Access {
        match self {
            Route::SignIn => require_no_auth(session),
            Route::EventList | Route::EventDetails(_) => require_auth(session),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Entered(Route),
    /// The requested route was denied and the router went here instead
    Redirected { denied: Route, to: Route },
}

impl Navigation {
    /// Route the router ended up on.
    pub fn route(&self) -> &Route {
        match self {
            Navigation::Entered(route) => route,
            Navigation::Redirected { to, .. } => to,
        }
    }
}

/// Tracks the active route, consulting guards on every transition.
#[derive(Debug)]
pub struct Router {
    session: Session,
    current: Route,
}

impl Router {
    /// Router starting at sign-in, immediately forwarded to the list when a
    /// stored session exists.
    pub fn new(session: Session) -> Self {
        let mut router = Self {
            session,
            current: Route::SignIn,
        };
        router.navigate(Route::SignIn);
        router
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to `target`, following at most one guard redirect.
    pub fn navigate(&mut self, target: Route) -> Navigation {
        let navigation = match target.check(&self.session) {
            Access::Allow => Navigation::Entered(target),
            Access::Redirect(to) => {
                tracing::info!(denied = %target, to = %to, "Navigation redirected");
                Navigation::Redirected { denied: target, to }
            }
        };
        self.current = navigation.route().clone();
        navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_roundtrip() {
        for route in [
            Route::SignIn,
            Route::EventList,
            Route::EventDetails("65f0c1".to_string()),
            Route::EventDetails("a b".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse(""), Some(Route::SignIn));
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/event-details/"), None);
        assert_eq!(Route::parse("/event-details/a/b"), None);
    }

    #[test]
    fn test_protected_route_without_session_goes_to_sign_in() {
        let mut router = Router::new(Session::in_memory());
        let nav = router.navigate(Route::EventList);
        assert_eq!(
            nav,
            Navigation::Redirected {
                denied: Route::EventList,
                to: Route::SignIn
            }
        );
        assert_eq!(router.current(), &Route::SignIn);
    }

    #[test]
    fn test_signed_in_user_skips_sign_in() {
        let session = Session::in_memory();
        session.login("a.b.c").unwrap();
        let mut router = Router::new(session.clone());
        assert_eq!(router.current(), &Route::EventList);

        let nav = router.navigate(Route::EventDetails("e1".to_string()));
        assert_eq!(nav, Navigation::Entered(Route::EventDetails("e1".to_string())));

        session.logout().unwrap();
        let nav = router.navigate(Route::EventList);
        assert_eq!(nav.route(), &Route::SignIn);
    }
}
