// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access guards consulted before entering a view.
//!
//! Guards only read the session. A denial carries the route the router
//! should go to instead.

use crate::routes::Route;
use crate::session::Session;

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Deny entry and navigate here instead
    Redirect(Route),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Views that need a signed-in user; otherwise send them to sign-in.
pub fn require_auth(session: &Session) -> Access {
    if session.is_authenticated() {
        Access::Allow
    } else {
        tracing::debug!("Not signed in, redirecting to sign-in");
        Access::Redirect(Route::SignIn)
    }
}

/// Views only for signed-out users; otherwise send them to the event list.
pub fn require_no_auth(session: &Session) -> Access {
    if session.is_authenticated() {
        tracing::debug!("Already signed in, redirecting to event list");
        Access::Redirect(Route::EventList)
    } else {
        Access::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_auth_without_token_redirects_to_sign_in() {
        let session = Session::in_memory();
        let access = require_auth(&session);
        assert_eq!(access, Access::Redirect(Route::SignIn));
        assert!(!access.is_allowed());
        // Guard must not touch the session
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_require_auth_with_token_allows() {
        let session = Session::in_memory();
        session.login("a.b.c").unwrap();
        assert_eq!(require_auth(&session), Access::Allow);
    }

    #[test]
    fn test_require_no_auth() {
        let session = Session::in_memory();
        assert_eq!(require_no_auth(&session), Access::Allow);

        session.login("a.b.c").unwrap();
        assert_eq!(require_no_auth(&session), Access::Redirect(Route::EventList));
        assert!(session.is_authenticated());
    }
}
