//! Session state and its durable-storage lifecycle.
//!
//! `SessionState` is plain data so the login/logout/validity rules are
//! testable without a browser. The `Session` handle wraps the state in a
//! reactive signal, couples every mutation with localStorage persistence,
//! and is provided via context to the router guard and the request builder.
//!
//! FAILURE SEMANTICS
//! =================
//! A malformed or expired token never surfaces as an error: `login` with a
//! bad token is a silent no-op (callers check `is_logged` afterwards), and
//! a stale record found at startup is discarded before anything can
//! observe it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::state::token;
use crate::util::{clock, storage};

/// localStorage key for the persisted session record.
pub const STORAGE_KEY: &str = "auth-storage";

/// Current session: bearer token plus the cached staff profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    /// Store the token and profile, but only if the token decodes and is
    /// unexpired at `now_secs`. Otherwise the state is left untouched.
    pub fn login(&mut self, token: String, user: User, now_secs: i64) {
        if token::is_valid(&token, now_secs) {
            self.token = Some(token);
            self.user = Some(user);
        }
    }

    /// Clear token and profile. Idempotent.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// True iff a token is present and still valid at `now_secs`.
    pub fn is_logged(&self, now_secs: i64) -> bool {
        self.token
            .as_deref()
            .is_some_and(|t| token::is_valid(t, now_secs))
    }

    /// The cached profile, or `None` when logged out.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// What actually lands in localStorage.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: Option<String>,
    user: Option<User>,
}

/// Reactive session handle shared through context.
///
/// Components that need to re-render on session changes read the `state`
/// signal directly; the convenience methods are untracked and meant for
/// imperative paths (request building, event handlers).
#[derive(Clone, Copy)]
pub struct Session {
    pub state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Rehydrate from durable storage at startup.
    ///
    /// An expired or malformed record is removed on the spot so no stale
    /// session is ever observable.
    pub fn restore(&self) {
        let Some(raw) = storage::read(STORAGE_KEY) else {
            return;
        };
        let restored = match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(record) => SessionState {
                token: record.token,
                user: record.user,
            },
            Err(err) => {
                log::warn!("discarding unreadable session record: {err}");
                storage::remove(STORAGE_KEY);
                return;
            }
        };
        if restored.is_logged(clock::now_unix()) {
            self.state.set(restored);
        } else {
            self.logout();
        }
    }

    /// Validate and store a fresh token + profile, then persist.
    pub fn login(&self, token: String, user: User) {
        let now = clock::now_unix();
        self.state.update(|s| s.login(token, user, now));
        self.persist();
    }

    /// Drop the session and its storage entry. Idempotent.
    pub fn logout(&self) {
        self.state.update(SessionState::logout);
        storage::remove(STORAGE_KEY);
    }

    pub fn is_logged(&self) -> bool {
        let now = clock::now_unix();
        self.state.with_untracked(|s| s.is_logged(now))
    }

    pub fn user(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    /// Token snapshot for the Authorization header, read at send time.
    pub fn bearer_token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    fn persist(&self) {
        let record = self.state.with_untracked(|s| PersistedSession {
            token: s.token.clone(),
            user: s.user.clone(),
        });
        if record.token.is_none() {
            return;
        }
        match serde_json::to_string(&record) {
            Ok(json) => storage::write(STORAGE_KEY, &json),
            Err(err) => log::warn!("failed to serialize session record: {err}"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
