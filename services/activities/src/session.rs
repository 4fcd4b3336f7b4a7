//! Admin session management
//!
//! Teachers trade their username and password for an opaque bearer token that
//! stays valid for a fixed eight hours. Tokens live in an in-memory table and
//! expired entries are dropped the first time they are presented again.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distributions::Alphanumeric, rngs::OsRng};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{error::AuthError, models::TeacherCredential};

/// Lifetime of an admin token
pub const SESSION_TTL_HOURS: i64 = 8;

const TOKEN_LENGTH: usize = 32;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Session manager for teacher logins
#[derive(Clone)]
pub struct SessionManager {
    credentials: Arc<[TeacherCredential]>,
    /// token -> expiry
    sessions: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
    clock: Arc<dyn Clock>,
}

impl SessionManager {
    /// Create a new session manager backed by the wall clock
    pub fn new(credentials: Vec<TeacherCredential>) -> Self {
        Self::with_clock(credentials, Arc::new(SystemClock))
    }

    /// Create a new session manager reading time from `clock`
    pub fn with_clock(credentials: Vec<TeacherCredential>, clock: Arc<dyn Clock>) -> Self {
        Self {
            credentials: credentials.into(),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    /// Check the credentials and issue a fresh token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        // No early exit: every entry is compared
        let matched = self
            .credentials
            .iter()
            .fold(false, |found, credential| {
                found | credential_matches(credential, username, password)
            });

        if !matched {
            warn!("Rejected login for teacher: {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let token = generate_token();
        let expires_at = self.clock.now() + Duration::hours(SESSION_TTL_HOURS);
        self.sessions.lock().await.insert(token.clone(), expires_at);

        info!("Teacher {} logged in, session expires at {}", username, expires_at);

        Ok(token)
    }

    /// Check an Authorization header value
    ///
    /// Accepts `Bearer <token>` or the bare token. An expired token is removed
    /// from the table as part of the check.
    pub async fn validate(&self, authorization: &str) -> bool {
        let token = strip_bearer(authorization);
        if token.is_empty() {
            return false;
        }

        let mut sessions = self.sessions.lock().await;
        let expires_at = match sessions.get(token) {
            Some(expires_at) => *expires_at,
            None => return false,
        };

        if self.clock.now() > expires_at {
            sessions.remove(token);
            debug!("Evicted admin session that expired at {}", expires_at);
            return false;
        }

        true
    }

    /// Drop the session named by an Authorization header value
    ///
    /// Unknown tokens are ignored.
    pub async fn logout(&self, authorization: &str) {
        let token = strip_bearer(authorization);
        if self.sessions.lock().await.remove(token).is_some() {
            info!("Admin session logged out");
        }
    }

    #[cfg(test)]
    async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

fn strip_bearer(authorization: &str) -> &str {
    authorization
        .strip_prefix("Bearer ")
        .unwrap_or(authorization)
}

fn credential_matches(credential: &TeacherCredential, username: &str, password: &str) -> bool {
    let username_ok = credential.username.as_bytes().ct_eq(username.as_bytes());
    let password_ok = credential.password.as_bytes().ct_eq(password.as_bytes());
    (username_ok & password_ok).into()
}

fn generate_token() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
