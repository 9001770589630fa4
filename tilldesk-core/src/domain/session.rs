//! Session domain model
//!
//! The session is the single owned record of the current user's
//! authentication status. All mutation goes through the explicit
//! transition methods below; nothing else writes its fields.

use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the authenticated user, as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A token exists and the profile fetch has not resolved yet
    Loading,
    /// No valid token, or the profile fetch failed
    Unauthenticated,
    /// Token present and profile fetch succeeded
    Authenticated,
}

/// In-memory authentication state
///
/// Invariant: `is_authenticated()` holds exactly when a token is present
/// and the profile fetch for that token succeeded.
#[derive(Debug, Clone)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
    phase: SessionPhase,
    /// Bumped on every token-changing transition. A profile fetch result
    /// carries the epoch it was started under and is discarded if the
    /// session has moved on since.
    epoch: u64,
}

impl Session {
    /// Start a session from a persisted token (or none)
    pub fn from_token(token: Option<String>) -> Self {
        let phase = if token.is_some() {
            SessionPhase::Loading
        } else {
            SessionPhase::Unauthenticated
        };
        Self {
            token,
            user: None,
            phase,
            epoch: 0,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    /// Epoch to capture before starting a profile fetch
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// A login succeeded: adopt the issued token and profile
    pub fn login(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
        self.epoch += 1;
    }

    /// Apply a successful profile fetch started under `fetch_epoch`.
    ///
    /// Returns false (and leaves the session untouched) when the result is
    /// stale, i.e. the token changed or was cleared while the fetch was in
    /// flight.
    pub fn profile_loaded(&mut self, fetch_epoch: u64, user: UserProfile) -> bool {
        if fetch_epoch != self.epoch || self.token.is_none() {
            return false;
        }
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
        true
    }

    /// Apply a failed profile fetch started under `fetch_epoch`.
    ///
    /// Clears the token and settles unauthenticated. Stale failures are
    /// discarded the same way as stale successes.
    pub fn profile_failed(&mut self, fetch_epoch: u64) -> bool {
        if fetch_epoch != self.epoch {
            return false;
        }
        self.token = None;
        self.user = None;
        self.phase = SessionPhase::Unauthenticated;
        self.epoch += 1;
        true
    }

    /// Clear everything
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.phase = SessionPhase::Unauthenticated;
        self.epoch += 1;
    }
}

/// Best-effort expiry extraction from a JWT access token.
///
/// Decodes the payload segment (base64url, no padding) and reads the `exp`
/// claim. Returns None for opaque tokens; the backend remains the
/// authority on validity either way.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    Utc.timestamp_opt(exp, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_no_token_starts_unauthenticated() {
        let session = Session::from_token(None);
        assert_eq!(session.phase(), SessionPhase::Unauthenticated);
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_token_starts_loading() {
        let session = Session::from_token(Some("abc123".to_string()));
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert!(session.is_loading());
    }

    #[test]
    fn test_profile_loaded_authenticates() {
        let mut session = Session::from_token(Some("abc123".to_string()));
        let epoch = session.epoch();
        assert!(session.profile_loaded(epoch, profile()));
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "ada@example.com");
    }

    #[test]
    fn test_profile_failed_clears_token() {
        let mut session = Session::from_token(Some("abc123".to_string()));
        let epoch = session.epoch();
        assert!(session.profile_failed(epoch));
        assert_eq!(session.phase(), SessionPhase::Unauthenticated);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_stale_profile_result_discarded() {
        let mut session = Session::from_token(Some("abc123".to_string()));
        let epoch = session.epoch();

        // Logout lands while the fetch is in flight
        session.logout();

        assert!(!session.profile_loaded(epoch, profile()));
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());

        // A stale failure must not disturb a fresh login either
        session.login("next-token".to_string(), profile());
        assert!(!session.profile_failed(epoch));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("next-token"));
    }

    #[test]
    fn test_token_expiry_from_jwt() {
        // {"exp":1700000000} -> eyJleHAiOjE3MDAwMDAwMDB9
        let token = "header.eyJleHAiOjE3MDAwMDAwMDB9.sig";
        let expiry = token_expiry(token).unwrap();
        assert_eq!(expiry.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_token_expiry_opaque_token() {
        assert!(token_expiry("abc123").is_none());
        assert!(token_expiry("not.base64!.sig").is_none());
    }
}
