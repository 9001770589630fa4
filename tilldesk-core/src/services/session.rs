//! Session service - the effectful side of the session gate
//!
//! Owns the in-memory session, the persisted token, and the backend
//! handle. The pure gate decision lives in `domain::gate`; this service
//! runs the flows around it: bootstrap on startup, login, logout, and
//! clearing the persisted token when the backend rejects it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::adapters::TokenFile;
use crate::domain::result::{Error, Result};
use crate::domain::{gate, GateDecision, Session, SessionPhase, UserProfile};
use crate::ports::BackendApi;

/// Session gate service
pub struct SessionService {
    backend: Arc<dyn BackendApi>,
    token_file: TokenFile,
    session: Mutex<Session>,
}

impl SessionService {
    /// Lock the session record. A poisoned lock still holds valid session
    /// data, so recover the guard instead of propagating the panic.
    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create the service from the persisted token, without touching the
    /// network. The session starts Loading when a token exists and
    /// Unauthenticated otherwise.
    pub fn new(backend: Arc<dyn BackendApi>, token_file: TokenFile) -> Result<Self> {
        let token = token_file.load()?;
        Ok(Self {
            backend,
            token_file,
            session: Mutex::new(Session::from_token(token)),
        })
    }

    /// Settle the session on startup.
    ///
    /// With no persisted token this issues no network call at all. With a
    /// token, the profile is fetched; on success the session
    /// authenticates, on any failure the persisted token is cleared and
    /// the session settles unauthenticated. Fetch errors are degraded,
    /// never propagated.
    pub fn bootstrap(&self) -> Result<SessionPhase> {
        let (token, epoch) = {
            let session = self.session();
            match session.token() {
                None => return Ok(session.phase()),
                Some(token) => (token.to_string(), session.epoch()),
            }
        };

        match self.backend.fetch_profile(&token) {
            Ok(user) => {
                let mut session = self.session();
                session.profile_loaded(epoch, user);
                Ok(session.phase())
            }
            Err(_) => {
                // Transport failures and auth rejections both end the
                // persisted session; see DESIGN.md for the trade-off.
                let mut session = self.session();
                if session.profile_failed(epoch) {
                    self.token_file.clear()?;
                }
                Ok(session.phase())
            }
        }
    }

    /// Exchange credentials for a session
    pub fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let outcome = self.backend.login(email, password)?;
        self.token_file.store(&outcome.token)?;

        let mut session = self.session();
        session.login(outcome.token, outcome.user.clone());
        Ok(outcome.user)
    }

    /// Forget the session and the persisted token
    pub fn logout(&self) -> Result<()> {
        self.token_file.clear()?;
        self.session().logout();
        Ok(())
    }

    /// Pure gate decision for a route under the current session
    pub fn evaluate_route(&self, path: &str) -> GateDecision {
        let session = self.session();
        gate::decide(path, &session)
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Session {
        self.session().clone()
    }

    /// The bearer token for API calls, or an auth error when logged out
    pub fn require_token(&self) -> Result<String> {
        self.session()
            .token()
            .map(str::to_string)
            .ok_or_else(|| Error::auth("not logged in; run `till login` first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockBackend, MockConfig};
    use tempfile::tempdir;

    fn service(
        config: MockConfig,
        token: Option<&str>,
    ) -> (SessionService, Arc<MockBackend>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let token_file = TokenFile::new(dir.path());
        if let Some(t) = token {
            token_file.store(t).unwrap();
        }
        let backend = Arc::new(MockBackend::new(config));
        let service =
            SessionService::new(Arc::clone(&backend) as Arc<dyn BackendApi>, token_file).unwrap();
        (service, backend, dir)
    }

    #[test]
    fn test_bootstrap_without_token_issues_no_fetch() {
        let (service, backend, _dir) = service(MockConfig::default(), None);
        let phase = service.bootstrap().unwrap();
        assert_eq!(phase, SessionPhase::Unauthenticated);
        assert_eq!(backend.profile_call_count(), 0);
    }

    #[test]
    fn test_bootstrap_with_token_authenticates() {
        let (service, backend, _dir) = service(MockConfig::default(), Some("abc123"));
        let phase = service.bootstrap().unwrap();
        assert_eq!(phase, SessionPhase::Authenticated);
        assert_eq!(backend.profile_call_count(), 1);
        assert_eq!(service.current().user().unwrap().email, "admin@tilldesk.test");
    }

    #[test]
    fn test_bootstrap_failure_clears_token_and_redirects() {
        let (service, _backend, _dir) = service(
            MockConfig { fail_auth: true, ..Default::default() },
            Some("abc123"),
        );
        let phase = service.bootstrap().unwrap();

        assert_eq!(phase, SessionPhase::Unauthenticated);
        assert!(service.current().token().is_none());
        assert_eq!(service.evaluate_route("/"), GateDecision::Redirect(gate::LOGIN_ROUTE));
    }

    #[test]
    fn test_transport_failure_degrades_not_crashes() {
        let (service, _backend, _dir) = service(
            MockConfig { fail_transport: true, ..Default::default() },
            Some("abc123"),
        );
        // Non-fatal: bootstrap returns the settled phase, not an error
        let phase = service.bootstrap().unwrap();
        assert_eq!(phase, SessionPhase::Unauthenticated);
    }

    #[test]
    fn test_login_persists_token() {
        let (service, _backend, _dir) = service(MockConfig::default(), None);
        let user = service.login("admin@tilldesk.test", "secret").unwrap();
        assert_eq!(user.email, "admin@tilldesk.test");
        assert!(service.current().is_authenticated());
        assert!(service.require_token().is_ok());
        assert_eq!(service.evaluate_route("/login"), GateDecision::Redirect(gate::HOME_ROUTE));
    }

    #[test]
    fn test_logout_clears_everything() {
        let (service, _backend, _dir) = service(MockConfig::default(), None);
        service.login("admin@tilldesk.test", "secret").unwrap();
        service.logout().unwrap();

        assert!(!service.current().is_authenticated());
        assert!(service.require_token().is_err());
        assert_eq!(service.evaluate_route("/sales"), GateDecision::Redirect(gate::LOGIN_ROUTE));
    }
}
