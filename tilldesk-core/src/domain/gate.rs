//! Route gate - pure navigation decisions
//!
//! Classifies routes and decides what to do with a request given the
//! current session. The decision is pure data; executing a redirect or
//! rendering is the caller's job.

use super::session::{Session, SessionPhase};

/// Routes that render without an authenticated session
const PUBLIC_ROUTES: &[&str] = &["/login", "/register"];

/// Where unauthenticated requests for protected content are sent
pub const LOGIN_ROUTE: &str = "/login";

/// Where authenticated requests for public content are sent
pub const HOME_ROUTE: &str = "/";

/// Access classification for a route path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
}

/// What the caller should do with the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Authentication is still settling; show a placeholder
    ShowLoading,
    /// Send the user to the given route instead
    Redirect(&'static str),
    /// The requested content may render
    RenderChildren,
}

/// Classify a route path
pub fn route_class(path: &str) -> RouteClass {
    if PUBLIC_ROUTES.contains(&path) {
        RouteClass::Public
    } else {
        RouteClass::Protected
    }
}

/// Decide what to do with `path` under `session`.
///
/// While a token exists but the profile fetch has not settled, everything
/// is a loading placeholder. Once settled: unauthenticated sessions are
/// redirected off protected routes, authenticated sessions are redirected
/// off public ones, and everything else renders.
pub fn decide(path: &str, session: &Session) -> GateDecision {
    if session.phase() == SessionPhase::Loading {
        return GateDecision::ShowLoading;
    }

    match (session.is_authenticated(), route_class(path)) {
        (false, RouteClass::Protected) => GateDecision::Redirect(LOGIN_ROUTE),
        (true, RouteClass::Public) => GateDecision::Redirect(HOME_ROUTE),
        _ => GateDecision::RenderChildren,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::UserProfile;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: None,
        }
    }

    fn authenticated() -> Session {
        let mut session = Session::from_token(Some("abc123".to_string()));
        let epoch = session.epoch();
        session.profile_loaded(epoch, profile());
        session
    }

    #[test]
    fn test_route_classification() {
        assert_eq!(route_class("/login"), RouteClass::Public);
        assert_eq!(route_class("/register"), RouteClass::Public);
        assert_eq!(route_class("/"), RouteClass::Protected);
        assert_eq!(route_class("/sales"), RouteClass::Protected);
        assert_eq!(route_class("/customers"), RouteClass::Protected);
    }

    #[test]
    fn test_loading_wins_while_fetch_pending() {
        let session = Session::from_token(Some("abc123".to_string()));
        assert_eq!(decide("/", &session), GateDecision::ShowLoading);
        assert_eq!(decide("/login", &session), GateDecision::ShowLoading);
    }

    #[test]
    fn test_no_token_renders_public_without_redirect() {
        let session = Session::from_token(None);
        assert_eq!(decide("/login", &session), GateDecision::RenderChildren);
        assert_eq!(decide("/register", &session), GateDecision::RenderChildren);
    }

    #[test]
    fn test_unauthenticated_never_renders_protected() {
        let session = Session::from_token(None);
        for path in ["/", "/sales", "/purchases", "/dashboard", "/anything"] {
            assert_eq!(
                decide(path, &session),
                GateDecision::Redirect(LOGIN_ROUTE),
                "unauthenticated {path} must redirect"
            );
        }
    }

    #[test]
    fn test_authenticated_redirected_off_public_routes() {
        let session = authenticated();
        for path in ["/login", "/register"] {
            assert_eq!(decide(path, &session), GateDecision::Redirect(HOME_ROUTE));
        }
    }

    #[test]
    fn test_authenticated_renders_protected() {
        let session = authenticated();
        assert_eq!(decide("/", &session), GateDecision::RenderChildren);
        assert_eq!(decide("/sales", &session), GateDecision::RenderChildren);
    }

    #[test]
    fn test_failed_fetch_settles_into_login_redirect() {
        let mut session = Session::from_token(Some("abc123".to_string()));
        let epoch = session.epoch();
        session.profile_failed(epoch);

        assert!(session.token().is_none());
        assert_eq!(decide("/", &session), GateDecision::Redirect(LOGIN_ROUTE));
    }
}
