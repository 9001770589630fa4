//! CLI command implementations

pub mod customer;
pub mod dashboard;
pub mod export;
pub mod login;
pub mod logout;
pub mod logs;
pub mod records;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use tilldesk_core::{EventLog, GateDecision, LogEvent, TilldeskContext};

use crate::output;

/// Get the event log for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_event_log() -> Option<EventLog> {
    let app_dir = get_app_dir();
    std::fs::create_dir_all(&app_dir).ok()?;
    Some(EventLog::new(&app_dir, env!("CARGO_PKG_VERSION")))
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(log: &Option<EventLog>, event: LogEvent) {
    if let Some(l) = log {
        let _ = l.log(event);
    }
}

/// Get the tilldesk directory from environment or default
pub fn get_app_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TILLDESK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".tilldesk")
    }
}

/// Get or create the tilldesk context
pub fn get_context() -> Result<TilldeskContext> {
    let app_dir = get_app_dir();

    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create tilldesk directory: {:?}", app_dir))?;

    TilldeskContext::new(&app_dir).context("Failed to initialize tilldesk context")
}

/// Open a context with a settled, authenticated session for `route`.
///
/// Bootstraps the session (profile fetch only when a token exists), then
/// runs the route gate. Returns the context and the bearer token when the
/// route may render; exits with a friendly error otherwise.
pub fn open_authenticated(route: &str) -> Result<(TilldeskContext, String)> {
    let ctx = get_context()?;

    let bar = output::spinner("Checking session...");
    ctx.session_service.bootstrap()?;
    bar.finish_and_clear();

    match ctx.session_service.evaluate_route(route) {
        GateDecision::RenderChildren => {
            let token = ctx.session_service.require_token()?;
            Ok((ctx, token))
        }
        GateDecision::Redirect(_) => {
            bail!("Not logged in. Run `till login` first.")
        }
        GateDecision::ShowLoading => {
            // Bootstrap settles synchronously; reaching this is a bug
            bail!("Session did not settle; try again")
        }
    }
}
