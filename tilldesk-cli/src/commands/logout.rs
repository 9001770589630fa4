//! Logout command - forget the current session

use anyhow::Result;

use tilldesk_core::LogEvent;

use super::{get_context, get_event_log, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let log = get_event_log();
    let ctx = get_context()?;

    // No bootstrap: logout must work even when the backend is down
    ctx.session_service.logout()?;

    log_event(&log, LogEvent::new("logout").with_command("logout"));
    output::success("Logged out");
    Ok(())
}
