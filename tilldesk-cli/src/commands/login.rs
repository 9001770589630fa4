//! Login command - start an authenticated session

use anyhow::{bail, Result};
use dialoguer::{Input, Password};

use tilldesk_core::{GateDecision, LogEvent};

use super::{get_context, get_event_log, log_event};
use crate::output;

pub fn run(email: Option<String>, json: bool) -> Result<()> {
    let log = get_event_log();
    let ctx = get_context()?;

    let bar = output::spinner("Checking session...");
    ctx.session_service.bootstrap()?;
    bar.finish_and_clear();

    // The gate bounces authenticated sessions off the login route
    if ctx.session_service.evaluate_route("/login") == GateDecision::Redirect("/") {
        let user = ctx.session_service.current().user().cloned();
        if let Some(user) = user {
            output::warning(&format!("Already logged in as {}. Run `till logout` first.", user.email));
        }
        return Ok(());
    }

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    // CI can hand the password over the environment; everyone else types it
    let password = match std::env::var("TILLDESK_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => Password::new().with_prompt("Password").interact()?,
    };

    let bar = output::spinner("Logging in...");
    let result = ctx.session_service.login(&email, &password);
    bar.finish_and_clear();

    match result {
        Ok(user) => {
            log_event(&log, LogEvent::new("login_succeeded").with_command("login"));
            if json {
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                output::success(&format!("Logged in as {} ({})", user.name, user.email));
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &log,
                LogEvent::new("login_failed").with_command("login").with_error(e.to_string()),
            );
            bail!("Login failed: {}", e)
        }
    }
}
