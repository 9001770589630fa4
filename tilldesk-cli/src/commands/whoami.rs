//! Whoami command - show the current session

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use tilldesk_core::domain::token_expiry;
use tilldesk_core::UserProfile;

use super::get_context;
use crate::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WhoamiOutput {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_expires_at: Option<String>,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let bar = output::spinner("Checking session...");
    ctx.session_service.bootstrap()?;
    bar.finish_and_clear();

    let session = ctx.session_service.current();
    let expiry = session
        .token()
        .and_then(token_expiry)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string());

    if json {
        let out = WhoamiOutput {
            authenticated: session.is_authenticated(),
            user: session.user().cloned(),
            token_expires_at: expiry,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match session.user() {
        Some(user) if session.is_authenticated() => {
            println!("{}", "Session".bold());
            println!();
            let mut table = output::create_table();
            table.add_row(vec!["Name", &user.name]);
            table.add_row(vec!["Email", &user.email]);
            table.add_row(vec!["Role", user.role.as_deref().unwrap_or("-")]);
            if let Some(expiry) = &expiry {
                table.add_row(vec!["Token expires", expiry]);
            }
            println!("{}", table);
        }
        _ => {
            output::warning("Not logged in. Run `till login` first.");
        }
    }

    Ok(())
}
