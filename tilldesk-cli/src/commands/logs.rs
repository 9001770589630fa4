//! Logs command - view and manage the event log

use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;

use tilldesk_core::EventLog;

use super::get_app_dir;
use crate::output;

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Show only errors
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear old log entries
    Clear {
        /// Delete logs older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// Show log statistics and file path
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn get_event_log() -> EventLog {
    EventLog::new(&get_app_dir(), env!("CARGO_PKG_VERSION"))
}

fn format_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

pub fn run(command: LogsCommands) -> Result<()> {
    match command {
        LogsCommands::List { limit, errors, json } => {
            let log = get_event_log();
            let entries = if errors { log.get_errors(limit)? } else { log.get_recent(limit)? };

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            if entries.is_empty() {
                output::info("No log entries.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Time", "Event", "Command", "Error"]);
            for entry in &entries {
                table.add_row(vec![
                    format_timestamp(entry.timestamp),
                    entry.event.event.clone(),
                    entry.event.command.clone().unwrap_or_else(|| "-".to_string()),
                    entry.event.error_message.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            }
            println!("{}", table);
            Ok(())
        }
        LogsCommands::Clear { older_than_days, force } => {
            let log = get_event_log();

            if !force {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete log entries older than {} days?", older_than_days))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    output::info("Aborted.");
                    return Ok(());
                }
            }

            let cutoff = Utc::now() - Duration::days(older_than_days as i64);
            let deleted = log.delete_before(cutoff.timestamp_millis())?;
            output::success(&format!("Deleted {} log entrie(s)", deleted));
            Ok(())
        }
        LogsCommands::Stats { json } => {
            let log = get_event_log();
            let count = log.count()?;
            let errors = log.get_errors(usize::MAX)?.len();

            if json {
                #[derive(Serialize)]
                struct Stats {
                    entries: u64,
                    errors: usize,
                    path: String,
                }
                let stats = Stats {
                    entries: count,
                    errors,
                    path: log.path().display().to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("{}", "Event Log".bold());
            println!();
            println!("Entries: {}", count);
            println!("Errors:  {}", errors);
            println!("File:    {}", log.path().display());
            Ok(())
        }
    }
}
