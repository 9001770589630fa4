//! Event log - structured command/error logging
//!
//! Records events as JSON lines in `events.log` inside the app directory.
//! No record data (amounts, names, customers) is ever logged; events
//! carry only the command, the entity kind, and error text. Appends take
//! an exclusive lock so concurrent invocations don't interleave lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

const EVENTS_FILE: &str = "events.log";

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            entity: None,
            error_message: None,
            error_details: None,
        }
    }

    /// Set the command context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the entity context (sale, customer, ...)
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set error details (additional context)
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }
}

/// A log entry as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unix milliseconds
    pub timestamp: i64,
    pub app_version: String,
    #[serde(flatten)]
    pub event: LogEvent,
}

/// Service for structured event logging
pub struct EventLog {
    path: PathBuf,
    app_version: String,
}

impl EventLog {
    pub fn new(app_dir: &Path, app_version: impl Into<String>) -> Self {
        Self {
            path: app_dir.join(EVENTS_FILE),
            app_version: app_version.into(),
        }
    }

    /// Append an event
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now().timestamp_millis(),
            app_version: self.app_version.clone(),
            event,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.lock_exclusive()?;
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');
        let write = file.write_all(line.as_bytes());
        let _ = file.unlock();
        write?;
        Ok(())
    }

    /// Log a CLI command execution
    pub fn log_command(&self, command: &str) -> Result<()> {
        self.log(LogEvent::new("command_executed").with_command(command))
    }

    /// Log an error
    pub fn log_error(&self, event: &str, message: &str, details: Option<&str>) -> Result<()> {
        let mut log_event = LogEvent::new(event).with_error(message);
        if let Some(d) = details {
            log_event = log_event.with_error_details(d);
        }
        self.log(log_event)
    }

    /// Most recent entries, newest first, up to `limit`
    pub fn get_recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let mut entries = self.read_all()?;
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }

    /// Most recent error entries, newest first, up to `limit`
    pub fn get_errors(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self
            .read_all()?
            .into_iter()
            .filter(|e| e.event.error_message.is_some())
            .collect();
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }

    /// Total number of entries
    pub fn count(&self) -> Result<u64> {
        Ok(self.read_all()?.len() as u64)
    }

    /// Delete entries older than the given unix-ms timestamp; returns how
    /// many were removed
    pub fn delete_before(&self, timestamp_ms: i64) -> Result<u64> {
        let entries = self.read_all()?;
        let kept: Vec<&LogEntry> = entries.iter().filter(|e| e.timestamp >= timestamp_ms).collect();
        let deleted = (entries.len() - kept.len()) as u64;

        let mut content = String::new();
        for entry in &kept {
            content.push_str(&serde_json::to_string(entry)?);
            content.push('\n');
        }
        std::fs::write(&self.path, content)?;
        Ok(deleted)
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        // Tolerate the odd corrupt line rather than losing the whole log
        Ok(content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_and_read_back() {
        let dir = tempdir().unwrap();
        let log = EventLog::new(dir.path(), "1.0.0");

        log.log_command("dashboard").unwrap();

        let entries = log.get_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event.event, "command_executed");
        assert_eq!(entries[0].event.command.as_deref(), Some("dashboard"));
        assert_eq!(entries[0].app_version, "1.0.0");
    }

    #[test]
    fn test_errors_filtered() {
        let dir = tempdir().unwrap();
        let log = EventLog::new(dir.path(), "1.0.0");

        log.log_command("sale").unwrap();
        log.log_error("delete_failed", "backend said no", Some("HTTP 500")).unwrap();

        let errors = log.get_errors(10).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].event.error_message.as_deref(), Some("backend said no"));
        assert_eq!(errors[0].event.error_details.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let dir = tempdir().unwrap();
        let log = EventLog::new(dir.path(), "1.0.0");

        for i in 0..5 {
            log.log(LogEvent::new(format!("event_{}", i))).unwrap();
        }

        let entries = log.get_recent(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event.event, "event_4");
        assert_eq!(entries[1].event.event, "event_3");
    }

    #[test]
    fn test_count_and_delete_before() {
        let dir = tempdir().unwrap();
        let log = EventLog::new(dir.path(), "1.0.0");

        log.log_command("a").unwrap();
        log.log_command("b").unwrap();
        assert_eq!(log.count().unwrap(), 2);

        let deleted = log.delete_before(Utc::now().timestamp_millis() + 1000).unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(log.count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_lines_skipped() {
        let dir = tempdir().unwrap();
        let log = EventLog::new(dir.path(), "1.0.0");

        log.log_command("good").unwrap();
        {
            let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
            writeln!(file, "{{corrupt").unwrap();
        }
        log.log_command("also good").unwrap();

        assert_eq!(log.count().unwrap(), 2);
    }
}
