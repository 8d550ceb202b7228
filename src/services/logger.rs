//! Logging Collaborator
//!
//! `AppLogger` takes `(scope, message, payload)` at one of four levels and
//! fans it out to `tracing` and to the in-app log panel. Delivery to the
//! panel is best effort: a full or disconnected channel drops the record.

use chrono::{DateTime, Local};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A single structured log record
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub scope: Arc<str>,
    pub message: String,
    pub payload: Option<Value>,
    pub timestamp: DateTime<Local>,
}

/// Fire-and-forget logger shared by states and services
#[derive(Clone)]
pub struct AppLogger {
    tx: Sender<LogRecord>,
}

impl AppLogger {
    /// Create a logger and the receiving end drained by the UI
    pub fn new(capacity: usize) -> (Self, Receiver<LogRecord>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self { tx }, rx)
    }

    pub fn log(
        &self,
        level: LogLevel,
        scope: &str,
        message: impl Into<String>,
        payload: Option<Value>,
    ) {
        let message = message.into();
        let payload_text = payload.as_ref().map(Value::to_string).unwrap_or_default();

        match level {
            LogLevel::Debug => tracing::debug!(scope, payload = %payload_text, "{message}"),
            LogLevel::Info => tracing::info!(scope, payload = %payload_text, "{message}"),
            LogLevel::Warn => tracing::warn!(scope, payload = %payload_text, "{message}"),
            LogLevel::Error => tracing::error!(scope, payload = %payload_text, "{message}"),
        }

        let record = LogRecord {
            level,
            scope: scope.into(),
            message,
            payload,
            timestamp: Local::now(),
        };

        if let Err(TrySendError::Full(_)) = self.tx.try_send(record) {
            tracing::trace!(scope, "Log panel channel full, record dropped");
        }
    }

    pub fn info(&self, scope: &str, message: impl Into<String>, payload: Option<Value>) {
        self.log(LogLevel::Info, scope, message, payload);
    }

    pub fn warn(&self, scope: &str, message: impl Into<String>, payload: Option<Value>) {
        self.log(LogLevel::Warn, scope, message, payload);
    }

    pub fn debug(&self, scope: &str, message: impl Into<String>, payload: Option<Value>) {
        self.log(LogLevel::Debug, scope, message, payload);
    }

    pub fn error(&self, scope: &str, message: impl Into<String>, payload: Option<Value>) {
        self.log(LogLevel::Error, scope, message, payload);
    }
}

impl std::fmt::Debug for AppLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppLogger")
            .field("pending", &self.tx.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_reach_receiver() {
        let (logger, rx) = AppLogger::new(8);
        logger.info("login", "Submitting", Some(json!({ "username": "12345678-5" })));
        logger.error("login", "Failed", None);

        let first = rx.try_recv().expect("first record");
        assert_eq!(first.level, LogLevel::Info);
        assert_eq!(&*first.scope, "login");
        assert_eq!(first.payload, Some(json!({ "username": "12345678-5" })));

        let second = rx.try_recv().expect("second record");
        assert_eq!(second.level, LogLevel::Error);
        assert_eq!(second.payload, None);
    }

    #[test]
    fn test_full_channel_drops_silently() {
        let (logger, rx) = AppLogger::new(1);
        logger.warn("seats", "one", None);
        logger.warn("seats", "two", None);
        assert_eq!(rx.len(), 1);
        assert_eq!(rx.try_recv().expect("kept record").message, "one");
    }

    #[test]
    fn test_disconnected_receiver_is_ignored() {
        let (logger, rx) = AppLogger::new(4);
        drop(rx);
        logger.debug("seats", "nobody listening", None);
    }
}
