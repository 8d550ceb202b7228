//! Log State
//!
//! Ring buffer of records emitted by the logging collaborator, drained from
//! its channel in batches so a burst of records causes a single re-render.

use crate::constants::LOG_DRAIN_INTERVAL_MS;
use crate::services::LogRecord;
use crossbeam_channel::Receiver;
use gpui::{Context, Task};
use std::collections::VecDeque;
use std::time::Duration;

/// A record with a stable id for keyed rendering
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub record: LogRecord,
}

/// Log panel state entity
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
    /// Whether the panel is expanded
    expanded: bool,
    drain_task: Option<Task<()>>,
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
            expanded: true,
            drain_task: None,
        }
    }

    /// Append a record, evicting the oldest at capacity
    pub fn push(&mut self, record: LogRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id: self.next_id,
            record,
        });
        self.next_id += 1;
    }

    /// Newest first
    pub fn latest(&self, limit: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.entries.clear();
        cx.notify();
    }

    pub fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    /// Start pulling records from the logger channel
    pub fn start_drain(&mut self, rx: Receiver<LogRecord>, cx: &mut Context<Self>) {
        if self.drain_task.is_some() {
            tracing::warn!("Log drain task already running");
            return;
        }

        let task = cx.spawn(async move |handle, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(LOG_DRAIN_INTERVAL_MS))
                    .await;

                let batch: Vec<LogRecord> = rx.try_iter().collect();
                if batch.is_empty() {
                    continue;
                }

                let updated = handle.update(cx, |this, cx| {
                    for record in batch {
                        this.push(record);
                    }
                    cx.notify();
                });
                if updated.is_err() {
                    break;
                }
            }
        });

        self.drain_task = Some(task);
        tracing::debug!("Started log drain task");
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LogLevel;
    use chrono::Local;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            level: LogLevel::Info,
            scope: "test".into(),
            message: message.to_string(),
            payload: None,
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_ring_buffer_eviction() {
        let mut state = LogState::new(3);
        for message in ["a", "b", "c", "d"] {
            state.push(record(message));
        }

        assert_eq!(state.len(), 3);
        let newest: Vec<_> = state.latest(10).map(|e| e.record.message.as_str()).collect();
        assert_eq!(newest, vec!["d", "c", "b"]);
        assert_eq!(state.latest(1).next().map(|e| e.id), Some(4));
    }

    #[test]
    fn test_zero_capacity() {
        let mut state = LogState::new(0);
        state.push(record("ignored"));
        assert!(state.is_empty());
    }
}
