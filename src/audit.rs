//! Bounded, append-only audit log.
//!
//! Records security-relevant events (connection attempts, violations,
//! emergency bypasses, investigation verdicts). The log keeps the most
//! recent [`crate::constants::AUDIT_LOG_CAPACITY`] entries, evicting the
//! oldest first. Appends are serialized through a single interior lock so
//! concurrent requests can log safely.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// One timestamped audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Free-text event description.
    pub message: String,
}

impl AuditEntry {
    fn now(message: String) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self { timestamp, message }
    }
}

/// Shared handle to the bounded audit log.
///
/// Cloning is cheap; all clones append to the same log.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Arc<Mutex<VecDeque<AuditEntry>>>,
}

impl AuditLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest if the log is full.
    pub fn append(&self, message: impl Into<String>) {
        let entry = AuditEntry::now(message.into());
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == constants::AUDIT_LOG_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recent `n` entries, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .map(|entries| {
                let skip = entries.len().saturating_sub(n);
                entries.iter().skip(skip).cloned().collect()
            })
            .unwrap_or_default()
    }

    /// All retained entries, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<AuditEntry> {
        self.recent(constants::AUDIT_LOG_CAPACITY)
    }

    /// Persist the log as JSON.
    ///
    /// # Errors
    ///
    /// Returns a message if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let entries = self.snapshot();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("Failed to serialize audit log: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write audit log: {e}"))
    }

    /// Load a previously persisted log; absent file yields an empty log.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let log = Self::new();
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(entries) = serde_json::from_str::<Vec<AuditEntry>>(&content) {
                if let Ok(mut inner) = log.entries.lock() {
                    let skip = entries.len().saturating_sub(constants::AUDIT_LOG_CAPACITY);
                    inner.extend(entries.into_iter().skip(skip));
                }
            }
        }
        log
    }
}
