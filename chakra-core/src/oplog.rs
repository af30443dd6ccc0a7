//! # Operational log stream
//!
//! The append-only list of human-readable lines shown to the analyst — the
//! "Autonomous Forensic Sync" panel of the dashboard. Lines are plain text,
//! not structured alerts; the structured pipeline lives in chakra-safety.
//!
//! Oldest entries are pruned once the buffer reaches its cap.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Maximum lines held before the oldest are pruned.
const MAX_LOG_LINES: usize = 10_000;

pub struct OpsLog {
    lines: RwLock<Vec<String>>,
    total_appended: AtomicU64,
}

impl OpsLog {
    pub fn new() -> Self {
        Self {
            lines: RwLock::new(Vec::new()),
            total_appended: AtomicU64::new(0),
        }
    }

    /// Append one line to the stream. Lines are never edited or removed
    /// individually; only cap-pruning discards them.
    pub fn append(&self, line: impl Into<String>) {
        let line = line.into();
        info!(entry = %line, "Ops log");
        let mut lines = self.lines.write();
        if lines.len() >= MAX_LOG_LINES {
            let drain = lines.len() - MAX_LOG_LINES + 1;
            lines.drain(..drain);
        }
        lines.push(line);
        self.total_appended.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of the current stream, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lines.read().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.read().is_empty()
    }

    pub fn total_appended(&self) -> u64 {
        self.total_appended.load(Ordering::Relaxed)
    }
}

impl Default for OpsLog {
    fn default() -> Self {
        Self::new()
    }
}
