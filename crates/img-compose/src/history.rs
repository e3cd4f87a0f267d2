//! Activity log
//!
//! A bounded, most-recent-first record of completed operations, kept
//! outside the pipeline itself. Persistence is fire-and-forget: a
//! failed write is reported on the diagnostic channel and never fails
//! the operation that produced the entry.

use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::types::*;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// The kind of operation an entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    /// Single-image compression
    Compress,
    /// Multi-image PDF export
    PdfExport,
}

/// One completed operation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: ActivityKind,
    /// Name of the produced output file
    pub file_name: String,
    /// Human-readable summary, e.g. "3 images, 1.84 MB"
    pub summary: String,
}

/// Bounded activity log, newest entry first
#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    limit: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl ActivityLog {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a completed operation. Once the log is full, the oldest
    /// entry is dropped silently.
    pub fn record(&mut self, kind: ActivityKind, file_name: impl Into<String>, summary: impl Into<String>) {
        self.entries.push_front(ActivityEntry {
            timestamp: Utc::now(),
            kind,
            file_name: file_name.into(),
            summary: summary.into(),
        });
        self.entries.truncate(self.limit);
    }

    /// Entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write the log to disk as JSON. Failures are reported to the
    /// diagnostic channel only; the caller's operation never fails on a
    /// log write.
    #[cfg(feature = "serde")]
    pub async fn persist(&self, path: impl AsRef<std::path::Path>) {
        if let Err(e) = self.try_persist(path.as_ref()).await {
            log::warn!("Failed to persist activity log: {}", e);
        }
    }

    #[cfg(feature = "serde")]
    async fn try_persist(&self, path: &std::path::Path) -> Result<()> {
        let entries: Vec<&ActivityEntry> = self.entries.iter().collect();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| ComposeError::InvalidArgument(format!("Failed to serialize log: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Load a previously persisted log, newest entry first
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>, limit: usize) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let entries: Vec<ActivityEntry> = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::InvalidArgument(format!("Failed to parse log: {}", e)))?;
        let mut log = Self::new(limit);
        log.entries.extend(entries.into_iter().take(limit));
        Ok(log)
    }
}
