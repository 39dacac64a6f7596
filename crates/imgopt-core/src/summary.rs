//! Aggregated result of a run and small formatting helpers for the report.

use crate::catalog::ImageSpec;

/// What happened to one successful item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Artifact was already present; nothing fetched.
    Skipped { bytes: u64 },
    /// Fetched, converted and written.
    Written { downloaded: u64, written: u64 },
}

impl ItemOutcome {
    /// Size of the artifact on disk after this item.
    pub fn artifact_bytes(&self) -> u64 {
        match self {
            ItemOutcome::Skipped { bytes } => *bytes,
            ItemOutcome::Written { written, .. } => *written,
        }
    }
}

/// Counts for the final report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    /// Sum of artifact sizes for every succeeded item (skipped ones included).
    pub total_bytes: u64,
    /// Identifiers of failed items, in processing order.
    pub failed: Vec<&'static str>,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record<E>(&mut self, spec: &ImageSpec, result: &Result<ItemOutcome, E>) {
        match result {
            Ok(outcome) => {
                self.succeeded += 1;
                self.total_bytes += outcome.artifact_bytes();
            }
            Err(_) => self.failed.push(spec.id),
        }
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

pub fn kib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

pub fn mib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

/// Percentage by which `written` is smaller than `downloaded` (negative if larger).
pub fn savings_percent(downloaded: u64, written: u64) -> f64 {
    if downloaded == 0 {
        return 0.0;
    }
    (downloaded as f64 - written as f64) / downloaded as f64 * 100.0
}

/// First `max` characters of `s` (char-boundary safe).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
