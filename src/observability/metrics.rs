//! Validation metrics tracking.
//!
//! Counters are shared through `Arc` so every clone of a
//! [`ValidationMetrics`] reports into the same totals.

use crate::domain::{IdentifierKind, InvalidReason, ValidationResult};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Running totals of validation outcomes.
#[derive(Debug, Clone)]
pub struct ValidationMetrics {
    dni_checks_total: Arc<AtomicU64>,
    ruc_checks_total: Arc<AtomicU64>,
    valid_total: Arc<AtomicU64>,
    blank_total: Arc<AtomicU64>,
    not_numeric_total: Arc<AtomicU64>,
    wrong_length_total: Arc<AtomicU64>,
    bad_checksum_total: Arc<AtomicU64>,
    rejected_batches_total: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub dni_checks: u64,
    pub ruc_checks: u64,
    pub valid: u64,
    pub blank: u64,
    pub not_numeric: u64,
    pub wrong_length: u64,
    pub bad_checksum: u64,
    pub rejected_batches: u64,
}

impl MetricsSnapshot {
    /// Total validations across both kinds.
    pub fn total_checks(&self) -> u64 {
        self.dni_checks + self.ruc_checks
    }

    /// Total rejected identifiers.
    pub fn invalid(&self) -> u64 {
        self.not_numeric + self.wrong_length + self.bad_checksum
    }
}

impl ValidationMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            dni_checks_total: Arc::new(AtomicU64::new(0)),
            ruc_checks_total: Arc::new(AtomicU64::new(0)),
            valid_total: Arc::new(AtomicU64::new(0)),
            blank_total: Arc::new(AtomicU64::new(0)),
            not_numeric_total: Arc::new(AtomicU64::new(0)),
            wrong_length_total: Arc::new(AtomicU64::new(0)),
            bad_checksum_total: Arc::new(AtomicU64::new(0)),
            rejected_batches_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record one validation outcome.
    pub fn track_validation(&self, kind: IdentifierKind, result: &ValidationResult) {
        match kind {
            IdentifierKind::Dni => self.dni_checks_total.fetch_add(1, Ordering::Relaxed),
            IdentifierKind::Ruc => self.ruc_checks_total.fetch_add(1, Ordering::Relaxed),
        };

        match result {
            ValidationResult::Valid { value } => {
                self.valid_total.fetch_add(1, Ordering::Relaxed);
                if value.is_empty() {
                    self.blank_total.fetch_add(1, Ordering::Relaxed);
                }
                tracing::debug!(
                    kind = %kind,
                    status = "valid",
                    blank = value.is_empty(),
                    "Identifier validated"
                );
            }
            ValidationResult::Invalid { reason } => {
                let counter = match reason {
                    InvalidReason::NotNumeric => &self.not_numeric_total,
                    InvalidReason::WrongLength => &self.wrong_length_total,
                    InvalidReason::BadChecksum => &self.bad_checksum_total,
                };
                counter.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    kind = %kind,
                    status = "invalid",
                    reason = reason.code(),
                    "Identifier rejected"
                );
            }
        }
    }

    /// Record a batch turned away before validation.
    pub fn track_rejected_batch(&self, size: usize) {
        self.rejected_batches_total.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(size = size, "Batch rejected");
    }

    /// Take a snapshot of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            dni_checks: self.dni_checks_total.load(Ordering::Relaxed),
            ruc_checks: self.ruc_checks_total.load(Ordering::Relaxed),
            valid: self.valid_total.load(Ordering::Relaxed),
            blank: self.blank_total.load(Ordering::Relaxed),
            not_numeric: self.not_numeric_total.load(Ordering::Relaxed),
            wrong_length: self.wrong_length_total.load(Ordering::Relaxed),
            bad_checksum: self.bad_checksum_total.load(Ordering::Relaxed),
            rejected_batches: self.rejected_batches_total.load(Ordering::Relaxed),
        }
    }

    /// Share of validations that were rejected (0.0 to 1.0).
    pub fn invalid_rate(&self) -> f64 {
        let snapshot = self.snapshot();
        let total = snapshot.total_checks() as f64;

        if total == 0.0 {
            0.0
        } else {
            snapshot.invalid() as f64 / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        let s = self.snapshot();
        format!(
            "Metrics Summary:\n\
             DNI Checks: {}\n\
             RUC Checks: {}\n\
             Valid: {} ({} blank)\n\
             Not Numeric: {}\n\
             Wrong Length: {}\n\
             Bad Checksum: {}\n\
             Invalid Rate: {:.2}%\n\
             Rejected Batches: {}",
            s.dni_checks,
            s.ruc_checks,
            s.valid,
            s.blank,
            s.not_numeric,
            s.wrong_length,
            s.bad_checksum,
            self.invalid_rate() * 100.0,
            s.rejected_batches,
        )
    }
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in microseconds.
    pub fn finish(self) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        tracing::debug!(
            operation = %self.operation,
            duration_us = duration_us,
            "Operation completed"
        );

        duration_us
    }
}
