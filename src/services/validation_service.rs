//! Validation service layer.
//!
//! Business rules around the validators: batch limits and metrics.

use crate::domain::{IdentifierKind, ValidationResult};
use crate::error::{ServiceError, ServiceResult};
use crate::observability::{MetricsSnapshot, Timer, ValidationMetrics};
use crate::validation;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One entry of a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    pub kind: IdentifierKind,
    pub value: String,
}

impl BatchItem {
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Outcome for one batch entry, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItemResult {
    pub kind: IdentifierKind,
    pub input: String,
    pub result: ValidationResult,
}

/// Validation service trait for business operations.
#[async_trait]
pub trait ValidationService: Send + Sync {
    /// Validate a single DNI.
    async fn validate_dni(&self, value: &str) -> ValidationResult;

    /// Validate a single RUC.
    async fn validate_ruc(&self, value: &str) -> ValidationResult;

    /// Validate a mixed batch of identifiers.
    async fn validate_batch(&self, items: Vec<BatchItem>) -> ServiceResult<Vec<BatchItemResult>>;

    /// Current validation counters.
    fn metrics(&self) -> MetricsSnapshot;
}

/// Default implementation of ValidationService.
pub struct ValidationServiceImpl {
    metrics: ValidationMetrics,
    max_batch_size: usize,
}

impl ValidationServiceImpl {
    /// Create a new validation service.
    pub fn new(metrics: ValidationMetrics, max_batch_size: usize) -> Self {
        Self {
            metrics,
            max_batch_size,
        }
    }

    /// Validate one value and record the outcome.
    fn run(&self, kind: IdentifierKind, value: &str) -> ValidationResult {
        let timer = Timer::new(format!("validate_{}", kind));
        let result = validation::validate(kind, value);
        timer.finish();

        self.metrics.track_validation(kind, &result);
        result
    }

    /// Validate batch size.
    fn validate_batch_size(&self, size: usize) -> ServiceResult<()> {
        if size == 0 {
            return Err(ServiceError::EmptyBatch);
        }
        if size > self.max_batch_size {
            return Err(ServiceError::BatchTooLarge {
                size,
                max: self.max_batch_size,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ValidationService for ValidationServiceImpl {
    async fn validate_dni(&self, value: &str) -> ValidationResult {
        self.run(IdentifierKind::Dni, value)
    }

    async fn validate_ruc(&self, value: &str) -> ValidationResult {
        self.run(IdentifierKind::Ruc, value)
    }

    async fn validate_batch(&self, items: Vec<BatchItem>) -> ServiceResult<Vec<BatchItemResult>> {
        if let Err(e) = self.validate_batch_size(items.len()) {
            self.metrics.track_rejected_batch(items.len());
            return Err(e);
        }

        tracing::debug!(size = items.len(), "Validating batch");

        let results = items
            .into_iter()
            .map(|item| {
                let result = self.run(item.kind, &item.value);
                BatchItemResult {
                    kind: item.kind,
                    input: item.value,
                    result,
                }
            })
            .collect();

        Ok(results)
    }

    fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
