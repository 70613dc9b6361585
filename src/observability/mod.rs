//! Observability module for monitoring and metrics.
//!
//! This module provides validation counters and timing helpers that log
//! through `tracing`.

pub mod metrics;

pub use metrics::{MetricsSnapshot, Timer, ValidationMetrics};
