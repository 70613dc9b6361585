//! Error types for the PE ID validator.
//!
//! Rejected identifiers are not errors (see [`crate::domain::InvalidReason`]).
//! The types here cover configuration and service-level failures only.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A .env file exists but could not be read
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors returned by the validation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A batch request carried no items
    #[error("Batch must contain at least one item")]
    EmptyBatch,

    /// A batch request exceeded the configured limit
    #[error("Batch of {size} items exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// The identifier kind was not recognised
    #[error("Unknown identifier kind: {0}")]
    UnknownKind(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
