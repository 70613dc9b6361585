//! PE ID Validator - validation of Peruvian DNI and RUC identifiers.
//!
//! The core is a pair of pure functions, [`validate_dni`] and
//! [`validate_ruc`], that turn candidate text into a [`ValidationResult`].
//! An MCP server built on top exposes them as tools for AI assistants.
//!
//! # Architecture
//!
//! - **validation**: The validators and the RUC modulo-11 checksum schemes
//! - **domain**: Result types and validated `Dni` / `Ruc` value objects
//! - **error**: Configuration and service error types
//! - **config**: Configuration management from environment variables
//! - **observability**: Validation counters and timing
//! - **services**: Batch limits and metrics around the validators
//! - **server**: MCP protocol server
//!
//! # Example
//!
//! ```
//! use pe_id_validator::{validate_dni, validate_ruc, InvalidReason};
//!
//! assert!(validate_dni("45678912").is_valid());
//! assert_eq!(validate_ruc("1234567A").reason(), Some(InvalidReason::NotNumeric));
//! // Blank means "not filled in", not "wrong"
//! assert!(validate_ruc("").is_blank());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod server;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Dni, IdentifierKind, InvalidReason, Ruc, RucFormat, ValidationResult};
pub use error::{ConfigError, ServiceError};
pub use observability::{MetricsSnapshot, ValidationMetrics};
pub use server::PeIdMcpServer;
pub use services::{BatchItem, BatchItemResult, ValidationService, ValidationServiceImpl};
pub use validation::{
    validate, validate_dni, validate_ruc, validator_for, DniValidator, IdentifierValidator,
    RucValidator,
};
