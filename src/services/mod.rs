//! Application service layer.
//!
//! Services sit between the MCP handlers and the pure validators. They apply
//! request limits and record metrics; the validation outcome itself always
//! comes from [`crate::validation`].

mod validation_service;

pub use validation_service::{
    BatchItem, BatchItemResult, ValidationService, ValidationServiceImpl,
};
