//! Domain value objects and types.
//!
//! This module contains the outcome types produced by the validators and
//! type-safe wrappers for identifiers that have already passed validation.
//! The wrappers validate at construction time so an invalid DNI or RUC can
//! never be represented once it leaves the validation boundary.

pub mod dni;
pub mod errors;
pub mod kind;
pub mod result;
pub mod ruc;

pub use dni::Dni;
pub use errors::InvalidReason;
pub use kind::IdentifierKind;
pub use result::ValidationResult;
pub use ruc::{Ruc, RucFormat};
