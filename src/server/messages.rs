//! User-facing messages and reply formatting for tool results.

use crate::domain::{IdentifierKind, InvalidReason, ValidationResult};
use serde_json::{json, Value};

/// Message shown to a person who entered a rejected identifier.
pub fn user_message(kind: IdentifierKind, reason: InvalidReason) -> &'static str {
    match (kind, reason) {
        (_, InvalidReason::NotNumeric) => "This field requires only numbers.",
        (IdentifierKind::Dni, InvalidReason::WrongLength) => "This field requires 8 digits.",
        (IdentifierKind::Ruc, InvalidReason::WrongLength) => {
            "This field requires 8 or 11 digit numbers."
        }
        (IdentifierKind::Dni, InvalidReason::BadChecksum) => "DNI number invalid.",
        (IdentifierKind::Ruc, InvalidReason::BadChecksum) => "RUC number invalid.",
    }
}

/// JSON reply for a single validation.
pub fn result_json(
    kind: IdentifierKind,
    input: &str,
    result: &ValidationResult,
    include_messages: bool,
) -> Value {
    let mut reply = json!({
        "kind": kind,
        "input": input,
    });

    match result {
        ValidationResult::Valid { value } => {
            reply["status"] = json!("valid");
            reply["value"] = json!(value);
            reply["blank"] = json!(value.is_empty());
        }
        ValidationResult::Invalid { reason } => {
            reply["status"] = json!("invalid");
            reply["reason"] = json!(reason);
            if include_messages {
                reply["message"] = json!(user_message(kind, *reason));
            }
        }
    }

    reply
}
