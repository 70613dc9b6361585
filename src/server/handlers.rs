//! MCP tool handlers for the validator server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! A rejected identifier is a successful tool call with `"status": "invalid"`;
//! MCP errors are reserved for malformed requests.

use super::messages::result_json;
use crate::domain::IdentifierKind;
use crate::error::ServiceError;
use crate::services::{BatchItem, ValidationService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes DNI and RUC validation tools.
#[derive(Clone)]
pub struct PeIdMcpServer {
    validation_service: Arc<dyn ValidationService>,
    include_messages: bool,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for PeIdMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "pe-id-validator".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Validates Peruvian identifiers: DNI (8 digits) and RUC (8 or 11 digits with a SUNAT modulo-11 check digit). Blank input is reported as valid with an empty value.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct IdentifierParams {
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct BatchEntryParams {
    kind: String,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ValidateIdentifiersParams {
    items: Vec<BatchEntryParams>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Request problems are the caller's to fix
fn to_invalid_params(e: ServiceError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn parse_batch(items: Vec<BatchEntryParams>) -> Result<Vec<BatchItem>, ServiceError> {
    items
        .into_iter()
        .map(|entry| {
            let kind = entry
                .kind
                .parse::<IdentifierKind>()
                .map_err(|_| ServiceError::UnknownKind(entry.kind.clone()))?;
            Ok(BatchItem::new(kind, entry.value))
        })
        .collect()
}

// Tool router implementation
#[tool_router]
impl PeIdMcpServer {
    /// Create a new validator MCP server.
    pub fn new(validation_service: Arc<dyn ValidationService>, include_messages: bool) -> Self {
        Self {
            validation_service,
            include_messages,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate a Peruvian DNI number.
    #[tool(
        description = "Validate a Peruvian DNI (Documento Nacional de Identidad). A DNI is exactly 8 digits. Returns status 'valid' with the value, or 'invalid' with a reason (not_numeric, wrong_length)."
    )]
    async fn validate_dni(
        &self,
        params: Parameters<IdentifierParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self.validation_service.validate_dni(&params.value).await;
        let reply = result_json(
            IdentifierKind::Dni,
            &params.value,
            &result,
            self.include_messages,
        );

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&reply).map_err(to_mcp_error)?,
        )]))
    }

    /// Validate a Peruvian RUC number.
    #[tool(
        description = "Validate a Peruvian RUC (Registro Unico de Contribuyentes). A RUC is 8 or 11 digits and ends in a SUNAT modulo-11 check digit. Returns status 'valid' with the value, or 'invalid' with a reason (not_numeric, wrong_length, bad_checksum)."
    )]
    async fn validate_ruc(
        &self,
        params: Parameters<IdentifierParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self.validation_service.validate_ruc(&params.value).await;
        let reply = result_json(
            IdentifierKind::Ruc,
            &params.value,
            &result,
            self.include_messages,
        );

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&reply).map_err(to_mcp_error)?,
        )]))
    }

    /// Validate several identifiers in one call.
    #[tool(
        description = "Validate a batch of Peruvian identifiers. Each item has a kind ('dni' or 'ruc') and a value. Results are returned in request order."
    )]
    async fn validate_identifiers(
        &self,
        params: Parameters<ValidateIdentifiersParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!(size = params.items.len(), "MCP Handler: validate_identifiers called");

        let items = parse_batch(params.items).map_err(to_invalid_params)?;
        let results = self
            .validation_service
            .validate_batch(items)
            .await
            .map_err(|e| {
                tracing::warn!("Batch validation refused: {}", e);
                to_invalid_params(e)
            })?;

        let valid_count = results.iter().filter(|r| r.result.is_valid()).count();
        let response = serde_json::json!({
            "total": results.len(),
            "valid_count": valid_count,
            "invalid_count": results.len() - valid_count,
            "results": results.iter().map(|r| {
                result_json(r.kind, &r.input, &r.result, self.include_messages)
            }).collect::<Vec<_>>(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }

    /// Report validation counters since the server started.
    #[tool(description = "Report how many identifiers have been validated since startup, broken down by kind and rejection reason")]
    async fn get_validation_stats(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.validation_service.metrics();

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "total_checks": snapshot.total_checks(),
            "invalid": snapshot.invalid(),
            "counters": snapshot,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
