//! PE ID Validator MCP Server - Main entry point
//!
//! Serves DNI and RUC validation tools over the Model Context Protocol on
//! stdio.

use anyhow::Result;
use pe_id_validator::services::{ValidationService, ValidationServiceImpl};
use pe_id_validator::{Config, PeIdMcpServer, ValidationMetrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = ValidationMetrics::new();
    let validation_service = Arc::new(ValidationServiceImpl::new(
        metrics.clone(),
        config.max_batch_size,
    )) as Arc<dyn ValidationService>;

    let server = PeIdMcpServer::new(validation_service, config.include_messages);

    info!(
        "PE ID Validator initialized (max batch size: {}, messages: {})",
        config.max_batch_size, config.include_messages
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    pe_id_validator::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("PE ID Validator shutdown complete");
    Ok(())
}
