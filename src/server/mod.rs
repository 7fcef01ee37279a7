//! HTTP interface to the preprocessing pipeline

pub mod endpoints;
pub mod schemas;

use axum::Router;
use log::{info, warn};
use std::sync::Arc;

use crate::error::{EtlError, Result};
use crate::processing::PreprocessingPipeline;
use endpoints::{AppState, dispatch};

/// Environment variable that overrides the configured port
pub const PORT_ENV: &str = "PORT";

/// Every request goes through [`dispatch`], which matches on path fragments
pub fn router(pipeline: Arc<PreprocessingPipeline>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(AppState { pipeline })
}

/// Bind `host:port` and serve until the process is stopped
pub async fn serve(pipeline: Arc<PreprocessingPipeline>, host: &str, port: u16) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EtlError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Preprocessing service listening on http://{}", addr);
    axum::serve(listener, router(pipeline))
        .await
        .map_err(|e| EtlError::Server(e.to_string()))
}

/// `--port` wins over `PORT`, which wins over the config file
pub fn resolve_port(cli_port: Option<u16>, config_port: u16) -> u16 {
    if let Some(port) = cli_port {
        return port;
    }

    match std::env::var(PORT_ENV) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {} value: {}", PORT_ENV, value);
            config_port
        }),
        Err(_) => config_port,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_port_wins() {
        assert_eq!(resolve_port(Some(9000), 8080), 9000);
    }
}
