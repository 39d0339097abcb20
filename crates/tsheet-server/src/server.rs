use tokio::net::TcpListener;

use crate::config::TsheetConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// Term-sheet comparison HTTP server.
pub struct TsheetServer {
    config: TsheetConfig,
}

impl TsheetServer {
    /// Validate the configuration and construct the server.
    pub fn new(config: TsheetConfig) -> ServerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TsheetConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        build_router(&self.config)
    }

    /// Serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.server.bind_addr).await?;
        tracing::info!(
            addr = %self.config.server.bind_addr,
            extractor = ?self.config.extractor,
            "tsheet server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("tsheet server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = TsheetServer::new(TsheetConfig::default()).unwrap();
        assert_eq!(server.config().server.bind_addr, "127.0.0.1:8000".parse().unwrap());
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = TsheetConfig::default();
        config.server.max_upload_bytes = 0;
        assert!(TsheetServer::new(config).is_err());
    }

    #[tokio::test]
    async fn router_builds() {
        let server = TsheetServer::new(TsheetConfig::default()).unwrap();
        assert!(server.router().is_ok());
    }
}
