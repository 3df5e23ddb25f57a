//! # HTTP Server
//!
//! Combines the airport, documentation and health routers into one axum
//! application and serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::airport_routes::{airport_routes, AirportState};
use super::config::{ConfigError, ServerConfig};
use super::docs_routes::docs_routes;
use super::observability_routes::health_routes;
use crate::directory::AirportDirectory;

/// HTTP server for the airport directory
pub struct AirportServer {
    config: ServerConfig,
    directory: AirportState,
    router: Router,
}

impl AirportServer {
    /// Create a server over an existing directory
    pub fn new(config: ServerConfig, directory: AirportDirectory) -> Self {
        let directory = Arc::new(directory);
        let router = Self::build_router(&config, directory.clone());
        Self {
            config,
            directory,
            router,
        }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &ServerConfig, directory: AirportState) -> Router {
        Router::new()
            .merge(docs_routes())
            .merge(health_routes(directory.clone()))
            .merge(airport_routes(directory))
            .layer(cors_layer(&config.cors_origins))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                ConfigError::InvalidAddress(self.config.socket_addr()),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(
            %addr,
            compat = ?self.directory.mode(),
            "Airport API ready. Documents at http://{}/api-docs",
            addr
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Permissive when no origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = origins.iter().filter_map(|s| s.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::CompatMode;

    fn empty_directory() -> AirportDirectory {
        AirportDirectory::from_records(Vec::new(), CompatMode::Legacy)
    }

    #[test]
    fn test_server_creation() {
        let server = AirportServer::new(ServerConfig::default(), empty_directory());
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = AirportServer::new(ServerConfig::with_port(8080), empty_directory());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origins() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = AirportServer::new(config, empty_directory()).router();
    }
}
