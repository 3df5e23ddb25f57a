//! # Airport HTTP Server Module
//!
//! Axum application exposing the airport directory.
//!
//! # Endpoints
//!
//! - `/` - Landing page
//! - `/api-docs` - OpenAPI description
//! - `/health` - Health check
//! - `/airports`, `/airports/{icao}` - Directory operations

pub mod airport_routes;
pub mod config;
pub mod docs_routes;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::AirportServer;
