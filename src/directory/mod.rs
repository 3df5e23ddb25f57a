//! # Airport Directory Module
//!
//! In-memory directory of airport records keyed by ICAO code, with
//! filtered pagination and create/read/update/delete operations.
//!
//! The collection starts from a seed dataset and lives only as long as the
//! process.

pub mod airport;
pub mod errors;
pub mod params;
pub mod seed;
pub mod service;
pub mod store;

pub use airport::Airport;
pub use errors::{DirectoryError, DirectoryResult};
pub use params::ListParams;
pub use seed::SeedError;
pub use service::{AirportDirectory, CompatMode};
pub use store::{AirportStore, MemoryAirportStore};
