//! airport-directory - A small in-memory REST directory of airport records
//!
//! The directory starts from a seed dataset, supports filtered pagination
//! and create/read/update/delete by ICAO code, and forgets every change when
//! the process exits.

pub mod cli;
pub mod directory;
pub mod http_server;
pub mod observability;
