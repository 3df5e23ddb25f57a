//! # Seed Dataset
//!
//! Loads the airport records the directory starts with. The default dataset
//! is compiled into the binary; an alternative JSON file can be given.
//!
//! A dataset is rejected as a whole when any record lacks a required field
//! or reuses a code already seen.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::airport::Airport;

/// Dataset shipped with the crate
const EMBEDDED_DATASET: &str = include_str!("../../data/airports.json");

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Record at `index` lacks icao, name or city
    #[error("Seed record {index} ('{icao}') is missing a required field")]
    MissingField { index: usize, icao: String },

    #[error("Seed record {index} reuses icao '{icao}'")]
    DuplicateIcao { index: usize, icao: String },
}

/// Load the embedded dataset
pub fn load_embedded() -> Result<Vec<Airport>, SeedError> {
    parse(EMBEDDED_DATASET)
}

/// Load a dataset from a JSON file
pub fn load_from_path(path: &Path) -> Result<Vec<Airport>, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Load from `path` when given, otherwise the embedded dataset
pub fn load(path: Option<&Path>) -> Result<Vec<Airport>, SeedError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_embedded(),
    }
}

/// Parse and validate a JSON array of airport records
pub fn parse(content: &str) -> Result<Vec<Airport>, SeedError> {
    let records: Vec<Airport> = serde_json::from_str(content)?;
    validate(&records)?;
    Ok(records)
}

fn validate(records: &[Airport]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(records.len());

    for (index, airport) in records.iter().enumerate() {
        if !airport.has_required_fields() {
            return Err(SeedError::MissingField {
                index,
                icao: airport.icao.clone(),
            });
        }
        if !seen.insert(airport.icao.as_str()) {
            return Err(SeedError::DuplicateIcao {
                index,
                icao: airport.icao.clone(),
            });
        }
    }

    Ok(())
}
