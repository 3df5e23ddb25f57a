//! # Airport Store
//!
//! Repository seam between the directory operations and the backing
//! collection. The store itself is not synchronized; `AirportDirectory`
//! owns it behind a lock so each operation sees a consistent view.

use super::airport::Airport;

/// Repository of airport records kept in insertion order
pub trait AirportStore: Send + Sync {
    /// All records in their current order
    fn list(&self) -> &[Airport];

    /// Find a record by exact code match
    fn find(&self, icao: &str) -> Option<&Airport> {
        self.list().iter().find(|a| a.icao == icao)
    }

    /// Append a record at the end of the collection
    fn insert(&mut self, airport: Airport);

    /// Remove the first record with this code, returning it
    fn remove(&mut self, icao: &str) -> Option<Airport>;

    /// Number of stored records
    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store backed by a vector
#[derive(Debug, Clone, Default)]
pub struct MemoryAirportStore {
    records: Vec<Airport>,
}

impl MemoryAirportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records, order preserved
    pub fn with_records(records: Vec<Airport>) -> Self {
        Self { records }
    }
}

impl AirportStore for MemoryAirportStore {
    fn list(&self) -> &[Airport] {
        &self.records
    }

    fn insert(&mut self, airport: Airport) {
        self.records.push(airport);
    }

    fn remove(&mut self, icao: &str) -> Option<Airport> {
        let index = self.records.iter().position(|a| a.icao == icao)?;
        Some(self.records.remove(index))
    }
}
