//! # Airport Directory
//!
//! The five directory operations over an `AirportStore`.
//!
//! Each operation holds the store lock for its whole check-then-mutate
//! sequence, so concurrent requests never observe a half-applied write.
//!
//! Two behaviours of the legacy API are kept by default and can be switched
//! off with [`CompatMode::Corrected`]:
//! - update removes the old record before validating the body, so a 400
//!   loses it
//! - delete of an unknown code answers 400 instead of 404

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::airport::{body_icao, Airport};
use super::errors::{DirectoryError, DirectoryResult};
use super::params::ListParams;
use super::store::{AirportStore, MemoryAirportStore};

/// Status-code and write-ordering compatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompatMode {
    /// Reproduce the legacy API exactly
    #[default]
    Legacy,
    /// Validate before removing on update, 409 on conflicting rename,
    /// 404 on delete of an unknown code
    Corrected,
}

/// Airport directory service
pub struct AirportDirectory<S: AirportStore = MemoryAirportStore> {
    store: RwLock<S>,
    mode: CompatMode,
}

impl AirportDirectory<MemoryAirportStore> {
    /// Directory over an in-memory store holding `records`
    pub fn from_records(records: Vec<Airport>, mode: CompatMode) -> Self {
        Self::new(MemoryAirportStore::with_records(records), mode)
    }
}

impl<S: AirportStore> AirportDirectory<S> {
    pub fn new(store: S, mode: CompatMode) -> Self {
        Self {
            store: RwLock::new(store),
            mode,
        }
    }

    pub fn mode(&self) -> CompatMode {
        self.mode
    }

    /// Consume the directory and hand back its store
    pub fn into_store(self) -> DirectoryResult<S> {
        self.store.into_inner().map_err(|_| DirectoryError::lock_poisoned())
    }

    fn read(&self) -> DirectoryResult<RwLockReadGuard<'_, S>> {
        self.store.read().map_err(|_| DirectoryError::lock_poisoned())
    }

    fn write(&self) -> DirectoryResult<RwLockWriteGuard<'_, S>> {
        self.store.write().map_err(|_| DirectoryError::lock_poisoned())
    }

    /// Number of stored records
    pub fn len(&self) -> DirectoryResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DirectoryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Filtered, paginated listing. An empty page is an error.
    pub fn list(&self, params: &ListParams) -> DirectoryResult<Vec<Airport>> {
        let store = self.read()?;
        let page: Vec<Airport> = params.apply(store.list()).into_iter().cloned().collect();

        debug!(
            city = params.city.as_deref(),
            country = params.country.as_deref(),
            page = params.page,
            page_size = params.page_size,
            returned = page.len(),
            "listed airports"
        );

        if page.is_empty() {
            return Err(DirectoryError::ListEmpty);
        }
        Ok(page)
    }

    /// Look up one record by code
    pub fn get(&self, icao: &str) -> DirectoryResult<Airport> {
        let store = self.read()?;
        store.find(icao).cloned().ok_or(DirectoryError::AirportNotFound)
    }

    /// Create a record from a request body.
    ///
    /// The conflict check runs before validation: a body whose `icao` is
    /// already taken is a conflict even if it lacks other required fields.
    pub fn create(&self, body: &Value) -> DirectoryResult<Airport> {
        let mut store = self.write()?;

        if let Some(icao) = body_icao(body) {
            if store.find(&icao).is_some() {
                warn!(%icao, "create rejected: icao already exists");
                return Err(DirectoryError::Conflict);
            }
        }

        let airport = Airport::normalize(body).ok_or_else(|| {
            warn!("create rejected: missing required field");
            DirectoryError::BadRequest
        })?;

        info!(icao = %airport.icao, "airport created");
        store.insert(airport.clone());
        Ok(airport)
    }

    /// Replace the record stored under `icao` with one built from `body`.
    ///
    /// The replacement is appended, so it moves to the end of the listing.
    pub fn update(&self, icao: &str, body: &Value) -> DirectoryResult<Airport> {
        let mut store = self.write()?;

        if store.find(icao).is_none() {
            return Err(DirectoryError::UpdateTargetNotFound);
        }

        let airport = match self.mode {
            CompatMode::Legacy => {
                store.remove(icao);
                Airport::normalize(body).ok_or_else(|| {
                    warn!(icao, "update rejected after removal: missing required field");
                    DirectoryError::BadRequest
                })?
            }
            CompatMode::Corrected => {
                let airport = Airport::normalize(body).ok_or_else(|| {
                    warn!(icao, "update rejected: missing required field");
                    DirectoryError::BadRequest
                })?;
                if airport.icao != icao && store.find(&airport.icao).is_some() {
                    warn!(icao, new_icao = %airport.icao, "update rejected: icao already exists");
                    return Err(DirectoryError::Conflict);
                }
                store.remove(icao);
                airport
            }
        };

        info!(icao, new_icao = %airport.icao, "airport updated");
        store.insert(airport.clone());
        Ok(airport)
    }

    /// Remove and return the record stored under `icao`
    pub fn delete(&self, icao: &str) -> DirectoryResult<Airport> {
        let mut store = self.write()?;

        match store.remove(icao) {
            Some(airport) => {
                info!(icao, "airport deleted");
                Ok(airport)
            }
            None => match self.mode {
                CompatMode::Legacy => Err(DirectoryError::BadRequest),
                CompatMode::Corrected => Err(DirectoryError::AirportNotFound),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directory(mode: CompatMode) -> AirportDirectory {
        AirportDirectory::from_records(
            vec![
                Airport::new("AAAA", "Alpha Field", "Alpha"),
                Airport::new("BBBB", "Bravo Field", "Bravo"),
                Airport::new("CCCC", "Charlie Field", "Charlie"),
            ],
            mode,
        )
    }

    fn codes(directory: &AirportDirectory) -> Vec<String> {
        directory
            .list(&ListParams::default())
            .unwrap()
            .into_iter()
            .map(|a| a.icao)
            .collect()
    }

    #[test]
    fn test_create_then_get() {
        let dir = directory(CompatMode::Legacy);
        let created = dir
            .create(&json!({"icao": "YANA", "name": "Yana Airport", "city": "Oryol"}))
            .unwrap();

        assert_eq!(dir.get("YANA").unwrap(), created);
        assert_eq!(codes(&dir).last().map(String::as_str), Some("YANA"));
    }

    #[test]
    fn test_create_conflict_checked_before_validation() {
        let dir = directory(CompatMode::Legacy);
        assert_eq!(dir.create(&json!({"icao": "AAAA"})), Err(DirectoryError::Conflict));
        assert_eq!(
            dir.create(&json!({"icao": "AAAA", "name": "n", "city": "c"})),
            Err(DirectoryError::Conflict)
        );
        assert_eq!(dir.len().unwrap(), 3);
    }

    #[test]
    fn test_create_numeric_icao_conflicts_with_stored_text() {
        let dir = directory(CompatMode::Legacy);
        dir.create(&json!({"icao": "1234", "name": "n", "city": "c"}))
            .unwrap();

        assert_eq!(
            dir.create(&json!({"icao": 1234, "name": "m", "city": "d"})),
            Err(DirectoryError::Conflict)
        );
        assert_eq!(dir.get("1234").unwrap().name, "n");
        assert_eq!(dir.len().unwrap(), 4);
    }

    #[test]
    fn test_create_missing_field() {
        let dir = directory(CompatMode::Legacy);
        assert_eq!(
            dir.create(&json!({"icao": "SERG", "city": "Oryol"})),
            Err(DirectoryError::BadRequest)
        );
        assert_eq!(dir.len().unwrap(), 3);
    }

    #[test]
    fn test_list_empty_page_is_error() {
        let dir = directory(CompatMode::Legacy);
        assert_eq!(
            dir.list(&ListParams::default().with_page(2, 3)),
            Err(DirectoryError::ListEmpty)
        );
        assert_eq!(
            dir.list(&ListParams::default().with_city("Nowhere")),
            Err(DirectoryError::ListEmpty)
        );
    }

    #[test]
    fn test_update_moves_record_to_end() {
        let dir = directory(CompatMode::Legacy);
        dir.update(
            "AAAA",
            &json!({"icao": "AAAA", "name": "Alpha Field Airport", "city": "Alpha"}),
        )
        .unwrap();

        assert_eq!(codes(&dir), vec!["BBBB", "CCCC", "AAAA"]);
        assert_eq!(dir.get("AAAA").unwrap().name, "Alpha Field Airport");
    }

    #[test]
    fn test_update_unknown_code() {
        for mode in [CompatMode::Legacy, CompatMode::Corrected] {
            let dir = directory(mode);
            assert_eq!(
                dir.update("ZZZZ", &json!({"icao": "ZZZZ", "name": "n", "city": "c"})),
                Err(DirectoryError::UpdateTargetNotFound)
            );
        }
    }

    #[test]
    fn test_legacy_update_loses_record_on_bad_body() {
        let dir = directory(CompatMode::Legacy);
        assert_eq!(
            dir.update("AAAA", &json!({"icao": "AAAA", "city": "Alpha"})),
            Err(DirectoryError::BadRequest)
        );
        assert_eq!(dir.get("AAAA"), Err(DirectoryError::AirportNotFound));
        assert_eq!(dir.len().unwrap(), 2);
    }

    #[test]
    fn test_corrected_update_keeps_record_on_bad_body() {
        let dir = directory(CompatMode::Corrected);
        assert_eq!(
            dir.update("AAAA", &json!({"icao": "AAAA", "city": "Alpha"})),
            Err(DirectoryError::BadRequest)
        );
        assert_eq!(dir.get("AAAA").unwrap().name, "Alpha Field");
        assert_eq!(codes(&dir), vec!["AAAA", "BBBB", "CCCC"]);
    }

    #[test]
    fn test_legacy_update_allows_duplicate_rename() {
        let dir = directory(CompatMode::Legacy);
        dir.update("AAAA", &json!({"icao": "BBBB", "name": "Dup", "city": "Bravo"}))
            .unwrap();

        assert_eq!(codes(&dir), vec!["BBBB", "CCCC", "BBBB"]);
    }

    #[test]
    fn test_corrected_update_rejects_duplicate_rename() {
        let dir = directory(CompatMode::Corrected);
        assert_eq!(
            dir.update("AAAA", &json!({"icao": "BBBB", "name": "Dup", "city": "Bravo"})),
            Err(DirectoryError::Conflict)
        );
        assert_eq!(codes(&dir), vec!["AAAA", "BBBB", "CCCC"]);

        dir.update("AAAA", &json!({"icao": "DDDD", "name": "Delta", "city": "Delta"}))
            .unwrap();
        assert_eq!(codes(&dir), vec!["BBBB", "CCCC", "DDDD"]);
    }

    #[test]
    fn test_delete_returns_record() {
        let dir = directory(CompatMode::Legacy);
        let deleted = dir.delete("BBBB").unwrap();

        assert_eq!(deleted, Airport::new("BBBB", "Bravo Field", "Bravo"));
        assert_eq!(dir.get("BBBB"), Err(DirectoryError::AirportNotFound));
    }

    #[test]
    fn test_delete_unknown_code_by_mode() {
        assert_eq!(
            directory(CompatMode::Legacy).delete("ZZZZ"),
            Err(DirectoryError::BadRequest)
        );
        assert_eq!(
            directory(CompatMode::Corrected).delete("ZZZZ"),
            Err(DirectoryError::AirportNotFound)
        );
    }

    #[test]
    fn test_compat_mode_serde() {
        assert_eq!(serde_json::to_string(&CompatMode::Legacy).unwrap(), "\"legacy\"");
        let mode: CompatMode = serde_json::from_str("\"corrected\"").unwrap();
        assert_eq!(mode, CompatMode::Corrected);
    }
}
