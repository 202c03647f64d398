//! Catalog Store
//!
//! Owns the ordered list of service records. Every mutation serializes the
//! whole list and writes it through the persistence port before the new list
//! replaces the old one, so a failed write leaves the catalog unchanged.

use std::collections::HashSet;

use tariff_core::domain::{ServiceId, ServiceRecord};
use tariff_core::dto::service::NewService;
use tariff_core::validation::validate_record;

use crate::error::StoreError;
use crate::ids::IdGenerator;
use crate::port::KvStore;

/// Key under which the record list is stored
pub const STORAGE_KEY: &str = "healthcareServices";

pub type Result<T> = std::result::Result<T, StoreError>;

/// Ordered, write-through list of service records
pub struct CatalogStore<P, G> {
    port: P,
    ids: G,
    records: Vec<ServiceRecord>,
}

impl<P: KvStore, G: IdGenerator> CatalogStore<P, G> {
    /// Loads the catalog from `port`
    ///
    /// Never fails: absent or unreadable data yields an empty catalog, and
    /// entries that do not decode into a valid record are skipped.
    pub fn load(port: P, mut ids: G) -> Self {
        let records = match port.get(STORAGE_KEY) {
            Ok(Some(raw)) => decode_records(&raw),
            Ok(None) => {
                tracing::debug!("No stored catalog under {:?}, starting empty", STORAGE_KEY);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read stored catalog, starting empty: {}", e);
                Vec::new()
            }
        };

        for record in &records {
            ids.observe(record.id);
        }

        tracing::debug!("Loaded {} service(s)", records.len());

        Self {
            port,
            ids,
            records,
        }
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn get(&self, id: ServiceId) -> Option<&ServiceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: ServiceId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The persistence port this store writes through
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Appends a new record with a fresh identifier
    pub fn create(&mut self, service: NewService) -> Result<ServiceRecord> {
        let id = self.fresh_id()?;
        let record = service.into_record(id);

        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;

        tracing::info!("Service created: {} ({})", record.name, record.id);

        Ok(record)
    }

    /// Replaces the record with identifier `id`, keeping its position
    ///
    /// Returns `Ok(None)` without writing if no such record exists.
    pub fn update(&mut self, id: ServiceId, service: NewService) -> Result<Option<ServiceRecord>> {
        if !self.contains(id) {
            tracing::debug!("Update skipped, no service {}", id);
            return Ok(None);
        }

        let updated = service.into_record(id);
        let next = self
            .records
            .iter()
            .map(|r| if r.id == id { updated.clone() } else { r.clone() })
            .collect();
        self.commit(next)?;

        tracing::info!("Service updated: {} ({})", updated.name, updated.id);

        Ok(Some(updated))
    }

    /// Removes the record with identifier `id`
    ///
    /// Returns `Ok(false)` without writing if no such record exists.
    pub fn delete(&mut self, id: ServiceId) -> Result<bool> {
        if !self.contains(id) {
            tracing::debug!("Delete skipped, no service {}", id);
            return Ok(false);
        }

        let next = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.commit(next)?;

        tracing::info!("Service deleted: {}", id);

        Ok(true)
    }

    fn fresh_id(&mut self) -> Result<ServiceId> {
        // A generator yielding distinct ids must hit a free one within len + 1 draws.
        let attempts = self.records.len() + 1;
        for _ in 0..attempts {
            let id = self.ids.next_id();
            if !self.contains(id) {
                return Ok(id);
            }
        }
        Err(StoreError::IdsExhausted { attempts })
    }

    fn commit(&mut self, next: Vec<ServiceRecord>) -> Result<()> {
        let blob = serde_json::to_string(&next)?;
        self.port.set(STORAGE_KEY, &blob)?;
        self.records = next;
        Ok(())
    }
}

// =============================================================================
// Decoding
// =============================================================================

fn decode_records(raw: &str) -> Vec<ServiceRecord> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Stored catalog is malformed, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let record: ServiceRecord = match serde_json::from_value(entry) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping stored entry {}: {}", index, e);
                continue;
            }
        };

        if let Err(errors) = validate_record(&record) {
            tracing::warn!("Skipping stored service {}: {}", record.id, errors);
            continue;
        }

        if !seen.insert(record.id) {
            tracing::warn!("Skipping stored service {}: duplicate identifier", record.id);
            continue;
        }

        records.push(record);
    }

    records
}
