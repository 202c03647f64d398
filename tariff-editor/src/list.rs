//! List view over the catalog
//!
//! Rows are recomputed from the store on every render and carry no state of
//! their own. Actions are plain values handed back to the editor.

use tariff_core::domain::{ServiceId, ServiceRecord};

/// Action offered on every row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Load a copy of the record into the form
    Edit(ServiceId),
    /// Remove the record, without confirmation
    Delete(ServiceId),
}

impl RowAction {
    pub fn id(self) -> ServiceId {
        match self {
            RowAction::Edit(id) | RowAction::Delete(id) => id,
        }
    }
}

/// One rendered record
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRow {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    /// Price with currency sign, e.g. `$50.00`
    pub price: String,
    /// Whether this record is currently loaded in the form
    pub editing: bool,
}

impl ServiceRow {
    pub fn edit(&self) -> RowAction {
        RowAction::Edit(self.id)
    }

    pub fn delete(&self) -> RowAction {
        RowAction::Delete(self.id)
    }
}

/// Projects records into rows, in store order
pub fn rows(records: &[ServiceRecord], editing: Option<ServiceId>) -> Vec<ServiceRow> {
    records
        .iter()
        .map(|record| ServiceRow {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.formatted(),
            editing: editing == Some(record.id),
        })
        .collect()
}
