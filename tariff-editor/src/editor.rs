//! Catalog editor
//!
//! Wires one catalog store to one form session. Every user event (field
//! change, submit, cancel, edit, delete) enters through here.

use tariff_core::domain::{Field, ServiceId};
use tariff_store::{CatalogStore, IdGenerator, KvStore, StoreError};

use crate::error::{EditorError, SubmitError};
use crate::list::{self, RowAction, ServiceRow};
use crate::session::{FormSession, SubmitOutcome};

pub struct CatalogEditor<P, G> {
    store: CatalogStore<P, G>,
    session: FormSession,
}

impl<P: KvStore, G: IdGenerator> CatalogEditor<P, G> {
    pub fn new(store: CatalogStore<P, G>) -> Self {
        Self {
            store,
            session: FormSession::new(),
        }
    }

    /// Loads the catalog from `port` and starts with an empty form
    pub fn load(port: P, ids: G) -> Self {
        Self::new(CatalogStore::load(port, ids))
    }

    pub fn store(&self) -> &CatalogStore<P, G> {
        &self.store
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Current list view
    pub fn rows(&self) -> Vec<ServiceRow> {
        list::rows(self.store.records(), self.session.editing_id())
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.session.set_field(field, value);
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.session.submit(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Loads a copy of record `id` into the form
    pub fn select_for_edit(&mut self, id: ServiceId) -> Result<(), EditorError> {
        let record = self.store.get(id).ok_or(EditorError::NotFound(id))?;
        self.session.begin_edit(record);
        Ok(())
    }

    /// Deletes record `id`; absent ids are a no-op
    ///
    /// If the record was loaded in the form, the form goes back to creating.
    pub fn delete(&mut self, id: ServiceId) -> Result<bool, StoreError> {
        let deleted = self.store.delete(id)?;
        self.session.on_deleted(id);
        Ok(deleted)
    }

    /// Runs a row action
    pub fn dispatch(&mut self, action: RowAction) -> Result<(), EditorError> {
        match action {
            RowAction::Edit(id) => self.select_for_edit(id),
            RowAction::Delete(id) => {
                self.delete(id)?;
                Ok(())
            }
        }
    }
}
