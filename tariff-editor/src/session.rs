//! Form session
//!
//! Holds the draft being edited, whether it is a new service or a copy of an
//! existing one, and the errors from the last submit. The session never holds
//! a reference into the store: editing works on a copy until submit.

use tariff_core::domain::{Field, ServiceId, ServiceRecord};
use tariff_core::dto::service::ServiceDraft;
use tariff_core::validation::{self, FieldErrors};
use tariff_store::{CatalogStore, IdGenerator, KvStore};

use crate::error::SubmitError;

/// What a submit will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Submit creates a new record
    Creating,
    /// Submit replaces the record with this identifier
    Editing(ServiceId),
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(ServiceRecord),
    Updated(ServiceRecord),
    /// The record under edit no longer exists; the edit was dropped
    Discarded(ServiceId),
}

#[derive(Debug, Clone)]
pub struct FormSession {
    mode: Mode,
    draft: ServiceDraft,
    errors: FieldErrors,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Creates a session with an empty draft
    pub fn new() -> Self {
        Self {
            mode: Mode::Creating,
            draft: ServiceDraft::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &ServiceDraft {
        &self.draft
    }

    /// Errors from the most recent rejected submit
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn editing_id(&self) -> Option<ServiceId> {
        match self.mode {
            Mode::Creating => None,
            Mode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            Mode::Creating => "Add New Service",
            Mode::Editing(_) => "Edit Service",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            Mode::Creating => "Add Service",
            Mode::Editing(_) => "Update Service",
        }
    }

    /// Replaces one field of the draft
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Starts editing a copy of `record`, discarding any unsaved draft
    pub fn begin_edit(&mut self, record: &ServiceRecord) {
        self.mode = Mode::Editing(record.id);
        self.draft = ServiceDraft::from(record);
        self.errors.clear();
    }

    /// Drops the draft and returns to creating
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Reacts to a record being deleted
    ///
    /// Returns `true` if the deleted record was the one under edit, in which
    /// case the session is back to creating.
    pub fn on_deleted(&mut self, id: ServiceId) -> bool {
        if self.editing_id() == Some(id) {
            tracing::debug!("Service {} deleted while being edited, dropping edit", id);
            self.reset();
            true
        } else {
            false
        }
    }

    /// Validates the draft and creates or updates a record
    ///
    /// On validation failure the errors are kept on the session and nothing
    /// else changes. On a store failure the draft and mode are kept so the
    /// submit can be retried.
    pub fn submit<P: KvStore, G: IdGenerator>(
        &mut self,
        store: &mut CatalogStore<P, G>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let service = match validation::validate(&self.draft) {
            Ok(service) => service,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };
        self.errors.clear();

        let outcome = match self.mode {
            Mode::Creating => SubmitOutcome::Created(store.create(service)?),
            Mode::Editing(id) => match store.update(id, service)? {
                Some(record) => SubmitOutcome::Updated(record),
                None => {
                    tracing::warn!("Service {} no longer exists, discarding edit", id);
                    SubmitOutcome::Discarded(id)
                }
            },
        };

        self.reset();
        Ok(outcome)
    }

    fn reset(&mut self) {
        self.mode = Mode::Creating;
        self.draft = ServiceDraft::default();
        self.errors.clear();
    }
}
