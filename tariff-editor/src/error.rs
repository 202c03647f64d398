//! Error types for the editor

use tariff_core::domain::ServiceId;
use tariff_core::validation::FieldErrors;
use tariff_store::StoreError;
use thiserror::Error;

/// Why a form submit did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more fields failed validation; the store was not touched
    #[error("Invalid service: {0}")]
    Invalid(FieldErrors),

    /// The store rejected the mutation
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Field errors, if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Store(_) => None,
        }
    }
}

/// Errors raised while dispatching list actions
#[derive(Debug, Error)]
pub enum EditorError {
    /// No record with this identifier
    #[error("Service not found: {0}")]
    NotFound(ServiceId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
