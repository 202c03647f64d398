//! Tariff Editor
//!
//! The service catalog editor: a form session that validates drafts and
//! submits them to the catalog store, plus the list view over that store.
//!
//! Architecture:
//! - Session: draft, mode (creating or editing) and per-field errors
//! - List: read-only rows with edit/delete actions
//! - Editor: owns one store and one session and routes events between them

pub mod editor;
pub mod error;
pub mod list;
pub mod session;

pub use editor::CatalogEditor;
pub use error::{EditorError, SubmitError};
pub use list::{RowAction, ServiceRow};
pub use session::{FormSession, Mode, SubmitOutcome};
