//! ID resolver module
//!
//! Lets users name a service instead of typing its identifier, as long as
//! the name is unambiguous.

use anyhow::{Result, anyhow};
use tariff_core::domain::{ServiceId, ServiceRecord};

use crate::types::ServiceRef;

/// Resolve a service reference to an identifier
///
/// Names are matched case-insensitively against the catalog. A numeric
/// reference is an identifier first; if no record has that identifier it is
/// tried as a name, and if no name matches either the identifier is returned
/// as-is so that callers can decide whether a missing record is an error.
///
/// # Errors
/// Returns an error if:
/// - No service has that name
/// - Several services share that name (ambiguous)
pub fn resolve_service_id(records: &[ServiceRecord], reference: &ServiceRef) -> Result<ServiceId> {
    let (name, fallback) = match reference {
        ServiceRef::Id(id) if records.iter().any(|r| r.id == *id) => return Ok(*id),
        ServiceRef::Id(id) => (id.to_string(), Some(*id)),
        ServiceRef::Name(name) => (name.to_lowercase(), None),
    };

    let matches: Vec<_> = records
        .iter()
        .filter(|r| r.name.trim().to_lowercase() == name)
        .collect();

    match (matches.len(), fallback) {
        (0, Some(id)) => Ok(id),
        (0, None) => Err(anyhow!("No service named {}", reference)),
        (1, _) => Ok(matches[0].id),
        _ => {
            let ids: Vec<String> = matches.iter().map(|r| r.id.to_string()).collect();
            Err(anyhow!(
                "Ambiguous name {} matches multiple services: {}",
                reference,
                ids.join(", ")
            ))
        }
    }
}
