//! Common types used across CLI modules

use tariff_core::domain::ServiceId;

/// Reference to a service: its numeric identifier or its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRef {
    /// Exact identifier
    Id(ServiceId),
    /// Name that should uniquely identify a service (case-insensitive)
    Name(String),
}

impl ServiceRef {
    /// Parse a string into a ServiceRef
    ///
    /// Attempts to parse as an identifier first, otherwise treats it as a name
    pub fn parse(input: &str) -> Self {
        match input.parse::<ServiceId>() {
            Ok(id) => ServiceRef::Id(id),
            Err(_) => ServiceRef::Name(input.trim().to_string()),
        }
    }
}

impl std::fmt::Display for ServiceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceRef::Id(id) => write!(f, "{}", id),
            ServiceRef::Name(name) => write!(f, "{:?}", name),
        }
    }
}

impl From<&str> for ServiceRef {
    fn from(s: &str) -> Self {
        ServiceRef::parse(s)
    }
}
