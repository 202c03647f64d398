//! Service record domain types

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Identifier of a service record
///
/// Opaque and unique for the lifetime of a catalog. Serialized as a bare
/// JSON number so that catalogs keyed by millisecond timestamps load as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u64);

impl ServiceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ServiceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ServiceId)
    }
}

/// Reasons a price can be rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("price is not a number: {0:?}")]
    NotANumber(String),

    #[error("price must be greater than zero, got {0}")]
    NotPositive(f64),
}

/// A finite, strictly positive price
///
/// Only constructible through [`Price::new`] or [`Price::parse`], so any
/// `Price` in a record is already valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotANumber(value.to_string()));
        }
        if value <= 0.0 {
            return Err(PriceError::NotPositive(value));
        }
        Ok(Price(value))
    }

    /// Parses price text as typed into a form field
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| PriceError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Text suitable for pre-filling a form field: `50` rather than `50.0`
    pub fn to_input_text(self) -> String {
        self.0.to_string()
    }

    /// Display form with a currency sign and two decimals, e.g. `$12.50`
    pub fn formatted(self) -> String {
        format!("${:.2}", self.0)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Older catalogs stored the raw text of the price input.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let price = match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Price::new(value),
            Raw::Text(text) => Price::parse(&text),
        };
        price.map_err(serde::de::Error::custom)
    }
}

/// A persisted service entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub price: Price,
}

/// Editable fields of a service record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
    Price,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Description, Field::Price];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
