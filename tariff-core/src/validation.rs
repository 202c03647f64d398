//! Field validation
//!
//! Every rule is evaluated independently, so a single submit reports all
//! failing fields at once.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::service::{Field, Price, ServiceRecord};
use crate::dto::service::{NewService, ServiceDraft};

pub const NAME_REQUIRED: &str = "Service name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const PRICE_INVALID: &str = "Price must be a positive number";

/// Error message per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Failing fields in form order (name, description, price)
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Validates a draft, returning the storable service or every field error
pub fn validate(draft: &ServiceDraft) -> Result<NewService, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    let description = draft.description.trim();
    if description.is_empty() {
        errors.insert(Field::Description, DESCRIPTION_REQUIRED);
    }

    let price = match Price::parse(&draft.price) {
        Ok(price) => Some(price),
        Err(_) => {
            errors.insert(Field::Price, PRICE_INVALID);
            None
        }
    };

    match price {
        Some(price) if errors.is_empty() => Ok(NewService {
            name: name.to_string(),
            description: description.to_string(),
            price,
        }),
        _ => Err(errors),
    }
}

/// Checks a decoded record against the same text rules as a draft
///
/// The price needs no check here since [`Price`] cannot hold an invalid value.
pub fn validate_record(record: &ServiceRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if record.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if record.description.trim().is_empty() {
        errors.insert(Field::Description, DESCRIPTION_REQUIRED);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service::ServiceId;

    #[test]
    fn test_validate_valid_draft() {
        let draft = ServiceDraft::new("  Consult ", "15-min check", "50");
        let service = validate(&draft).unwrap();
        assert_eq!(service.name, "Consult");
        assert_eq!(service.description, "15-min check");
        assert_eq!(service.price.value(), 50.0);
    }

    #[test]
    fn test_validate_empty_name_only() {
        let draft = ServiceDraft::new("", "x", "10");
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_validate_whitespace_is_blank() {
        let draft = ServiceDraft::new("   ", "\t\n", "10");
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Description), Some(DESCRIPTION_REQUIRED));
        assert!(!errors.contains(Field::Price));
    }

    #[test]
    fn test_validate_collects_every_field() {
        let errors = validate(&ServiceDraft::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_validate_bad_prices() {
        for price in ["abc", "0", "-5", "", "  ", "inf", "NaN"] {
            let draft = ServiceDraft::new("Consult", "Check", price);
            let errors = validate(&draft).unwrap_err();
            assert_eq!(errors.len(), 1, "price {price:?}");
            assert_eq!(errors.get(Field::Price), Some(PRICE_INVALID));
        }
    }

    #[test]
    fn test_validate_fractional_price() {
        let draft = ServiceDraft::new("Consult", "Check", "0.5");
        assert_eq!(validate(&draft).unwrap().price.value(), 0.5);
    }

    #[test]
    fn test_field_errors_serialize_by_field_name() {
        let errors = validate(&ServiceDraft::new("", "x", "10")).unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "name": "Service name is required" })
        );
        assert_eq!(errors.to_string(), "name: Service name is required");
    }

    #[test]
    fn test_validate_record() {
        let mut record = ServiceRecord {
            id: ServiceId(1),
            name: "X-ray".to_string(),
            description: "Chest".to_string(),
            price: Price::new(80.0).unwrap(),
        };
        assert!(validate_record(&record).is_ok());

        record.description = " ".to_string();
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.get(Field::Description), Some(DESCRIPTION_REQUIRED));
    }
}
