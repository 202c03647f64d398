//! Service DTOs

use serde::{Deserialize, Serialize};

use crate::domain::service::{Field, Price, ServiceId, ServiceRecord};

/// Raw form contents for a service, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ServiceDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Price => self.price = value,
        }
    }
}

impl From<&ServiceRecord> for ServiceDraft {
    fn from(record: &ServiceRecord) -> Self {
        ServiceDraft {
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.to_input_text(),
        }
    }
}

/// A validated service, ready to be stored
///
/// Produced by [`crate::validation::validate`]; fields are already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: Price,
}

impl NewService {
    pub fn into_record(self, id: ServiceId) -> ServiceRecord {
        ServiceRecord {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_record_is_a_copy() {
        let record = ServiceRecord {
            id: ServiceId(9),
            name: "Dental".to_string(),
            description: "Cleaning".to_string(),
            price: Price::new(120.0).unwrap(),
        };

        let mut draft = ServiceDraft::from(&record);
        assert_eq!(draft, ServiceDraft::new("Dental", "Cleaning", "120"));

        draft.set(Field::Name, "Changed");
        assert_eq!(record.name, "Dental");
        assert_eq!(draft.field(Field::Name), "Changed");
    }

    #[test]
    fn test_into_record_keeps_fields() {
        let new = NewService {
            name: "Consult".to_string(),
            description: "15-min check".to_string(),
            price: Price::new(50.0).unwrap(),
        };
        let record = new.clone().into_record(ServiceId(1));
        assert_eq!(record.id, ServiceId(1));
        assert_eq!(record.name, new.name);
        assert_eq!(record.price, new.price);
    }
}
