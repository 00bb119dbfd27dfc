//! Address types.

use serde::{Deserialize, Serialize};

use ioshop_core::{AddressId, AddressType, ContactId};

/// The editable part of an address.
///
/// Cloned when an address is mirrored into the opposite type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressData {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub street: String,
    pub house_number: String,
    #[serde(default)]
    pub address_addition: Option<String>,
    pub postal_code: String,
    pub town: String,
    pub country_code: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl AddressData {
    /// Name of the first required field that is blank, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("street", &self.street),
            ("house_number", &self.house_number),
            ("postal_code", &self.postal_code),
            ("town", &self.town),
            ("country_code", &self.country_code),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Single-line summary used in listings.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {}, {} {}, {} {}, {}",
            self.first_name,
            self.last_name,
            self.street,
            self.house_number,
            self.postal_code,
            self.town,
            self.country_code
        )
    }
}

/// A stored address belonging to exactly one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub contact_id: ContactId,
    #[serde(rename = "type")]
    pub kind: AddressType,
    pub data: AddressData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin() -> AddressData {
        AddressData {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: None,
            street: "Main St".to_string(),
            house_number: "1".to_string(),
            address_addition: None,
            postal_code: "12345".to_string(),
            town: "Berlin".to_string(),
            country_code: "DE".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_missing_field_reports_first_blank_required_field() {
        assert_eq!(berlin().missing_field(), None);

        let mut data = berlin();
        data.house_number = " ".to_string();
        data.town = String::new();
        assert_eq!(data.missing_field(), Some("house_number"));
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let mut data = berlin();
        data.company = None;
        data.phone = None;
        assert_eq!(data.missing_field(), None);
    }
}
