//! Form types shared by the auth and account routes.

use std::collections::HashMap;

use serde::Deserialize;

use ioshop_core::AddressType;

use crate::error::AppError;
use crate::models::AddressData;

/// Address form data (create and update).
#[derive(Debug, Deserialize)]
pub struct AddressForm {
    #[serde(rename = "type")]
    pub kind: String,
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

impl AddressForm {
    /// Split into the address type and trimmed address data.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unknown address type.
    pub fn into_parts(self) -> Result<(AddressType, AddressData), AppError> {
        let kind = parse_address_type(&self.kind)?;
        let data = AddressData {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            company: non_blank(self.company.as_deref()),
            street: self.street.trim().to_string(),
            house_number: self.house_number.trim().to_string(),
            address_addition: non_blank(self.address_addition.as_deref()),
            postal_code: self.postal_code.trim().to_string(),
            town: self.town.trim().to_string(),
            country_code: self.country_code.trim().to_uppercase(),
            phone: non_blank(self.phone.as_deref()),
        };
        Ok((kind, data))
    }
}

/// Parse a submitted address type (`1`, `2`, `billing`, `delivery`).
///
/// # Errors
///
/// Returns `AppError::BadRequest` for anything else.
pub fn parse_address_type(value: &str) -> Result<AddressType, AppError> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Unknown address type: {value}")))
}

/// Trimmed value, or `None` when blank.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Read an optional address from `{prefix}_{field}` form fields.
///
/// Returns `None` when every field of the section is blank, so an untouched
/// section means "no address".
#[must_use]
pub fn prefixed_address(fields: &HashMap<String, String>, prefix: &str) -> Option<AddressData> {
    let get = |name: &str| non_blank(fields.get(&format!("{prefix}_{name}")).map(String::as_str));

    let data = AddressData {
        first_name: get("first_name").unwrap_or_default(),
        last_name: get("last_name").unwrap_or_default(),
        company: get("company"),
        street: get("street").unwrap_or_default(),
        house_number: get("house_number").unwrap_or_default(),
        address_addition: get("address_addition"),
        postal_code: get("postal_code").unwrap_or_default(),
        town: get("town").unwrap_or_default(),
        country_code: get("country_code").unwrap_or_default().to_uppercase(),
        phone: get("phone"),
    };

    let empty = [
        &data.first_name,
        &data.last_name,
        &data.street,
        &data.house_number,
        &data.postal_code,
        &data.town,
        &data.country_code,
    ]
    .iter()
    .all(|value| value.is_empty())
        && data.company.is_none()
        && data.address_addition.is_none()
        && data.phone.is_none();

    (!empty).then_some(data)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_blank_section_is_no_address() {
        let fields = fields(&[("billing_street", "  "), ("billing_town", "")]);
        assert!(prefixed_address(&fields, "billing").is_none());
    }

    #[test]
    fn test_prefixed_address_reads_section() {
        let fields = fields(&[
            ("billing_first_name", "Ada"),
            ("billing_last_name", "Lovelace"),
            ("billing_street", "Main St"),
            ("billing_house_number", "1"),
            ("billing_postal_code", "12345"),
            ("billing_town", "Berlin"),
            ("billing_country_code", "de"),
            ("delivery_street", "Other St"),
        ]);

        let billing = prefixed_address(&fields, "billing").unwrap();
        assert_eq!(billing.town, "Berlin");
        assert_eq!(billing.country_code, "DE");
        assert_eq!(billing.company, None);

        let delivery = prefixed_address(&fields, "delivery").unwrap();
        assert_eq!(delivery.street, "Other St");
        assert!(delivery.town.is_empty());
    }

    #[test]
    fn test_address_form_into_parts() {
        let form = AddressForm {
            kind: "2".to_string(),
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            company: Some(String::new()),
            street: "Main St".to_string(),
            house_number: "1".to_string(),
            address_addition: None,
            postal_code: "12345".to_string(),
            town: "Berlin".to_string(),
            country_code: "de".to_string(),
            phone: Some(" 030 123 ".to_string()),
        };

        let (kind, data) = form.into_parts().unwrap();
        assert_eq!(kind, AddressType::Delivery);
        assert_eq!(data.first_name, "Ada");
        assert_eq!(data.company, None);
        assert_eq!(data.phone.as_deref(), Some("030 123"));
        assert_eq!(data.country_code, "DE");
    }

    #[test]
    fn test_parse_address_type_rejects_unknown() {
        assert!(matches!(
            parse_address_type("7"),
            Err(AppError::BadRequest(_))
        ));
    }
}
