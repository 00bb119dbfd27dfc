//! In-memory contact, address, order, item and category store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;

use ioshop_core::{AddressId, AddressType, ContactId, Email, VariationId};

use super::catalog::Catalog;
use super::password::{hash_password, validate_password, verify_password};
use crate::contracts::{
    CategoryRepository, ContactAddressRepository, ContactRepository, HostError, HostResult,
    ItemRepository, OrderRepository,
};
use crate::models::{
    Address, AddressData, Category, Contact, ContactData, ContactUpdate, Order, PaginatedResult,
    Variation,
};

/// A contact together with its password hash.
struct StoredContact {
    contact: Contact,
    password_hash: String,
}

#[derive(Default)]
struct HostData {
    contacts: BTreeMap<ContactId, StoredContact>,
    addresses: BTreeMap<AddressId, Address>,
    orders: Vec<Order>,
    variations: HashMap<VariationId, Variation>,
    categories: HashMap<String, Category>,
    last_contact_id: i32,
    last_address_id: i32,
}

/// Process-local implementation of the record-owning host contracts.
///
/// Shared across requests behind an `Arc`; every method takes the lock only
/// for the duration of the lookup or mutation.
#[derive(Default)]
pub struct MemoryHost {
    data: RwLock<HostData>,
}

impl MemoryHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host seeded with the catalog's items and categories.
    #[must_use]
    pub fn with_catalog(catalog: &Catalog) -> Self {
        let mut data = HostData::default();

        for item in &catalog.items {
            for variation in item.to_variations() {
                data.variations.insert(variation.id, variation);
            }
        }
        for category in &catalog.categories {
            data.categories
                .insert(category.path.trim_matches('/').to_string(), category.clone());
        }
        data.orders.extend(catalog.orders.iter().cloned());

        Self {
            data: RwLock::new(data),
        }
    }

    /// Record an order (orders are placed outside the storefront).
    #[cfg(test)]
    pub fn insert_order(&self, order: Order) -> HostResult<()> {
        self.write()?.orders.push(order);
        Ok(())
    }

    /// Number of stored addresses across all contacts.
    #[cfg(test)]
    pub fn address_count(&self) -> HostResult<usize> {
        Ok(self.read()?.addresses.len())
    }

    fn read(&self) -> HostResult<RwLockReadGuard<'_, HostData>> {
        self.data
            .read()
            .map_err(|_| HostError::Unavailable("memory host lock poisoned".to_string()))
    }

    fn write(&self) -> HostResult<RwLockWriteGuard<'_, HostData>> {
        self.data
            .write()
            .map_err(|_| HostError::Unavailable("memory host lock poisoned".to_string()))
    }
}

fn validate_address(data: &AddressData, contact_id: ContactId) -> HostResult<()> {
    if !contact_id.is_positive() {
        return Err(HostError::Validation(
            "address requires a stored contact".to_string(),
        ));
    }
    match data.missing_field() {
        Some(field) => Err(HostError::Validation(format!("{field} is required"))),
        None => Ok(()),
    }
}

const fn address_not_found(address_id: AddressId) -> HostError {
    HostError::NotFound {
        entity: "address",
        id: address_id.as_i32(),
    }
}

fn owns(address: &Address, contact_id: ContactId, kind: AddressType) -> bool {
    address.contact_id == contact_id && address.kind == kind
}

#[async_trait]
impl ContactRepository for MemoryHost {
    async fn create_contact(&self, data: &ContactData) -> HostResult<Contact> {
        validate_password(&data.password)?;
        let password_hash = hash_password(&data.password)?;

        let mut store = self.write()?;
        if store
            .contacts
            .values()
            .any(|stored| stored.contact.email == data.email)
        {
            return Err(HostError::Conflict(format!(
                "a contact with email {} already exists",
                data.email
            )));
        }

        store.last_contact_id += 1;
        let contact = Contact {
            id: ContactId::new(store.last_contact_id),
            email: data.email.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            created_at: Utc::now(),
        };
        store.contacts.insert(
            contact.id,
            StoredContact {
                contact: contact.clone(),
                password_hash,
            },
        );

        tracing::debug!(contact_id = %contact.id, "Contact created");
        Ok(contact)
    }

    async fn find_contact_by_id(&self, contact_id: ContactId) -> HostResult<Option<Contact>> {
        Ok(self
            .read()?
            .contacts
            .get(&contact_id)
            .map(|stored| stored.contact.clone()))
    }

    async fn find_contact_by_email(&self, email: &Email) -> HostResult<Option<Contact>> {
        Ok(self
            .read()?
            .contacts
            .values()
            .find(|stored| &stored.contact.email == email)
            .map(|stored| stored.contact.clone()))
    }

    async fn update_contact(
        &self,
        update: &ContactUpdate,
        contact_id: ContactId,
    ) -> HostResult<Contact> {
        let mut store = self.write()?;
        let stored = store
            .contacts
            .get_mut(&contact_id)
            .ok_or(HostError::NotFound {
                entity: "contact",
                id: contact_id.as_i32(),
            })?;

        if let Some(first_name) = &update.first_name {
            stored.contact.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &update.last_name {
            stored.contact.last_name = Some(last_name.clone());
        }

        Ok(stored.contact.clone())
    }

    async fn verify_password(
        &self,
        contact_id: ContactId,
        password: &SecretString,
    ) -> HostResult<bool> {
        let hash = self
            .read()?
            .contacts
            .get(&contact_id)
            .map(|stored| stored.password_hash.clone());

        Ok(hash.is_some_and(|hash| verify_password(password, &hash)))
    }
}

#[async_trait]
impl ContactAddressRepository for MemoryHost {
    async fn addresses(
        &self,
        contact_id: ContactId,
        kind: Option<AddressType>,
    ) -> HostResult<Vec<Address>> {
        Ok(self
            .read()?
            .addresses
            .values()
            .filter(|address| address.contact_id == contact_id)
            .filter(|address| kind.is_none_or(|kind| address.kind == kind))
            .cloned()
            .collect())
    }

    async fn address(
        &self,
        address_id: AddressId,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<Address> {
        self.read()?
            .addresses
            .get(&address_id)
            .filter(|address| owns(address, contact_id, kind))
            .cloned()
            .ok_or_else(|| address_not_found(address_id))
    }

    async fn create_address(
        &self,
        data: &AddressData,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<Address> {
        validate_address(data, contact_id)?;

        let mut store = self.write()?;
        store.last_address_id += 1;
        let address = Address {
            id: AddressId::new(store.last_address_id),
            contact_id,
            kind,
            data: data.clone(),
        };
        store.addresses.insert(address.id, address.clone());

        Ok(address)
    }

    async fn update_address(
        &self,
        data: &AddressData,
        address_id: AddressId,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<Address> {
        validate_address(data, contact_id)?;

        let mut store = self.write()?;
        let address = store
            .addresses
            .get_mut(&address_id)
            .filter(|address| owns(address, contact_id, kind))
            .ok_or_else(|| address_not_found(address_id))?;
        address.data = data.clone();

        Ok(address.clone())
    }

    async fn delete_address(
        &self,
        address_id: AddressId,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<()> {
        let mut store = self.write()?;
        match store.addresses.get(&address_id) {
            Some(address) if owns(address, contact_id, kind) => {
                store.addresses.remove(&address_id);
                Ok(())
            }
            _ => Err(address_not_found(address_id)),
        }
    }
}

#[async_trait]
impl OrderRepository for MemoryHost {
    async fn orders_for_contact(
        &self,
        contact_id: ContactId,
        page: u32,
        items_per_page: u32,
    ) -> HostResult<PaginatedResult<Order>> {
        let page = page.max(1);
        let store = self.read()?;

        let mut orders: Vec<&Order> = store
            .orders
            .iter()
            .filter(|order| order.contact_id == contact_id)
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = (page as usize - 1).saturating_mul(items_per_page as usize);
        let entries = orders
            .iter()
            .skip(offset)
            .take(items_per_page as usize)
            .map(|order| (*order).clone())
            .collect();

        Ok(PaginatedResult {
            page,
            items_per_page,
            total_count: orders.len() as u64,
            entries,
        })
    }

    async fn latest_order_for_contact(&self, contact_id: ContactId) -> HostResult<Option<Order>> {
        Ok(self
            .read()?
            .orders
            .iter()
            .filter(|order| order.contact_id == contact_id)
            .max_by_key(|order| order.created_at)
            .cloned())
    }
}

#[async_trait]
impl ItemRepository for MemoryHost {
    async fn variation(&self, variation_id: VariationId) -> HostResult<Option<Variation>> {
        Ok(self.read()?.variations.get(&variation_id).cloned())
    }
}

#[async_trait]
impl CategoryRepository for MemoryHost {
    async fn find_by_path(&self, path: &str) -> HostResult<Option<Category>> {
        Ok(self
            .read()?
            .categories
            .get(path.trim_matches('/'))
            .cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use ioshop_core::{CurrencyCode, OrderId, Price};

    use super::*;

    fn contact_data(email: &str) -> ContactData {
        ContactData {
            email: Email::parse(email).unwrap(),
            password: SecretString::from("s3cure-pass"),
            first_name: Some("Ada".to_string()),
            last_name: None,
        }
    }

    fn address_data(town: &str) -> AddressData {
        AddressData {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: None,
            street: "Main Street".to_string(),
            house_number: "1".to_string(),
            address_addition: None,
            postal_code: "12345".to_string(),
            town: town.to_string(),
            country_code: "DE".to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_create_contact_assigns_ids_and_rejects_duplicates() {
        let host = MemoryHost::new();

        let first = host.create_contact(&contact_data("a@example.com")).await.unwrap();
        let second = host.create_contact(&contact_data("b@example.com")).await.unwrap();
        assert_eq!(first.id, ContactId::new(1));
        assert_eq!(second.id, ContactId::new(2));

        let duplicate = host.create_contact(&contact_data("a@example.com")).await;
        assert!(matches!(duplicate, Err(HostError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_verify_password() {
        let host = MemoryHost::new();
        let contact = host.create_contact(&contact_data("a@example.com")).await.unwrap();

        assert!(
            host.verify_password(contact.id, &SecretString::from("s3cure-pass"))
                .await
                .unwrap()
        );
        assert!(
            !host
                .verify_password(contact.id, &SecretString::from("nope-nope"))
                .await
                .unwrap()
        );
        assert!(
            !host
                .verify_password(ContactId::new(99), &SecretString::from("s3cure-pass"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_address_scoped_to_contact_and_type() {
        let host = MemoryHost::new();
        let owner = ContactId::new(1);
        let address = host
            .create_address(&address_data("Berlin"), owner, AddressType::Billing)
            .await
            .unwrap();

        assert!(
            host.address(address.id, owner, AddressType::Billing)
                .await
                .is_ok()
        );
        assert!(matches!(
            host.address(address.id, ContactId::new(2), AddressType::Billing)
                .await,
            Err(HostError::NotFound { .. })
        ));
        assert!(matches!(
            host.delete_address(address.id, owner, AddressType::Delivery)
                .await,
            Err(HostError::NotFound { .. })
        ));

        host.delete_address(address.id, owner, AddressType::Billing)
            .await
            .unwrap();
        assert!(host.addresses(owner, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_address_validates_required_fields() {
        let host = MemoryHost::new();
        let mut data = address_data("Berlin");
        data.town = "  ".to_string();

        let result = host
            .create_address(&data, ContactId::new(1), AddressType::Delivery)
            .await;
        assert!(matches!(result, Err(HostError::Validation(_))));
    }

    #[tokio::test]
    async fn test_address_writes_require_stored_contact() {
        let host = MemoryHost::new();
        let data = address_data("Berlin");

        for contact_id in [ContactId::NONE, ContactId::new(-3)] {
            let created = host
                .create_address(&data, contact_id, AddressType::Billing)
                .await;
            assert!(matches!(created, Err(HostError::Validation(_))));

            let updated = host
                .update_address(&data, AddressId::new(1), contact_id, AddressType::Billing)
                .await;
            assert!(matches!(updated, Err(HostError::Validation(_))));
        }
        assert_eq!(host.address_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_catalog_seeds_order_history() {
        let catalog = Catalog::from_json(
            r#"{
                "orders": [{
                    "id": 1001, "contact_id": 1, "created_at": "2026-01-05T10:00:00Z",
                    "total": { "amount": "49.90", "currency_code": "EUR" }, "status": "paid"
                }]
            }"#,
        )
        .unwrap();
        let host = MemoryHost::with_catalog(&catalog);

        let latest = host
            .latest_order_for_contact(ContactId::new(1))
            .await
            .unwrap();
        assert_eq!(latest.map(|o| o.id), Some(OrderId::new(1001)));
        assert!(
            host.orders_for_contact(ContactId::new(2), 1, 10)
                .await
                .unwrap()
                .entries
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_orders_paginated_newest_first() {
        let host = MemoryHost::new();
        let contact_id = ContactId::new(5);
        let now = Utc::now();

        for n in 1..=3 {
            host.insert_order(Order {
                id: OrderId::new(n),
                contact_id,
                created_at: now + Duration::minutes(i64::from(n)),
                total: Price::from_minor_units(1000, CurrencyCode::EUR),
                status: "paid".to_string(),
            })
            .unwrap();
        }

        let page = host.orders_for_contact(contact_id, 1, 2).await.unwrap();
        assert_eq!(page.total_count, 3);
        assert_eq!(
            page.entries.iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![OrderId::new(3), OrderId::new(2)]
        );
        assert!(!page.is_last_page());

        let latest = host.latest_order_for_contact(contact_id).await.unwrap();
        assert_eq!(latest.map(|o| o.id), Some(OrderId::new(3)));

        let none = host
            .latest_order_for_contact(ContactId::new(6))
            .await
            .unwrap();
        assert!(none.is_none());
    }
}
