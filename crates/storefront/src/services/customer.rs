//! Customer account orchestration.
//!
//! [`CustomerService`] scopes contact, address and order calls to the
//! contact of the current session. It is built per request: the contact ID
//! is resolved on first use and cached for the lifetime of the service.

use tokio::sync::OnceCell;

use ioshop_core::{AddressId, AddressType, ContactId};

use crate::contracts::{
    Authenticator, ContactAddressRepository, ContactRepository, HostResult, OrderRepository,
    UserSession,
};
use crate::models::{
    Address, AddressData, Contact, ContactData, ContactUpdate, Order, PaginatedResult,
};

/// Default page of the order history.
pub const DEFAULT_ORDER_PAGE: u32 = 1;

/// Default number of orders per page.
pub const DEFAULT_ORDERS_PER_PAGE: u32 = 10;

/// Contracts the customer service delegates to.
#[derive(Clone, Copy)]
pub struct CustomerContracts<'a> {
    pub contacts: &'a dyn ContactRepository,
    pub addresses: &'a dyn ContactAddressRepository,
    pub orders: &'a dyn OrderRepository,
    pub auth: &'a dyn Authenticator,
    pub user_session: &'a dyn UserSession,
}

/// Request-scoped facade over the contact, address and order contracts.
///
/// Errors from the contracts are returned unchanged.
pub struct CustomerService<'a> {
    contracts: CustomerContracts<'a>,
    contact_id: OnceCell<ContactId>,
}

impl<'a> CustomerService<'a> {
    /// Create a customer service for one request.
    #[must_use]
    pub const fn new(contracts: CustomerContracts<'a>) -> Self {
        Self {
            contracts,
            contact_id: OnceCell::const_new(),
        }
    }

    /// ID of the session's contact, or [`ContactId::NONE`].
    ///
    /// Resolved from the session once; later calls reuse the first answer,
    /// including a login that happens in between.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session contract.
    pub async fn contact_id(&self) -> HostResult<ContactId> {
        self.contact_id
            .get_or_try_init(|| self.contracts.user_session.current_contact_id())
            .await
            .copied()
    }

    /// Register a contact and, optionally, its addresses.
    ///
    /// A created contact (`id > 0`) is logged in with the plaintext password
    /// from `contact_data`. A billing address is mirrored into a delivery
    /// address unless a separate delivery address is given. Note that
    /// [`create_address`](Self::create_address) mirrors on its own as well,
    /// so each supplied address yields one address of each type.
    ///
    /// Addresses are stored under [`contact_id`](Self::contact_id), so call
    /// this before anything else resolves the contact id on the same
    /// service. An id memoized before the login stays at
    /// [`ContactId::NONE`] and the host rejects the address writes.
    ///
    /// # Errors
    ///
    /// Propagates errors from the contact, authentication and address
    /// contracts. Steps completed before the error are not rolled back.
    pub async fn register_customer(
        &self,
        contact_data: &ContactData,
        billing_address: Option<&AddressData>,
        delivery_address: Option<&AddressData>,
    ) -> HostResult<Contact> {
        let contact = self.create_contact(contact_data).await?;

        if contact.id.is_positive() {
            self.contracts
                .auth
                .login_with_contact_id(contact.id, &contact_data.password)
                .await?;
        }

        if let Some(billing) = billing_address {
            self.create_address(billing, AddressType::Billing).await?;
            if delivery_address.is_none() {
                self.create_address(billing, AddressType::Delivery).await?;
            }
        }

        if let Some(delivery) = delivery_address {
            self.create_address(delivery, AddressType::Delivery).await?;
        }

        tracing::info!(contact_id = %contact.id, "Customer registered");
        Ok(contact)
    }

    /// Create a contact.
    ///
    /// # Errors
    ///
    /// Propagates errors from the contact contract.
    pub async fn create_contact(&self, contact_data: &ContactData) -> HostResult<Contact> {
        self.contracts.contacts.create_contact(contact_data).await
    }

    /// The session's contact, if logged in.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and contact contracts.
    pub async fn contact(&self) -> HostResult<Option<Contact>> {
        let contact_id = self.contact_id().await?;
        if !contact_id.is_positive() {
            return Ok(None);
        }
        self.contracts.contacts.find_contact_by_id(contact_id).await
    }

    /// Update the session's contact, if logged in.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and contact contracts.
    pub async fn update_contact(&self, update: &ContactUpdate) -> HostResult<Option<Contact>> {
        let contact_id = self.contact_id().await?;
        if !contact_id.is_positive() {
            return Ok(None);
        }
        self.contracts
            .contacts
            .update_contact(update, contact_id)
            .await
            .map(Some)
    }

    /// Addresses of the session's contact, optionally of one type.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and address contracts.
    pub async fn addresses(&self, kind: Option<AddressType>) -> HostResult<Vec<Address>> {
        let contact_id = self.contact_id().await?;
        self.contracts.addresses.addresses(contact_id, kind).await
    }

    /// One address of the session's contact.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and address contracts.
    pub async fn address(&self, address_id: AddressId, kind: AddressType) -> HostResult<Address> {
        let contact_id = self.contact_id().await?;
        self.contracts
            .addresses
            .address(address_id, contact_id, kind)
            .await
    }

    /// Create an address and its mirror of the opposite type.
    ///
    /// The mirror is created on every call, with the same data. Only the
    /// address of the requested type is returned.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and address contracts.
    pub async fn create_address(
        &self,
        address_data: &AddressData,
        kind: AddressType,
    ) -> HostResult<Address> {
        let contact_id = self.contact_id().await?;
        let address = self
            .contracts
            .addresses
            .create_address(address_data, contact_id, kind)
            .await?;

        self.contracts
            .addresses
            .create_address(address_data, contact_id, kind.opposite())
            .await?;

        Ok(address)
    }

    /// Replace an address's data.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and address contracts.
    pub async fn update_address(
        &self,
        address_id: AddressId,
        address_data: &AddressData,
        kind: AddressType,
    ) -> HostResult<Address> {
        let contact_id = self.contact_id().await?;
        self.contracts
            .addresses
            .update_address(address_data, address_id, contact_id, kind)
            .await
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and address contracts.
    pub async fn delete_address(&self, address_id: AddressId, kind: AddressType) -> HostResult<()> {
        let contact_id = self.contact_id().await?;
        self.contracts
            .addresses
            .delete_address(address_id, contact_id, kind)
            .await
    }

    /// One page of the contact's order history.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and order contracts.
    pub async fn orders(
        &self,
        page: u32,
        items_per_page: u32,
    ) -> HostResult<PaginatedResult<Order>> {
        let contact_id = self.contact_id().await?;
        self.contracts
            .orders
            .orders_for_contact(contact_id, page, items_per_page)
            .await
    }

    /// The contact's most recent order.
    ///
    /// # Errors
    ///
    /// Propagates errors from the session and order contracts.
    pub async fn latest_order(&self) -> HostResult<Option<Order>> {
        let contact_id = self.contact_id().await?;
        self.contracts
            .orders
            .latest_order_for_contact(contact_id)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use secrecy::SecretString;
    use tower_sessions::{MemoryStore, Session};

    use ioshop_core::Email;

    use super::*;
    use crate::contracts::HostError;
    use crate::host::{MemoryHost, SessionAuthenticator, SessionUser};

    /// Counts how often the session is asked for the contact ID.
    struct CountingSession {
        inner: SessionUser,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UserSession for CountingSession {
        async fn current_contact_id(&self) -> HostResult<ContactId> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.current_contact_id().await
        }
    }

    struct Fixture {
        host: Arc<MemoryHost>,
        auth: SessionAuthenticator,
        user_session: CountingSession,
    }

    impl Fixture {
        fn new() -> Self {
            let host = Arc::new(MemoryHost::new());
            let session = Session::new(None, Arc::new(MemoryStore::default()), None);
            Self {
                auth: SessionAuthenticator::new(session.clone(), host.clone()),
                user_session: CountingSession {
                    inner: SessionUser::new(session),
                    calls: AtomicUsize::new(0),
                },
                host,
            }
        }

        fn service(&self) -> CustomerService<'_> {
            CustomerService::new(CustomerContracts {
                contacts: self.host.as_ref(),
                addresses: self.host.as_ref(),
                orders: self.host.as_ref(),
                auth: &self.auth,
                user_session: &self.user_session,
            })
        }

        async fn all_addresses(&self, contact_id: ContactId) -> Vec<Address> {
            self.host.addresses(contact_id, None).await.unwrap()
        }
    }

    fn contact_data(email: &str) -> ContactData {
        ContactData {
            email: Email::parse(email).unwrap(),
            password: SecretString::from("s3cure-pass"),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
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

    fn count_by_type(addresses: &[Address], kind: AddressType, town: &str) -> usize {
        addresses
            .iter()
            .filter(|a| a.kind == kind && a.data.town == town)
            .count()
    }

    #[tokio::test]
    async fn test_contact_id_is_resolved_once() {
        let fixture = Fixture::new();
        let service = fixture.service();

        assert_eq!(service.contact_id().await.unwrap(), ContactId::NONE);
        assert_eq!(service.contact_id().await.unwrap(), ContactId::NONE);
        assert_eq!(fixture.user_session.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_contact_and_update_need_login() {
        let fixture = Fixture::new();
        let service = fixture.service();

        assert!(service.contact().await.unwrap().is_none());
        let update = ContactUpdate {
            first_name: Some("Grace".to_string()),
            last_name: None,
        };
        assert!(service.update_contact(&update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_address_always_mirrors() {
        let fixture = Fixture::new();
        let service = fixture.service();
        service
            .register_customer(&contact_data("ada@example.com"), None, None)
            .await
            .unwrap();

        let data = address_data("Berlin");
        let created = service
            .create_address(&data, AddressType::Billing)
            .await
            .unwrap();
        assert_eq!(created.kind, AddressType::Billing);

        let contact_id = service.contact_id().await.unwrap();
        let stored = fixture.all_addresses(contact_id).await;
        assert_eq!(stored.len(), 2);
        assert_eq!(count_by_type(&stored, AddressType::Billing, "Berlin"), 1);
        assert_eq!(count_by_type(&stored, AddressType::Delivery, "Berlin"), 1);

        let delivery = service
            .create_address(&address_data("Hamburg"), AddressType::Delivery)
            .await
            .unwrap();
        assert_eq!(delivery.kind, AddressType::Delivery);
        let stored = fixture.all_addresses(contact_id).await;
        assert_eq!(count_by_type(&stored, AddressType::Billing, "Hamburg"), 1);
    }

    #[tokio::test]
    async fn test_register_logs_in_and_mirrors_billing_only() {
        let fixture = Fixture::new();
        let service = fixture.service();

        let contact = service
            .register_customer(
                &contact_data("ada@example.com"),
                Some(&address_data("Berlin")),
                None,
            )
            .await
            .unwrap();

        assert!(contact.id.is_positive());
        assert_eq!(service.contact_id().await.unwrap(), contact.id);

        // Billing create mirrors to delivery, and the explicit delivery
        // mirror mirrors back to billing.
        let stored = fixture.all_addresses(contact.id).await;
        assert_eq!(stored.len(), 4);
        assert_eq!(count_by_type(&stored, AddressType::Billing, "Berlin"), 2);
        assert_eq!(count_by_type(&stored, AddressType::Delivery, "Berlin"), 2);
    }

    #[tokio::test]
    async fn test_register_with_both_addresses_skips_registration_mirror() {
        let fixture = Fixture::new();
        let service = fixture.service();

        let contact = service
            .register_customer(
                &contact_data("ada@example.com"),
                Some(&address_data("Berlin")),
                Some(&address_data("Hamburg")),
            )
            .await
            .unwrap();

        let stored = fixture.all_addresses(contact.id).await;
        assert_eq!(stored.len(), 4);
        assert_eq!(count_by_type(&stored, AddressType::Billing, "Berlin"), 1);
        assert_eq!(count_by_type(&stored, AddressType::Delivery, "Berlin"), 1);
        assert_eq!(count_by_type(&stored, AddressType::Billing, "Hamburg"), 1);
        assert_eq!(count_by_type(&stored, AddressType::Delivery, "Hamburg"), 1);
    }

    #[tokio::test]
    async fn test_register_after_resolving_anonymous_id_rejects_addresses() {
        let fixture = Fixture::new();
        let service = fixture.service();
        assert_eq!(service.contact_id().await.unwrap(), ContactId::NONE);

        let result = service
            .register_customer(
                &contact_data("ada@example.com"),
                Some(&address_data("Berlin")),
                None,
            )
            .await;

        assert!(matches!(result, Err(HostError::Validation(_))));
        assert!(fixture.all_addresses(ContactId::NONE).await.is_empty());
        assert_eq!(fixture.host.address_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_propagates_contact_errors() {
        let fixture = Fixture::new();
        fixture
            .service()
            .register_customer(&contact_data("ada@example.com"), None, None)
            .await
            .unwrap();

        let result = fixture
            .service()
            .register_customer(
                &contact_data("ada@example.com"),
                Some(&address_data("Berlin")),
                None,
            )
            .await;
        assert!(matches!(result, Err(HostError::Conflict(_))));
        assert_eq!(fixture.host.address_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_address_crud_scoped_to_contact() {
        let fixture = Fixture::new();
        let service = fixture.service();
        service
            .register_customer(&contact_data("ada@example.com"), None, None)
            .await
            .unwrap();

        let billing = service
            .create_address(&address_data("Berlin"), AddressType::Billing)
            .await
            .unwrap();

        let updated = service
            .update_address(billing.id, &address_data("Munich"), AddressType::Billing)
            .await
            .unwrap();
        assert_eq!(updated.data.town, "Munich");
        assert_eq!(
            service
                .address(billing.id, AddressType::Billing)
                .await
                .unwrap()
                .data
                .town,
            "Munich"
        );

        let wrong_type = service.address(billing.id, AddressType::Delivery).await;
        assert!(matches!(wrong_type, Err(HostError::NotFound { .. })));

        service
            .delete_address(billing.id, AddressType::Billing)
            .await
            .unwrap();
        let remaining = service.addresses(None).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind, AddressType::Delivery);
        assert!(
            service
                .addresses(Some(AddressType::Billing))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_orders_use_current_contact() {
        let fixture = Fixture::new();
        let service = fixture.service();

        let page = service
            .orders(DEFAULT_ORDER_PAGE, DEFAULT_ORDERS_PER_PAGE)
            .await
            .unwrap();
        assert_eq!(page.total_count, 0);
        assert!(service.latest_order().await.unwrap().is_none());
    }
}
