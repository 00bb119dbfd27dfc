use async_trait::async_trait;

use ioshop_core::{AddressId, AddressType, ContactId};

use super::HostResult;
use crate::models::{Address, AddressData};

/// Address book of a contact. Every call is scoped to `(contact, type)`.
#[async_trait]
pub trait ContactAddressRepository: Send + Sync {
    /// List addresses, optionally filtered by type.
    async fn addresses(
        &self,
        contact_id: ContactId,
        kind: Option<AddressType>,
    ) -> HostResult<Vec<Address>>;

    /// Fetch one address. `NotFound` if it does not belong to the contact/type.
    async fn address(
        &self,
        address_id: AddressId,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<Address>;

    /// Create an address of the given type.
    async fn create_address(
        &self,
        data: &AddressData,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<Address>;

    /// Replace an address's data.
    async fn update_address(
        &self,
        data: &AddressData,
        address_id: AddressId,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<Address>;

    /// Delete an address.
    async fn delete_address(
        &self,
        address_id: AddressId,
        contact_id: ContactId,
        kind: AddressType,
    ) -> HostResult<()>;
}
