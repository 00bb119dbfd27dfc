//! Contracts backed by the visitor's `tower-sessions` session.
//!
//! Each type wraps the request's [`Session`] handle, so it is created per
//! request and dropped with it.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tower_sessions::Session;

use ioshop_core::{BasketItemId, ContactId, Email, VariationId};

use crate::contracts::{
    Authenticator, BasketItemRepository, ContactRepository, HostError, HostResult,
    SessionStorageRepository, UserSession,
};
use crate::models::{BasketItem, session_keys};

/// String values stored in the session.
#[derive(Clone)]
pub struct SessionStorage {
    session: Session,
}

impl SessionStorage {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SessionStorageRepository for SessionStorage {
    async fn get_session_value(&self, key: &str) -> HostResult<Option<String>> {
        Ok(self.session.get::<String>(key).await?)
    }

    async fn set_session_value(&self, key: &str, value: &str) -> HostResult<()> {
        self.session.insert(key, value).await?;
        Ok(())
    }
}

/// Basket kept in the session.
#[derive(Clone)]
pub struct SessionBasket {
    session: Session,
}

impl SessionBasket {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl BasketItemRepository for SessionBasket {
    async fn all(&self) -> HostResult<Vec<BasketItem>> {
        Ok(self
            .session
            .get::<Vec<BasketItem>>(session_keys::BASKET_ITEMS)
            .await?
            .unwrap_or_default())
    }

    async fn add(&self, variation_id: VariationId, quantity: u32) -> HostResult<BasketItem> {
        if quantity == 0 {
            return Err(HostError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        let mut items = self.all().await?;
        let item = if let Some(line) = items
            .iter_mut()
            .find(|line| line.variation_id == variation_id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            line.clone()
        } else {
            let next_id = items.iter().map(|line| line.id.as_i32()).max().unwrap_or(0) + 1;
            let line = BasketItem {
                id: BasketItemId::new(next_id),
                variation_id,
                quantity,
            };
            items.push(line.clone());
            line
        };

        self.session
            .insert(session_keys::BASKET_ITEMS, &items)
            .await?;
        Ok(item)
    }
}

/// Session identity: the contact ID stored at login.
#[derive(Clone)]
pub struct SessionUser {
    session: Session,
}

impl SessionUser {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl UserSession for SessionUser {
    async fn current_contact_id(&self) -> HostResult<ContactId> {
        Ok(self
            .session
            .get::<ContactId>(session_keys::CONTACT_ID)
            .await?
            .unwrap_or(ContactId::NONE))
    }
}

/// Logs contacts in by writing their ID into the session.
pub struct SessionAuthenticator {
    session: Session,
    contacts: Arc<dyn ContactRepository>,
}

impl SessionAuthenticator {
    #[must_use]
    pub fn new(session: Session, contacts: Arc<dyn ContactRepository>) -> Self {
        Self { session, contacts }
    }

    async fn establish(&self, contact_id: ContactId) -> HostResult<()> {
        // New identity, new session ID.
        self.session.cycle_id().await?;
        self.session
            .insert(session_keys::CONTACT_ID, contact_id)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Authenticator for SessionAuthenticator {
    async fn login(&self, email: &Email, password: &SecretString) -> HostResult<ContactId> {
        let contact = self
            .contacts
            .find_contact_by_email(email)
            .await?
            .ok_or(HostError::InvalidCredentials)?;

        self.login_with_contact_id(contact.id, password).await?;
        Ok(contact.id)
    }

    async fn login_with_contact_id(
        &self,
        contact_id: ContactId,
        password: &SecretString,
    ) -> HostResult<()> {
        if !self.contacts.verify_password(contact_id, password).await? {
            return Err(HostError::InvalidCredentials);
        }

        self.establish(contact_id).await?;
        tracing::info!(contact_id = %contact_id, "Contact logged in");
        Ok(())
    }

    async fn logout(&self) -> HostResult<()> {
        self.session
            .remove::<ContactId>(session_keys::CONTACT_ID)
            .await?;
        self.session.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::host::MemoryHost;
    use crate::models::ContactData;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_session_storage_roundtrip() {
        let storage = SessionStorage::new(session());

        assert_eq!(
            storage
                .get_session_value(session_keys::GUEST_EMAIL)
                .await
                .unwrap(),
            None
        );
        storage
            .set_session_value(session_keys::GUEST_EMAIL, "guest@example.com")
            .await
            .unwrap();
        assert_eq!(
            storage
                .get_session_value(session_keys::GUEST_EMAIL)
                .await
                .unwrap()
                .as_deref(),
            Some("guest@example.com")
        );
    }

    #[tokio::test]
    async fn test_basket_merges_lines() {
        let basket = SessionBasket::new(session());
        assert!(basket.all().await.unwrap().is_empty());

        basket.add(VariationId::new(40), 1).await.unwrap();
        basket.add(VariationId::new(41), 2).await.unwrap();
        let merged = basket.add(VariationId::new(40), 3).await.unwrap();

        assert_eq!(merged.quantity, 4);
        let items = basket.all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, BasketItemId::new(2));
    }

    #[tokio::test]
    async fn test_basket_rejects_zero_quantity() {
        let basket = SessionBasket::new(session());
        assert!(matches!(
            basket.add(VariationId::new(40), 0).await,
            Err(HostError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_login_sets_and_logout_clears_contact() {
        let host = Arc::new(MemoryHost::new());
        let email = Email::parse("ada@example.com").unwrap();
        let password = SecretString::from("s3cure-pass");
        host.create_contact(&ContactData {
            email: email.clone(),
            password: password.clone(),
            first_name: None,
            last_name: None,
        })
        .await
        .unwrap();

        let session = session();
        let auth = SessionAuthenticator::new(session.clone(), host);
        let user = SessionUser::new(session);
        assert_eq!(user.current_contact_id().await.unwrap(), ContactId::NONE);

        let wrong = auth.login(&email, &SecretString::from("wrong-pass")).await;
        assert!(matches!(wrong, Err(HostError::InvalidCredentials)));
        assert_eq!(user.current_contact_id().await.unwrap(), ContactId::NONE);

        let contact_id = auth.login(&email, &password).await.unwrap();
        assert_eq!(user.current_contact_id().await.unwrap(), contact_id);

        auth.logout().await.unwrap();
        assert_eq!(user.current_contact_id().await.unwrap(), ContactId::NONE);
    }
}
