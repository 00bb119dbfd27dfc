//! Session-bound host contracts.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use tower_sessions::Session;

use crate::host::{SessionAuthenticator, SessionBasket, SessionStorage, SessionUser};
use crate::services::{CustomerContracts, CustomerService};
use crate::state::{AppState, HostServices};

/// Contracts that live in the visitor's session, built once per request.
pub struct SessionContracts {
    pub storage: SessionStorage,
    pub basket: SessionBasket,
    pub user: SessionUser,
    pub auth: SessionAuthenticator,
}

impl SessionContracts {
    /// Build the session-bound contracts for `session`.
    #[must_use]
    pub fn new(session: Session, host: &HostServices) -> Self {
        Self {
            storage: SessionStorage::new(session.clone()),
            basket: SessionBasket::new(session.clone()),
            user: SessionUser::new(session.clone()),
            auth: SessionAuthenticator::new(session, host.contacts.clone()),
        }
    }

    /// A customer service for this request.
    #[must_use]
    pub fn customer<'a>(&'a self, host: &'a HostServices) -> CustomerService<'a> {
        CustomerService::new(CustomerContracts {
            contacts: host.contacts.as_ref(),
            addresses: host.addresses.as_ref(),
            orders: host.orders.as_ref(),
            auth: &self.auth,
            user_session: &self.user,
        })
    }
}

impl FromRequestParts<AppState> for SessionContracts {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session, state.host()))
    }
}
