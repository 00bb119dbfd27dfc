//! Account route handlers.
//!
//! Every route requires a logged-in contact ([`RequireContact`]); all data
//! goes through the request's [`CustomerService`](crate::services::CustomerService).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use ioshop_core::{AddressId, AddressType};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{RequireContact, SessionContracts};
use crate::models::{Address, ContactUpdate, Order};
use crate::routes::forms::{AddressForm, non_blank, parse_address_type};
use crate::services::customer::{DEFAULT_ORDER_PAGE, DEFAULT_ORDERS_PER_PAGE};
use crate::state::AppState;

/// Largest page size a visitor may request.
const MAX_ORDERS_PER_PAGE: u32 = 50;

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub number: String,
    pub date: String,
    pub total: String,
    pub status: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            number: order.id.to_string(),
            date: order.created_at.format("%Y-%m-%d").to_string(),
            total: order.total.display(),
            status: order.status.clone(),
        }
    }
}

/// Address display data for templates.
#[derive(Clone)]
pub struct AddressView {
    pub id: i32,
    pub kind: i32,
    pub label: &'static str,
    pub summary: String,
}

impl From<&Address> for AddressView {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.as_i32(),
            kind: address.kind.code(),
            label: address.kind.label(),
            summary: address.data.summary(),
        }
    }
}

/// Account overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountIndexTemplate {
    pub name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub latest_order: Option<OrderView>,
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderView>,
    pub page: u32,
    pub items_per_page: u32,
    pub last_page: u64,
    pub has_next: bool,
}

/// Address list page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/addresses.html")]
pub struct AddressesTemplate {
    pub addresses: Vec<AddressView>,
    /// Preselect delivery in the new-address form.
    pub delivery_selected: bool,
}

/// Address edit page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/address_edit.html")]
pub struct AddressEditTemplate {
    pub id: i32,
    pub kind: i32,
    pub label: &'static str,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub street: String,
    pub house_number: String,
    pub address_addition: String,
    pub postal_code: String,
    pub town: String,
    pub country_code: String,
    pub phone: String,
}

impl From<Address> for AddressEditTemplate {
    fn from(address: Address) -> Self {
        let data = address.data;
        Self {
            id: address.id.as_i32(),
            kind: address.kind.code(),
            label: address.kind.label(),
            first_name: data.first_name,
            last_name: data.last_name,
            company: data.company.unwrap_or_default(),
            street: data.street,
            house_number: data.house_number,
            address_addition: data.address_addition.unwrap_or_default(),
            postal_code: data.postal_code,
            town: data.town,
            country_code: data.country_code,
            phone: data.phone.unwrap_or_default(),
        }
    }
}

/// Order history query parameters.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub page: Option<u32>,
    pub items: Option<u32>,
}

/// Address type query parameter.
#[derive(Debug, Deserialize)]
pub struct TypeQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl TypeQuery {
    fn address_type(&self) -> Result<Option<AddressType>> {
        self.kind
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(parse_address_type)
            .transpose()
    }

    fn required_address_type(&self) -> Result<AddressType> {
        self.address_type()?
            .ok_or_else(|| AppError::BadRequest("Missing address type".to_string()))
    }
}

/// Address delete form data.
#[derive(Debug, Deserialize)]
pub struct DeleteAddressForm {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Profile form data.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Display account overview page.
///
/// GET /account
#[instrument(skip(state, contracts))]
pub async fn index(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
) -> Result<Response> {
    let customer = contracts.customer(state.host());
    let Some(contact) = customer.contact().await? else {
        return Err(AppError::NotFound(format!("contact {contact_id}")));
    };
    let latest_order = customer.latest_order().await?;

    Ok(AccountIndexTemplate {
        name: contact.display_name(),
        email: contact.email.to_string(),
        first_name: contact.first_name.unwrap_or_default(),
        last_name: contact.last_name.unwrap_or_default(),
        latest_order: latest_order.as_ref().map(OrderView::from),
    }
    .into_response())
}

/// Update the contact's name.
///
/// POST /account
#[instrument(skip(state, contracts, form))]
pub async fn update_profile(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect> {
    let update = ContactUpdate {
        first_name: non_blank(form.first_name.as_deref()),
        last_name: non_blank(form.last_name.as_deref()),
    };
    contracts.customer(state.host()).update_contact(&update).await?;
    Ok(Redirect::to("/account"))
}

/// Display order history.
///
/// GET /account/orders
#[instrument(skip(state, contracts))]
pub async fn orders(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
    Query(query): Query<OrdersQuery>,
) -> Result<Response> {
    let page = query.page.filter(|p| *p > 0).unwrap_or(DEFAULT_ORDER_PAGE);
    let items_per_page = query
        .items
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_ORDERS_PER_PAGE)
        .min(MAX_ORDERS_PER_PAGE);

    let result = contracts
        .customer(state.host())
        .orders(page, items_per_page)
        .await?;

    Ok(OrdersTemplate {
        orders: result.entries.iter().map(OrderView::from).collect(),
        page: result.page,
        items_per_page: result.items_per_page,
        last_page: result.last_page(),
        has_next: !result.is_last_page(),
    }
    .into_response())
}

/// Display the address list.
///
/// GET /account/addresses
#[instrument(skip(state, contracts))]
pub async fn addresses(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
    Query(query): Query<TypeQuery>,
) -> Result<Response> {
    let kind = query.address_type()?;
    let addresses = contracts.customer(state.host()).addresses(kind).await?;

    Ok(AddressesTemplate {
        addresses: addresses.iter().map(AddressView::from).collect(),
        delivery_selected: kind == Some(AddressType::Delivery),
    }
    .into_response())
}

/// Create an address (and its mirror of the other type).
///
/// POST /account/addresses
#[instrument(skip(state, contracts, form))]
pub async fn create_address(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
    Form(form): Form<AddressForm>,
) -> Result<Redirect> {
    let (kind, data) = form.into_parts()?;
    let address = contracts
        .customer(state.host())
        .create_address(&data, kind)
        .await?;

    tracing::info!(address_id = %address.id, kind = %kind, "Address created");
    Ok(Redirect::to("/account/addresses"))
}

/// Display the address edit form.
///
/// GET /account/addresses/{id}/edit?type=
#[instrument(skip(state, contracts))]
pub async fn edit_address(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
    Path(id): Path<i32>,
    Query(query): Query<TypeQuery>,
) -> Result<Response> {
    let kind = query.required_address_type()?;
    let address = contracts
        .customer(state.host())
        .address(AddressId::new(id), kind)
        .await?;

    Ok(AddressEditTemplate::from(address).into_response())
}

/// Update an address.
///
/// POST /account/addresses/{id}
#[instrument(skip(state, contracts, form))]
pub async fn update_address(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
    Path(id): Path<i32>,
    Form(form): Form<AddressForm>,
) -> Result<Redirect> {
    let (kind, data) = form.into_parts()?;
    contracts
        .customer(state.host())
        .update_address(AddressId::new(id), &data, kind)
        .await?;

    Ok(Redirect::to("/account/addresses"))
}

/// Delete an address.
///
/// POST /account/addresses/{id}/delete
#[instrument(skip(state, contracts))]
pub async fn delete_address(
    State(state): State<AppState>,
    RequireContact(contact_id): RequireContact,
    contracts: SessionContracts,
    Path(id): Path<i32>,
    Form(form): Form<DeleteAddressForm>,
) -> Result<Redirect> {
    let kind = parse_address_type(&form.kind)?;
    contracts
        .customer(state.host())
        .delete_address(AddressId::new(id), kind)
        .await?;

    tracing::info!(address_id = id, kind = %kind, "Address deleted");
    Ok(Redirect::to("/account/addresses"))
}
