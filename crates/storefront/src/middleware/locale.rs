//! Request context extractors: active language and shop-builder flag.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::state::AppState;

/// Header set by the shop builder when it composes a page.
pub const SHOP_BUILDER_HEADER: &str = "x-shop-builder";

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Active shop language.
///
/// Taken from `?lang=` when it names a configured language, otherwise the
/// shop's default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub lang: String,
    pub default_lang: String,
}

impl FromRequestParts<AppState> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let shop = &state.config().shop;
        let requested = Query::<LangQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.lang)
            .map(|lang| lang.trim().to_lowercase());

        let lang = requested
            .filter(|lang| shop.supports_language(lang))
            .unwrap_or_else(|| shop.default_lang.clone());

        Ok(Self {
            lang,
            default_lang: shop.default_lang.clone(),
        })
    }
}

/// Whether the shop builder is composing the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopBuilder(pub bool);

impl<S> FromRequestParts<S> for ShopBuilder
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let active = parts
            .headers
            .get(SHOP_BUILDER_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| matches!(value.trim(), "1" | "true"));
        Ok(Self(active))
    }
}
