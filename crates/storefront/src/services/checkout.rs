//! Checkout admission.
//!
//! Decides whether a request may see the checkout page. The decision is a
//! pure function of the request's inputs; gathering those inputs and acting
//! on the outcome is the handler's job.

/// Category rendered instead of the checkout inside the shop builder.
pub const CHECKOUT_CATEGORY: &str = "checkout";

/// Inputs to the checkout admission decision.
#[derive(Debug, Clone)]
pub struct CheckoutRequest<'a> {
    /// Email a guest entered to check out without an account.
    pub guest_email: Option<&'a str>,
    /// Whether the session belongs to a logged-in contact (`id > 0`).
    pub authenticated: bool,
    /// Number of items in the basket.
    pub basket_item_count: usize,
    /// Whether the page is being composed by the shop builder.
    pub shop_builder: bool,
    /// Whether the checkout is served as part of a category page.
    pub has_category: bool,
    /// URL of the current request, used as the login backlink.
    pub current_url: &'a str,
}

/// Outcome of the checkout admission decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutDecision {
    /// Render the checkout page.
    Render,
    /// Render the named category instead (shop builder without category).
    ShowCategory(&'static str),
    /// Neither a guest email nor a logged-in contact: send to login.
    RedirectToLogin { backlink: String },
    /// Identified visitor with an empty basket.
    RedirectHome,
}

/// Checkout admission guard.
pub struct CheckoutGuard;

impl CheckoutGuard {
    /// Decide what to do with a checkout request.
    ///
    /// A guest email counts as an identity: only a request with neither a
    /// guest email nor a logged-in contact is sent to the login page. The
    /// shop builder bypasses every guard.
    #[must_use]
    pub fn decide(request: &CheckoutRequest<'_>) -> CheckoutDecision {
        if request.shop_builder {
            if request.has_category {
                return CheckoutDecision::Render;
            }
            return CheckoutDecision::ShowCategory(CHECKOUT_CATEGORY);
        }

        let has_guest_email = request.guest_email.is_some_and(|email| !email.is_empty());
        if !has_guest_email && !request.authenticated {
            tracing::info!(backlink = %request.current_url, "Checkout requested without login");
            return CheckoutDecision::RedirectToLogin {
                backlink: request.current_url.to_string(),
            };
        }

        if request.basket_item_count == 0 {
            tracing::info!("Checkout requested with empty basket");
            return CheckoutDecision::RedirectHome;
        }

        CheckoutDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CheckoutRequest<'static> {
        CheckoutRequest {
            guest_email: None,
            authenticated: false,
            basket_item_count: 0,
            shop_builder: false,
            has_category: false,
            current_url: "/checkout?step=2",
        }
    }

    #[test]
    fn test_anonymous_redirects_to_login_with_backlink() {
        for basket_item_count in [0, 3] {
            let decision = CheckoutGuard::decide(&CheckoutRequest {
                basket_item_count,
                ..request()
            });
            assert_eq!(
                decision,
                CheckoutDecision::RedirectToLogin {
                    backlink: "/checkout?step=2".to_string()
                }
            );
        }
    }

    #[test]
    fn test_empty_guest_email_is_no_identity() {
        let decision = CheckoutGuard::decide(&CheckoutRequest {
            guest_email: Some(""),
            basket_item_count: 1,
            ..request()
        });
        assert!(matches!(decision, CheckoutDecision::RedirectToLogin { .. }));
    }

    #[test]
    fn test_identified_with_empty_basket_redirects_home() {
        let guest = CheckoutRequest {
            guest_email: Some("guest@example.com"),
            ..request()
        };
        let contact = CheckoutRequest {
            authenticated: true,
            ..request()
        };

        assert_eq!(CheckoutGuard::decide(&guest), CheckoutDecision::RedirectHome);
        assert_eq!(
            CheckoutGuard::decide(&contact),
            CheckoutDecision::RedirectHome
        );
    }

    #[test]
    fn test_identified_with_items_renders() {
        let guest = CheckoutRequest {
            guest_email: Some("guest@example.com"),
            basket_item_count: 2,
            ..request()
        };
        let contact_in_category = CheckoutRequest {
            authenticated: true,
            basket_item_count: 1,
            has_category: true,
            ..request()
        };

        assert_eq!(CheckoutGuard::decide(&guest), CheckoutDecision::Render);
        assert_eq!(
            CheckoutGuard::decide(&contact_in_category),
            CheckoutDecision::Render
        );
    }

    #[test]
    fn test_shop_builder_bypasses_guards() {
        let without_category = CheckoutRequest {
            shop_builder: true,
            ..request()
        };
        let with_category = CheckoutRequest {
            shop_builder: true,
            has_category: true,
            ..request()
        };

        assert_eq!(
            CheckoutGuard::decide(&without_category),
            CheckoutDecision::ShowCategory(CHECKOUT_CATEGORY)
        );
        assert_eq!(
            CheckoutGuard::decide(&with_category),
            CheckoutDecision::Render
        );
    }
}
