//! Newtype IDs for type-safe entity references.
//!
//! Host entities (contacts, addresses, items, ...) are identified by plain
//! integers where any value `<= 0` means "no entity". The `define_id!` macro
//! wraps those integers so a contact id can never be passed where an address
//! id is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `Default`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`, `is_positive()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use ioshop_core::define_id;
/// define_id!(ContactId);
/// define_id!(OrderId);
///
/// let contact_id = ContactId::new(1);
/// let order_id = OrderId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ContactId = order_id;
/// assert!(contact_id.is_positive());
/// assert!(!OrderId::default().is_positive());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }

            /// Whether this ID refers to an existing entity (`> 0`).
            #[must_use]
            pub const fn is_positive(&self) -> bool {
                self.0 > 0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ContactId);
define_id!(AddressId);
define_id!(OrderId);
define_id!(ItemId);
define_id!(VariationId);
define_id!(CategoryId);
define_id!(BasketItemId);

impl ContactId {
    /// The id reported when the session has no logged-in contact.
    pub const NONE: Self = Self(0);

    /// Whether the id belongs to a logged-in contact.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_positive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_none_is_not_authenticated() {
        assert!(!ContactId::NONE.is_authenticated());
        assert!(!ContactId::new(-3).is_authenticated());
        assert!(ContactId::new(7).is_authenticated());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(ItemId::default().as_i32(), 0);
        assert_eq!(ContactId::default(), ContactId::NONE);
    }

    #[test]
    fn test_serde_transparent() {
        let id = VariationId::new(1042);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1042");
        let parsed: VariationId = serde_json::from_str("1042").unwrap();
        assert_eq!(parsed, id);
    }
}
