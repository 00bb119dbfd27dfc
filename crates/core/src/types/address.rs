//! Address type classification.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned for an unknown numeric address type.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown address type: {0}")]
pub struct UnknownAddressType(pub i32);

/// Error returned when text names no address type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid address type: {0:?}")]
pub struct ParseAddressTypeError(pub String);

/// The role an address plays for a contact.
///
/// Serialized as the host's numeric code (`1` billing, `2` delivery), which
/// is also how forms submit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AddressType {
    Billing,
    Delivery,
}

impl AddressType {
    /// Numeric code used by the host platform.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Billing => 1,
            Self::Delivery => 2,
        }
    }

    /// The type an address is mirrored into.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Billing => Self::Delivery,
            Self::Delivery => Self::Billing,
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Billing => "Billing address",
            Self::Delivery => "Delivery address",
        }
    }
}

impl TryFrom<i32> for AddressType {
    type Error = UnknownAddressType;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Billing),
            2 => Ok(Self::Delivery),
            other => Err(UnknownAddressType(other)),
        }
    }
}

impl From<AddressType> for i32 {
    fn from(kind: AddressType) -> Self {
        kind.code()
    }
}

/// Accepts the numeric code or the lowercase name.
impl FromStr for AddressType {
    type Err = ParseAddressTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "billing" => Ok(Self::Billing),
            "2" | "delivery" => Ok(Self::Delivery),
            other => Err(ParseAddressTypeError(other.to_string())),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
