//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the server sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod price;
pub mod reason;
pub mod serde_util;
pub mod time;

pub use price::{AccountUnits, DecimalNumber, PriceValue};
pub use reason::Reason;
pub use time::DateTime;

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Declares a transparent string newtype with the usual conversions.
macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self(s))
            }
        }
    };
}

pub(crate) use string_newtype;

string_newtype!(
    /// Account identifier, e.g. `"001-011-5838423-001"`.
    AccountId
);
string_newtype!(
    /// Server-assigned order identifier, unique within an account.
    OrderId
);
string_newtype!(
    /// Server-assigned trade identifier, unique within an account.
    TradeId
);
string_newtype!(
    /// Transaction identifier. Monotonically increasing within an account.
    TransactionId
);
string_newtype!(
    /// Identifier of the request that produced a transaction.
    RequestId
);
string_newtype!(
    /// Client-supplied identifier for an order or trade.
    ClientId
);
string_newtype!(
    /// Client-supplied tag for an order or trade.
    ClientTag
);
string_newtype!(
    /// Client-supplied comment for an order or trade.
    ClientComment
);
string_newtype!(
    /// Instrument name, e.g. `"EUR_USD"`.
    InstrumentName
);
string_newtype!(
    /// ISO 4217 currency code.
    Currency
);

// ─── AccountId parsing ───────────────────────────────────────────────────────

/// The four dash-delimited components of an [`AccountId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountIdParts {
    pub site: String,
    pub division: String,
    pub user: String,
    pub account_number: String,
}

impl FromStr for AccountIdParts {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [site, division, user, account_number] => Ok(Self {
                site: site.to_string(),
                division: division.to_string(),
                user: user.to_string(),
                account_number: account_number.to_string(),
            }),
            _ => Err(ModelError::InvalidAccountId(s.to_string())),
        }
    }
}

impl std::fmt::Display for AccountIdParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.site, self.division, self.user, self.account_number
        )
    }
}

impl AccountId {
    /// Split into site, division, user and account number.
    ///
    /// Fails unless the identifier contains exactly three `-` separators.
    pub fn parts(&self) -> ModelResult<AccountIdParts> {
        self.0.parse()
    }
}

impl From<AccountIdParts> for AccountId {
    fn from(parts: AccountIdParts) -> Self {
        Self(parts.to_string())
    }
}

// ─── Specifiers ──────────────────────────────────────────────────────────────

/// Prefix that marks a client-supplied identifier in a specifier.
pub const CLIENT_ID_SIGIL: char = '@';

macro_rules! specifier {
    ($(#[$meta:meta])* $name:ident, $id:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            /// Server-assigned identifier.
            Id($id),
            /// Client-supplied identifier (written with a leading `@`).
            Client(ClientId),
        }

        impl $name {
            pub fn is_client(&self) -> bool {
                matches!(self, Self::Client(_))
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.strip_prefix(CLIENT_ID_SIGIL) {
                    Some("") => Err(ModelError::InvalidParameter(format!(
                        "empty client ID in {} specifier",
                        $label
                    ))),
                    Some(client) => Ok(Self::Client(ClientId::from(client))),
                    None if s.is_empty() => Err(ModelError::InvalidParameter(format!(
                        "empty {} specifier",
                        $label
                    ))),
                    None => Ok(Self::Id($id::from(s))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    Self::Id(id) => write!(f, "{}", id),
                    Self::Client(client) => write!(f, "{}{}", CLIENT_ID_SIGIL, client),
                }
            }
        }

        impl From<$id> for $name {
            fn from(id: $id) -> Self {
                Self::Id(id)
            }
        }

        impl From<ClientId> for $name {
            fn from(id: ClientId) -> Self {
                Self::Client(id)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

specifier!(
    /// Either an [`OrderId`] or `@` followed by the order's client ID.
    OrderSpecifier,
    OrderId,
    "order"
);
specifier!(
    /// Either a [`TradeId`] or `@` followed by the trade's client ID.
    TradeSpecifier,
    TradeId,
    "trade"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_parts() {
        let id = AccountId::from("001-011-5838423-001");
        let parts = id.parts().unwrap();
        assert_eq!(parts.site, "001");
        assert_eq!(parts.division, "011");
        assert_eq!(parts.user, "5838423");
        assert_eq!(parts.account_number, "001");
        assert_eq!(AccountId::from(parts), id);
    }

    #[test]
    fn test_account_id_wrong_separator_count() {
        for bad in ["", "001", "001-011-5838423", "001-011-5838423-001-002"] {
            assert!(matches!(
                AccountId::from(bad).parts(),
                Err(ModelError::InvalidAccountId(_))
            ));
        }
    }

    #[test]
    fn test_order_specifier() {
        let spec: OrderSpecifier = "1234".parse().unwrap();
        assert_eq!(spec, OrderSpecifier::Id(OrderId::from("1234")));
        assert!(!spec.is_client());

        let spec: OrderSpecifier = "@my_order".parse().unwrap();
        assert_eq!(spec, OrderSpecifier::Client(ClientId::from("my_order")));
        assert_eq!(spec.to_string(), "@my_order");

        assert!("@".parse::<OrderSpecifier>().is_err());
        assert!("".parse::<TradeSpecifier>().is_err());
    }

    #[test]
    fn test_specifier_serde() {
        let spec = TradeSpecifier::Client(ClientId::from("abc"));
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, "\"@abc\"");
        let back: TradeSpecifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_newtype_serde() {
        let id = InstrumentName::from("EUR_USD");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"EUR_USD\"");
        let back: InstrumentName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "EUR_USD");
    }
}
