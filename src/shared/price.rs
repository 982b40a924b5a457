//! Decimal string newtypes.
//!
//! The server sends every quantity, price and currency amount as a decimal
//! string. The string is kept verbatim so that re-encoding a value is lossless
//! (`"1.2000"` stays `"1.2000"`); [`rust_decimal`] is used on demand for arithmetic.

use super::string_newtype;
use crate::error::{ModelError, ModelResult};
use rust_decimal::Decimal;
use std::str::FromStr;

string_newtype!(
    /// A decimal number, e.g. units or a margin rate.
    DecimalNumber
);
string_newtype!(
    /// A price in the quote currency of an instrument.
    PriceValue
);
string_newtype!(
    /// An amount in the account's home currency.
    AccountUnits
);

macro_rules! decimal_conversions {
    ($($name:ident),*) => {
        $(
            impl $name {
                /// Parse the wire string as a [`Decimal`].
                pub fn to_decimal(&self) -> ModelResult<Decimal> {
                    parse_decimal(self.as_str())
                }
            }

            impl From<Decimal> for $name {
                fn from(d: Decimal) -> Self {
                    Self::new(d.to_string())
                }
            }
        )*
    };
}

decimal_conversions!(DecimalNumber, PriceValue, AccountUnits);

/// Parse a decimal string as sent by the server.
pub fn parse_decimal(value: &str) -> ModelResult<Decimal> {
    Decimal::from_str(value).map_err(|e| ModelError::InvalidDecimal {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal() {
        let units = DecimalNumber::from("-50");
        assert_eq!(units.to_decimal().unwrap(), Decimal::new(-50, 0));

        let price = PriceValue::from("1.2000");
        assert_eq!(price.to_decimal().unwrap(), Decimal::new(12, 1));
        assert_eq!(price.to_decimal().unwrap().scale(), 4);
    }

    #[test]
    fn test_invalid_decimal() {
        let err = AccountUnits::from("abc").to_decimal().unwrap_err();
        assert!(matches!(err, ModelError::InvalidDecimal { .. }));
    }

    #[test]
    fn test_wire_string_preserved() {
        let price = PriceValue::from("1.2000");
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"1.2000\"");
        assert_eq!(PriceValue::from(Decimal::new(12345, 4)), "1.2345");
    }
}
