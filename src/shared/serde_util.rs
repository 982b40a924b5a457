//! Custom serde helpers for the REST wire format.

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::Serialize;

/// Parse a string into a unit-variant enum using its serde names.
///
/// Returns `None` when the string is not one of the enum's wire values.
pub fn parse_enum<T: DeserializeOwned>(value: &str) -> Option<T> {
    let deserializer: StrDeserializer<'_, ValueError> = value.into_deserializer();
    T::deserialize(deserializer).ok()
}

/// A variant body written out with its `type` discriminator in front.
#[derive(Serialize)]
pub(crate) struct Tagged<'a, T> {
    #[serde(rename = "type")]
    type_name: &'a str,
    #[serde(flatten)]
    inner: &'a T,
}

impl<'a, T> Tagged<'a, T> {
    pub(crate) fn new(type_name: &'a str, inner: &'a T) -> Self {
        Self { type_name, inner }
    }
}

/// Serializes an optional list as a single comma-separated string.
///
/// List endpoints take id filters as `ids=1,2,3`.
pub mod comma_separated {
    use serde::Serializer;
    use std::fmt::Display;

    pub fn serialize<S, T>(values: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        match values {
            Some(values) => serializer.collect_str(
                &values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    enum Colour {
        DeepRed,
        Blue,
    }

    #[test]
    fn test_parse_enum() {
        assert_eq!(parse_enum::<Colour>("DEEP_RED"), Some(Colour::DeepRed));
        assert_eq!(parse_enum::<Colour>("BLUE"), Some(Colour::Blue));
        assert_eq!(parse_enum::<Colour>("blue"), None);
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        trade_id: &'static str,
    }

    #[test]
    fn test_tagged_puts_type_first() {
        let body = Body { trade_id: "7" };
        let json = serde_json::to_string(&Tagged::new("TAKE_PROFIT", &body)).unwrap();
        assert_eq!(json, r#"{"type":"TAKE_PROFIT","tradeId":"7"}"#);
    }
}
