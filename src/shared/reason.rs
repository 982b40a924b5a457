//! Open reason codes.

use super::serde_util::parse_enum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reason code: one of the values known for the field, or any newer value
/// the server sends, kept verbatim.
///
/// Serializes back to the exact wire string in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reason<T> {
    Known(T),
    Other(String),
}

impl<T> Reason<T> {
    /// The typed value, if recognized.
    pub fn known(&self) -> Option<&T> {
        match self {
            Reason::Known(value) => Some(value),
            Reason::Other(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Reason::Known(_))
    }
}

impl<T: DeserializeOwned> Reason<T> {
    /// Resolve a wire string, falling back to [`Reason::Other`].
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        match parse_enum(&value) {
            Some(known) => Reason::Known(known),
            None => {
                tracing::debug!(value = %value, "Keeping unrecognized reason code");
                Reason::Other(value)
            }
        }
    }
}

impl<T: DeserializeOwned> From<String> for Reason<T> {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl<T: DeserializeOwned> From<&str> for Reason<T> {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl<T: Serialize> Serialize for Reason<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Reason::Known(value) => value.serialize(serializer),
            Reason::Other(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Reason<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    enum Colour {
        DeepBlue,
        Red,
    }

    #[test]
    fn test_known_value() {
        let reason: Reason<Colour> = serde_json::from_str("\"DEEP_BLUE\"").unwrap();
        assert_eq!(reason, Reason::Known(Colour::DeepBlue));
        assert_eq!(reason.known(), Some(&Colour::DeepBlue));
        assert_eq!(serde_json::to_string(&reason).unwrap(), "\"DEEP_BLUE\"");
    }

    #[test]
    fn test_unknown_value_kept_verbatim() {
        let reason: Reason<Colour> = serde_json::from_str("\"ULTRAVIOLET\"").unwrap();
        assert_eq!(reason, Reason::Other("ULTRAVIOLET".to_string()));
        assert!(!reason.is_known());
        assert_eq!(serde_json::to_string(&reason).unwrap(), "\"ULTRAVIOLET\"");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Reason::<Colour>::from("RED"), Reason::Known(Colour::Red));
        assert_eq!(Reason::<Colour>::from(String::new()), Reason::Other(String::new()));
    }

    #[test]
    fn test_non_string_is_error() {
        assert!(serde_json::from_str::<Reason<Colour>>("3").is_err());
    }
}
