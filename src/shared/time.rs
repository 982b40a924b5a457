//! Timestamp newtype.

use super::string_newtype;
use crate::error::{ModelError, ModelResult};
use chrono::{SecondsFormat, TimeZone, Utc};

string_newtype!(
    /// A timestamp as sent by the server.
    ///
    /// Either RFC 3339 with nanosecond precision (`"2016-06-22T18:41:29.285982286Z"`)
    /// or, when the client requested the UNIX format, fractional epoch seconds
    /// (`"1466620889.285982286"`).
    DateTime
);

impl DateTime {
    /// Parse into a UTC [`chrono::DateTime`].
    pub fn to_utc(&self) -> ModelResult<chrono::DateTime<Utc>> {
        let value = self.as_str();
        if value.contains('T') {
            return chrono::DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| invalid(value, e.to_string()));
        }
        parse_unix(value)
    }

    /// Format a UTC timestamp the way the server does (RFC 3339, nanoseconds, `Z`).
    pub fn from_utc(dt: chrono::DateTime<Utc>) -> Self {
        Self::new(dt.to_rfc3339_opts(SecondsFormat::Nanos, true))
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

fn parse_unix(value: &str) -> ModelResult<chrono::DateTime<Utc>> {
    let (whole, frac) = value.split_once('.').unwrap_or((value, ""));
    let secs: i64 = whole
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(value, e.to_string()))?;
    if frac.len() > 9 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(value, "invalid fractional seconds".to_string()));
    }
    let nanos: u32 = if frac.is_empty() {
        0
    } else {
        format!("{:0<9}", frac)
            .parse()
            .map_err(|e: std::num::ParseIntError| invalid(value, e.to_string()))?
    };
    // "-1.5" is 1.5s before the epoch: one more whole second back, then forward.
    let (secs, nanos) = if whole.starts_with('-') && nanos > 0 {
        (secs - 1, 1_000_000_000 - nanos)
    } else {
        (secs, nanos)
    };
    Utc.timestamp_opt(secs, nanos)
        .single()
        .ok_or_else(|| invalid(value, "timestamp out of range".to_string()))
}

fn invalid(value: &str, reason: String) -> ModelError {
    ModelError::InvalidDateTime {
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_rfc3339_nanos() {
        let dt = DateTime::from("2016-06-22T18:41:29.285982286Z");
        let parsed = dt.to_utc().unwrap();
        assert_eq!(parsed.timestamp(), 1466620889);
        assert_eq!(parsed.nanosecond(), 285982286);
        assert_eq!(DateTime::from_utc(parsed), dt);
    }

    #[test]
    fn test_unix_format() {
        let parsed = DateTime::from("1466620889.285982286").to_utc().unwrap();
        assert_eq!(parsed.timestamp(), 1466620889);
        assert_eq!(parsed.nanosecond(), 285982286);

        let parsed = DateTime::from("1466620889.5").to_utc().unwrap();
        assert_eq!(parsed.nanosecond(), 500_000_000);

        let parsed = DateTime::from("1466620889").to_utc().unwrap();
        assert_eq!(parsed.nanosecond(), 0);
    }

    #[test]
    fn test_unix_format_before_epoch() {
        let parsed = DateTime::from("-1.5").to_utc().unwrap();
        assert_eq!(parsed.timestamp(), -2);
        assert_eq!(parsed.nanosecond(), 500_000_000);

        let parsed = DateTime::from("-0.25").to_utc().unwrap();
        assert_eq!(parsed.timestamp(), -1);
        assert_eq!(parsed.nanosecond(), 750_000_000);

        let parsed = DateTime::from("-3").to_utc().unwrap();
        assert_eq!(parsed.timestamp(), -3);
        assert_eq!(parsed.nanosecond(), 0);
    }

    #[test]
    fn test_invalid() {
        assert!(DateTime::from("yesterday").to_utc().is_err());
        assert!(DateTime::from("2016-13-99T00:00:00Z").to_utc().is_err());
        assert!(DateTime::from("1466620889.12x").to_utc().is_err());
    }
}
