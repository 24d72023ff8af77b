use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer};
use serde_with::DeserializeAs;

/// Millisecond-epoch timestamp sent as a decimal string, e.g.
/// "1577836800000". JSON numbers are not accepted.
pub(crate) struct MillisString;

impl<'de> DeserializeAs<'de, DateTime<Utc>> for MillisString {
    fn deserialize_as<D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_millis(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid millisecond timestamp {raw:?}")))
    }
}

pub(crate) fn parse_millis(raw: &str) -> Option<DateTime<Utc>> {
    let millis: f64 = raw.parse().ok()?;
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_integer_millis() {
        assert_eq!(
            parse_millis("1577836800000"),
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_fractional_millis() {
        let parsed = parse_millis("1577836800500.0").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_577_836_800_500);
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_millis("2020-01-01 00:00:00 Etc/GMT"), None);
        assert_eq!(parse_millis(""), None);
        assert_eq!(parse_millis("NaN"), None);
        assert_eq!(parse_millis("inf"), None);
    }
}
