//! Timestamp utilities
//!
//! The reference clock for every service is UTC. Callers that need a local
//! rendering convert with [`now_in`]; wire formats go through [`to_isoz`].

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};

/// Get current UTC timestamp from the reference clock
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Alias of [`now`], for call sites that want to be explicit about UTC
pub fn now_utc() -> DateTime<Utc> {
    now()
}

/// Current instant expressed in a fixed offset (e.g. `+05:30`)
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    now().with_timezone(&offset)
}

/// Render a timestamp as UTC with microsecond precision and a literal `Z`
///
/// `2025-05-02T18:04:56.123456+05:30` becomes `2025-05-02T12:34:56.123456Z`.
pub fn to_isoz<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Serde helper: serialize `DateTime<Utc>` with [`to_isoz`]
///
/// Deserialization accepts any RFC 3339 timestamp and normalizes it to UTC.
pub mod isoz {
    use super::to_isoz;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_isoz(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }

    /// Same as the parent module, for `Option<DateTime<Utc>>` fields
    pub mod option {
        use super::to_isoz;
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match dt {
                Some(dt) => serializer.serialize_some(&to_isoz(dt)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<DateTime<Utc>>::deserialize(deserializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    #[test]
    fn test_now_returns_recent_timestamp() {
        let timestamp = now();
        // Between 2000-01-01 and 2100-01-01
        assert!(timestamp.timestamp() > 946_684_800);
        assert!(timestamp.timestamp() < 4_102_444_800);
    }

    #[tokio::test]
    async fn test_now_successive_calls_advance() {
        let time1 = now();
        tokio::time::sleep(Duration::from_millis(10)).await;
        let time2 = now_utc();
        assert!(time2 > time1);
    }

    #[test]
    fn test_now_in_keeps_instant() {
        let before = now();
        let local = now_in(ist());
        assert_eq!(local.offset().local_minus_utc(), 19_800);
        assert!(local.with_timezone(&Utc) >= before);
    }

    #[test]
    fn test_to_isoz_utc_roundtrip() {
        let dt = NaiveDate::from_ymd_opt(2025, 5, 2)
            .unwrap()
            .and_hms_micro_opt(12, 34, 56, 123_456)
            .unwrap()
            .and_utc();

        assert_eq!(to_isoz(&dt), "2025-05-02T12:34:56.123456Z");
    }

    #[test]
    fn test_to_isoz_non_utc_conversion() {
        // Same instant as above, expressed in +05:30
        let dt = ist()
            .with_ymd_and_hms(2025, 5, 2, 18, 4, 56)
            .unwrap()
            .with_nanosecond(123_456_000)
            .unwrap();

        assert_eq!(to_isoz(&dt), "2025-05-02T12:34:56.123456Z");
    }

    #[test]
    fn test_to_isoz_always_six_fraction_digits() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_isoz(&dt), "2025-01-01T00:00:00.000000Z");
    }

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "isoz")]
        at: DateTime<Utc>,
        #[serde(with = "isoz::option", default)]
        due: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_isoz_serde_helpers() {
        let parsed: Stamped =
            serde_json::from_str(r#"{"at":"2025-05-02T18:04:56.123456+05:30","due":null}"#).unwrap();
        assert!(parsed.due.is_none());

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["at"], "2025-05-02T12:34:56.123456Z");
        assert!(json["due"].is_null());
    }
}
