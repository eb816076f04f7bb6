//! Serde codec for document timestamps.
//!
//! Timestamps are written as RFC 3339 in UTC. Files written by older tooling
//! carry naive ISO timestamps with no offset; those are read as local time.
//! A `null` value reads as the current time, which together with
//! `#[serde(default = "Utc::now")]` backfills absent timestamps.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => {
            parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`")))
        }
        None => Ok(Utc::now()),
    }
}

/// Render a timestamp the way it is stored in documents.
pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an RFC 3339 timestamp, or a naive ISO timestamp as local time.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = raw.parse::<NaiveDateTime>().ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
