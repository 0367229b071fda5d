//! Serde support for the `day/month/year hour:minute:second` timestamps used
//! by the recipe data feed.
//!
//! The feed predates the service and does not follow any standard format, so
//! both ingest paths — CSV rows and JSON request bodies — bind date fields
//! through this one module via `#[serde(with = "date")]`. Instants are UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// The fixed feed timestamp format, e.g. `30/06/2015 17:58:00`.
pub const FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Parses a feed timestamp into a UTC instant.
pub fn parse(value: &str) -> chrono::format::ParseResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, FORMAT).map(|naive| naive.and_utc())
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(de::Error::custom)
}
