//! Human-readable `Duration` serialization for configuration documents
//!
//! Accepted forms: `"<n>ns"`, `"<n>us"`, `"<n>ms"`, `"<n>s"`, `"<n>m"`,
//! `"<n>h"` or a bare number of seconds. Serialization picks the largest
//! unit that represents the value exactly, so `12m` stays `12m` and
//! `200ms` stays `200ms`.

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Serde `serialize_with` entry point
pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_duration(*duration))
}

/// Serde `deserialize_with` entry point
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(serde::de::Error::custom)
}

/// Render a duration using the largest exact unit.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    let units = [
        (NANOS_PER_HOUR, "h"),
        (NANOS_PER_MIN, "m"),
        (NANOS_PER_SEC, "s"),
        (NANOS_PER_MILLI, "ms"),
        (NANOS_PER_MICRO, "us"),
    ];
    for (per_unit, suffix) in units {
        if nanos % per_unit == 0 {
            return format!("{}{}", nanos / per_unit, suffix);
        }
    }
    format!("{}ns", nanos)
}

/// Parse a duration string such as `200ms`, `12m` or `30`.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }

    // Two-letter suffixes first: "ms" would otherwise match "s".
    if let Some(v) = s.strip_suffix("ns") {
        return parse_count(v, s).map(Duration::from_nanos);
    }
    if let Some(v) = s.strip_suffix("us") {
        return parse_count(v, s).map(Duration::from_micros);
    }
    if let Some(v) = s.strip_suffix("ms") {
        return parse_count(v, s).map(Duration::from_millis);
    }
    if let Some(v) = s.strip_suffix('h') {
        return scaled_secs(parse_count(v, s)?, 3600, s);
    }
    if let Some(v) = s.strip_suffix('m') {
        return scaled_secs(parse_count(v, s)?, 60, s);
    }
    if let Some(v) = s.strip_suffix('s') {
        return parse_count(v, s).map(Duration::from_secs);
    }
    parse_count(s, s).map(Duration::from_secs)
}

fn parse_count(value: &str, original: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("invalid duration '{}'", original))
}

fn scaled_secs(count: u64, secs_per_unit: u64, original: &str) -> Result<Duration, String> {
    count
        .checked_mul(secs_per_unit)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration '{}' overflows", original))
}
