//! Timezone-aware date formatting and parsing.
//!
//! Four canonical string shapes are produced over a `DateTime<FixedOffset>`:
//! human-readable (`DD/MM/YYYY HH:MM:SS`), filesystem-safe
//! (`YYYY-MM-DDTHH-MM-SS`), RFC 3339 with explicit offset, and the log
//! shape (`DD/MM/YYYY:HH:MM:SS`). The zone defaults to the host's local
//! offset and can be overridden per call site.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{Error, Result};

/// A display timezone: the host's local offset, UTC, or a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl Zone {
    /// Parse a zone from text: `"local"`, `"UTC"`, or `"±HH:MM"`.
    ///
    /// Matching is case-insensitive. Returns `None` for anything else,
    /// including out-of-range offsets.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Some(Zone::Local),
            "utc" | "z" => Some(Zone::Utc),
            _ => parse_offset(s).map(Zone::Fixed),
        }
    }
}

/// Parse a `±HH:MM` offset string.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let bytes = s.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours: i32 = s[1..3].parse().ok()?;
    let minutes: i32 = s[4..6].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Whether the given text names a usable zone.
pub fn is_valid_zone(s: &str) -> bool {
    Zone::parse(s).is_some()
}

/// The current instant in the given zone.
pub fn now_in(zone: &Zone) -> DateTime<FixedOffset> {
    match zone {
        Zone::Local => Local::now().fixed_offset(),
        Zone::Utc => Utc::now().fixed_offset(),
        Zone::Fixed(offset) => Utc::now().with_timezone(offset),
    }
}

/// Human-readable shape: `DD/MM/YYYY HH:MM:SS`.
pub fn human(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Filesystem-safe shape: `YYYY-MM-DDTHH-MM-SS`.
pub fn save_stamp(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// RFC 3339 with seconds precision; a zero offset renders as `Z`,
/// other offsets as `±HH:MM`.
pub fn offset_stamp(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Log shape: `DD/MM/YYYY:HH:MM:SS`.
pub fn log_stamp(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%d/%m/%Y:%H:%M:%S").to_string()
}

/// An input accepted by [`parse_date`].
#[derive(Debug, Clone)]
pub enum DateInput {
    /// An RFC 3339 / ISO 8601 string, or a plain `YYYY-MM-DD` date.
    Text(String),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// An already-parsed instant.
    At(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::EpochMillis(millis)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::At(dt)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateInput::At(dt.with_timezone(&Utc))
    }
}

/// Parse a date from a string, an epoch-millisecond number, or an
/// existing datetime.
///
/// String inputs accept RFC 3339 (`2024-03-07T12:00:00Z`), a bare
/// `YYYY-MM-DDTHH:MM:SS` (interpreted as UTC), and a plain `YYYY-MM-DD`
/// (midnight UTC). Anything else fails with a parse error.
pub fn parse_date(input: impl Into<DateInput>) -> Result<DateTime<Utc>> {
    match input.into() {
        DateInput::At(dt) => Ok(dt),
        DateInput::EpochMillis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| Error::parse(format!("epoch out of range: {}", millis))),
        DateInput::Text(text) => parse_date_text(&text),
    }
}

fn parse_date_text(text: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(Error::parse(format!("invalid date: {}", text)))
}
