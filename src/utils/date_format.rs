//! Date formatting shared by the projection layer and entity serialization.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a timestamp as an ATOM string (`2024-01-01T10:00:00+00:00`).
pub fn format_atom(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// `serialize_with` adapter emitting [`format_atom`] output.
pub fn serialize_atom<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_atom(date))
}
