//! Tagged union over every record shape a report can list.

use std::fmt;

use super::{ShortUrlSummary, Visit};

/// Record family, used to pick the fixed column prefix of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    ShortUrl,
    Visit,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::ShortUrl => f.write_str("short URL"),
            RecordKind::Visit => f.write_str("visit"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Record {
    ShortUrl(ShortUrlSummary),
    Visit(Visit),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::ShortUrl(_) => RecordKind::ShortUrl,
            Record::Visit(_) => RecordKind::Visit,
        }
    }
}

impl From<ShortUrlSummary> for Record {
    fn from(s: ShortUrlSummary) -> Self {
        Record::ShortUrl(s)
    }
}

impl From<Visit> for Record {
    fn from(v: Visit) -> Self {
        Record::Visit(v)
    }
}
