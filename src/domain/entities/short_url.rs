//! Short URL summary as listed by the reports.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::date_format;

/// Aggregated view of a short URL: its mapping plus visit count and tags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlSummary {
    pub short_code: String,
    #[serde(rename = "originalUrl")]
    pub long_url: String,
    pub domain: Option<String>,
    #[serde(serialize_with = "date_format::serialize_atom")]
    pub date_created: DateTime<Utc>,
    pub visits_count: i64,
    pub tags: Vec<String>,
    /// Extra attributes from the store; never shown in reports.
    #[serde(skip)]
    pub meta: BTreeMap<String, String>,
}

impl ShortUrlSummary {
    pub fn new(
        short_code: impl Into<String>,
        long_url: impl Into<String>,
        date_created: DateTime<Utc>,
        visits_count: i64,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
            domain: None,
            date_created,
            visits_count,
            tags: Vec::new(),
            meta: BTreeMap::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}
