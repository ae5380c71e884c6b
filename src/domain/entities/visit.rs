//! Visit entity representing a single hit on the redirect service.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::date_format;

/// Why a visit was recorded.
///
/// Only `ValidShortUrl` visits are attached to a short URL; the rest are
/// "orphan" visits that hit the service without resolving to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitType {
    ValidShortUrl,
    BaseUrl,
    InvalidShortUrl,
    #[serde(rename = "regular_404")]
    Regular404,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::ValidShortUrl => "valid_short_url",
            VisitType::BaseUrl => "base_url",
            VisitType::InvalidShortUrl => "invalid_short_url",
            VisitType::Regular404 => "regular_404",
        }
    }

    pub fn is_orphan(&self) -> bool {
        !matches!(self, VisitType::ValidShortUrl)
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid_short_url" => Ok(VisitType::ValidShortUrl),
            "base_url" => Ok(VisitType::BaseUrl),
            "invalid_short_url" => Ok(VisitType::InvalidShortUrl),
            "regular_404" => Ok(VisitType::Regular404),
            other => Err(format!("unknown visit type '{other}'")),
        }
    }
}

/// Geolocation resolved for a visit before it reaches the reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitLocation {
    pub country_name: String,
    pub city_name: String,
}

impl VisitLocation {
    pub fn new(country_name: impl Into<String>, city_name: impl Into<String>) -> Self {
        Self {
            country_name: country_name.into(),
            city_name: city_name.into(),
        }
    }
}

/// A recorded visit.
///
/// Serializes to the camelCase shape the report projection starts from.
/// Free-form `meta` entries are carried along but never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub referer: Option<String>,
    #[serde(serialize_with = "date_format::serialize_atom")]
    pub date: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub remote_addr: Option<String>,
    pub visit_location: Option<VisitLocation>,
    #[serde(rename = "type")]
    pub visit_type: VisitType,
    /// Short code of the short URL this visit resolved to, if any.
    pub short_code: Option<String>,
    pub visited_url: Option<String>,
    #[serde(skip)]
    pub meta: BTreeMap<String, String>,
}

impl Visit {
    /// Creates a visit that resolved to the short URL identified by `short_code`.
    pub fn for_short_url(
        short_code: impl Into<String>,
        referer: Option<String>,
        user_agent: Option<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            referer,
            date,
            user_agent,
            remote_addr: None,
            visit_location: None,
            visit_type: VisitType::ValidShortUrl,
            short_code: Some(short_code.into()),
            visited_url: None,
            meta: BTreeMap::new(),
        }
    }

    /// Creates an orphan visit of the given type.
    pub fn orphan(
        visit_type: VisitType,
        referer: Option<String>,
        user_agent: Option<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            referer,
            date,
            user_agent,
            remote_addr: None,
            visit_location: None,
            visit_type,
            short_code: None,
            visited_url: None,
            meta: BTreeMap::new(),
        }
    }

    /// Attaches a resolved geolocation.
    pub fn locate(mut self, location: VisitLocation) -> Self {
        self.visit_location = Some(location);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn is_orphan(&self) -> bool {
        self.short_code.is_none()
    }
}
