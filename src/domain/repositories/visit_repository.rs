//! Repository trait for visit listings.

use std::fmt;

use crate::domain::entities::{Visit, VisitType};
use crate::domain::repositories::RecordFilter;
use crate::error::ReportError;
use async_trait::async_trait;

/// Which visits a listing covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitScope {
    /// Visits of one short URL; `domain: None` means the default domain.
    ShortUrl {
        code: String,
        domain: Option<String>,
    },
    /// Visits of every short URL carrying the tag.
    Tag(String),
    /// Visits of every short URL served from the domain.
    Domain(String),
    /// Every visit attached to a short URL.
    NonOrphan,
    /// Visits that did not resolve to a short URL, optionally of one type.
    Orphan(Option<VisitType>),
}

impl fmt::Display for VisitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitScope::ShortUrl { code, domain: None } => write!(f, "short URL {code}"),
            VisitScope::ShortUrl {
                code,
                domain: Some(d),
            } => write!(f, "short URL {d}/{code}"),
            VisitScope::Tag(tag) => write!(f, "tag {tag}"),
            VisitScope::Domain(domain) => write!(f, "domain {domain}"),
            VisitScope::NonOrphan => f.write_str("non-orphan visits"),
            VisitScope::Orphan(None) => f.write_str("orphan visits"),
            VisitScope::Orphan(Some(t)) => write!(f, "orphan visits of type {t}"),
        }
    }
}

/// Read-only access to recorded visits.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Lists visits in `scope` whose date falls inside `filter.date_range`,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Store`] on database errors.
    async fn list(&self, scope: VisitScope, filter: RecordFilter)
    -> Result<Vec<Visit>, ReportError>;
}
