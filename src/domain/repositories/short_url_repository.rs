//! Repository trait for short URL listings.

use crate::domain::entities::ShortUrlSummary;
use crate::domain::repositories::RecordFilter;
use crate::error::ReportError;
use async_trait::async_trait;

/// Read-only access to short URL summaries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Lists short URLs created inside `filter.date_range`, newest first.
    ///
    /// Returns at most `filter.limit` summaries starting at `filter.offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Store`] on database errors.
    async fn list(&self, filter: RecordFilter) -> Result<Vec<ShortUrlSummary>, ReportError>;
}
