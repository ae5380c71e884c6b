//! Page-at-a-time access to the listing repositories.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::date_range::DateRange;
use crate::domain::entities::Record;
use crate::domain::page::{Page, page_offset};
use crate::domain::repositories::{RecordFilter, ShortUrlRepository, VisitRepository, VisitScope};
use crate::error::ReportError;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Returns page `page` of the records matching `date_range`.
///
/// Implementations are stateless: fetching the same page with the same range
/// twice yields the same records and the same `is_last_page` flag, as long
/// as the store is not modified in between.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ReportError::Fetch`] if the store cannot be read.
    async fn fetch(&self, page: u32, date_range: DateRange) -> Result<Page, ReportError>;
}

/// Builds the repository window for `page`, asking for one extra row so the
/// caller can tell whether another page follows.
fn lookahead_filter(page: u32, page_size: u32, date_range: DateRange) -> RecordFilter {
    RecordFilter::new(page_offset(page, page_size), i64::from(page_size) + 1)
        .with_date_range(date_range)
}

fn into_page<T: Into<Record>>(page: u32, page_size: u32, mut rows: Vec<T>) -> Page {
    let is_last_page = rows.len() <= page_size as usize;
    rows.truncate(page_size as usize);
    Page::new(page, rows.into_iter().map(Into::into).collect(), is_last_page)
}

/// Pages over short URL summaries.
pub struct ShortUrlPageFetcher<R: ShortUrlRepository> {
    repository: Arc<R>,
    page_size: u32,
}

impl<R: ShortUrlRepository> ShortUrlPageFetcher<R> {
    pub fn new(repository: Arc<R>, page_size: u32) -> Self {
        Self {
            repository,
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl<R: ShortUrlRepository> PageFetcher for ShortUrlPageFetcher<R> {
    async fn fetch(&self, page: u32, date_range: DateRange) -> Result<Page, ReportError> {
        let page = page.max(1);
        tracing::debug!(page, page_size = self.page_size, "Fetching short URLs");

        let rows = self
            .repository
            .list(lookahead_filter(page, self.page_size, date_range))
            .await
            .map_err(|e| ReportError::fetch(page, e))?;

        Ok(into_page(page, self.page_size, rows))
    }
}

/// Pages over the visits of one [`VisitScope`].
pub struct VisitPageFetcher<R: VisitRepository> {
    repository: Arc<R>,
    scope: VisitScope,
    page_size: u32,
}

impl<R: VisitRepository> VisitPageFetcher<R> {
    pub fn new(repository: Arc<R>, scope: VisitScope, page_size: u32) -> Self {
        Self {
            repository,
            scope,
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl<R: VisitRepository> PageFetcher for VisitPageFetcher<R> {
    async fn fetch(&self, page: u32, date_range: DateRange) -> Result<Page, ReportError> {
        let page = page.max(1);
        tracing::debug!(page, scope = %self.scope, "Fetching visits");

        let rows = self
            .repository
            .list(
                self.scope.clone(),
                lookahead_filter(page, self.page_size, date_range),
            )
            .await
            .map_err(|e| ReportError::fetch(page, e))?;

        Ok(into_page(page, self.page_size, rows))
    }
}
