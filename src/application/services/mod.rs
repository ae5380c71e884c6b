//! Reporting engine: paging, projection and pagination control.

pub mod field_projector;
pub mod page_fetcher;
pub mod pagination;

pub use field_projector::{
    Column, ColumnSet, FieldProjector, ProjectionOptions, ProjectionSession, Row,
};
pub use page_fetcher::{DEFAULT_PAGE_SIZE, PageFetcher, ShortUrlPageFetcher, VisitPageFetcher};
pub use pagination::{LAST_PAGE_MESSAGE, PaginationController, SessionSummary, Termination};

#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
