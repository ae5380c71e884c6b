//! Filter criteria shared by the listing repositories.

use crate::domain::date_range::DateRange;

/// Date range plus offset/limit window for a listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub date_range: DateRange,
    pub offset: i64,
    pub limit: i64,
}

impl RecordFilter {
    /// Creates a new filter with pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            date_range: DateRange::all_time(),
            offset,
            limit,
        }
    }

    /// Adds date range filtering to the query.
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }
}
