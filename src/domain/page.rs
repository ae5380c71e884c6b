//! One page of records plus the pagination bookkeeping around it.

use crate::domain::entities::Record;

/// Highest page number a session can reach.
pub const MAX_PAGE: u32 = u32::MAX;

/// Records for one page number.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: u32,
    pub records: Vec<Record>,
    pub is_last_page: bool,
}

impl Page {
    pub fn new(number: u32, records: Vec<Record>, is_last_page: bool) -> Self {
        Self {
            number,
            records,
            is_last_page,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalizes a user supplied page number.
///
/// Anything below 1 becomes 1, anything above [`MAX_PAGE`] becomes [`MAX_PAGE`].
pub fn clamp_page(raw: i64) -> u32 {
    raw.clamp(1, i64::from(MAX_PAGE)) as u32
}

/// Converts a 1-indexed page number into a row offset.
pub fn page_offset(page: u32, page_size: u32) -> i64 {
    i64::from(page.max(1) - 1) * i64::from(page_size)
}
