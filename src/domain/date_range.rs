//! Date range filter and resolution of raw command-line bounds.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ReportError;

/// Optional start/end pair; an open side means unbounded.
///
/// Construct through [`DateRange::new`] or [`DateRange::resolve`], which
/// both guarantee `start <= end` when both sides are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Range with no bounds on either side.
    pub fn all_time() -> Self {
        Self::default()
    }

    /// Builds a range from already parsed bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Validation`] if both bounds are set and start > end.
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, ReportError> {
        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(ReportError::validation(
                "date range",
                format!("{} - {}", s.to_rfc3339(), e.to_rfc3339()),
                "start date must not be after end date",
            ));
        }

        Ok(Self { start, end })
    }

    /// Parses raw bounds into a range.
    ///
    /// Accepted formats are RFC 3339 (`2024-01-01T10:00:00+02:00`) and bare
    /// calendar dates (`2024-01-01`, read as midnight UTC). Blank input leaves
    /// that side open.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Validation`] naming the offending value when a
    /// bound does not parse, or when start > end.
    pub fn resolve(raw_start: Option<&str>, raw_end: Option<&str>) -> Result<Self, ReportError> {
        let start = parse_bound("start date", raw_start)?;
        let end = parse_bound("end date", raw_end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Returns true if `date` falls inside the range (bounds inclusive).
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.start.is_none_or(|s| *date >= s) && self.end.is_none_or(|e| *date <= e)
    }
}

fn parse_bound(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ReportError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| {
            ReportError::validation(
                field,
                raw,
                "expected an RFC 3339 timestamp or a YYYY-MM-DD date",
            )
        })
}
