//! Drives fetch → project → render over the pages of a listing.
//!
//! Two modes are offered:
//!
//! - **Interactive**: renders one page at a time and asks the operator
//!   whether to continue after every page that is not the last one.
//! - **Batch**: drains every page first and renders a single table.
//!
//! Any error aborts the run. Tables rendered before the failure stay on the
//! output sink.

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;

use crate::application::services::field_projector::FieldProjector;
use crate::application::services::page_fetcher::PageFetcher;
use crate::cli::prompt::Confirmer;
use crate::cli::table::TableRenderer;
use crate::domain::date_range::DateRange;
use crate::domain::entities::Record;
use crate::domain::page::{MAX_PAGE, Page};
use crate::error::ReportError;

pub const LAST_PAGE_MESSAGE: &str = "You have reached last page";

/// Why an interactive session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The page just rendered was the last one.
    LastPage,
    /// The operator declined to see the next page.
    Declined,
}

/// Result of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub pages_rendered: u32,
    pub last_page: u32,
    pub termination: Termination,
}

enum State {
    Fetching(u32),
    Rendered { page: u32, is_last_page: bool },
    Prompting { next: u32 },
    Done(Termination),
}

/// Orchestrates paginated rendering for one command invocation.
pub struct PaginationController<F: PageFetcher + ?Sized> {
    fetcher: Arc<F>,
    projector: FieldProjector,
    renderer: TableRenderer,
}

impl<F: PageFetcher + ?Sized> PaginationController<F> {
    pub fn new(fetcher: Arc<F>, projector: FieldProjector) -> Self {
        Self {
            fetcher,
            projector,
            renderer: TableRenderer::new(),
        }
    }

    /// Renders `start_page` and asks before rendering each following page.
    ///
    /// Stops without prompting once a page flagged as last has been rendered,
    /// printing [`LAST_PAGE_MESSAGE`]. A negative (or default) answer stops
    /// silently. Each page is a complete table of its own.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, projection, prompt or I/O error encountered.
    pub async fn run_interactive<W, C>(
        &self,
        out: &mut W,
        confirmer: &C,
        start_page: u32,
        date_range: DateRange,
    ) -> Result<SessionSummary, ReportError>
    where
        W: Write + ?Sized,
        C: Confirmer + ?Sized,
    {
        let mut pages_rendered = 0;
        let mut last_page = start_page.max(1);
        let mut state = State::Fetching(last_page);

        let termination = loop {
            state = match state {
                State::Fetching(page) => {
                    let fetched = self.fetcher.fetch(page, date_range).await?;
                    self.render_records(out, &fetched.records)?;
                    pages_rendered += 1;
                    last_page = fetched.number;
                    State::Rendered {
                        page: fetched.number,
                        is_last_page: fetched.is_last_page,
                    }
                }
                State::Rendered {
                    is_last_page: true,
                    ..
                } => {
                    writeln!(out, "{}", LAST_PAGE_MESSAGE.green())?;
                    State::Done(Termination::LastPage)
                }
                State::Rendered { page, .. } if page >= MAX_PAGE => {
                    tracing::warn!(page, "Highest page number reached");
                    State::Done(Termination::LastPage)
                }
                State::Rendered { page, .. } => State::Prompting { next: page + 1 },
                State::Prompting { next } => {
                    if confirmer.ask(&format!("Continue with page {next}?"), false)? {
                        State::Fetching(next)
                    } else {
                        State::Done(Termination::Declined)
                    }
                }
                State::Done(termination) => break termination,
            };
        };

        tracing::debug!(pages_rendered, last_page, ?termination, "Interactive listing done");

        Ok(SessionSummary {
            pages_rendered,
            last_page,
            termination,
        })
    }

    /// Fetches every page matching `date_range` and renders them as one table.
    ///
    /// Returns the number of records rendered.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, projection or I/O error encountered; nothing
    /// is rendered in that case.
    pub async fn run_batch<W>(
        &self,
        out: &mut W,
        date_range: DateRange,
    ) -> Result<usize, ReportError>
    where
        W: Write + ?Sized,
    {
        let records = self.fetch_all(date_range).await?;
        self.render_records(out, &records)?;
        Ok(records.len())
    }

    async fn fetch_all(&self, date_range: DateRange) -> Result<Vec<Record>, ReportError> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let fetched = self.fetcher.fetch(page, date_range).await?;
            tracing::debug!(page = fetched.number, records = fetched.len(), "Page fetched");

            let exhausted = fetched.is_empty();
            let Page {
                number,
                records: page_records,
                is_last_page,
            } = fetched;
            records.extend(page_records);

            if is_last_page || exhausted || number >= MAX_PAGE {
                tracing::debug!(pages = number, records = records.len(), "All pages fetched");
                return Ok(records);
            }
            page = number + 1;
        }
    }

    fn render_records<W: Write + ?Sized>(
        &self,
        out: &mut W,
        records: &[Record],
    ) -> Result<(), ReportError> {
        let mut session = self.projector.session();
        for record in records {
            session.push(record)?;
        }
        let (headers, rows) = session.finish();
        self.renderer.render(out, &headers, &rows)?;
        Ok(())
    }
}
