//! Command handlers wiring repositories, pagination and output together.

use std::io::Write;
use std::sync::Arc;

use crate::application::services::{
    FieldProjector, PaginationController, ProjectionOptions, SessionSummary, ShortUrlPageFetcher,
    VisitPageFetcher,
};
use crate::cli::args::{Commands, DateRangeArgs, ListShortUrlsArgs, ShortUrlAction, VisitsAction};
use crate::cli::prompt::Confirmer;
use crate::domain::date_range::DateRange;
use crate::domain::entities::RecordKind;
use crate::domain::page::clamp_page;
use crate::domain::repositories::{ShortUrlRepository, VisitRepository, VisitScope};
use crate::error::ReportError;

/// Report commands over one pair of repositories.
pub struct Reports<S: ShortUrlRepository, V: VisitRepository> {
    short_urls: Arc<S>,
    visits: Arc<V>,
    page_size: u32,
}

impl<S: ShortUrlRepository, V: VisitRepository> Reports<S, V> {
    pub fn new(short_urls: Arc<S>, visits: Arc<V>, page_size: u32) -> Self {
        Self {
            short_urls,
            visits,
            page_size,
        }
    }

    /// Runs a parsed command, writing tables to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Validation`] for bad date input (nothing is
    /// fetched or written), or the first error raised while paginating.
    pub async fn dispatch<W, C>(
        &self,
        command: &Commands,
        out: &mut W,
        confirmer: &C,
    ) -> Result<(), ReportError>
    where
        W: Write + ?Sized,
        C: Confirmer + ?Sized,
    {
        match command {
            Commands::ShortUrl {
                action: ShortUrlAction::List(args),
            } => {
                self.list_short_urls(args, out, confirmer).await?;
            }
            Commands::Visits { action } => {
                let (scope, dates) = visit_scope(action);
                self.list_visits(scope, dates, out).await?;
            }
        }
        Ok(())
    }

    /// Lists short URLs interactively, one page per table.
    pub async fn list_short_urls<W, C>(
        &self,
        args: &ListShortUrlsArgs,
        out: &mut W,
        confirmer: &C,
    ) -> Result<SessionSummary, ReportError>
    where
        W: Write + ?Sized,
        C: Confirmer + ?Sized,
    {
        let date_range = resolve_dates(&args.dates)?;
        let fetcher = ShortUrlPageFetcher::new(self.short_urls.clone(), self.page_size);
        let projector = FieldProjector::new(
            RecordKind::ShortUrl,
            ProjectionOptions {
                show_tags: args.show_tags,
            },
        );

        PaginationController::new(Arc::new(fetcher), projector)
            .run_interactive(out, confirmer, clamp_page(args.page), date_range)
            .await
    }

    /// Lists every visit in `scope` as a single table.
    ///
    /// Returns the number of visits rendered.
    pub async fn list_visits<W>(
        &self,
        scope: VisitScope,
        dates: &DateRangeArgs,
        out: &mut W,
    ) -> Result<usize, ReportError>
    where
        W: Write + ?Sized,
    {
        let date_range = resolve_dates(dates)?;
        tracing::debug!(%scope, ?date_range, "Listing visits");

        let fetcher = VisitPageFetcher::new(self.visits.clone(), scope, self.page_size);
        let projector = FieldProjector::new(RecordKind::Visit, ProjectionOptions::default());

        PaginationController::new(Arc::new(fetcher), projector)
            .run_batch(out, date_range)
            .await
    }
}

fn resolve_dates(dates: &DateRangeArgs) -> Result<DateRange, ReportError> {
    DateRange::resolve(dates.start_date.as_deref(), dates.end_date.as_deref())
}

fn visit_scope(action: &VisitsAction) -> (VisitScope, &DateRangeArgs) {
    match action {
        VisitsAction::ShortUrl {
            code,
            domain,
            dates,
        } => (
            VisitScope::ShortUrl {
                code: code.clone(),
                domain: domain.clone(),
            },
            dates,
        ),
        VisitsAction::Tag { tag, dates } => (VisitScope::Tag(tag.clone()), dates),
        VisitsAction::Domain { domain, dates } => (VisitScope::Domain(domain.clone()), dates),
        VisitsAction::NonOrphan { dates } => (VisitScope::NonOrphan, dates),
        VisitsAction::Orphan { visit_type, dates } => (VisitScope::Orphan(*visit_type), dates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::MockConfirmer;
    use crate::domain::entities::{Visit, VisitType};
    use crate::domain::repositories::{MockShortUrlRepository, MockVisitRepository};
    use chrono::Utc;

    fn reports(
        short_urls: MockShortUrlRepository,
        visits: MockVisitRepository,
    ) -> Reports<MockShortUrlRepository, MockVisitRepository> {
        Reports::new(Arc::new(short_urls), Arc::new(visits), 10)
    }

    #[tokio::test]
    async fn test_invalid_dates_fail_before_fetching() {
        let mut short_urls = MockShortUrlRepository::new();
        short_urls.expect_list().never();
        let mut confirmer = MockConfirmer::new();
        confirmer.expect_ask().never();

        let args = ListShortUrlsArgs {
            page: 1,
            show_tags: false,
            dates: DateRangeArgs {
                start_date: Some("2024-03-01".into()),
                end_date: Some("2024-02-01".into()),
            },
        };
        let mut out = Vec::new();
        let err = reports(short_urls, MockVisitRepository::new())
            .list_short_urls(&args, &mut out, &confirmer)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_negative_page_starts_at_first_page() {
        let mut short_urls = MockShortUrlRepository::new();
        short_urls
            .expect_list()
            .withf(|f| f.offset == 0)
            .times(1)
            .returning(|_| Ok(vec![]));

        let args = ListShortUrlsArgs {
            page: -4,
            show_tags: false,
            dates: DateRangeArgs::default(),
        };
        let mut out = Vec::new();
        let summary = reports(short_urls, MockVisitRepository::new())
            .list_short_urls(&args, &mut out, &MockConfirmer::new())
            .await
            .unwrap();

        assert_eq!(summary.last_page, 1);
    }

    #[tokio::test]
    async fn test_orphan_command_uses_orphan_scope() {
        let mut visits = MockVisitRepository::new();
        visits
            .expect_list()
            .withf(|scope, _| *scope == VisitScope::Orphan(Some(VisitType::Regular404)))
            .times(1)
            .returning(|_, _| {
                Ok(vec![Visit::orphan(
                    VisitType::Regular404,
                    None,
                    None,
                    Utc::now(),
                )])
            });

        let command = Commands::Visits {
            action: VisitsAction::Orphan {
                visit_type: Some(VisitType::Regular404),
                dates: DateRangeArgs::default(),
            },
        };
        let mut out = Vec::new();
        reports(MockShortUrlRepository::new(), visits)
            .dispatch(&command, &mut out, &MockConfirmer::new())
            .await
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("| regular_404 |"));
    }
}
