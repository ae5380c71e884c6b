//! PostgreSQL implementation of the short URL listing.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::ShortUrlSummary;
use crate::domain::repositories::{RecordFilter, ShortUrlRepository};
use crate::error::ReportError;

const LIST_SHORT_URLS: &str = r#"
    SELECT
        l.code,
        l.long_url,
        d.domain,
        l.title,
        l.created_at,
        (SELECT COUNT(*) FROM visits v WHERE v.link_id = l.id) AS visits_count,
        ARRAY(
            SELECT t.name
            FROM link_tags lt
            JOIN tags t ON t.id = lt.tag_id
            WHERE lt.link_id = l.id
            ORDER BY t.name
        ) AS tags
    FROM links l
    LEFT JOIN domains d ON d.id = l.domain_id
    WHERE l.deleted_at IS NULL
      AND ($1::timestamptz IS NULL OR l.created_at >= $1)
      AND ($2::timestamptz IS NULL OR l.created_at <= $2)
    ORDER BY l.created_at DESC, l.id DESC
    LIMIT $3 OFFSET $4
"#;

#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    code: String,
    long_url: String,
    domain: Option<String>,
    title: Option<String>,
    created_at: DateTime<Utc>,
    visits_count: i64,
    tags: Vec<String>,
}

impl From<ShortUrlRow> for ShortUrlSummary {
    fn from(r: ShortUrlRow) -> Self {
        let mut meta = BTreeMap::new();
        if let Some(title) = r.title {
            meta.insert("title".to_string(), title);
        }

        Self {
            short_code: r.code,
            long_url: r.long_url,
            domain: r.domain,
            date_created: r.created_at,
            visits_count: r.visits_count,
            tags: r.tags,
            meta,
        }
    }
}

/// PostgreSQL repository listing short URLs with their visit counts and tags.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn list(&self, filter: RecordFilter) -> Result<Vec<ShortUrlSummary>, ReportError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(LIST_SHORT_URLS)
            .bind(filter.date_range.start())
            .bind(filter.date_range.end())
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ShortUrlSummary::from).collect())
    }
}
