//! PostgreSQL implementation of the visit listing.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entities::{Visit, VisitLocation, VisitType};
use crate::domain::repositories::{RecordFilter, VisitRepository, VisitScope};
use crate::error::ReportError;

const SELECT_VISITS: &str = r#"
    SELECT
        v.visited_at,
        v.referer,
        v.user_agent,
        v.remote_addr,
        v.visit_type,
        v.visited_url,
        v.country_name,
        v.city_name,
        v.meta,
        l.code AS short_code
    FROM visits v
    LEFT JOIN links l ON l.id = v.link_id
    LEFT JOIN domains d ON d.id = l.domain_id
    WHERE TRUE
"#;

#[derive(sqlx::FromRow)]
struct VisitRow {
    visited_at: DateTime<Utc>,
    referer: Option<String>,
    user_agent: Option<String>,
    remote_addr: Option<String>,
    visit_type: String,
    visited_url: Option<String>,
    country_name: Option<String>,
    city_name: Option<String>,
    meta: Option<Value>,
    short_code: Option<String>,
}

impl TryFrom<VisitRow> for Visit {
    type Error = ReportError;

    fn try_from(r: VisitRow) -> Result<Self, Self::Error> {
        let visit_type: VisitType = r.visit_type.parse().map_err(ReportError::store)?;

        let visit_location = match (r.country_name, r.city_name) {
            (None, None) => None,
            (country, city) => Some(VisitLocation::new(
                country.unwrap_or_default(),
                city.unwrap_or_default(),
            )),
        };

        Ok(Self {
            referer: r.referer,
            date: r.visited_at,
            user_agent: r.user_agent,
            remote_addr: r.remote_addr,
            visit_location,
            visit_type,
            short_code: r.short_code,
            visited_url: r.visited_url,
            meta: flatten_meta(r.meta),
        })
    }
}

/// Flattens a JSON object into string pairs; non-object values are ignored.
fn flatten_meta(meta: Option<Value>) -> BTreeMap<String, String> {
    match meta {
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(k, v)| match v {
                Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn push_scope(qb: &mut QueryBuilder<'_, Postgres>, scope: &VisitScope) {
    match scope {
        VisitScope::ShortUrl { code, domain } => {
            qb.push(" AND l.code = ").push_bind(code.clone());
            match domain {
                Some(domain) => {
                    qb.push(" AND d.domain = ").push_bind(domain.clone());
                }
                None => {
                    qb.push(" AND (d.id IS NULL OR d.is_default)");
                }
            }
        }
        VisitScope::Tag(tag) => {
            qb.push(
                " AND EXISTS (SELECT 1 FROM link_tags lt JOIN tags t ON t.id = lt.tag_id \
                 WHERE lt.link_id = v.link_id AND t.name = ",
            )
            .push_bind(tag.clone())
            .push(")");
        }
        VisitScope::Domain(domain) => {
            qb.push(" AND d.domain = ").push_bind(domain.clone());
        }
        VisitScope::NonOrphan => {
            qb.push(" AND v.link_id IS NOT NULL");
        }
        VisitScope::Orphan(visit_type) => {
            qb.push(" AND v.link_id IS NULL");
            if let Some(t) = visit_type {
                qb.push(" AND v.visit_type = ").push_bind(t.as_str());
            }
        }
    }
}

/// PostgreSQL repository listing visits with their resolved location.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn list(
        &self,
        scope: VisitScope,
        filter: RecordFilter,
    ) -> Result<Vec<Visit>, ReportError> {
        let mut qb = QueryBuilder::<Postgres>::new(SELECT_VISITS);
        push_scope(&mut qb, &scope);

        if let Some(start) = filter.date_range.start() {
            qb.push(" AND v.visited_at >= ").push_bind(start);
        }
        if let Some(end) = filter.date_range.end() {
            qb.push(" AND v.visited_at <= ").push_bind(end);
        }

        qb.push(" ORDER BY v.visited_at DESC, v.id DESC LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.offset);

        let rows = qb
            .build_query_as::<VisitRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Visit::try_from).collect()
    }
}
