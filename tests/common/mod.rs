#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use link_reports::prelude::*;
use serde_json::Value;
use sqlx::PgPool;

/// Short URL store backed by a vector, newest first like the database.
pub struct InMemoryShortUrls {
    records: Vec<ShortUrlSummary>,
    calls: Mutex<Vec<RecordFilter>>,
}

impl InMemoryShortUrls {
    pub fn new(mut records: Vec<ShortUrlSummary>) -> Self {
        records.sort_by(|a, b| b.date_created.cmp(&a.date_created));
        Self {
            records,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordFilter> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrls {
    async fn list(&self, filter: RecordFilter) -> Result<Vec<ShortUrlSummary>, ReportError> {
        self.calls.lock().unwrap().push(filter.clone());
        Ok(window(
            self.records
                .iter()
                .filter(|s| filter.date_range.contains(&s.date_created))
                .cloned(),
            &filter,
        ))
    }
}

/// Visit store backed by a vector, newest first like the database.
pub struct InMemoryVisits {
    records: Vec<Visit>,
    fail: bool,
}

impl InMemoryVisits {
    pub fn new(mut records: Vec<Visit>) -> Self {
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Self {
            records,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
        }
    }
}

fn in_scope(visit: &Visit, scope: &VisitScope) -> bool {
    match scope {
        VisitScope::ShortUrl { code, .. } => visit.short_code.as_deref() == Some(code.as_str()),
        VisitScope::NonOrphan => !visit.is_orphan(),
        VisitScope::Orphan(None) => visit.is_orphan(),
        VisitScope::Orphan(Some(t)) => visit.is_orphan() && visit.visit_type == *t,
        VisitScope::Tag(tag) | VisitScope::Domain(tag) => {
            visit.meta.get("scope").map(String::as_str) == Some(tag.as_str())
        }
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisits {
    async fn list(
        &self,
        scope: VisitScope,
        filter: RecordFilter,
    ) -> Result<Vec<Visit>, ReportError> {
        if self.fail {
            return Err(ReportError::store("connection refused"));
        }

        Ok(window(
            self.records
                .iter()
                .filter(|v| in_scope(v, &scope) && filter.date_range.contains(&v.date))
                .cloned(),
            &filter,
        ))
    }
}

fn window<T>(items: impl Iterator<Item = T>, filter: &RecordFilter) -> Vec<T> {
    items
        .skip(filter.offset as usize)
        .take(filter.limit as usize)
        .collect()
}

/// Confirmer replaying canned answers; answers `false` once they run out.
pub struct ScriptedConfirmer {
    answers: Mutex<Vec<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn new(answers: &[bool]) -> Self {
        let mut answers = answers.to_vec();
        answers.reverse();
        Self {
            answers: Mutex::new(answers),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn ask(&self, prompt: &str, default: bool) -> Result<bool, ReportError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answers.lock().unwrap().pop().unwrap_or(default))
    }
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
}

pub fn short_urls(count: u32) -> Vec<ShortUrlSummary> {
    (1..=count)
        .map(|i| {
            ShortUrlSummary::new(
                format!("code{i:02}"),
                format!("https://example.com/{i}"),
                at(i, 12),
                i64::from(i),
            )
        })
        .collect()
}

/// Disables colored output so rendered text can be compared verbatim.
pub fn no_color() {
    colored::control::set_override(false);
}

pub fn text(output: &[u8]) -> String {
    String::from_utf8(output.to_vec()).unwrap()
}

pub async fn create_domain(pool: &PgPool, name: &str, is_default: bool) -> i64 {
    sqlx::query_scalar("INSERT INTO domains (domain, is_default) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(is_default)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_link(
    pool: &PgPool,
    code: &str,
    domain_id: Option<i64>,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (code, long_url, domain_id, created_at) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(code)
    .bind(format!("https://example.com/{code}"))
    .bind(domain_id)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn tag_link(pool: &PgPool, link_id: i64, tag: &str) {
    let tag_id: i64 = sqlx::query_scalar(
        "INSERT INTO tags (name) VALUES ($1) \
         ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name RETURNING id",
    )
    .bind(tag)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO link_tags (link_id, tag_id) VALUES ($1, $2)")
        .bind(link_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Visit row to insert; `link_id: None` makes it an orphan visit.
pub struct NewVisitRow<'a> {
    pub link_id: Option<i64>,
    pub visit_type: &'a str,
    pub visited_at: DateTime<Utc>,
    pub referer: Option<&'a str>,
    pub country: Option<&'a str>,
    pub city: Option<&'a str>,
    pub meta: Option<Value>,
}

impl<'a> NewVisitRow<'a> {
    pub fn to_link(link_id: i64, visited_at: DateTime<Utc>) -> Self {
        Self {
            link_id: Some(link_id),
            visit_type: "valid_short_url",
            visited_at,
            referer: None,
            country: None,
            city: None,
            meta: None,
        }
    }

    pub fn orphan(visit_type: &'a str, visited_at: DateTime<Utc>) -> Self {
        Self {
            link_id: None,
            visit_type,
            visited_at,
            referer: None,
            country: None,
            city: None,
            meta: None,
        }
    }
}

pub async fn create_visit(pool: &PgPool, visit: NewVisitRow<'_>) {
    sqlx::query(
        "INSERT INTO visits \
         (link_id, visit_type, visited_at, referer, country_name, city_name, meta) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(visit.link_id)
    .bind(visit.visit_type)
    .bind(visit.visited_at)
    .bind(visit.referer)
    .bind(visit.country)
    .bind(visit.city)
    .bind(visit.meta)
    .execute(pool)
    .await
    .unwrap();
}
