//! PostgreSQL repository implementations.
//!
//! Queries are checked at runtime (`query_as`, `QueryBuilder`) against the
//! schema in `migrations/`; the reports never write.

pub mod pg_short_url_repository;
pub mod pg_visit_repository;

pub use pg_short_url_repository::PgShortUrlRepository;
pub use pg_visit_repository::PgVisitRepository;
