//! Repository trait definitions for the domain layer.
//!
//! The reports only ever read: each repository exposes a single listing query
//! taking a [`RecordFilter`] window. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.

pub mod filter;
pub mod short_url_repository;
pub mod visit_repository;

pub use filter::RecordFilter;
pub use short_url_repository::ShortUrlRepository;
pub use visit_repository::{VisitRepository, VisitScope};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
