//! Domain layer: record types, filters and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Short URL and visit records, and the [`entities::Record`] union
//! - [`date_range`] - Date range filter and its validation
//! - [`page`] - One page of records and page number arithmetic
//! - [`repositories`] - Read-only data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod date_range;
pub mod entities;
pub mod page;
pub mod repositories;
