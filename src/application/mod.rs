//! Application layer orchestrating the reports.
//!
//! Services consume repository traits and present a page-oriented API to the
//! command handlers.
//!
//! # Available Services
//!
//! - [`services::page_fetcher`] - One page of records at a time, per record family
//! - [`services::field_projector`] - Records to rows with discovered extra columns
//! - [`services::pagination::PaginationController`] - Interactive and batch pagination

pub mod services;
