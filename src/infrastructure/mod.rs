//! Infrastructure layer: concrete record stores.
//!
//! - [`persistence`] - PostgreSQL implementations of the listing repositories

pub mod persistence;
