//! Helpers shared across layers.
//!
//! - [`camel_case`] - Column label derivation
//! - [`date_format`] - ATOM timestamp formatting

pub mod camel_case;
pub mod date_format;

pub use camel_case::camel_case_to_human_friendly;
pub use date_format::format_atom;
