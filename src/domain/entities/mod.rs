//! Record types listed by the reports.
//!
//! - [`ShortUrlSummary`] - A short URL with its visit count and tags
//! - [`Visit`] - A single visit, optionally geolocated
//! - [`Record`] - Tagged union over both, consumed by the projection layer

pub mod record;
pub mod short_url;
pub mod visit;

pub use record::{Record, RecordKind};
pub use short_url::ShortUrlSummary;
pub use visit::{Visit, VisitLocation, VisitType};
