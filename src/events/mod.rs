//! Event records and their leaf helpers.
//!
//! - [`types`]: the `Event` record — one schedulable occurrence with
//!   inconsistent field coverage across sources.
//! - [`ages`]: closed age intervals and best-effort extraction from
//!   free-text audience descriptors and descriptions.
//! - [`annotate`]: the post-filter enrichment pass that derives
//!   duration and display fields on per-request copies.

pub mod ages;
pub mod annotate;
pub mod types;

pub use ages::{AgeRange, AgeRangeExtractor};
pub use annotate::annotate;
pub use types::{Event, VenueType};
