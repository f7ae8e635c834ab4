//! storyscout: a filtering and ranking pipeline for children's events.
//!
//! The crate takes heterogeneous event records — story times and kids'
//! classes gathered from unrelated library feeds and bookstore
//! scrapers, with inconsistent field coverage — and a structured
//! query, and produces a filtered, chronologically sorted result set.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  EventQueryEngine                        │
//! │   city-scoped union → filter stage chain → annotator     │
//! │   → chronological sort → QueryResponse                   │
//! └──────────────────────────────────────────────────────────┘
//!               │ Arc<Snapshot> per query
//!               ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                  SnapshotStore                           │
//! │   immutable per-source collections, replaced wholesale   │
//! └──────────────────────────────────────────────────────────┘
//!               ▲
//! ┌──────────────────────────────────────────────────────────┐
//! │                  sources / config                        │
//! │   per-source JSON files, tolerant loading                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering policy is deliberately asymmetric: temporal stages fail
//! open (an event with an unparsable date is shown rather than
//! hidden), the age stage fails closed (an event with no age signal is
//! excluded whenever an age filter is supplied).
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use storyscout::{
//!     load_snapshot, Config, EventQuery, EventQueryEngine, SnapshotStore,
//! };
//!
//! let config = Config::load()?;
//! let store = Arc::new(SnapshotStore::with_snapshot(load_snapshot(&config.data)));
//! let engine = EventQueryEngine::new(store.clone());
//!
//! let query = EventQuery::from_json(r#"{"city": "hoboken", "kidsAges": "0-2"}"#)?;
//! let response = engine.search(&query);
//! println!("{} matching events", response.count);
//!
//! // Reload collaborator: swap in fresh data without disturbing
//! // in-flight queries.
//! store.replace(load_snapshot(&config.data));
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod query;
pub mod sources;
pub mod store;

pub use config::{Config, DataConfig};
pub use error::{ConfigError, QueryError, Result, SourceError, StoryscoutError};
pub use events::{annotate, AgeRange, AgeRangeExtractor, Event, VenueType};
pub use filter::FilterChain;
pub use query::{
    sort_chronologically, CitySelector, DateWindow, EventKind, EventQuery, EventQueryEngine,
    QueryResponse, TimeOfDay, VenueFilter,
};
pub use sources::{load_events, load_snapshot};
pub use store::{Snapshot, SnapshotCounts, SnapshotStore};
