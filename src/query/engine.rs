//! The query orchestrator.
//!
//! One query is evaluated start to finish against a single snapshot:
//! city-scoped union, filter stage chain, enrichment, chronological
//! sort. All work happens on records cloned out of the snapshot; the
//! shared collections are never mutated.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::events::types::parse_time;
use crate::events::{annotate, Event};
use crate::filter::FilterChain;
use crate::store::{Snapshot, SnapshotStore};

use super::types::{CitySelector, EventQuery, QueryResponse};

/// Evaluates queries against the current snapshot.
pub struct EventQueryEngine {
    store: Arc<SnapshotStore>,
    chain: FilterChain,
}

impl EventQueryEngine {
    /// Create an engine over the given store, anchored at the current
    /// local date.
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self {
            store,
            chain: FilterChain::new(),
        }
    }

    /// Create an engine anchored at a specific date.
    pub fn with_reference_date(store: Arc<SnapshotStore>, today: NaiveDate) -> Self {
        Self {
            store,
            chain: FilterChain::with_reference_date(today),
        }
    }

    /// Evaluate a query: assemble the city-scoped working set, run the
    /// filter stages, annotate survivors, sort chronologically.
    pub fn search(&self, query: &EventQuery) -> QueryResponse {
        let snapshot = self.store.current();
        let candidates = assemble_working_set(&snapshot, query.city);
        tracing::debug!(candidates = candidates.len(), city = ?query.city, "working set assembled");

        let mut results = self.chain.apply(candidates, query);
        annotate(&mut results);
        sort_chronologically(&mut results);

        tracing::info!(count = results.len(), "query evaluated");
        QueryResponse {
            count: results.len(),
            results,
            echoed_query: query.clone(),
        }
    }
}

/// Build the working set for a city selection, cloning records out of
/// the snapshot.
///
/// A single city takes its native collection plus cross-venue records
/// whose city tag matches. `Both` takes every native collection with
/// each record tagged by its originating city, plus all cross-venue
/// records as-is (already self-tagged).
fn assemble_working_set(snapshot: &Snapshot, city: CitySelector) -> Vec<Event> {
    match city {
        CitySelector::JerseyCity | CitySelector::Hoboken => {
            let tag = city.display_name().unwrap_or_default();
            let native = match city {
                CitySelector::JerseyCity => &snapshot.jersey_city,
                _ => &snapshot.hoboken,
            };
            let mut events = native.to_vec();
            events.extend(
                snapshot
                    .bookstore
                    .iter()
                    .filter(|event| event.city_matches(tag))
                    .cloned(),
            );
            events
        }
        CitySelector::Both => {
            let mut events = Vec::with_capacity(snapshot.total());
            events.extend(snapshot.jersey_city.iter().cloned().map(|mut event| {
                event.city = Some("Jersey City".to_string());
                event
            }));
            events.extend(snapshot.hoboken.iter().cloned().map(|mut event| {
                event.city = Some("Hoboken".to_string());
                event
            }));
            events.extend(snapshot.bookstore.iter().cloned());
            events
        }
    }
}

/// Stable ascending sort by (date, start time).
///
/// A missing start time sorts as midnight of the record's date; a
/// missing or unparsable date, or an unparsable start time, sorts as
/// the maximal datetime so garbage never floats to the top. Ties keep
/// their input order.
pub fn sort_chronologically(events: &mut [Event]) {
    events.sort_by_key(sort_key);
}

fn sort_key(event: &Event) -> NaiveDateTime {
    let Some(date) = event.parsed_date() else {
        return NaiveDateTime::MAX;
    };
    match event.start_time.as_deref() {
        None => date.and_time(NaiveTime::MIN),
        Some(raw) => match parse_time(raw) {
            Some(time) => date.and_time(time),
            None => NaiveDateTime::MAX,
        },
    }
}
