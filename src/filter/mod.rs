//! The filter stage chain.
//!
//! A query is evaluated by running the candidate list through a fixed
//! sequence of independent stages, each reducing the set. Stages whose
//! query parameter was not supplied are skipped. Temporal validity
//! runs before the date window so past events can never be
//! resurrected by an otherwise-valid window.

pub mod stages;

use chrono::{Local, NaiveDate};

use crate::events::{AgeRangeExtractor, Event};
use crate::query::EventQuery;

/// Applies the filter stages in their fixed order.
///
/// The chain carries the reference date used by the temporal stages;
/// production code uses the local date, tests pin one.
pub struct FilterChain {
    today: NaiveDate,
    extractor: AgeRangeExtractor,
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterChain {
    /// Create a chain anchored at the current local date.
    pub fn new() -> Self {
        Self::with_reference_date(Local::now().date_naive())
    }

    /// Create a chain anchored at a specific date.
    pub fn with_reference_date(today: NaiveDate) -> Self {
        Self {
            today,
            extractor: AgeRangeExtractor::new(),
        }
    }

    /// The reference date the temporal stages compare against.
    pub fn reference_date(&self) -> NaiveDate {
        self.today
    }

    /// Run all applicable stages over `events`.
    pub fn apply(&self, events: Vec<Event>, query: &EventQuery) -> Vec<Event> {
        let mut events = stages::upcoming_only(events, self.today);
        tracing::debug!(survivors = events.len(), "after temporal validity");

        events = stages::within_window(events, query.date_range, self.today);
        tracing::debug!(survivors = events.len(), window = ?query.date_range, "after date window");

        if let Some(wanted) = query.age_range() {
            events = stages::matching_ages(events, wanted, &self.extractor);
            tracing::debug!(survivors = events.len(), "after age overlap");
        }

        if !query.days.is_empty() {
            events = stages::on_days(events, &query.days);
            tracing::debug!(survivors = events.len(), "after day-of-week");
        }

        if !query.time_of_day.is_empty() {
            events = stages::in_time_buckets(events, &query.time_of_day);
            tracing::debug!(survivors = events.len(), "after time-of-day");
        }

        events = stages::at_venue(events, query.venue_type);
        events = stages::of_kind(events, query.event_type);
        tracing::debug!(survivors = events.len(), "after venue and category");

        events
    }
}
