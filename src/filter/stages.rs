//! The individual filter stages.
//!
//! Each stage is a pure predicate over a single record, lifted to a
//! list-in/list-out function. Policy on missing data is asymmetric by
//! design: temporal stages fail open (malformed data is assumed rather
//! than hidden), the age stage fails closed (absent evidence is a
//! non-match, because showing an event to the wrong age group is the
//! costlier mistake).

use chrono::{Days, NaiveDate, Timelike};

use crate::events::ages::{self, AgeRange, AgeRangeExtractor};
use crate::events::types::{parse_time, Event};
use crate::query::{DateWindow, EventKind, TimeOfDay, VenueFilter};

/// Drop events whose date is strictly before `today`. Events whose
/// date is absent or fails to parse are kept.
pub fn upcoming_only(mut events: Vec<Event>, today: NaiveDate) -> Vec<Event> {
    events.retain(|event| match event.parsed_date() {
        Some(date) => date >= today,
        None => true,
    });
    events
}

/// Drop events whose date falls outside `[today, today + window]`
/// inclusive. The unbounded window is the identity; absent or
/// unparsable dates are kept.
pub fn within_window(mut events: Vec<Event>, window: DateWindow, today: NaiveDate) -> Vec<Event> {
    let Some(days) = window.days() else {
        return events;
    };
    let end = today
        .checked_add_days(Days::new(days as u64))
        .unwrap_or(NaiveDate::MAX);
    events.retain(|event| match event.parsed_date() {
        Some(date) => today <= date && date <= end,
        None => true,
    });
    events
}

/// Keep events whose audience overlaps the caller's age interval.
///
/// Signals are consulted in priority order: an "all ages" audience
/// short-circuits to keep; a range extracted from the description
/// decides the outcome; a bare numeric range in the audience decides
/// next; keyword heuristics are the last resort. No signal anywhere
/// drops the event.
pub fn matching_ages(
    mut events: Vec<Event>,
    wanted: AgeRange,
    extractor: &AgeRangeExtractor,
) -> Vec<Event> {
    events.retain(|event| age_matches(event, wanted, extractor));
    events
}

fn age_matches(event: &Event, wanted: AgeRange, extractor: &AgeRangeExtractor) -> bool {
    let audience = event.audience.as_deref().unwrap_or("").to_lowercase();

    if audience.contains("all ages") {
        return true;
    }

    if let Some(found) = extractor.extract(event.description.as_deref().unwrap_or("")) {
        // The description carried an explicit range; the audience
        // field is not consulted.
        return found.overlaps(&wanted);
    }

    if let Some(found) = ages::bare_range(&audience) {
        return found.overlaps(&wanted);
    }

    match ages::keyword_range(&audience) {
        Some(approx) => approx.overlaps(&wanted),
        None => false,
    }
}

/// Keep events whose weekday is among the selected days, compared
/// case-insensitively. An empty selection is the identity.
pub fn on_days(mut events: Vec<Event>, days: &[String]) -> Vec<Event> {
    if days.is_empty() {
        return events;
    }
    let selected: Vec<String> = days.iter().map(|day| day.to_lowercase()).collect();
    events.retain(|event| {
        event
            .day_of_week
            .as_deref()
            .is_some_and(|day| selected.contains(&day.to_lowercase()))
    });
    events
}

/// Keep events whose start hour falls in a requested bucket. An empty
/// selection is the identity. A missing start time counts as midnight;
/// a present-but-unparsable one is kept.
pub fn in_time_buckets(mut events: Vec<Event>, buckets: &[TimeOfDay]) -> Vec<Event> {
    if buckets.is_empty() {
        return events;
    }
    events.retain(|event| {
        let hour = match event.start_time.as_deref() {
            None => Some(0),
            Some(raw) => parse_time(raw).map(|time| time.hour()),
        };
        match hour {
            Some(hour) => buckets.contains(&TimeOfDay::of_hour(hour)),
            None => true,
        }
    });
    events
}

/// Keep events whose (defaulted) venue type matches. The `all`
/// sentinel is the identity.
pub fn at_venue(mut events: Vec<Event>, venue: VenueFilter) -> Vec<Event> {
    if venue == VenueFilter::All {
        return events;
    }
    events.retain(|event| venue.matches(event.venue_type));
    events
}

/// Keep events where any of the kind's keywords substring-matches a
/// category tag, the title, or the description (all case-insensitive).
/// The `all` sentinel is the identity.
pub fn of_kind(mut events: Vec<Event>, kind: EventKind) -> Vec<Event> {
    let keywords = kind.keywords();
    if keywords.is_empty() {
        return events;
    }
    events.retain(|event| {
        let title = event.title.to_lowercase();
        let description = event
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase();
        keywords.iter().any(|keyword| {
            event
                .categories
                .iter()
                .any(|category| category.to_lowercase().contains(keyword))
                || title.contains(keyword)
                || description.contains(keyword)
        })
    });
    events
}
