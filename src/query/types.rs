//! Query and response types.
//!
//! These are the wire-facing shapes the serving layer hands to and
//! receives from the core, so field names are camelCase on the wire.
//! Every query field has a default, making a partial query object
//! valid; only a structurally malformed object is an error.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};
use crate::events::{AgeRange, Event, VenueType};

/// A structured event query. Unset fields leave the corresponding
/// filter stage as a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventQuery {
    /// City selection.
    pub city: CitySelector,
    /// Caller age interval: a single integer ("3") or a dash pair
    /// ("0-2"). Malformed values degrade to no age filtering.
    pub kids_ages: Option<String>,
    /// Weekday names the caller is available; empty means any day.
    pub days: Vec<String>,
    /// Named date window from today.
    pub date_range: DateWindow,
    /// Time-of-day buckets; empty means any time.
    pub time_of_day: Vec<TimeOfDay>,
    /// Venue type restriction.
    pub venue_type: VenueFilter,
    /// Event category restriction.
    pub event_type: EventKind,
}

impl EventQuery {
    /// A query with no filters: everything upcoming, both cities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query object from JSON. A malformed object surfaces a
    /// single query error with no partial results.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| QueryError::Malformed(err.to_string()).into())
    }

    /// Set the city selection.
    pub fn in_city(mut self, city: CitySelector) -> Self {
        self.city = city;
        self
    }

    /// Set the caller's age interval string.
    pub fn for_ages(mut self, ages: impl Into<String>) -> Self {
        self.kids_ages = Some(ages.into());
        self
    }

    /// Add a weekday to the day filter.
    pub fn on_day(mut self, day: impl Into<String>) -> Self {
        self.days.push(day.into());
        self
    }

    /// Set the date window.
    pub fn within(mut self, window: DateWindow) -> Self {
        self.date_range = window;
        self
    }

    /// Add a time-of-day bucket.
    pub fn during(mut self, bucket: TimeOfDay) -> Self {
        self.time_of_day.push(bucket);
        self
    }

    /// Restrict to a venue type.
    pub fn at_venue(mut self, venue: VenueFilter) -> Self {
        self.venue_type = venue;
        self
    }

    /// Restrict to an event category.
    pub fn of_kind(mut self, kind: EventKind) -> Self {
        self.event_type = kind;
        self
    }

    /// The caller's parsed age interval, if one was supplied and is
    /// well-formed.
    pub fn age_range(&self) -> Option<AgeRange> {
        let raw = self.kids_ages.as_deref()?;
        let parsed = AgeRange::parse(raw);
        if parsed.is_none() && !raw.is_empty() {
            tracing::debug!(kids_ages = raw, "unparsable age input, skipping age filter");
        }
        parsed
    }
}

/// City selection: one city's events plus matching cross-venue
/// records, or the union of everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CitySelector {
    JerseyCity,
    Hoboken,
    #[default]
    Both,
}

impl CitySelector {
    /// Display name used both to tag records in `both` mode and to
    /// match cross-venue city tags (case-insensitively).
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            CitySelector::JerseyCity => Some("Jersey City"),
            CitySelector::Hoboken => Some("Hoboken"),
            CitySelector::Both => None,
        }
    }
}

/// Named date window measured from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateWindow {
    Week,
    #[serde(rename = "2weeks")]
    TwoWeeks,
    Month,
    #[default]
    All,
}

impl DateWindow {
    /// Window length in days; `None` for the unbounded window.
    pub fn days(&self) -> Option<i64> {
        match self {
            DateWindow::Week => Some(7),
            DateWindow::TwoWeeks => Some(14),
            DateWindow::Month => Some(30),
            DateWindow::All => None,
        }
    }
}

/// Coarse time-of-day bucket derived from the start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Classify an hour of day: morning before 12, afternoon 12-16,
    /// evening 17 onward.
    pub fn of_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 17 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }
}

/// Venue type restriction; `All` is the no-op sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueFilter {
    #[default]
    All,
    Library,
    Bookstore,
}

impl VenueFilter {
    /// Whether an event's (defaulted) venue type passes this filter.
    pub fn matches(&self, venue: VenueType) -> bool {
        match self {
            VenueFilter::All => true,
            VenueFilter::Library => venue == VenueType::Library,
            VenueFilter::Bookstore => venue == VenueType::Bookstore,
        }
    }
}

/// Named event category; `All` is the no-op sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    All,
    Storytime,
    Arts,
    Steam,
    Music,
}

impl EventKind {
    /// Keywords matched (case-insensitively, as substrings) against an
    /// event's category tags, title, and description.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            EventKind::All => &[],
            EventKind::Storytime => &["storytime events", "storytime", "story time"],
            EventKind::Arts => &["arts and crafts", "arts", "crafts"],
            EventKind::Steam => &["s.t.e.a.m", "stem", "steam"],
            EventKind::Music => &["music and dance", "music", "dance"],
        }
    }
}

/// The result of a query: the surviving events in chronological
/// order, their count, and an echo of the resolved query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub results: Vec<Event>,
    pub count: usize,
    pub echoed_query: EventQuery,
}
