//! The event record type.
//!
//! Records arrive from unrelated upstream sources (library RSS feeds,
//! bookstore scrapers) with inconsistent field coverage, so every field
//! except `title` is optional. Date and time fields stay as the raw
//! strings the source supplied; parsing happens per stage and a parse
//! failure is a recognized degraded state, never a hard error.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single schedulable occurrence (one specific date/time instance,
/// not a recurring-series definition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event title.
    pub title: String,
    /// Calendar date, canonical form `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Start time of day, canonical form `HH:MM:SS` (24-hour).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End time of day, canonical form `HH:MM:SS` (24-hour).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Upstream-provided 12-hour display form of the start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
    /// Free-text weekday name; compared case-insensitively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    /// Free-text age descriptor (e.g. "Ages 2-3", "All Ages").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Short description; may encode an age range absent from `audience`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Long-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    /// Venue category; sources that omit it are library-hosted.
    #[serde(default)]
    pub venue_type: VenueType,
    /// Free-text category tags; membership tests are case-insensitive.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-text city tag; present on cross-venue sources, synthesized
    /// for single-city sources when querying across cities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Venue location, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Organizer, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    /// Event page link, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Duration in hours; absent until annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    /// Whether the event spans most of a day; absent until annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_all_day: Option<bool>,
    /// Human-readable 12-hour end time; absent until annotation, and
    /// null after annotation when no end time is known.
    pub formatted_end_time: Option<String>,
}

impl Event {
    /// Create a new event with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: None,
            start_time: None,
            end_time: None,
            formatted_time: None,
            day_of_week: None,
            audience: None,
            description: None,
            full_description: None,
            venue_type: VenueType::default(),
            categories: Vec::new(),
            city: None,
            location: None,
            organizer: None,
            link: None,
            duration_hours: None,
            is_all_day: None,
            formatted_end_time: None,
        }
    }

    /// Set the date (`YYYY-MM-DD`).
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the start time (`HH:MM:SS`).
    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Set the end time (`HH:MM:SS`).
    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Set the weekday name.
    pub fn with_day_of_week(mut self, day: impl Into<String>) -> Self {
        self.day_of_week = Some(day.into());
        self
    }

    /// Set the audience descriptor.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the short description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the venue type.
    pub fn with_venue_type(mut self, venue_type: VenueType) -> Self {
        self.venue_type = venue_type;
        self
    }

    /// Add a category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Set the city tag.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Parse the date field; `None` when absent or malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Parse the start time field; `None` when absent or malformed.
    pub fn parsed_start_time(&self) -> Option<NaiveTime> {
        self.start_time.as_deref().and_then(parse_time)
    }

    /// Parse the end time field; `None` when absent or malformed.
    pub fn parsed_end_time(&self) -> Option<NaiveTime> {
        self.end_time.as_deref().and_then(parse_time)
    }

    /// Whether this event's city tag matches, case-insensitively.
    pub fn city_matches(&self, city: &str) -> bool {
        self.city
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(city))
    }
}

/// Parse a canonical `YYYY-MM-DD` date string.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a canonical `HH:MM:SS` time string.
pub(crate) fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S").ok()
}

/// Coarse venue category distinguishing library-hosted events from
/// bookstore and other third-party venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    /// A public library. The default when a source omits the field.
    #[default]
    Library,
    /// A bookstore.
    Bookstore,
    /// Any other venue kind a source may introduce.
    #[serde(other)]
    Other,
}
