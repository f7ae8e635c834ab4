//! Post-filter enrichment: duration and display-time annotation.
//!
//! Runs on per-request copies only; the shared snapshot is never
//! touched. Any parse failure falls back to the zero-duration defaults
//! rather than erroring.

use chrono::{NaiveTime, Timelike};

use super::types::{parse_time, Event};

/// Duration above which an event is considered all-day, in hours.
const ALL_DAY_THRESHOLD_HOURS: f64 = 6.0;

/// Annotate each event with `duration_hours`, `is_all_day`, and
/// `formatted_end_time`.
pub fn annotate(events: &mut [Event]) {
    for event in events {
        annotate_event(event);
    }
}

fn annotate_event(event: &mut Event) {
    let end_raw = event.end_time.as_deref().filter(|raw| !raw.is_empty());
    // A missing start time is treated as midnight; a malformed one is a
    // parse failure and takes the defaults.
    let start_raw = event.start_time.as_deref().unwrap_or("00:00:00");

    let times = end_raw.and_then(|end| parse_time(start_raw).zip(parse_time(end)));
    match times {
        Some((start, end)) => {
            // Same-day arithmetic only; an end before the start is
            // reported as a negative duration, not wrapped past midnight.
            let duration_hours = (end - start).num_seconds() as f64 / 3600.0;
            event.duration_hours = Some(duration_hours);
            event.is_all_day = Some(duration_hours >= ALL_DAY_THRESHOLD_HOURS);
            event.formatted_end_time = Some(format_12_hour(end));
        }
        None => {
            event.duration_hours = Some(0.0);
            event.is_all_day = Some(false);
            event.formatted_end_time = None;
        }
    }
}

/// Format a time in 12-hour display form, e.g. "10:15 AM".
fn format_12_hour(time: NaiveTime) -> String {
    let hour = time.hour();
    let period = if hour < 12 { "AM" } else { "PM" };
    let mut display_hour = if hour <= 12 { hour } else { hour - 12 };
    if display_hour == 0 {
        display_hour = 12;
    }
    format!("{}:{:02} {}", display_hour, time.minute(), period)
}
