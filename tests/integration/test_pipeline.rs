//! Whole-pipeline property tests.

use std::sync::Arc;

use chrono::NaiveDate;
use storyscout::{
    CitySelector, DateWindow, Event, EventQuery, EventQueryEngine, Snapshot, SnapshotStore,
    TimeOfDay, VenueFilter, VenueType,
};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
}

fn engine_over(snapshot: Snapshot) -> EventQueryEngine {
    let store = Arc::new(SnapshotStore::with_snapshot(snapshot));
    EventQueryEngine::with_reference_date(store, reference_date())
}

fn titles(response: &storyscout::QueryResponse) -> Vec<&str> {
    response
        .results
        .iter()
        .map(|event| event.title.as_str())
        .collect()
}

fn mixed_snapshot() -> Snapshot {
    Snapshot {
        jersey_city: vec![
            Event::new("JC toddler storytime")
                .with_date("2025-11-05")
                .with_start_time("10:30:00")
                .with_end_time("11:15:00")
                .with_day_of_week("Wednesday")
                .with_audience("Toddler Time")
                .with_category("Storytime Events"),
            Event::new("JC school-age chess")
                .with_date("2025-11-20")
                .with_start_time("16:00:00")
                .with_day_of_week("Thursday")
                .with_audience("School Age (6-11)"),
            Event::new("JC undated craft")
                .with_audience("All Ages")
                .with_category("Arts and Crafts"),
        ],
        hoboken: vec![
            Event::new("Hoboken baby lapsit")
                .with_date("2025-11-04")
                .with_start_time("09:30:00")
                .with_day_of_week("Tuesday")
                .with_audience("Baby & Me"),
            Event::new("Hoboken evening concert")
                .with_date("2025-11-28")
                .with_start_time("18:00:00")
                .with_day_of_week("Friday")
                .with_audience("All Ages")
                .with_category("Music and Dance"),
            Event::new("Hoboken stale event")
                .with_date("2025-10-01")
                .with_audience("All Ages"),
        ],
        bookstore: vec![Event::new("Little City Books storytime")
            .with_date("2025-11-08")
            .with_start_time("11:00:00")
            .with_day_of_week("Saturday")
            .with_audience("Ages 0-5")
            .with_venue_type(VenueType::Bookstore)
            .with_city("Hoboken")
            .with_category("Storytime Events")],
    }
}

#[test]
fn past_events_never_appear() {
    let response = engine_over(mixed_snapshot()).search(&EventQuery::new());
    assert!(!titles(&response).contains(&"Hoboken stale event"));
}

#[test]
fn unparsable_date_survives_all_temporal_stages() {
    let engine = engine_over(mixed_snapshot());
    for window in [DateWindow::Week, DateWindow::TwoWeeks, DateWindow::Month, DateWindow::All] {
        let response = engine.search(&EventQuery::new().within(window));
        assert!(
            titles(&response).contains(&"JC undated craft"),
            "undated event dropped by window {window:?}"
        );
    }
}

#[test]
fn age_overlap_boundary_and_adjacent() {
    let snapshot = Snapshot {
        jersey_city: vec![
            Event::new("threes to fives")
                .with_date("2025-11-10")
                .with_audience("Ages 3-5"),
            Event::new("fives to eights")
                .with_date("2025-11-10")
                .with_audience("Ages 5-8"),
        ],
        ..Snapshot::new()
    };
    let engine = engine_over(snapshot);

    // Boundary-touching intervals overlap
    let response = engine.search(&EventQuery::new().for_ages("5-8"));
    assert_eq!(response.count, 2);

    // Adjacent intervals do not
    let response = engine.search(&EventQuery::new().for_ages("0-2"));
    assert_eq!(response.count, 0);
}

#[test]
fn all_ages_short_circuit_and_no_overlap_drop() {
    let snapshot = Snapshot {
        hoboken: vec![
            Event::new("open house")
                .with_date("2099-01-01")
                .with_audience("All Ages"),
            Event::new("tweens")
                .with_date("2099-01-01")
                .with_audience("Ages 6-11"),
        ],
        ..Snapshot::new()
    };
    let response = engine_over(snapshot).search(&EventQuery::new().for_ages("0-2"));
    assert_eq!(titles(&response), vec!["open house"]);
}

#[test]
fn fail_closed_without_age_signal() {
    let snapshot = Snapshot {
        jersey_city: vec![Event::new("mystery event").with_date("2025-11-10")],
        ..Snapshot::new()
    };
    let engine = engine_over(snapshot);

    // Excluded when an age filter is supplied
    let response = engine.search(&EventQuery::new().for_ages("0-2"));
    assert_eq!(response.count, 0);

    // Included when it is not
    let response = engine.search(&EventQuery::new());
    assert_eq!(response.count, 1);
}

#[test]
fn description_age_range_is_consulted() {
    let snapshot = Snapshot {
        jersey_city: vec![Event::new("makers club")
            .with_date("2025-11-10")
            .with_description("Hands-on builds for ages 4-18.")],
        ..Snapshot::new()
    };
    let engine = engine_over(snapshot);
    assert_eq!(engine.search(&EventQuery::new().for_ages("3-5")).count, 1);
    assert_eq!(engine.search(&EventQuery::new().for_ages("0-2")).count, 0);
}

#[test]
fn week_window_is_subset_of_all() {
    let engine = engine_over(mixed_snapshot());
    let base = EventQuery::new().for_ages("0-5");

    let all = engine.search(&base.clone().within(DateWindow::All));
    let week = engine.search(&base.within(DateWindow::Week));

    let all_titles = titles(&all);
    for title in titles(&week) {
        assert!(all_titles.contains(&title), "{title} in week but not in all");
    }
    assert!(week.count <= all.count);
}

#[test]
fn pipeline_is_idempotent() {
    let query = EventQuery::new()
        .for_ages("0-3")
        .within(DateWindow::Month)
        .during(TimeOfDay::Morning);

    let engine = engine_over(mixed_snapshot());
    let first = engine.search(&query);
    let second = engine.search(&query);

    assert_eq!(first.count, second.count);
    assert_eq!(first.results, second.results);
}

#[test]
fn results_are_sorted_and_garbage_sinks() {
    let response = engine_over(mixed_snapshot()).search(&EventQuery::new());
    let dates: Vec<Option<&str>> = response
        .results
        .iter()
        .map(|event| event.date.as_deref())
        .collect();

    // Chronological prefix, undated record last
    assert_eq!(
        dates,
        vec![
            Some("2025-11-04"),
            Some("2025-11-05"),
            Some("2025-11-08"),
            Some("2025-11-20"),
            Some("2025-11-28"),
            None,
        ]
    );
}

#[test]
fn sort_preserves_input_order_on_ties() {
    let snapshot = Snapshot {
        jersey_city: vec![
            Event::new("first")
                .with_date("2025-11-10")
                .with_start_time("10:00:00")
                .with_audience("All Ages"),
            Event::new("second")
                .with_date("2025-11-10")
                .with_start_time("10:00:00")
                .with_audience("All Ages"),
        ],
        ..Snapshot::new()
    };
    let response = engine_over(snapshot).search(&EventQuery::new());
    assert_eq!(titles(&response), vec!["first", "second"]);
}

#[test]
fn city_scoping_and_tagging() {
    let engine = engine_over(mixed_snapshot());

    // Single city pulls in its own events plus matching bookstore ones
    let hoboken = engine.search(&EventQuery::new().in_city(CitySelector::Hoboken));
    assert_eq!(
        titles(&hoboken),
        vec![
            "Hoboken baby lapsit",
            "Little City Books storytime",
            "Hoboken evening concert",
        ]
    );

    let jc = engine.search(&EventQuery::new().in_city(CitySelector::JerseyCity));
    assert!(!titles(&jc).contains(&"Little City Books storytime"));

    // Both mode tags every native record with its originating city
    let both = engine.search(&EventQuery::new());
    for event in &both.results {
        assert!(event.city.is_some(), "{} left untagged", event.title);
    }
}

#[test]
fn day_time_venue_and_category_filters() {
    let engine = engine_over(mixed_snapshot());

    let response = engine.search(&EventQuery::new().on_day("saturday"));
    assert_eq!(titles(&response), vec!["Little City Books storytime"]);

    let response = engine.search(&EventQuery::new().during(TimeOfDay::Evening));
    // The undated craft has no start time and counts as morning
    assert_eq!(titles(&response), vec!["Hoboken evening concert"]);

    let response = engine.search(&EventQuery::new().at_venue(VenueFilter::Bookstore));
    assert_eq!(titles(&response), vec!["Little City Books storytime"]);

    let response = engine.search(&EventQuery::new().of_kind(storyscout::EventKind::Music));
    assert_eq!(titles(&response), vec!["Hoboken evening concert"]);
}

#[test]
fn survivors_are_annotated() {
    let engine = engine_over(mixed_snapshot());
    let response = engine.search(&EventQuery::new().in_city(CitySelector::JerseyCity));

    let storytime = response
        .results
        .iter()
        .find(|event| event.title == "JC toddler storytime")
        .unwrap();
    assert_eq!(storytime.duration_hours, Some(0.75));
    assert_eq!(storytime.is_all_day, Some(false));
    assert_eq!(storytime.formatted_end_time.as_deref(), Some("11:15 AM"));

    let chess = response
        .results
        .iter()
        .find(|event| event.title == "JC school-age chess")
        .unwrap();
    assert_eq!(chess.duration_hours, Some(0.0));
    assert!(chess.formatted_end_time.is_none());
}

#[test]
fn response_echoes_resolved_query() {
    let query = EventQuery::new()
        .in_city(CitySelector::Hoboken)
        .for_ages("0-2")
        .within(DateWindow::Week);
    let response = engine_over(mixed_snapshot()).search(&query);
    assert_eq!(response.echoed_query, query);
    assert_eq!(response.count, response.results.len());
}

#[test]
fn malformed_age_input_degrades_to_no_filter() {
    let engine = engine_over(mixed_snapshot());
    let unfiltered = engine.search(&EventQuery::new());
    let garbled = engine.search(&EventQuery::new().for_ages("five-ish"));
    assert_eq!(unfiltered.count, garbled.count);
}
