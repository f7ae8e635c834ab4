//! Snapshot store and reload behavior.

use std::sync::Arc;

use chrono::NaiveDate;
use storyscout::{Event, EventQuery, EventQueryEngine, Snapshot, SnapshotStore};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
}

#[test]
fn queries_see_old_or_new_snapshot_never_a_mix() {
    let store = Arc::new(SnapshotStore::with_snapshot(Snapshot {
        jersey_city: vec![Event::new("old jc").with_date("2025-11-10")],
        hoboken: vec![Event::new("old hoboken").with_date("2025-11-10")],
        ..Snapshot::new()
    }));
    let engine = EventQueryEngine::with_reference_date(store.clone(), reference_date());

    let before = engine.search(&EventQuery::new());
    assert_eq!(before.count, 2);

    let counts = store.replace(Snapshot {
        jersey_city: vec![Event::new("new jc").with_date("2025-11-12")],
        ..Snapshot::new()
    });
    assert_eq!(counts.jersey_city, 1);
    assert_eq!(counts.hoboken, 0);

    let after = engine.search(&EventQuery::new());
    assert_eq!(after.count, 1);
    assert_eq!(after.results[0].title, "new jc");
}

#[test]
fn annotation_never_leaks_into_the_snapshot() {
    let store = Arc::new(SnapshotStore::with_snapshot(Snapshot {
        hoboken: vec![Event::new("storytime")
            .with_date("2025-11-10")
            .with_start_time("10:00:00")
            .with_end_time("10:45:00")],
        ..Snapshot::new()
    }));
    let engine = EventQueryEngine::with_reference_date(store.clone(), reference_date());

    let response = engine.search(&EventQuery::new());
    assert_eq!(response.results[0].duration_hours, Some(0.75));

    // The shared collection is untouched: no derived fields, no city tag.
    let snapshot = store.current();
    assert!(snapshot.hoboken[0].duration_hours.is_none());
    assert!(snapshot.hoboken[0].city.is_none());
}

#[test]
fn loading_from_files_feeds_the_store() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hoboken.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[{{"title": "File-backed storytime", "date": "2025-11-10", "audience": "All Ages"}}]"#
    )
    .unwrap();

    let config = storyscout::DataConfig {
        jersey_city_path: dir.path().join("missing_jc.json").display().to_string(),
        hoboken_path: path.display().to_string(),
        bookstore_path: dir.path().join("missing_books.json").display().to_string(),
    };

    let store = Arc::new(SnapshotStore::with_snapshot(storyscout::load_snapshot(&config)));
    let engine = EventQueryEngine::with_reference_date(store, reference_date());
    let response = engine.search(&EventQuery::new().for_ages("0-2"));
    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].title, "File-backed storytime");
}
