//! Loading event snapshots from per-source JSON files.
//!
//! Each source is one JSON array of event records. Snapshot loading is
//! tolerant: a missing or malformed file logs a warning and that
//! source's collection loads empty, so one broken feed never takes the
//! whole snapshot down. Callers that want the error use
//! [`load_events`] directly.

use std::path::Path;

use crate::config::DataConfig;
use crate::error::{Result, SourceError};
use crate::events::Event;
use crate::store::Snapshot;

/// Load a snapshot from the configured data files.
pub fn load_snapshot(config: &DataConfig) -> Snapshot {
    Snapshot {
        jersey_city: load_or_empty(&config.jersey_city_path, "jersey_city"),
        hoboken: load_or_empty(&config.hoboken_path, "hoboken"),
        bookstore: load_or_empty(&config.bookstore_path, "bookstore"),
    }
}

/// Load one source file strictly.
pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SourceError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let events = serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(events)
}

fn load_or_empty(path: &str, source: &str) -> Vec<Event> {
    match load_events(path) {
        Ok(events) => {
            tracing::info!(count = events.len(), source, "loaded events");
            events
        }
        Err(err) => {
            tracing::warn!(%err, source, "failed to load events, starting empty");
            Vec::new()
        }
    }
}
