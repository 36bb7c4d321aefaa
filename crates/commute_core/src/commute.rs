//! Commute records created from computed routes and a per-owner history.

use std::fmt;

use chrono::{DateTime, Utc};
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::error::CommuteError;
use crate::graph::Graph;
use crate::route::{compute_route, RouteResult};

/// A commute taken by `owner`, serialized with the field names clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteRecord {
    pub start_location: String,
    pub end_location: String,
    pub distance: Weight,
    pub duration: String,
    pub owner: String,
    pub date: DateTime<Utc>,
}

impl CommuteRecord {
    pub fn from_route(route: &RouteResult, owner: impl Into<String>, date: DateTime<Utc>) -> Self {
        CommuteRecord {
            start_location: route.start().to_string(),
            end_location: route.end().to_string(),
            distance: route.distance(),
            duration: route.duration(),
            owner: owner.into(),
            date,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for CommuteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Start: {} → End: {}, Distance: {} km, Time: {}",
            self.start_location, self.end_location, self.distance, self.duration
        )
    }
}

/// Storage for commute records.
pub trait CommuteStore {
    fn save(&mut self, record: CommuteRecord);

    /// All records of `owner`, newest first.
    fn history(&self, owner: &str) -> Result<Vec<CommuteRecord>, CommuteError>;
}

#[derive(Debug, Default)]
pub struct InMemoryCommuteStore {
    records: FxHashMap<String, Vec<CommuteRecord>>,
}

impl InMemoryCommuteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommuteStore for InMemoryCommuteStore {
    fn save(&mut self, record: CommuteRecord) {
        self.records
            .entry(record.owner.clone())
            .or_default()
            .push(record);
    }

    fn history(&self, owner: &str) -> Result<Vec<CommuteRecord>, CommuteError> {
        let mut history = match self.records.get(owner) {
            Some(records) if !records.is_empty() => records.clone(),
            _ => return Err(CommuteError::NoHistory(owner.to_string())),
        };
        // Stable, so records with equal dates keep insertion order reversed
        history.reverse();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(history)
    }
}

/// Computes the route from `start` to `end` and records it for `owner`.
///
/// Nothing is saved unless the route could be computed.
pub fn plan_commute<S: CommuteStore>(
    graph: &Graph,
    store: &mut S,
    owner: &str,
    start: &str,
    end: &str,
    date: DateTime<Utc>,
) -> Result<CommuteRecord, CommuteError> {
    for (field, value) in [("owner", owner), ("start", start), ("end", end)] {
        if value.trim().is_empty() {
            return Err(CommuteError::MissingField(field));
        }
    }

    let route = compute_route(graph, start.trim(), end.trim())?;
    let record = CommuteRecord::from_route(&route, owner, date);

    info!("Commute saved: {}", record);
    store.save(record.clone());

    Ok(record)
}
