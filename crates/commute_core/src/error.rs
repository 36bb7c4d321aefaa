//! Error types for graph construction, route queries and commute records.

use thiserror::Error;

use crate::constants::Weight;

/// Errors raised while building or querying the location graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A referenced location does not exist in the graph.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// A location with the same name was already added.
    #[error("Location already exists: {0}")]
    DuplicateLocation(String),

    /// Road weights must be finite and non-negative.
    #[error("Invalid weight {weight} for road {from} <=> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },
}

/// Errors raised by a single route computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// Start or end is not a location of the graph.
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Both locations exist but lie in different components.
    #[error("No path from {start} to {end}")]
    NoPath { start: String, end: String },
}

/// Errors raised while recording or fetching commutes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommuteError {
    /// A required field was empty.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Route(#[from] RouteError),

    /// The owner has not recorded any commute yet.
    #[error("No commute history found for {0}")]
    NoHistory(String),
}
