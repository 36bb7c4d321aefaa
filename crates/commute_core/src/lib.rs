//! Crate to plan commutes on a static graph of named locations.
//!
//! # Basic usage
//! ```
//! use commute_core::prelude::*;
//!
//! // Sample graph with the locations A to I
//! let g = reference_graph();
//!
//! // Shortest route between two locations
//! let route = compute_route(&g, "A", "I").expect("Failed to compute route");
//! assert_eq!(route.distance(), 14.0);
//! assert_eq!(route.duration(), "140 min");
//!
//! // Record it for a user
//! let mut store = InMemoryCommuteStore::new();
//! plan_commute(&g, &mut store, "alice", "A", "I", chrono::Utc::now()).unwrap();
//! assert_eq!(store.history("alice").unwrap().len(), 1);
//!```
pub mod commute;
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod route;
pub mod search;
pub mod statistics;
pub mod util;
