//! Re-exports of the most commonly used items in `commute_core`.
pub use crate::commute::{plan_commute, CommuteRecord, CommuteStore, InMemoryCommuteStore};
pub use crate::error::{CommuteError, GraphError, RouteError};
pub use crate::route::{compute_route, RouteResult};

pub use crate::search;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::util::test_graphs::reference_graph;
