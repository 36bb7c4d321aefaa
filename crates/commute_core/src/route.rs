//! Name level route queries on top of [`Dijkstra`].
//!
//! [`compute_route`] validates both locations, runs the search and maps the
//! resulting node indices back to location names.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::constants::{Weight, MINUTES_PER_KM};
use crate::error::RouteError;
use crate::graph::Graph;
use crate::search::dijkstra::Dijkstra;

/// Ordered locations from start to end (both inclusive) and the total distance.
///
/// Only built by [`compute_route`], so the path always holds at least one
/// location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    path: Vec<String>,
    distance: Weight,
}

impl RouteResult {
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }

    pub fn start(&self) -> &str {
        &self.path[0]
    }

    pub fn end(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    /// Estimated travel time, linear in the distance.
    pub fn duration_minutes(&self) -> f64 {
        estimate_minutes(self.distance)
    }

    /// Estimated travel time formatted like `"140 min"`.
    pub fn duration(&self) -> String {
        format_duration(self.distance)
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Distance: {} km",
            self.path.join(" -> "),
            self.distance
        )
    }
}

pub fn estimate_minutes(distance: Weight) -> f64 {
    distance * MINUTES_PER_KM
}

pub fn format_duration(distance: Weight) -> String {
    format!("{} min", estimate_minutes(distance))
}

/// Computes the shortest route between the locations named `start` and `end`.
///
/// Fails with [`RouteError::InvalidLocation`] if either name is not part of
/// `graph` (start is checked first) and with [`RouteError::NoPath`] if both
/// exist but are not connected.
pub fn compute_route(graph: &Graph, start: &str, end: &str) -> Result<RouteResult, RouteError> {
    let source = graph
        .node_index(start)
        .ok_or_else(|| RouteError::InvalidLocation(start.to_string()))?;
    let target = graph
        .node_index(end)
        .ok_or_else(|| RouteError::InvalidLocation(end.to_string()))?;

    let mut dijkstra = Dijkstra::new(graph);
    let sp = dijkstra
        .search(source, target)
        .ok_or_else(|| RouteError::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        })?;

    let route = RouteResult {
        path: sp
            .nodes
            .iter()
            .map(|node_idx| graph.name(*node_idx).to_string())
            .collect(),
        distance: sp.weight,
    };
    debug!("Shortest path: {}", route);

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_graphs::{disconnected_graph, reference_graph};

    #[test]
    fn reference_route() {
        let g = reference_graph();

        let route = compute_route(&g, "A", "I").unwrap();

        // A-B-D-G-I and A-B-D-E-G-I are both 14 long
        assert_eq!(route.distance(), 14.0);
        assert_eq!(route.start(), "A");
        assert_eq!(route.end(), "I");

        let sum: Weight = route
            .path()
            .windows(2)
            .map(|pair| g.neighbors(&pair[0]).unwrap()[pair[1].as_str()])
            .sum();
        assert_eq!(sum, route.distance());
    }

    #[test]
    fn route_to_itself() {
        let g = reference_graph();

        assert_eq!(
            compute_route(&g, "A", "A"),
            Ok(RouteResult {
                path: vec!["A".to_string()],
                distance: 0.0,
            })
        );

        let route = compute_route(&g, "A", "A").unwrap();
        assert_eq!(route.start(), "A");
        assert_eq!(route.end(), "A");
    }

    #[test]
    fn route_is_symmetric() {
        let g = reference_graph();

        for s in g.nodes() {
            for t in g.nodes() {
                let there = compute_route(&g, &s.name, &t.name).unwrap();
                let back = compute_route(&g, &t.name, &s.name).unwrap();
                assert_eq!(there.distance(), back.distance());
            }
        }
    }

    #[test]
    fn overflowing_distance_is_not_unreachable() {
        let g = Graph::from_roads(&[("a", "b", f64::MAX), ("b", "c", f64::MAX)]).unwrap();

        let route = compute_route(&g, "a", "c").unwrap();

        assert_eq!(route.path(), ["a", "b", "c"]);
        assert!(route.distance().is_infinite());
        assert_eq!(compute_route(&g, "a", "b").unwrap().distance(), f64::MAX);
    }

    #[test]
    fn invalid_location() {
        let g = reference_graph();

        assert_eq!(
            compute_route(&g, "Z", "A"),
            Err(RouteError::InvalidLocation("Z".to_string()))
        );
        assert_eq!(
            compute_route(&g, "A", "Z"),
            Err(RouteError::InvalidLocation("Z".to_string()))
        );
        assert_eq!(
            compute_route(&g, "Y", "Z"),
            Err(RouteError::InvalidLocation("Y".to_string()))
        );
    }

    #[test]
    fn unreachable_location() {
        let g = disconnected_graph();

        assert_eq!(
            compute_route(&g, "A", "Y"),
            Err(RouteError::NoPath {
                start: "A".to_string(),
                end: "Y".to_string(),
            })
        );
        assert!(compute_route(&g, "X", "C").is_err());
        assert_eq!(compute_route(&g, "X", "Y").unwrap().distance(), 1.0);
    }

    #[test]
    fn duration_estimate() {
        let g = reference_graph();
        let route = compute_route(&g, "A", "I").unwrap();

        assert_eq!(route.duration_minutes(), 140.0);
        assert_eq!(route.duration(), "140 min");
        assert_eq!(format_duration(0.5), "5 min");
    }

    #[test]
    fn display_route() {
        let g = reference_graph();
        let route = compute_route(&g, "A", "D").unwrap();

        assert_eq!(route.to_string(), "A -> B -> D, Distance: 6 km");
    }
}
