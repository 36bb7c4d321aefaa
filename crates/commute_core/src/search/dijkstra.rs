use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // Reversed so the heap pops the smallest weight first
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Single source shortest path search on a [`Graph`].
///
/// The frontier is a binary heap keyed by tentative distance. When several
/// unsettled nodes share the minimum distance, the one popped first is
/// whatever the heap yields. Distances are optimal regardless, but among
/// equally short paths the returned one is not pinned down.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Returns the shortest path from `source` to `target` or `None` if
    /// `target` cannot be reached.
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(ShortestPath::new(vec![source], 0.0));
        }

        // Tentative distance and predecessor, absent means unreached
        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut settled = FxHashSet::default();
        let mut queue = BinaryHeap::new();

        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            if !settled.insert(node_idx) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for (neighbor, edge_weight) in self.g.adjacent(node_idx) {
                if settled.contains(&neighbor) {
                    continue;
                }

                // First relaxation always wins, even if the sum overflowed to infinity
                let new_distance = weight + edge_weight;
                match node_data.get(&neighbor) {
                    Some((distance, _)) if new_distance >= *distance => continue,
                    _ => {
                        node_data.insert(neighbor, (new_distance, Some(node_idx)));
                        queue.push(Candidate::new(neighbor, new_distance));
                    }
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(target, source, &node_data);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!("Path found: {}", self.stats);
        } else {
            info!("No path found: {}", self.stats);
        }

        sp
    }
}
