use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor chain from `target` back to `source`.
///
/// Returns `None` if `target` was never reached or the chain does not end in
/// `source`.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let weight = node_data.get(&target)?.0;

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev_node) = node_data.get(&current)?.1 {
        path.push(prev_node);
        current = prev_node;
    }

    if current != source {
        return None;
    }

    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    path: Option<ShortestPath>,
) {
    let expected_path = expected_path
        .into_iter()
        .map(crate::graph::node_index)
        .collect();
    assert_eq!(
        Some(ShortestPath::new(expected_path, expected_weight)),
        path
    );
}
