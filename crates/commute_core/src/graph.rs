use crate::constants::Weight;
use crate::error::GraphError;
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

/// Dense node identifier, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(u32::MAX)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(u32::MAX)
    }
}

/// A named place commuters travel between.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
}

/// Undirected road between two locations. Stored once and listed in the
/// adjacency of both endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Road {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Road {
            source,
            target,
            weight,
        }
    }

    /// The endpoint opposite to `node`.
    #[inline]
    pub fn other(&self, node: NodeIndex) -> NodeIndex {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

/// Row of a roads csv file
#[derive(Debug, Deserialize)]
struct RoadRecord {
    source: String,
    target: String,
    weight: Weight,
}

/// Static weighted graph of named locations.
///
/// Every road is undirected, so the adjacency is symmetric by construction:
/// if `b` is a neighbor of `a` with weight `w`, then `a` is a neighbor of `b`
/// with the same weight. Queries only ever borrow the graph immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Location>,
    edges: Vec<Road>,
    edges_out: Vec<Vec<EdgeIndex>>,
    index: FxHashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            edges_out: Vec::with_capacity(num_nodes),
            index: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Builds a graph from `(source, target, weight)` triples. Locations are
    /// added in the order they first appear.
    pub fn from_roads(roads: &[(&str, &str, Weight)]) -> Result<Self, GraphError> {
        let mut g = Graph::new();
        for (source, target, weight) in roads {
            for name in [source, target] {
                if !g.has_node(name) {
                    g.add_location(*name)?;
                }
            }
            g.add_road(source, target, *weight)?;
        }
        Ok(g)
    }

    /// Adds a new location to the graph.
    ///
    /// Returns an error if a location with the same name already exists.
    pub fn add_location(&mut self, name: impl Into<String>) -> Result<NodeIndex, GraphError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateLocation(name));
        }

        let node_idx = NodeIndex::new(self.nodes.len());
        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes exceeded"
        );

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());
        self.index.insert(name.clone(), node_idx);
        self.nodes.push(Location { name });

        Ok(node_idx)
    }

    /// Adds an undirected road between two existing locations.
    ///
    /// If a road between both locations already exists, the lower of the two
    /// weights is kept. Returns the index of the (possibly existing) road.
    pub fn add_road(
        &mut self,
        source: &str,
        target: &str,
        weight: Weight,
    ) -> Result<EdgeIndex, GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: source.to_string(),
                to: target.to_string(),
                weight,
            });
        }
        let s = self.lookup(source)?;
        let t = self.lookup(target)?;

        for edge_idx in &self.edges_out[s.index()] {
            let old_road = &mut self.edges[edge_idx.index()];
            if old_road.other(s) == t {
                if weight < old_road.weight {
                    old_road.weight = weight;
                }
                return Ok(*edge_idx);
            }
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges exceeded"
        );

        self.edges_out[s.index()].push(edge_idx);
        if s != t {
            self.edges_out[t.index()].push(edge_idx);
        }
        self.edges.push(Road::new(s, t, weight));

        Ok(edge_idx)
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Name of the location at `node_idx`.
    ///
    /// **Panics** if the index does not belong to this graph
    pub fn name(&self, node_idx: NodeIndex) -> &str {
        &self.nodes[node_idx.index()].name
    }

    /// Neighbors of `name` mapped to the weight of the connecting road.
    pub fn neighbors(&self, name: &str) -> Result<FxHashMap<&str, Weight>, GraphError> {
        let node_idx = self.lookup(name)?;
        Ok(self
            .adjacent(node_idx)
            .map(|(neighbor, weight)| (self.name(neighbor), weight))
            .collect())
    }

    /// Iterator over `(neighbor, weight)` pairs of `node_idx`.
    pub fn adjacent(&self, node_idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.edges_out[node_idx.index()].iter().map(move |edge_idx| {
            let road = &self.edges[edge_idx.index()];
            (road.other(node_idx), road.weight)
        })
    }

    /// Returns an iterator over all locations of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Location> {
        self.nodes.iter()
    }

    /// Returns an iterator over all roads of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Road> {
        self.edges.iter()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Graph has {} locations and {} roads",
            self.num_nodes(),
            self.num_edges()
        )
    }

    fn lookup(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.node_index(name)
            .ok_or_else(|| GraphError::UnknownLocation(name.to_string()))
    }

    /// Reads a graph from a locations file (`name` column) and a roads file
    /// (`source,target,weight` columns).
    pub fn from_csv(path_to_locations: &Path, path_to_roads: &Path) -> anyhow::Result<Self> {
        info!("Reading graph from {:?} and {:?}", path_to_locations, path_to_roads);

        let mut locations = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_locations)
            .with_context(|| format!("Could not open {}", path_to_locations.display()))?;
        for result in reader.deserialize() {
            let location: Location = result.context("Failed to parse Location")?;
            locations.push(location);
        }

        let mut roads = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_roads)
            .with_context(|| format!("Could not open {}", path_to_roads.display()))?;
        for result in reader.deserialize() {
            let road: RoadRecord = result.context("Failed to parse Road")?;
            roads.push(road);
        }

        // Build the graph
        let mut g = Graph::with_capacity(locations.len(), roads.len());
        for location in locations {
            g.add_location(location.name)?;
        }

        debug!("BEGIN adding roads");
        for RoadRecord {
            source,
            target,
            weight,
        } in roads
        {
            g.add_road(&source, &target, weight)?;
        }
        debug!("FINISHED adding roads");

        info!("{}", g.summary());
        Ok(g)
    }
}
