//! Weighted table: an explicit directed graph with labelled vertices.
//!
//! The default table is a small road map with a decoy: the route with the
//! fewest hops is not the cheapest one. No heuristic is known, so the world
//! reports zero everywhere.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use wayfinder_kernel::cost::Numeric;
use wayfinder_search::contract::SearchSpace;

use crate::contract::{SearchWorld, WorldError};

/// `(from, to, weight)` edges of the default table.
pub const DEFAULT_EDGES: &[(&str, &str, u64)] = &[
    ("depot", "mill", 7),
    ("depot", "ford", 9),
    ("depot", "orchard", 14),
    ("mill", "ford", 10),
    ("mill", "quarry", 15),
    ("ford", "quarry", 11),
    ("ford", "orchard", 2),
    ("orchard", "market", 9),
    ("quarry", "market", 6),
    ("market", "harbour", 3),
    ("harbour", "depot", 20),
    ("lighthouse", "harbour", 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTable {
    adjacency: BTreeMap<String, Vec<(String, u64)>>,
    start: String,
    goal: String,
}

impl WeightedTable {
    /// Build a table from `(from, to, weight)` edges.
    ///
    /// Successors are listed in edge order. Vertices that only appear as
    /// targets have no outgoing edges.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if `start` or `goal` is not
    /// mentioned by any edge.
    pub fn from_edges(
        edges: &[(&str, &str, u64)],
        start: &str,
        goal: &str,
    ) -> Result<Self, WorldError> {
        let mut adjacency: BTreeMap<String, Vec<(String, u64)>> = BTreeMap::new();
        for &(from, to, weight) in edges {
            adjacency
                .entry(from.to_string())
                .or_default()
                .push((to.to_string(), weight));
            adjacency.entry(to.to_string()).or_default();
        }
        for vertex in [start, goal] {
            if !adjacency.contains_key(vertex) {
                return Err(WorldError::InvalidLayout {
                    detail: format!("unknown vertex {vertex:?}"),
                });
            }
        }
        Ok(Self {
            adjacency,
            start: start.to_string(),
            goal: goal.to_string(),
        })
    }

    /// The default road map, from `depot` to `harbour`.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in table; see [`WeightedTable::from_edges`].
    pub fn default_table() -> Result<Self, WorldError> {
        Self::from_edges(DEFAULT_EDGES, "depot", "harbour")
    }

    /// Every vertex label, sorted.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}

impl SearchSpace for WeightedTable {
    type Node = String;
    type Key = String;
    type Algebra = Numeric<u64>;

    fn key(&self, node: &String) -> String {
        node.clone()
    }

    fn successors(&self, node: &String) -> Vec<(String, u64)> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn is_success(&self, node: &String) -> bool {
        *node == self.goal
    }
}

impl SearchWorld for WeightedTable {
    fn world_id(&self) -> &str {
        "weighted_table"
    }

    fn start(&self) -> String {
        self.start.clone()
    }

    fn heuristic(&self, _node: &String) -> u64 {
        0
    }

    fn node_json(&self, node: &String) -> Value {
        json!(node)
    }

    fn cost_json(&self, cost: &u64) -> Value {
        json!(cost)
    }
}
