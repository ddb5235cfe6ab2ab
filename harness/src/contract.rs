//! World contract: what a demo world supplies to the runner.
//!
//! A world is a [`SearchSpace`] plus the data the runner cannot invent: a
//! stable identifier, a start node, an admissible heuristic, and JSON views
//! of nodes and costs for the run report. Worlds never hash, order or
//! serialize reports themselves; that is the runner's job.

use serde_json::Value;
use wayfinder_search::contract::{CostOf, SearchSpace};

/// Failure to build a world from its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The description is malformed.
    InvalidLayout { detail: String },
    /// A required marker (start, goal) is absent.
    MissingMarker { marker: char },
    /// A marker that must be unique appears more than once.
    DuplicateMarker { marker: char },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLayout { detail } => write!(f, "invalid world layout: {detail}"),
            Self::MissingMarker { marker } => write!(f, "missing marker '{marker}'"),
            Self::DuplicateMarker { marker } => write!(f, "duplicate marker '{marker}'"),
        }
    }
}

impl std::error::Error for WorldError {}

/// The contract a world implements to be run by [`crate::runner::run_world`].
pub trait SearchWorld: SearchSpace {
    /// Unique world identifier (e.g. `"grid_maze"`).
    fn world_id(&self) -> &str;

    /// The node every run starts from.
    fn start(&self) -> Self::Node;

    /// Admissible estimate of the remaining cost from `node`.
    fn heuristic(&self, node: &Self::Node) -> CostOf<Self>;

    /// JSON view of `node` for reports. Must contain no floats.
    fn node_json(&self, node: &Self::Node) -> Value;

    /// JSON view of `cost` for reports. Must contain no floats.
    fn cost_json(&self, cost: &CostOf<Self>) -> Value;
}
