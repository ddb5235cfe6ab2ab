//! Run configuration: which engine shape to call and under what policy.
//!
//! The runner echoes the configuration into every report, so a report
//! digest commits to the mode, ceiling and path limit it was produced under.

use wayfinder_search::policy::SearchPolicy;

/// Default cap on the number of paths written into a multi-path report.
pub const DEFAULT_MAX_REPORTED_PATHS: usize = 64;

/// Engine entry point selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RunMode {
    /// `astar` with the world's heuristic.
    AStar,
    /// `dijkstra`.
    Dijkstra,
    /// `dijkstra_all`: full reachability map, success ignored.
    DijkstraAll,
    /// `dijkstra_partial`: reachability map up to the first success.
    DijkstraPartial,
    /// `astar_bag`: every optimal path.
    Bag,
}

impl RunMode {
    /// Every mode, in report order.
    pub const ALL: [Self; 5] = [
        Self::AStar,
        Self::Dijkstra,
        Self::DijkstraAll,
        Self::DijkstraPartial,
        Self::Bag,
    ];

    /// Stable tag used in reports and on fixture command lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::DijkstraAll => "dijkstra_all",
            Self::DijkstraPartial => "dijkstra_partial",
            Self::Bag => "astar_bag",
        }
    }

    /// Inverse of [`RunMode::as_str`].
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == tag)
    }
}

/// Configuration for one [`crate::runner::run_world`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig<C> {
    pub mode: RunMode,
    /// Passed through to the engine unchanged.
    pub search: SearchPolicy<C>,
    /// Multi-path reports list at most this many paths.
    pub max_reported_paths: usize,
}

impl<C> RunConfig<C> {
    /// Unbounded search in `mode` with the default path cap.
    #[must_use]
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            search: SearchPolicy::default(),
            max_reported_paths: DEFAULT_MAX_REPORTED_PATHS,
        }
    }

    #[must_use]
    pub fn with_ceiling(mut self, ceiling: C) -> Self {
        self.search = SearchPolicy::with_ceiling(ceiling);
        self
    }

    #[must_use]
    pub fn with_max_reported_paths(mut self, max: usize) -> Self {
        self.max_reported_paths = max;
        self
    }
}
