//! Search audit record.
//!
//! Every engine call returns a `SearchStats` describing what the loop did,
//! whether or not it found anything.

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A success node was popped (single-result shapes).
    GoalReached,
    /// The frontier ran dry.
    FrontierExhausted,
    /// Multi-solution mode: the next estimate exceeded the best goal cost.
    BagCutoff,
}

impl TerminationReason {
    /// Stable lowercase tag for reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::BagCutoff => "bag_cutoff",
        }
    }
}

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were enumerated.
    pub expansions: u64,
    /// Frontier entries discarded because a cheaper entry superseded them.
    pub stale_discarded: u64,
    /// Successors skipped by the cost ceiling.
    pub ceiling_pruned: u64,
    /// Recorded costs lowered after first discovery.
    pub improvements: u64,
    /// Equal-cost predecessors merged (multi-solution mode only).
    pub equal_cost_merges: u64,
    /// Distinct keys in the registry at termination.
    pub nodes_registered: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
    /// Why the loop stopped.
    pub termination_reason: TerminationReason,
}

impl SearchStats {
    pub(crate) fn new() -> Self {
        Self {
            expansions: 0,
            stale_discarded: 0,
            ceiling_pruned: 0,
            improvements: 0,
            equal_cost_merges: 0,
            nodes_registered: 0,
            frontier_high_water: 0,
            termination_reason: TerminationReason::FrontierExhausted,
        }
    }
}
