//! Search policy types.

use wayfinder_kernel::cost::CostAlgebra;

/// Per-call search configuration.
///
/// The cost ceiling is the only bound on a search besides frontier
/// exhaustion. A successor whose cumulative cost exceeds it is never
/// registered (pruning, not an error). A ceiling below zero prunes every
/// edge, leaving only the start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy<C> {
    /// Maximum admissible cumulative cost (`None` = unbounded).
    pub cost_ceiling: Option<C>,
}

impl<C> SearchPolicy<C> {
    /// Policy with the given cost ceiling.
    #[must_use]
    pub fn with_ceiling(ceiling: C) -> Self {
        Self {
            cost_ceiling: Some(ceiling),
        }
    }

    /// `true` if `cost` is within the ceiling (or there is none).
    pub(crate) fn admits<A: CostAlgebra<Cost = C>>(&self, cost: &C) -> bool {
        self.cost_ceiling
            .as_ref()
            .map_or(true, |ceiling| !A::gt(cost, ceiling))
    }
}

impl<C> Default for SearchPolicy<C> {
    fn default() -> Self {
        Self { cost_ceiling: None }
    }
}
