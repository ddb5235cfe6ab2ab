//! Search space contract: how the engine discovers the graph.
//!
//! Nothing is materialized up front. The engine learns about a node's
//! outgoing edges only by calling [`SearchSpace::successors`] when it pops
//! that node, so a space may be infinite or procedurally generated.

use std::hash::Hash;
use std::marker::PhantomData;

use wayfinder_kernel::cost::{CostAlgebra, Numeric, NumericCost};

/// Shorthand for the cost type of a space.
pub type CostOf<S> = <<S as SearchSpace>::Algebra as CostAlgebra>::Cost;

/// Trait for graphs that can be searched lazily.
///
/// # Contract
///
/// - `key` must be consistent with the space's notion of node equality:
///   equal nodes yield equal keys. Two nodes with equal keys are one vertex,
///   and the first node value seen for a key stays canonical.
/// - Edge costs must not be negative under the algebra's ordering.
/// - All three methods must be deterministic and must not share mutable
///   state with another in-flight search.
///
/// Violations are not detected; they produce wrong but non-panicking
/// results.
pub trait SearchSpace {
    /// Caller-defined vertex value.
    type Node: Clone;
    /// Identity used for registry lookup.
    type Key: Clone + Eq + Hash;
    /// Cost algebra for edge weights.
    type Algebra: CostAlgebra;

    /// Extract the identity of `node`.
    fn key(&self, node: &Self::Node) -> Self::Key;

    /// Enumerate `(successor, edge_cost)` pairs of `node`.
    ///
    /// The engine takes one owned list per expansion and walks it once, in
    /// order: among successors that tie on estimate and cost, the one
    /// listed first is popped first.
    fn successors(&self, node: &Self::Node) -> Vec<(Self::Node, CostOf<Self>)>;

    /// Test whether `node` satisfies the search goal.
    fn is_success(&self, node: &Self::Node) -> bool;
}

/// Estimate of the remaining cost from a node to the nearest goal.
///
/// Must be admissible (never overestimate) for optimal results. Any
/// `Fn(&N) -> A::Cost` closure is a heuristic.
pub trait Heuristic<N, A: CostAlgebra> {
    fn estimate(&self, node: &N) -> A::Cost;
}

impl<N, A, F> Heuristic<N, A> for F
where
    A: CostAlgebra,
    F: Fn(&N) -> A::Cost,
{
    fn estimate(&self, node: &N) -> A::Cost {
        self(node)
    }
}

/// The zero heuristic. Best-first search under it is Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N, A: CostAlgebra> Heuristic<N, A> for ZeroHeuristic {
    fn estimate(&self, _node: &N) -> A::Cost {
        A::zero()
    }
}

/// A [`SearchSpace`] assembled from three closures.
///
/// Use [`FnSpace::numeric`] for plain numeric costs or [`FnSpace::new`]
/// with an explicit algebra type.
pub struct FnSpace<A, N, K, FK, FS, FG> {
    key: FK,
    successors: FS,
    success: FG,
    _marker: PhantomData<fn() -> (A, N, K)>,
}

impl<A, N, K, FK, FS, FG> FnSpace<A, N, K, FK, FS, FG>
where
    A: CostAlgebra,
    FK: Fn(&N) -> K,
    FS: Fn(&N) -> Vec<(N, A::Cost)>,
    FG: Fn(&N) -> bool,
{
    /// Build a space from `key`, `successors` and `success` functions.
    pub fn new(key: FK, successors: FS, success: FG) -> Self {
        Self {
            key,
            successors,
            success,
            _marker: PhantomData,
        }
    }
}

impl<C, N, K, FK, FS, FG> FnSpace<Numeric<C>, N, K, FK, FS, FG>
where
    C: NumericCost,
    FK: Fn(&N) -> K,
    FS: Fn(&N) -> Vec<(N, C)>,
    FG: Fn(&N) -> bool,
{
    /// Build a space whose edge costs use the [`Numeric`] algebra.
    pub fn numeric(key: FK, successors: FS, success: FG) -> Self {
        Self::new(key, successors, success)
    }
}

impl<A, N, K, FK, FS, FG> SearchSpace for FnSpace<A, N, K, FK, FS, FG>
where
    A: CostAlgebra,
    N: Clone,
    K: Clone + Eq + Hash,
    FK: Fn(&N) -> K,
    FS: Fn(&N) -> Vec<(N, A::Cost)>,
    FG: Fn(&N) -> bool,
{
    type Node = N;
    type Key = K;
    type Algebra = A;

    fn key(&self, node: &N) -> K {
        (self.key)(node)
    }

    fn successors(&self, node: &N) -> Vec<(N, A::Cost)> {
        (self.successors)(node)
    }

    fn is_success(&self, node: &N) -> bool {
        (self.success)(node)
    }
}
