//! Search entry points and the shared best-first loop.
//!
//! Every public shape runs the same loop. What varies is the heuristic,
//! whether the registry keeps one best predecessor or the set of equal-cost
//! ones, and when the loop stops:
//!
//! | entry point          | heuristic | predecessors | stops at                         |
//! |----------------------|-----------|--------------|----------------------------------|
//! | [`astar`]            | caller    | single       | first success                    |
//! | [`dijkstra`]         | zero      | single       | first success                    |
//! | [`dijkstra_all`]     | zero      | single       | exhaustion (success ignored)     |
//! | [`dijkstra_partial`] | zero      | single       | first success or exhaustion      |
//! | [`astar_bag`]        | caller    | set          | estimate above best goal cost    |
//!
//! Stale frontier entries are never updated in place. A cheaper path pushes
//! a fresh entry, and an entry whose cumulative cost is worse than the
//! registry's record is dropped when popped.

use std::cmp::Ordering;
use std::collections::HashMap;

use wayfinder_kernel::cost::CostAlgebra;

use crate::contract::{CostOf, Heuristic, SearchSpace, ZeroHeuristic};
use crate::error::{PathError, SearchError};
use crate::frontier::BestFirstFrontier;
use crate::path::{build_path, AstarSolution, Reached};
use crate::policy::SearchPolicy;
use crate::registry::{NodeRegistry, ParentSet, Predecessors, Relaxation};
use crate::stats::{SearchStats, TerminationReason};

/// Result of a single-path search.
///
/// Always carries the audit record. Check [`SearchResult::is_goal_reached`]
/// or `stats.termination_reason` to determine the outcome.
#[derive(Debug, Clone)]
pub struct SearchResult<N, C> {
    /// Path from start to goal (both inclusive) and its cost.
    pub solution: Option<(Vec<N>, C)>,
    pub stats: SearchStats,
}

impl<N, C> SearchResult<N, C> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.solution.is_some()
    }

    /// Drop the audit record and keep the solution.
    #[must_use]
    pub fn into_solution(self) -> Option<(Vec<N>, C)> {
        self.solution
    }
}

/// Result of an exhaustive or partial reachability search.
#[derive(Debug, Clone)]
pub struct Reachability<N, K, C> {
    /// Every registered key with its canonical node, best parent and cost.
    pub map: HashMap<K, Reached<N, K, C>>,
    /// The success node that stopped a partial search, if any.
    pub goal: Option<N>,
    pub stats: SearchStats,
}

impl<N, K, C> Reachability<N, K, C>
where
    N: Clone,
    K: Eq + std::hash::Hash,
{
    /// Rebuild the best path to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnknownTarget`] if `target` was not reached.
    pub fn path_to(&self, target: &K) -> Result<Vec<N>, PathError> {
        build_path(target, &self.map)
    }

    /// Best cost to `target`, if reached.
    #[must_use]
    pub fn cost_to(&self, target: &K) -> Option<&C> {
        self.map.get(target).map(|r| &r.cost)
    }
}

/// Result of a multi-solution search.
#[derive(Debug, Clone)]
pub struct BagResult<N, K, C> {
    /// Lazy cursor over every optimal path, and the optimal cost.
    pub solution: Option<(AstarSolution<N, K>, C)>,
    pub stats: SearchStats,
}

impl<N, K, C> BagResult<N, K, C> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.solution.is_some()
    }

    #[must_use]
    pub fn into_solution(self) -> Option<(AstarSolution<N, K>, C)> {
        self.solution
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopRule {
    FirstSuccess,
    Exhaust,
    Bag,
}

/// Loop state handed back to the public shapes.
struct Run<S: SearchSpace, P> {
    registry: NodeRegistry<S::Key, S::Node, S::Algebra, P>,
    start_key: S::Key,
    goal: Option<S::Key>,
    sinks: Vec<S::Key>,
    min_goal_cost: Option<CostOf<S>>,
    stats: SearchStats,
}

#[allow(clippy::too_many_lines)]
fn run<S, H, P>(
    space: &S,
    start: S::Node,
    heuristic: &H,
    policy: &SearchPolicy<CostOf<S>>,
    rule: StopRule,
) -> Run<S, P>
where
    S: SearchSpace,
    H: Heuristic<S::Node, S::Algebra> + ?Sized,
    P: Predecessors<S::Key>,
{
    let mut stats = SearchStats::new();
    let mut registry: NodeRegistry<S::Key, S::Node, S::Algebra, P> = NodeRegistry::new();
    let mut frontier: BestFirstFrontier<S::Algebra, S::Key> = BestFirstFrontier::new();
    let mut goal = None;
    let mut sinks: Vec<S::Key> = Vec::new();
    let mut min_goal_cost: Option<CostOf<S>> = None;

    let start_key = space.key(&start);
    registry.insert_root(start_key.clone(), start);
    frontier.push(S::Algebra::zero(), S::Algebra::zero(), start_key.clone());

    let termination_reason = loop {
        let Some(popped) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        // Nothing left can tie the best goal once estimates pass it.
        if let Some(min) = &min_goal_cost {
            if S::Algebra::gt(&popped.estimated, min) {
                break TerminationReason::BagCutoff;
            }
        }

        let Some(entry) = registry.get(&popped.key) else {
            continue;
        };
        if S::Algebra::gt(&popped.cumulative, &entry.cost) {
            stats.stale_discarded += 1;
            continue;
        }
        let node = entry.node.clone();

        if rule != StopRule::Exhaust && space.is_success(&node) {
            if rule == StopRule::FirstSuccess {
                goal = Some(popped.key);
                break TerminationReason::GoalReached;
            }
            let cumulative = popped.cumulative;
            let versus_best = min_goal_cost
                .as_ref()
                .map(|min| S::Algebra::compare(&cumulative, min));
            match versus_best {
                None | Some(Ordering::Less) => {
                    sinks.clear();
                    sinks.push(popped.key);
                    min_goal_cost = Some(cumulative);
                }
                Some(Ordering::Equal) => {
                    if !sinks.contains(&popped.key) {
                        sinks.push(popped.key);
                    }
                }
                Some(Ordering::Greater) => {}
            }
            continue;
        }

        stats.expansions += 1;
        for (successor, edge_cost) in space.successors(&node) {
            let new_cost = S::Algebra::add(&popped.cumulative, &edge_cost);
            if !policy.admits::<S::Algebra>(&new_cost) {
                stats.ceiling_pruned += 1;
                continue;
            }
            let successor_key = space.key(&successor);
            let outcome = registry.relax(
                successor_key.clone(),
                successor,
                new_cost.clone(),
                &popped.key,
            );
            match outcome {
                Relaxation::Improved => stats.improvements += 1,
                Relaxation::Merged => stats.equal_cost_merges += 1,
                Relaxation::Inserted | Relaxation::Ignored => {}
            }
            if !outcome.needs_push() {
                continue;
            }
            // Estimate from the canonical node, which may predate `successor`.
            if let Some(registered) = registry.get(&successor_key) {
                let estimated = S::Algebra::add(&new_cost, &heuristic.estimate(&registered.node));
                frontier.push(estimated, new_cost, successor_key);
            }
        }
    };

    stats.termination_reason = termination_reason;
    stats.nodes_registered = registry.len() as u64;
    stats.frontier_high_water = frontier.high_water();

    Run {
        registry,
        start_key,
        goal,
        sinks,
        min_goal_cost,
        stats,
    }
}

/// Best-first search for one cheapest path from `start` to a success node.
///
/// `heuristic` must be admissible for the result to be optimal. Returns the
/// path (start and goal inclusive) with its cost, or no solution if the
/// frontier is exhausted first.
///
/// # Errors
///
/// Returns [`SearchError::Path`] if the goal's predecessor chain cannot be
/// rebuilt, which only happens on a corrupted registry.
///
/// A ceiling below zero is not an error: every edge is pruned, so only a
/// start node that is itself a success is found.
pub fn astar<S, H>(
    space: &S,
    start: S::Node,
    heuristic: &H,
    policy: &SearchPolicy<CostOf<S>>,
) -> Result<SearchResult<S::Node, CostOf<S>>, SearchError>
where
    S: SearchSpace,
    H: Heuristic<S::Node, S::Algebra> + ?Sized,
{
    let run = run::<S, H, Option<S::Key>>(
        space,
        start,
        heuristic,
        policy,
        StopRule::FirstSuccess,
    );
    let stats = run.stats;
    let Some(goal) = run.goal else {
        return Ok(SearchResult {
            solution: None,
            stats,
        });
    };

    let map = run.registry.into_reach_map();
    let cost = map
        .get(&goal)
        .map(|r| r.cost.clone())
        .ok_or(PathError::UnknownTarget)?;
    let path = build_path(&goal, &map)?;
    Ok(SearchResult {
        solution: Some((path, cost)),
        stats,
    })
}

/// Cheapest-path search without a heuristic.
///
/// # Errors
///
/// See [`astar`].
pub fn dijkstra<S>(
    space: &S,
    start: S::Node,
    policy: &SearchPolicy<CostOf<S>>,
) -> Result<SearchResult<S::Node, CostOf<S>>, SearchError>
where
    S: SearchSpace,
{
    astar(space, start, &ZeroHeuristic, policy)
}

/// Cheapest cost and predecessor of every node reachable from `start`.
///
/// The success predicate is never consulted. Only terminates on finite
/// reachable graphs (or under a cost ceiling that bounds the graph).
///
/// # Errors
///
/// Currently infallible; returns `Result` to match [`astar`].
pub fn dijkstra_all<S>(
    space: &S,
    start: S::Node,
    policy: &SearchPolicy<CostOf<S>>,
) -> Result<Reachability<S::Node, S::Key, CostOf<S>>, SearchError>
where
    S: SearchSpace,
{
    let run = run::<S, ZeroHeuristic, Option<S::Key>>(
        space,
        start,
        &ZeroHeuristic,
        policy,
        StopRule::Exhaust,
    );
    Ok(Reachability {
        map: run.registry.into_reach_map(),
        goal: None,
        stats: run.stats,
    })
}

/// Reachability map built until the first success node is popped (or the
/// frontier runs dry), together with that node.
///
/// Nodes popped before the goal have final costs; nodes still pending on
/// the frontier carry their best cost so far.
///
/// # Errors
///
/// Currently infallible; returns `Result` to match [`astar`].
pub fn dijkstra_partial<S>(
    space: &S,
    start: S::Node,
    policy: &SearchPolicy<CostOf<S>>,
) -> Result<Reachability<S::Node, S::Key, CostOf<S>>, SearchError>
where
    S: SearchSpace,
{
    let run = run::<S, ZeroHeuristic, Option<S::Key>>(
        space,
        start,
        &ZeroHeuristic,
        policy,
        StopRule::FirstSuccess,
    );
    let goal = run
        .goal
        .as_ref()
        .and_then(|k| run.registry.get(k))
        .map(|e| e.node.clone());
    Ok(Reachability {
        map: run.registry.into_reach_map(),
        goal,
        stats: run.stats,
    })
}

/// Every cheapest path from `start` to any success node.
///
/// The loop keeps popping after the first goal until the next estimate
/// exceeds the best goal cost, so every sink at that cost is recorded.
/// Paths are produced lazily by the returned [`AstarSolution`].
///
/// # Errors
///
/// Currently infallible; returns `Result` to match [`astar`].
pub fn astar_bag<S, H>(
    space: &S,
    start: S::Node,
    heuristic: &H,
    policy: &SearchPolicy<CostOf<S>>,
) -> Result<BagResult<S::Node, S::Key, CostOf<S>>, SearchError>
where
    S: SearchSpace,
    H: Heuristic<S::Node, S::Algebra> + ?Sized,
{
    let run = run::<S, H, ParentSet<S::Key>>(space, start, heuristic, policy, StopRule::Bag);
    let stats = run.stats;
    let Some(cost) = run.min_goal_cost else {
        return Ok(BagResult {
            solution: None,
            stats,
        });
    };
    let solution = AstarSolution::new(run.registry.into_parent_graph(), run.sinks, run.start_key);
    Ok(BagResult {
        solution: Some((solution, cost)),
        stats,
    })
}
