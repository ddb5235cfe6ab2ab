//! Cost ceiling lock tests: pruning below the optimum, no effect at or
//! above it, and ceilings below zero pruning every edge.

use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::worlds::diamond_lattice::{DiamondLattice, LatticeNode};
use wayfinder_harness::worlds::turn_grid::TurnGrid;
use wayfinder_harness::worlds::weighted_table::WeightedTable;
use wayfinder_search::contract::{FnSpace, ZeroHeuristic};
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{astar, astar_bag, dijkstra, dijkstra_all, dijkstra_partial};
use wayfinder_search::stats::TerminationReason;

#[test]
fn astar_ceiling_below_optimum_finds_nothing() {
    let table = WeightedTable::default_table().unwrap();
    let h = |_: &String| 0u64;
    for ceiling in [0, 10, 22] {
        let result = astar(&table, table.start(), &h, &SearchPolicy::with_ceiling(ceiling)).unwrap();
        assert!(!result.is_goal_reached(), "ceiling {ceiling}");
    }
    let unbounded = astar(&table, table.start(), &h, &SearchPolicy::default()).unwrap();
    for ceiling in [23, 24, 1_000] {
        let bounded = astar(&table, table.start(), &h, &SearchPolicy::with_ceiling(ceiling)).unwrap();
        assert_eq!(bounded.solution, unbounded.solution, "ceiling {ceiling}");
    }
}

#[test]
fn bag_ceiling_below_optimum_finds_nothing() {
    let lattice = DiamondLattice::default();
    let h = |n: &LatticeNode| lattice.heuristic(n);

    let pruned = astar_bag(&lattice, lattice.start(), &h, &SearchPolicy::with_ceiling(5)).unwrap();
    assert!(!pruned.is_goal_reached());
    assert!(pruned.stats.ceiling_pruned > 0);

    for ceiling in [6, 7] {
        let (solutions, cost) =
            astar_bag(&lattice, lattice.start(), &h, &SearchPolicy::with_ceiling(ceiling))
                .unwrap()
                .into_solution()
                .unwrap();
        assert_eq!(cost, 6);
        assert_eq!(solutions.count(), 4, "ceiling {ceiling}");
    }
}

#[test]
fn ceiling_bounds_reachability() {
    let table = WeightedTable::default_table().unwrap();
    let reach = dijkstra_all(&table, table.start(), &SearchPolicy::with_ceiling(11)).unwrap();
    let mut reached: Vec<&str> = reach.map.keys().map(String::as_str).collect();
    reached.sort_unstable();
    assert_eq!(reached, vec!["depot", "ford", "mill", "orchard"]);
    assert!(reach.map.values().all(|r| r.cost <= 11));
}

#[test]
fn lexicographic_ceiling_compares_componentwise_in_order() {
    let grid = TurnGrid::default_grid().unwrap();
    let h = |p: &_| grid.heuristic(p);
    let tight = astar(&grid, grid.start(), &h, &SearchPolicy::with_ceiling((2, 6))).unwrap();
    assert!(!tight.is_goal_reached());

    // More steps are fine while the turn budget is not exceeded.
    let loose = astar(&grid, grid.start(), &h, &SearchPolicy::with_ceiling((2, 99))).unwrap();
    assert_eq!(loose.into_solution().map(|s| s.1), Some((2, 7)));
}

#[test]
fn negative_ceiling_leaves_only_the_start() {
    // 0 and 3 both satisfy success; every edge costs 1.
    let space = FnSpace::numeric(
        |n: &i32| *n,
        |n: &i32| vec![(n + 1, 1i64)],
        |n: &i32| *n == 0 || *n == 3,
    );
    let policy = SearchPolicy::with_ceiling(-1i64);

    // Start is a goal: found at zero cost by every single-target shape.
    let found = astar(&space, 0, &ZeroHeuristic, &policy).unwrap();
    assert_eq!(found.solution, Some((vec![0], 0)));
    assert_eq!(dijkstra(&space, 0, &policy).unwrap().solution, Some((vec![0], 0)));
    let partial = dijkstra_partial(&space, 0, &policy).unwrap();
    assert_eq!(partial.goal, Some(0));
    let (mut paths, cost) = astar_bag(&space, 0, &ZeroHeuristic, &policy)
        .unwrap()
        .into_solution()
        .unwrap();
    assert_eq!(cost, 0);
    assert_eq!(paths.next(), Some(vec![0]));
    assert_eq!(paths.next(), None);

    // Any other goal is out of reach, reported as not found.
    let missed = astar(&space, 1, &ZeroHeuristic, &policy).unwrap();
    assert!(!missed.is_goal_reached());
    assert_eq!(missed.stats.termination_reason, TerminationReason::FrontierExhausted);
    assert_eq!(missed.stats.ceiling_pruned, 1);
    assert!(!dijkstra(&space, 1, &policy).unwrap().is_goal_reached());
    assert!(dijkstra_partial(&space, 1, &policy).unwrap().goal.is_none());
    assert!(!astar_bag(&space, 1, &ZeroHeuristic, &policy).unwrap().is_goal_reached());

    let reach = dijkstra_all(&space, 1, &policy).unwrap();
    assert_eq!(reach.map.len(), 1);
    assert_eq!(reach.cost_to(&1), Some(&0));

    let zero = SearchPolicy::with_ceiling(0i64);
    let result = dijkstra(&space, 1, &zero).unwrap();
    assert!(!result.is_goal_reached());
    assert_eq!(result.stats.nodes_registered, 1);
}
