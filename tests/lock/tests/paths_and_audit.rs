//! Path reconstruction round-trips, canonical-first node retention, and
//! the audit counters on a hand-checked run.

use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::worlds::grid_maze::GridMaze;
use wayfinder_harness::worlds::slot_lattice::{SlotLattice, SlotState};
use wayfinder_harness::worlds::weighted_table::WeightedTable;
use wayfinder_search::contract::SearchSpace;
use wayfinder_search::error::PathError;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{astar, dijkstra, dijkstra_all, dijkstra_partial};
use wayfinder_search::stats::TerminationReason;

#[test]
fn every_reachable_cell_rebuilds_a_shortest_path() {
    let maze = GridMaze::default_maze().unwrap();
    let start = maze.start();
    let reach = dijkstra_all(&maze, start, &SearchPolicy::default()).unwrap();
    assert!(reach.map.len() > 40);

    for (cell, reached) in &reach.map {
        let path = reach.path_to(cell).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(cell));
        let hops = u32::try_from(path.len() - 1).unwrap();
        assert_eq!(hops, reached.cost, "unit moves: cost is hop count");
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1, "{a:?} -> {b:?}");
        }
    }
}

#[test]
fn unknown_target_is_an_error() {
    let maze = GridMaze::default_maze().unwrap();
    let reach = dijkstra_all(&maze, maze.start(), &SearchPolicy::default()).unwrap();
    assert_eq!(reach.path_to(&(-1, 0)), Err(PathError::UnknownTarget));
    // (4, 0) is a wall.
    assert_eq!(reach.path_to(&(4, 0)), Err(PathError::UnknownTarget));
}

#[test]
fn partial_map_paths_end_at_the_goal() {
    let table = WeightedTable::default_table().unwrap();
    let reach = dijkstra_partial(&table, table.start(), &SearchPolicy::default()).unwrap();
    let goal = reach.goal.clone().unwrap();
    assert_eq!(goal, "harbour");
    assert_eq!(
        reach.path_to(&goal).unwrap(),
        vec!["depot", "ford", "orchard", "market", "harbour"]
    );
    assert!(!reach.map.contains_key("lighthouse"));
}

#[test]
fn weighted_table_audit_record() {
    // depot pops first and registers mill 7, ford 9, orchard 14. ford then
    // improves orchard to 11 and quarry (first seen via mill at 22) to 20;
    // both superseded entries are popped and discarded before harbour at 23.
    let table = WeightedTable::default_table().unwrap();
    let result = dijkstra(&table, table.start(), &SearchPolicy::default()).unwrap();
    let stats = result.stats;
    assert_eq!(stats.termination_reason, TerminationReason::GoalReached);
    assert_eq!(stats.expansions, 6);
    assert_eq!(stats.improvements, 2);
    assert_eq!(stats.stale_discarded, 2);
    assert_eq!(stats.nodes_registered, 7);
    assert_eq!(stats.ceiling_pruned, 0);
    assert_eq!(stats.equal_cost_merges, 0);
    assert_eq!(result.solution.map(|s| s.1), Some(23));
}

#[test]
fn first_discovered_slot_trail_is_kept() {
    let lattice = SlotLattice::default();
    let (path, cost) = dijkstra(&lattice, lattice.start(), &SearchPolicy::default())
        .unwrap()
        .into_solution()
        .unwrap();
    assert_eq!(cost, 4);

    // Each canonical node extends its predecessor's trail by one slot.
    for pair in path.windows(2) {
        let (parent, child): (&SlotState, &SlotState) = (&pair[0], &pair[1]);
        assert_eq!(child.trail[..parent.trail.len()], parent.trail[..]);
        assert_eq!(child.trail.len(), parent.trail.len() + 1);
    }

    // Slots are generated lowest index first, so the first discovery of
    // every assignment sets slots in ascending order.
    let goal = path.last().unwrap();
    assert_eq!(goal.slots, vec![2, 1, 3, 2]);
    assert_eq!(goal.trail, vec![0, 1, 2, 3]);

    let other_order = SlotState {
        slots: goal.slots.clone(),
        trail: vec![3, 2, 1, 0],
    };
    assert_eq!(lattice.key(&other_order), lattice.key(goal));
}

#[test]
fn heuristic_changes_discovery_but_not_cost() {
    let lattice = SlotLattice::default();
    let h = |n: &SlotState| lattice.heuristic(n);
    let informed = astar(&lattice, lattice.start(), &h, &SearchPolicy::default()).unwrap();
    let blind = dijkstra(&lattice, lattice.start(), &SearchPolicy::default()).unwrap();
    assert_eq!(
        informed.solution.as_ref().map(|s| s.1),
        blind.solution.as_ref().map(|s| s.1)
    );
    assert!(informed.stats.expansions < blind.stats.expansions);
    assert_eq!(
        blind.stats.nodes_registered,
        lattice.state_count(),
        "blind search registers every assignment before the goal pops"
    );
}
