//! Multi-path lock tests: `astar_bag` yields exactly the optimal paths.

use std::collections::BTreeSet;

use lock_tests::oracle::{optimal_simple_paths, path_cost, SeededGraph};
use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::worlds::diamond_lattice::{DiamondLattice, LatticeNode};
use wayfinder_harness::worlds::slot_lattice::SlotLattice;
use wayfinder_search::contract::{SearchSpace, ZeroHeuristic};
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::astar_bag;
use wayfinder_search::stats::TerminationReason;

#[test]
fn diamond_lattice_yields_exactly_four_routes() {
    let lattice = DiamondLattice::default();
    let h = |n: &LatticeNode| lattice.heuristic(n);
    let result = astar_bag(&lattice, lattice.start(), &h, &SearchPolicy::default()).unwrap();
    // The heuristic is exact and every route ties, so no estimate ever
    // exceeds the goal cost and the frontier drains completely.
    assert_eq!(
        result.stats.termination_reason,
        TerminationReason::FrontierExhausted
    );

    let (solutions, cost) = result.into_solution().unwrap();
    assert_eq!(cost, 6);
    let paths: Vec<Vec<LatticeNode>> = solutions.collect();
    assert_eq!(paths.len(), 4);

    let distinct: BTreeSet<&Vec<LatticeNode>> = paths.iter().collect();
    assert_eq!(distinct.len(), 4, "no path repeated");
    for path in &paths {
        assert_eq!(path.first(), Some(&LatticeNode::Start));
        assert_eq!(path.last(), Some(&LatticeNode::Goal));
        assert_eq!(path_cost(&lattice, path), Some(6));
    }

    let tails: BTreeSet<(u32, u32)> = paths
        .iter()
        .filter_map(|p| match p[p.len() - 2] {
            LatticeNode::Tail { arm, split, .. } => Some((arm, split)),
            _ => None,
        })
        .collect();
    assert_eq!(
        tails,
        BTreeSet::from([(0, 0), (0, 1), (1, 0), (1, 1)]),
        "every arm/split combination"
    );
}

#[test]
fn wider_lattices_scale_combinatorially() {
    let lattice = DiamondLattice::new(3, 2, 4, 3).unwrap();
    let h = |n: &LatticeNode| lattice.heuristic(n);
    let (solutions, cost) = astar_bag(&lattice, lattice.start(), &h, &SearchPolicy::default())
        .unwrap()
        .into_solution()
        .unwrap();
    assert_eq!(cost, lattice.route_cost());
    assert_eq!(solutions.count() as u64, lattice.route_count());
}

#[test]
fn bag_matches_exhaustive_enumeration_on_seeded_graphs() {
    for seed in 100..120 {
        let graph = SeededGraph::generate(seed, 9, 90, 1, 3);
        let expected: BTreeSet<Vec<u8>> = optimal_simple_paths(&graph, &0).into_iter().collect();

        let result = astar_bag(&graph, 0, &ZeroHeuristic, &SearchPolicy::default()).unwrap();
        let Some((solutions, _)) = result.into_solution() else {
            assert!(expected.is_empty(), "seed {seed}: oracle found a path");
            continue;
        };
        let got: Vec<Vec<u8>> = solutions.collect();
        let got_set: BTreeSet<Vec<u8>> = got.iter().cloned().collect();
        assert_eq!(got.len(), got_set.len(), "seed {seed}: duplicate path");
        assert_eq!(got_set, expected, "seed {seed}");
    }
}

#[test]
fn rewound_cursor_replays_the_same_sequence() {
    let lattice = SlotLattice::new(2, vec![1, 2, 1]).unwrap();
    let h = |n: &_| lattice.heuristic(n);
    let (mut solutions, cost) = astar_bag(&lattice, lattice.start(), &h, &SearchPolicy::default())
        .unwrap()
        .into_solution()
        .unwrap();
    assert_eq!(cost, 3);

    let first: Vec<_> = solutions.by_ref().map(|p| keys(&lattice, &p)).collect();
    assert_eq!(first.len(), 6, "3! orders of setting three slots");
    assert!(solutions.next().is_none());

    solutions.rewind();
    let second: Vec<_> = solutions.map(|p| keys(&lattice, &p)).collect();
    assert_eq!(first, second);
}

fn keys<S: SearchSpace>(space: &S, path: &[S::Node]) -> Vec<S::Key> {
    path.iter().map(|n| space.key(n)).collect()
}
