//! Report determinism: the same world, mode and policy always produce the
//! same canonical bytes, in-process and on disk.

use lock_tests::fixture::fixture_lines;
use wayfinder_harness::canon::canonical_json_bytes;
use wayfinder_harness::policy::{RunConfig, RunMode};
use wayfinder_harness::report::{read_report_dir, write_report_dir};
use wayfinder_harness::runner::run_world;
use wayfinder_harness::worlds::diamond_lattice::DiamondLattice;
use wayfinder_harness::worlds::grid_maze::GridMaze;
use wayfinder_harness::worlds::slot_lattice::SlotLattice;

#[test]
fn repeated_runs_are_byte_identical() {
    let maze = GridMaze::default_maze().unwrap();
    for mode in RunMode::ALL {
        let first = run_world(&maze, &RunConfig::new(mode)).unwrap();
        for _ in 0..5 {
            let again = run_world(&maze, &RunConfig::new(mode)).unwrap();
            assert_eq!(
                again.canonical_bytes().unwrap(),
                first.canonical_bytes().unwrap(),
                "mode {}",
                mode.as_str()
            );
        }
    }
}

#[test]
fn fixture_matrix_is_stable_in_process() {
    let first = fixture_lines().unwrap();
    assert_eq!(first.len(), 5 * 5 * 5, "5 worlds x 5 modes x 5 lines");
    assert_eq!(fixture_lines().unwrap(), first);
}

#[test]
fn every_mode_yields_a_distinct_report() {
    let lattice = DiamondLattice::default();
    let digests: std::collections::BTreeSet<String> = RunMode::ALL
        .into_iter()
        .map(|mode| {
            run_world(&lattice, &RunConfig::new(mode))
                .unwrap()
                .digest()
                .unwrap()
                .to_string()
        })
        .collect();
    assert_eq!(digests.len(), RunMode::ALL.len());
}

#[test]
fn reports_survive_a_disk_round_trip() {
    let lattice = SlotLattice::default();
    for mode in RunMode::ALL {
        let report = run_world(&lattice, &RunConfig::new(mode)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let written = write_report_dir(&report, dir.path()).unwrap();
        let stored = read_report_dir(dir.path()).unwrap();
        assert_eq!(stored.digest, written);
        assert_eq!(stored.digest, report.digest().unwrap());
        assert_eq!(
            canonical_json_bytes(&stored.json).unwrap(),
            report.canonical_bytes().unwrap()
        );
    }
}

#[test]
fn bag_report_lists_paths_in_canonical_order() {
    let lattice = SlotLattice::default();
    let report = run_world(&lattice, &RunConfig::new(RunMode::Bag)).unwrap();
    assert_eq!(report.paths.len(), 24, "4! slot orders");
    let encoded: Vec<Vec<u8>> = report
        .paths
        .iter()
        .map(|p| canonical_json_bytes(p).unwrap())
        .collect();
    let mut sorted = encoded.clone();
    sorted.sort();
    assert_eq!(encoded, sorted);
}
