//! Shared helpers for wayfinder benchmark suites.

use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::policy::{RunConfig, RunMode};
use wayfinder_harness::runner::run_world;
use wayfinder_harness::worlds::grid_maze::GridMaze;
use wayfinder_search::contract::CostOf;
use wayfinder_search::fingerprint::ContentHash;

/// ASCII layout for a serpentine maze of `side` columns and rows.
///
/// Every odd row is a wall with a single gap, alternating between the right
/// and left edge, so the only route from `S` (top left) to `G` snakes
/// through the whole grid. Even `side` values put `G` on a wall-free row.
#[must_use]
pub fn serpentine_layout(side: usize) -> Vec<String> {
    let side = side.max(3);
    let mut rows = Vec::with_capacity(side);
    for y in 0..side {
        let row: String = if y % 2 == 0 {
            (0..side).map(|_| '.').collect()
        } else if y % 4 == 1 {
            (0..side).map(|x| if x == side - 1 { '.' } else { '#' }).collect()
        } else {
            (0..side).map(|x| if x == 0 { '.' } else { '#' }).collect()
        };
        rows.push(row);
    }
    rows[0].replace_range(0..1, "S");
    let last = side - 1;
    let goal_row = if last % 2 == 0 { last } else { last - 1 };
    rows[goal_row].replace_range(last..side, "G");
    rows
}

/// Open grid of `side * side` cells with no interior walls.
#[must_use]
pub fn open_layout(side: usize) -> Vec<String> {
    let side = side.max(2);
    let mut rows: Vec<String> = (0..side).map(|_| ".".repeat(side)).collect();
    rows[0].replace_range(0..1, "S");
    rows[side - 1].replace_range(side - 1..side, "G");
    rows
}

/// Parse a generated layout into a maze.
///
/// # Panics
///
/// Panics if the layout does not parse. Benchmark setup failures are fatal.
#[must_use]
pub fn maze_from(rows: &[String]) -> GridMaze {
    let borrowed: Vec<&str> = rows.iter().map(String::as_str).collect();
    GridMaze::parse(&borrowed).expect("generated layout parses")
}

/// Groups chaining `0..n` into `n / width` disjoint runs, then linking every
/// other run to its neighbour, so the partition merges across groups.
#[must_use]
pub fn chained_groups(n: u32, width: u32) -> Vec<Vec<u32>> {
    let width = width.max(1);
    let mut groups: Vec<Vec<u32>> = (0..n)
        .collect::<Vec<_>>()
        .chunks(width as usize)
        .map(<[u32]>::to_vec)
        .collect();
    let mut start = 0;
    while start + width < n {
        groups.push(vec![start, start + width]);
        start += 2 * width;
    }
    groups
}

/// Run a world end to end and return the report digest.
///
/// # Panics
///
/// Panics if the run or report canonicalization fails.
pub fn report_digest<W: SearchWorld>(world: &W, config: &RunConfig<CostOf<W>>) -> ContentHash {
    let report = run_world(world, config).expect("run_world");
    report.digest().expect("report digest")
}

/// Every run mode against the default config.
#[must_use]
pub fn all_configs<C>() -> Vec<RunConfig<C>> {
    RunMode::ALL.iter().map(|&mode| RunConfig::new(mode)).collect()
}
