//! Harness runner: drive a world through one engine entry point and render
//! a [`RunReport`].
//!
//! The runner owns every ordering decision in the report. Engine results
//! come back in hash-map or enumeration order; the runner sorts paths and
//! reachability entries by their canonical bytes so that the same world,
//! mode and policy always produce the same report bytes.

use serde_json::{json, Value};
use wayfinder_search::contract::{CostOf, SearchSpace};
use wayfinder_search::error::{PathError, SearchError};
use wayfinder_search::path::Reached;
use wayfinder_search::search::{astar, astar_bag, dijkstra, dijkstra_all, dijkstra_partial};

use crate::canon::{canonical_json_bytes, CanonError};
use crate::contract::SearchWorld;
use crate::policy::{RunConfig, RunMode};
use crate::report::RunReport;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The engine could not rebuild a path from its registry.
    Search(SearchError),
    /// The world rendered a node or cost that cannot be canonicalized.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Canon(e) => write!(f, "report rendering failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<PathError> for RunError {
    fn from(e: PathError) -> Self {
        Self::Search(SearchError::Path(e))
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Run `world` once in `config.mode` and build its report.
///
/// # Errors
///
/// Returns [`RunError::Search`] if a path cannot be rebuilt from the
/// engine's registry, and [`RunError::Canon`] if the world renders a float.
pub fn run_world<W: SearchWorld>(
    world: &W,
    config: &RunConfig<CostOf<W>>,
) -> Result<RunReport, RunError> {
    let heuristic = |node: &W::Node| world.heuristic(node);
    let policy = &config.search;
    let mut cost = None;
    let mut paths = Vec::new();
    let mut paths_truncated = false;
    let mut goal = None;
    let mut reachable = None;

    let stats = match config.mode {
        RunMode::AStar | RunMode::Dijkstra => {
            let result = if config.mode == RunMode::AStar {
                astar(world, world.start(), &heuristic, policy)?
            } else {
                dijkstra(world, world.start(), policy)?
            };
            if let Some((path, found)) = &result.solution {
                cost = Some(world.cost_json(found));
                paths.push(path_json(world, path));
            }
            result.stats
        }
        RunMode::DijkstraAll | RunMode::DijkstraPartial => {
            let reach = if config.mode == RunMode::DijkstraAll {
                dijkstra_all(world, world.start(), policy)?
            } else {
                dijkstra_partial(world, world.start(), policy)?
            };
            if let Some(node) = &reach.goal {
                let key = world.key(node);
                let found = reach.cost_to(&key).ok_or(PathError::UnknownTarget)?;
                cost = Some(world.cost_json(found));
                paths.push(path_json(world, &reach.path_to(&key)?));
                goal = Some(world.node_json(node));
            }
            reachable = Some(sorted_canonical(
                reach.map.values().map(|r| reachable_json(world, r)),
            )?);
            reach.stats
        }
        RunMode::Bag => {
            let result = astar_bag(world, world.start(), &heuristic, policy)?;
            if let Some((solutions, found)) = result.solution {
                let limit = config.max_reported_paths;
                let mut rendered: Vec<Value> = solutions
                    .take(limit.saturating_add(1))
                    .map(|p| path_json(world, &p))
                    .collect();
                paths_truncated = rendered.len() > limit;
                rendered.truncate(limit);
                cost = Some(world.cost_json(&found));
                paths = sorted_canonical(rendered)?;
            }
            result.stats
        }
    };

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        mode: config.mode,
        policy: json!({
            "cost_ceiling": policy.cost_ceiling.as_ref().map(|c| world.cost_json(c)),
            "max_reported_paths": config.max_reported_paths,
        }),
        cost,
        paths,
        paths_truncated,
        goal,
        reachable,
        stats,
    })
}

fn path_json<W: SearchWorld>(world: &W, path: &[W::Node]) -> Value {
    Value::Array(path.iter().map(|n| world.node_json(n)).collect())
}

fn reachable_json<W: SearchWorld>(
    world: &W,
    reached: &Reached<W::Node, <W as SearchSpace>::Key, CostOf<W>>,
) -> Value {
    json!([world.node_json(&reached.node), world.cost_json(&reached.cost)])
}

/// Sort values by their canonical encoding.
fn sorted_canonical(values: impl IntoIterator<Item = Value>) -> Result<Vec<Value>, CanonError> {
    let mut keyed = values
        .into_iter()
        .map(|v| canonical_json_bytes(&v).map(|bytes| (bytes, v)))
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, v)| v).collect())
}
