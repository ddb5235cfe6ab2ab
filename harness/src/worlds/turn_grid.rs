//! Turn grid: a maze where turning is dearer than any number of steps.
//!
//! Costs are lexicographic `(turns, steps)`: a route with fewer direction
//! changes always wins, and step count only breaks ties. The node carries
//! its heading, since the cost of the next move depends on it.

use serde_json::{json, Value};
use wayfinder_kernel::cost::{Lexicographic, Numeric};
use wayfinder_search::contract::SearchSpace;

use crate::contract::{SearchWorld, WorldError};
use crate::worlds::grid_maze::{Cell, GridMaze};

/// `(turns, steps)` ordering.
pub type TurnsThenSteps = Lexicographic<Numeric<u32>, Numeric<u32>>;

/// Default layout. The five-step staircase needs three turns; the seven-step
/// detour round the bottom needs two.
pub const DEFAULT_LAYOUT: &[&str] = &["S.###", "...##", ".#.G#", "....#"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    fn between((x0, y0): Cell, (x1, y1): Cell) -> Option<Self> {
        match (x1 - x0, y1 - y0) {
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::South),
            (-1, 0) => Some(Self::West),
            (0, -1) => Some(Self::North),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::North => "north",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pose {
    pub cell: Cell,
    /// `None` before the first move.
    pub heading: Option<Heading>,
}

#[derive(Debug, Clone)]
pub struct TurnGrid {
    maze: GridMaze,
}

impl TurnGrid {
    /// # Errors
    ///
    /// See [`GridMaze::parse`].
    pub fn parse(rows: &[&str]) -> Result<Self, WorldError> {
        Ok(Self {
            maze: GridMaze::parse(rows)?,
        })
    }

    /// # Errors
    ///
    /// Never fails for the built-in layout.
    pub fn default_grid() -> Result<Self, WorldError> {
        Self::parse(DEFAULT_LAYOUT)
    }

    /// Number of heading changes along `path`.
    #[must_use]
    pub fn turns_along(path: &[Pose]) -> u32 {
        let changes = path
            .windows(2)
            .filter(|w| matches!((w[0].heading, w[1].heading), (Some(a), Some(b)) if a != b))
            .count();
        u32::try_from(changes).unwrap_or(u32::MAX)
    }
}

impl SearchSpace for TurnGrid {
    type Node = Pose;
    type Key = Pose;
    type Algebra = TurnsThenSteps;

    fn key(&self, node: &Pose) -> Pose {
        *node
    }

    fn successors(&self, node: &Pose) -> Vec<(Pose, (u32, u32))> {
        self.maze
            .successors(&node.cell)
            .into_iter()
            .filter_map(|(cell, _)| {
                let heading = Heading::between(node.cell, cell)?;
                let turned = node.heading.is_some_and(|h| h != heading);
                let next = Pose {
                    cell,
                    heading: Some(heading),
                };
                Some((next, (u32::from(turned), 1)))
            })
            .collect()
    }

    fn is_success(&self, node: &Pose) -> bool {
        node.cell == self.maze.goal()
    }
}

impl SearchWorld for TurnGrid {
    fn world_id(&self) -> &str {
        "turn_grid"
    }

    fn start(&self) -> Pose {
        Pose {
            cell: self.maze.start(),
            heading: None,
        }
    }

    /// At least one turn if the goal is off both axes, plus Manhattan steps.
    fn heuristic(&self, node: &Pose) -> (u32, u32) {
        let (gx, gy) = self.maze.goal();
        let (x, y) = node.cell;
        let turns = u32::from(x != gx && y != gy);
        (turns, self.maze.heuristic(&node.cell))
    }

    fn node_json(&self, node: &Pose) -> Value {
        let (x, y) = node.cell;
        json!({
            "cell": [x, y],
            "heading": node.heading.map(Heading::as_str),
        })
    }

    fn cost_json(&self, &(turns, steps): &(u32, u32)) -> Value {
        json!([turns, steps])
    }
}
