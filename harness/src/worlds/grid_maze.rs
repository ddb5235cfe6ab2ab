//! Grid maze: 4-connected unit-cost moves on an ASCII map.
//!
//! `#` is a wall, `S` the start, `G` the goal, anything else open floor.
//! The heuristic is Manhattan distance, which is admissible and consistent
//! for unit 4-connected moves.

use std::collections::HashSet;

use serde_json::{json, Value};
use wayfinder_kernel::cost::Numeric;
use wayfinder_search::contract::SearchSpace;

use crate::contract::{SearchWorld, WorldError};

/// A cell coordinate, `(column, row)`.
pub type Cell = (i32, i32);

const MOVES: [Cell; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Default layout: two corridors of different length around a wall block.
pub const DEFAULT_LAYOUT: &[&str] = &[
    "S...#......",
    ".##.#.####.",
    ".#..#....#.",
    ".#.###.#.#.",
    ".#.....#...",
    ".#####.###.",
    ".......#..G",
];

#[derive(Debug, Clone)]
pub struct GridMaze {
    width: i32,
    height: i32,
    walls: HashSet<Cell>,
    start: Cell,
    goal: Cell,
}

impl GridMaze {
    /// Parse an ASCII layout. Rows must all have the same width.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the layout is empty, ragged, or does not
    /// have exactly one `S` and one `G`.
    pub fn parse(rows: &[&str]) -> Result<Self, WorldError> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(WorldError::InvalidLayout {
                detail: "empty layout".into(),
            });
        }

        let mut walls = HashSet::new();
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(WorldError::InvalidLayout {
                    detail: format!("row {y} has width {} (expected {width})", row.len()),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = (coord(x)?, coord(y)?);
                match ch {
                    '#' => {
                        walls.insert(cell);
                    }
                    'S' => place(&mut start, cell, 'S')?,
                    'G' => place(&mut goal, cell, 'G')?,
                    _ => {}
                }
            }
        }

        Ok(Self {
            width: coord(width)?,
            height: coord(rows.len())?,
            walls,
            start: start.ok_or(WorldError::MissingMarker { marker: 'S' })?,
            goal: goal.ok_or(WorldError::MissingMarker { marker: 'G' })?,
        })
    }

    /// The maze described by [`DEFAULT_LAYOUT`].
    ///
    /// # Errors
    ///
    /// Never fails for the built-in layout; see [`GridMaze::parse`].
    pub fn default_maze() -> Result<Self, WorldError> {
        Self::parse(DEFAULT_LAYOUT)
    }

    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    fn is_open(&self, (x, y): Cell) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height && !self.walls.contains(&(x, y))
    }
}

fn coord(n: usize) -> Result<i32, WorldError> {
    i32::try_from(n).map_err(|_| WorldError::InvalidLayout {
        detail: format!("dimension {n} out of range"),
    })
}

fn place(slot: &mut Option<Cell>, cell: Cell, marker: char) -> Result<(), WorldError> {
    if slot.replace(cell).is_some() {
        return Err(WorldError::DuplicateMarker { marker });
    }
    Ok(())
}

impl SearchSpace for GridMaze {
    type Node = Cell;
    type Key = Cell;
    type Algebra = Numeric<u32>;

    fn key(&self, node: &Cell) -> Cell {
        *node
    }

    fn successors(&self, &(x, y): &Cell) -> Vec<(Cell, u32)> {
        MOVES
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&cell| self.is_open(cell))
            .map(|cell| (cell, 1))
            .collect()
    }

    fn is_success(&self, node: &Cell) -> bool {
        *node == self.goal
    }
}

impl SearchWorld for GridMaze {
    fn world_id(&self) -> &str {
        "grid_maze"
    }

    fn start(&self) -> Cell {
        self.start
    }

    fn heuristic(&self, &(x, y): &Cell) -> u32 {
        (x - self.goal.0).unsigned_abs() + (y - self.goal.1).unsigned_abs()
    }

    fn node_json(&self, &(x, y): &Cell) -> Value {
        json!([x, y])
    }

    fn cost_json(&self, cost: &u32) -> Value {
        json!(cost)
    }
}
