//! Demo worlds for the harness runner.
//!
//! Each world exercises a different part of the engine: heuristics
//! (`grid_maze`), multi-path enumeration (`diamond_lattice`), label keys
//! (`weighted_table`), fingerprint keys with non-identity payload
//! (`slot_lattice`), and a non-numeric cost algebra (`turn_grid`).

pub mod diamond_lattice;
pub mod grid_maze;
pub mod slot_lattice;
pub mod turn_grid;
pub mod weighted_table;
