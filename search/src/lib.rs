//! Wayfinder Search: lazy best-first search over caller-defined graphs.
//!
//! This crate provides the search layer for Wayfinder. It depends only on
//! `wayfinder_kernel`; it does NOT depend on `wayfinder_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_kernel  ←  wayfinder_search  ←  wayfinder_harness
//! (cost, partition)    (frontier, engine)    (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`contract::SearchSpace`] -- how the engine discovers nodes and edges
//! - [`contract::Heuristic`] -- admissible cost-to-goal estimate
//! - [`policy::SearchPolicy`] -- optional cost ceiling
//! - [`search::astar`], [`search::dijkstra`], [`search::dijkstra_all`],
//!   [`search::dijkstra_partial`], [`search::astar_bag`] -- entry points
//! - [`path::AstarSolution`] -- lazy cursor over all optimal paths
//! - [`stats::SearchStats`] -- per-call audit record

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod fingerprint;
pub mod frontier;
pub mod path;
pub mod policy;
pub mod registry;
pub mod search;
pub mod stats;
