//! Wayfinder Harness: demo worlds and the run-report pipeline.
//!
//! The harness runs a world through one search entry point
//! (`astar`, `dijkstra`, `dijkstra_all`, `dijkstra_partial`, `astar_bag`)
//! and renders the outcome, together with the engine's audit record, as a
//! canonical JSON report with a content digest.
//!
//! The harness does NOT search. Worlds provide graph structure and JSON
//! views only; the engine owns the search and the runner owns the report.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod contract;
pub mod policy;
pub mod report;
pub mod runner;
pub mod worlds;
