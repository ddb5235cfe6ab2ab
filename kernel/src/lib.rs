//! Wayfinder Kernel: the pure, dependency-free core of Wayfinder.
//!
//! # API Surface
//!
//! - [`cost`] -- the cost algebra contract ([`cost::CostAlgebra`]) with the
//!   numeric default and a lexicographic combinator
//! - [`partition`] -- union-find partitioning of vertex groups and the
//!   connected-components helpers built on it
//!
//! # Module Dependency Direction
//!
//! `cost` and `partition` are independent of each other. Neither knows about
//! the search engine; `wayfinder_search` depends on `cost` only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cost;
pub mod partition;
