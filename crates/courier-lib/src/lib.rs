//! Courier routing library entry points.
//!
//! A courier rides from one corner of a square field to the opposite corner
//! past an ordered itinerary of waypoints. Stopping at a waypoint costs a
//! fixed delay; riding past one costs its penalty. This crate computes the
//! minimum total cost over all stop/skip choices in a single pass, keeping
//! only a small pruned frontier of candidate stops instead of the full
//! quadratic dynamic program.
//!
//! Higher-level consumers (the CLI, tests, benches) should only depend on the
//! names exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod candidate;
pub mod error;
pub mod frontier;
pub mod geometry;
pub mod solver;
pub mod stream;

pub use candidate::Candidate;
pub use error::{Error, Result};
pub use frontier::Frontier;
pub use geometry::{CostModel, Waypoint};
pub use solver::{solve_case, solve_quadratic, Solver};
pub use stream::{process_stream, solve_cases, CaseReader, CaseReport};
