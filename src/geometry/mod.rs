// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the equal-angle cevian model.
//!
//! - constants: √3, the vertex angle, sector width and default tolerances
//! - SolutionTriple: one cevian index per vertex, a candidate point of concurrency

pub mod constants;
pub mod triple;

// Re-export for convenience
pub use constants::*;
pub use triple::SolutionTriple;
