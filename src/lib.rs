// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Concurrent equal-angle cevians in an equilateral triangle.
//!
//! Split each 60° vertex angle of an equilateral triangle into n+1 equal
//! sectors with n cevians. d_angle(n) counts the ordered triples (i, j, k),
//! one cevian per vertex, for which the three cevians pass through a common
//! point.
//!
//! # Architecture
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! [`memo::AngleTable`] holds θ = π / (3·(n+1)) and the Ceva ratios
//! R[k] = 2·tan(kθ) / (√3 − tan(kθ)) for k = 1..n. It is built fresh for each n.
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! [`state::Statistics`] tallies how the search decided each index pair. It
//! is diagnostic only and never influences a result.
//!
//! # Search Algorithm
//!
//! By the trigonometric form of Ceva's theorem, (i, j, k) is concurrent iff
//! R[i]·R[j]·R[k] = 1. [`engine::InvariantEngine`] visits each ordered pair
//! (i, j), inverts R to find the one k that could close the product, and then
//! verifies the product within a tolerance. This is O(n²) per n.
//!
//! [`rule::a_rule`] is a conjectured closed form for d_angle(n), and
//! [`driver::Sweep`] compares the two for n = 1..=max_n.
//!
//! # Parallelization
//!
//! Each n is a pure function of n and the tolerance, so the sweep could be
//! split across threads without changing any per-n result. The sweep here is
//! sequential.

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod memo;
pub mod output;
pub mod rule;
pub mod state;

// Re-export commonly used types
pub use config::EngineConfig;
pub use driver::{verify_rule, Sweep, SweepRow, VerificationReport};
pub use engine::{d_angle, list_solutions, InvariantEngine};
pub use error::{Error, Result};
pub use geometry::SolutionTriple;
pub use memo::AngleTable;
pub use rule::a_rule;
