// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! For each n the search consults one table of Ceva ratios R[1..n]. It is
//! built once per n, shared by the counting and enumeration passes, and
//! dropped when the n is finished. Nothing is cached across n.

pub mod angles;

pub use angles::{ceva_ratio, inverse_ceva_ratio, AngleTable, Candidate};
