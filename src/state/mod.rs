// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, per search).
//!
//! The search itself is a pure function of n and the tolerance. The only
//! mutable state is the diagnostic tally of how each (i, j) pair was decided.

pub mod statistics;

pub use statistics::{Counters, Statistics};
