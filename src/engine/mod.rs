// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for concurrent cevian triples.
//!
//! For each n the engine counts (or lists) the triples (i, j, k) ∈ [1, n]³
//! with R[i]·R[j]·R[k] = 1 within a tolerance. A naive search is O(n³); the
//! engine is O(n²) because the third index is determined by the first two.
//!
//! # Algorithm
//!
//! For every ordered pair (i, j):
//! 1. The required third ratio is r = 1 / (R[i]·R[j]).
//! 2. R is inverted analytically to the angle x with R(x) = r, and
//!    k = round(x / θ) is the nearest cevian ([`AngleTable::locate`]).
//! 3. The triple is accepted only if |R[i]·R[j]·R[k] − 1| ≤ tolerance.
//!
//! Step 3 is not redundant: near a sector boundary the rounding in step 2
//! picks an index that does not satisfy the relation, and step 2 alone would
//! count it.
//!
//! # Example
//!
//! ```
//! use cevian_count::engine::InvariantEngine;
//!
//! let engine = InvariantEngine::default();
//! assert_eq!(engine.count(7), 19);
//! assert_eq!(engine.count(8), 0);
//! assert_eq!(engine.enumerate(1).len(), 1);
//! ```

pub mod sink;

pub use sink::{SolutionSink, Tally};

use crate::geometry::constants::DEFAULT_TOLERANCE;
use crate::geometry::triple::closes;
use crate::geometry::SolutionTriple;
use crate::memo::{AngleTable, Candidate};
use crate::state::{Counters, Statistics};
use tracing::{debug, trace};

/// Counter and enumerator for d_angle(n) at a fixed tolerance.
///
/// The engine holds no state between calls; every call builds a fresh
/// [`AngleTable`] for its n.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvariantEngine {
    tolerance: f64,
}

impl InvariantEngine {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// d_angle(n): the number of solution triples. Zero for `n == 0`.
    pub fn count(&self, n: usize) -> usize {
        self.count_with_statistics(n).0
    }

    /// d_angle(n) together with the kernel's per-pair decisions.
    pub fn count_with_statistics(&self, n: usize) -> (usize, Statistics) {
        let mut tally = Tally::default();
        let mut stats = Statistics::new();
        if n > 0 {
            let table = AngleTable::new(n);
            self.search(&table, &mut tally, &mut stats);
        }
        debug!(n, count = tally.0, "counted solution triples");
        (tally.0, stats)
    }

    /// All solution triples for `n`, in discovery order (i ascending, then j).
    ///
    /// Empty for `n == 0`.
    pub fn enumerate(&self, n: usize) -> Vec<SolutionTriple> {
        let mut found = Vec::new();
        if n > 0 {
            let table = AngleTable::new(n);
            self.search(&table, &mut found, &mut Statistics::new());
        }
        debug!(n, count = found.len(), "enumerated solution triples");
        found
    }

    /// Run the O(n²) search over `table`, feeding accepted triples to `sink`.
    pub fn search<S: SolutionSink + ?Sized>(
        &self,
        table: &AngleTable,
        sink: &mut S,
        stats: &mut Statistics,
    ) {
        for (i, ri) in table.iter() {
            for (j, rj) in table.iter() {
                stats.increment_counter(Counters::PairsVisited);
                let target = 1.0 / (ri * rj);
                let k = match table.locate(target) {
                    Candidate::Index(k) => k,
                    Candidate::NonPositive => {
                        stats.increment_counter(Counters::NonPositiveTarget);
                        continue;
                    }
                    Candidate::OutOfRange => {
                        stats.increment_counter(Counters::OutOfRange);
                        continue;
                    }
                };
                let triple = SolutionTriple::new(i, j, k);
                let Some(product) = triple.product(table) else {
                    stats.increment_counter(Counters::OutOfRange);
                    continue;
                };
                if closes(product, self.tolerance) {
                    stats.increment_counter(Counters::Accepted);
                    sink.accept(triple);
                } else {
                    stats.increment_counter(Counters::RejectedByVerification);
                    trace!(i, j, k, product, "candidate failed verification");
                }
            }
        }
    }
}

impl Default for InvariantEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

/// d_angle(n) at the given tolerance.
pub fn d_angle(n: usize, tolerance: f64) -> usize {
    InvariantEngine::new(tolerance).count(n)
}

/// Solution triples for `n` at the given tolerance, in discovery order.
pub fn list_solutions(n: usize, tolerance: f64) -> Vec<SolutionTriple> {
    InvariantEngine::new(tolerance).enumerate(n)
}
