// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Index triples selecting one cevian at each vertex.

use crate::memo::AngleTable;
use std::fmt;

/// An ordered triple (i, j, k) of 1-based cevian indices, one per vertex.
///
/// The triple is a solution for a given n when the three cevians at angles
/// i·θ, j·θ and k·θ are concurrent, i.e. R[i]·R[j]·R[k] = 1 within tolerance.
/// Ordering is lexicographic on (i, j, k), matching a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolutionTriple {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl SolutionTriple {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// The Ceva product R[i]·R[j]·R[k], evaluated left to right.
    ///
    /// Returns `None` if any index lies outside the table.
    pub fn product(&self, table: &AngleTable) -> Option<f64> {
        Some(table.ratio(self.i)? * table.ratio(self.j)? * table.ratio(self.k)?)
    }

    /// True if every index is in [1, n] and |R[i]·R[j]·R[k] − 1| ≤ `tolerance`.
    pub fn is_solution(&self, table: &AngleTable, tolerance: f64) -> bool {
        self.product(table)
            .is_some_and(|product| closes(product, tolerance))
    }
}

/// Acceptance test for a Ceva product: |product − 1| ≤ `tolerance`.
#[inline]
pub fn closes(product: f64, tolerance: f64) -> bool {
    (product - 1.0).abs() <= tolerance
}

impl From<(usize, usize, usize)> for SolutionTriple {
    fn from((i, j, k): (usize, usize, usize)) -> Self {
        Self { i, j, k }
    }
}

impl fmt::Display for SolutionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}
