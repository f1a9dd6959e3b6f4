// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ceva ratio table for n equally spaced cevians.
//!
//! # The ratio R
//!
//! A cevian leaving a vertex of the equilateral triangle at angle x from one
//! side splits the 60° vertex angle into x and π/3 − x. In the trigonometric
//! form of Ceva's theorem each vertex contributes sin(x) / sin(π/3 − x), which
//! simplifies to
//!
//! ```text
//! R(x) = 2·tan(x) / (√3 − tan(x))
//! ```
//!
//! R is positive and strictly increasing on (0, π/3), with R(π/6) = 1 and
//! R(x)·R(π/3 − x) = 1. Three cevians at angles x, y, z (measured in the same
//! rotational sense at each vertex) are concurrent iff R(x)·R(y)·R(z) = 1.
//!
//! # Inversion
//!
//! Solving r = 2t / (√3 − t) for t gives t = r·√3 / (2 + r), so the angle whose
//! ratio is r is atan(t). Dividing by θ and rounding recovers the nearest
//! cevian index. Rounding can land on the neighbouring index near a sector
//! boundary, so a recovered index is only ever a candidate.

use crate::geometry::constants::{sector_width, SQRT3};

/// The Ceva ratio R(x) = 2·tan(x) / (√3 − tan(x)).
#[inline]
pub fn ceva_ratio(x: f64) -> f64 {
    let t = x.tan();
    (2.0 * t) / (SQRT3 - t)
}

/// The angle x ∈ (0, π/3) with R(x) = `r`.
///
/// Returns `None` when `r` (or the recovered tangent) is not positive; no
/// cevian has such a ratio.
#[inline]
pub fn inverse_ceva_ratio(r: f64) -> Option<f64> {
    if r <= 0.0 {
        return None;
    }
    let t = (r * SQRT3) / (2.0 + r);
    if t <= 0.0 {
        return None;
    }
    Some(t.atan())
}

/// Precomputed θ and R[1..n] for one value of n.
///
/// Indices are 1-based at the API: `ratio(k)` is R(k·θ). Storage is a
/// 0-based `Vec` holding R[k] at position k − 1.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTable {
    n: usize,
    theta: Option<f64>,
    ratios: Vec<f64>,
}

impl AngleTable {
    /// Build the table for `n` cevians per vertex.
    ///
    /// `n == 0` yields an empty table with no θ.
    pub fn new(n: usize) -> Self {
        let Some(theta) = sector_width(n) else {
            return Self {
                n: 0,
                theta: None,
                ratios: Vec::new(),
            };
        };
        let ratios = (1..=n).map(|k| ceva_ratio(k as f64 * theta)).collect();
        Self {
            n,
            theta: Some(theta),
            ratios,
        }
    }

    /// Number of cevians per vertex.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Sector width θ = π / (3·(n+1)); `None` for the empty table.
    pub fn theta(&self) -> Option<f64> {
        self.theta
    }

    /// R[k] for 1-based `k`; `None` outside [1, n].
    #[inline]
    pub fn ratio(&self, k: usize) -> Option<f64> {
        k.checked_sub(1).and_then(|idx| self.ratios.get(idx).copied())
    }

    /// R[1..n] as a 0-based slice (R[k] at position k − 1).
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Iterate over (k, R[k]) for k = 1..n.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.ratios.iter().enumerate().map(|(idx, &r)| (idx + 1, r))
    }

    /// Locate the cevian whose ratio is nearest to `r`.
    ///
    /// Inverts R, rounds x/θ to the nearest integer and rejects indices
    /// outside [1, n]. A located index still has to be verified against the
    /// product; see the module docs.
    pub fn locate(&self, r: f64) -> Candidate {
        let Some(theta) = self.theta else {
            return Candidate::OutOfRange;
        };
        let Some(x) = inverse_ceva_ratio(r) else {
            return Candidate::NonPositive;
        };
        let k = (x / theta).round();
        if k < 1.0 || k > self.n as f64 {
            return Candidate::OutOfRange;
        }
        Candidate::Index(k as usize)
    }

    /// Nearest cevian index whose ratio could equal `r`, if any.
    pub fn candidate_index(&self, r: f64) -> Option<usize> {
        self.locate(r).index()
    }
}

/// Outcome of inverting a target ratio to a cevian index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// The ratio (or its tangent) is not positive.
    NonPositive,
    /// The nearest index falls outside [1, n].
    OutOfRange,
    /// Nearest index in [1, n]; unverified.
    Index(usize),
}

impl Candidate {
    pub fn index(self) -> Option<usize> {
        match self {
            Candidate::Index(k) => Some(k),
            Candidate::NonPositive | Candidate::OutOfRange => None,
        }
    }
}
