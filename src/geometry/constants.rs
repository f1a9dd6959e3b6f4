// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for the equal-angle cevian model.
//!
//! Every vertex angle of the equilateral triangle is 60° (π/3). With n cevians
//! per vertex the angle is split into n+1 equal sectors of width
//! θ = π / (3·(n+1)), so every cevian angle k·θ lies strictly inside (0, π/3).

/// √3, the tangent of the 60° vertex angle.
///
/// `f64::sqrt` is not `const`, so the literal is spelled out to full
/// double precision.
pub const SQRT3: f64 = 1.732_050_807_568_877_2;

/// The vertex angle of the equilateral triangle (π/3).
pub const VERTEX_ANGLE: f64 = std::f64::consts::FRAC_PI_3;

/// Default tolerance for the Ceva product check |R[i]·R[j]·R[k] − 1|.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default upper bound of the n = 1..max_n sweep.
pub const DEFAULT_MAX_N: usize = 200;

/// Largest n for which the closed-form rule has been checked against the count.
///
/// The rule is a conjecture fitted to n = 1..=200; nothing is claimed beyond.
pub const RULE_VERIFIED_MAX_N: usize = 200;

/// Width θ of one sector when the vertex angle carries `n` cevians.
///
/// Returns `None` for `n == 0`: there are no cevians and θ is not used.
pub fn sector_width(n: usize) -> Option<f64> {
    if n == 0 {
        None
    } else {
        Some(std::f64::consts::PI / (3.0 * (n as f64 + 1.0)))
    }
}

const _: () = assert!(RULE_VERIFIED_MAX_N >= 1 && DEFAULT_MAX_N >= 1);
