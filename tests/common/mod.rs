// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cevian_count::SolutionTriple;

/// The 19 solutions for n = 7, sorted.
pub const N7_SOLUTIONS: [(usize, usize, usize); 19] = [
    (1, 4, 7),
    (1, 7, 4),
    (2, 4, 6),
    (2, 6, 4),
    (3, 4, 5),
    (3, 5, 4),
    (4, 1, 7),
    (4, 2, 6),
    (4, 3, 5),
    (4, 4, 4),
    (4, 5, 3),
    (4, 6, 2),
    (4, 7, 1),
    (5, 3, 4),
    (5, 4, 3),
    (6, 2, 4),
    (6, 4, 2),
    (7, 1, 4),
    (7, 4, 1),
];

/// All six orderings of a triple's indices.
pub fn permutations(t: SolutionTriple) -> [SolutionTriple; 6] {
    let SolutionTriple { i, j, k } = t;
    [
        SolutionTriple::new(i, j, k),
        SolutionTriple::new(i, k, j),
        SolutionTriple::new(j, i, k),
        SolutionTriple::new(j, k, i),
        SolutionTriple::new(k, i, j),
        SolutionTriple::new(k, j, i),
    ]
}

/// Sorted copy of `triples`.
pub fn sorted(triples: &[SolutionTriple]) -> Vec<SolutionTriple> {
    let mut out = triples.to_vec();
    out.sort();
    out
}
