// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Destinations for accepted triples.

use crate::geometry::SolutionTriple;

/// Receives each triple the search kernel accepts, in discovery order
/// (i ascending, then j ascending).
pub trait SolutionSink {
    fn accept(&mut self, triple: SolutionTriple);
}

/// Counts accepted triples without storing them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally(pub usize);

impl SolutionSink for Tally {
    #[inline]
    fn accept(&mut self, _triple: SolutionTriple) {
        self.0 += 1;
    }
}

impl SolutionSink for Vec<SolutionTriple> {
    fn accept(&mut self, triple: SolutionTriple) {
        self.push(triple);
    }
}
