// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics record how the search kernel decided each ordered pair (i, j).
//! Every visited pair ends in exactly one outcome, so
//! `PairsVisited = NonPositiveTarget + OutOfRange + RejectedByVerification + Accepted`.

use std::fmt;
use std::ops::AddAssign;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Ordered pairs (i, j) examined.
    #[strum(serialize = "pairs visited")]
    PairsVisited,
    /// Target ratio or recovered tangent not positive; no cevian can match.
    #[strum(serialize = "non-positive target")]
    NonPositiveTarget,
    /// Recovered index rounded outside [1, n].
    #[strum(serialize = "index out of range")]
    OutOfRange,
    /// Candidate index found, but the product missed 1 by more than the tolerance.
    #[strum(serialize = "rejected by verification")]
    RejectedByVerification,
    /// Triple accepted as a solution.
    #[strum(serialize = "accepted")]
    Accepted,
}

impl Counters {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Sum of the four per-pair outcomes; equals `PairsVisited` for a complete search.
    pub fn outcomes(&self) -> u64 {
        self.get(Counters::NonPositiveTarget)
            + self.get(Counters::OutOfRange)
            + self.get(Counters::RejectedByVerification)
            + self.get(Counters::Accepted)
    }
}

impl AddAssign<&Statistics> for Statistics {
    fn add_assign(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            writeln!(f, "{:>26}: {}", counter.label(), self.get(counter))?;
        }
        Ok(())
    }
}
