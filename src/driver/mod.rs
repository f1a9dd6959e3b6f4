// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sweep over n = 1..=max_n, comparing the count with the closed-form rule.
//!
//! Every n is computed independently from a fresh table. The sweep only
//! sequences the work and collects rows; rendering lives in [`crate::output`].

use crate::config::EngineConfig;
use crate::engine::InvariantEngine;
use crate::error::Result;
use crate::rule::a_rule;
use crate::state::Statistics;
use tracing::{info, warn};

/// One n of a sweep: the engine's count and the rule's prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRow {
    pub n: usize,
    pub count: usize,
    pub rule: usize,
}

impl SweepRow {
    pub fn matches(&self) -> bool {
        self.count == self.rule
    }
}

/// Results of counting n = 1..=max_n.
#[derive(Debug, Clone)]
pub struct Sweep {
    rows: Vec<SweepRow>,
    statistics: Statistics,
}

impl Sweep {
    /// Count every n in 1..=`max_n` with `engine`.
    pub fn run(max_n: usize, engine: &InvariantEngine) -> Self {
        let mut rows = Vec::with_capacity(max_n);
        let mut statistics = Statistics::new();
        for n in 1..=max_n {
            let (count, stats) = engine.count_with_statistics(n);
            statistics += &stats;
            let row = SweepRow {
                n,
                count,
                rule: a_rule(n),
            };
            if !row.matches() {
                warn!(n, count, rule = row.rule, "count differs from closed-form rule");
            }
            rows.push(row);
        }
        let sweep = Self { rows, statistics };
        info!(
            max_n,
            tolerance = engine.tolerance(),
            mismatches = sweep.mismatches().count(),
            "sweep complete"
        );
        sweep
    }

    /// Validate `config` and sweep 1..=`config.max_n` at its tolerance.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::run(config.max_n, &InvariantEngine::new(config.tolerance)))
    }

    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }

    pub fn max_n(&self) -> usize {
        self.rows.len()
    }

    /// d_angle(1), d_angle(2), … in order.
    pub fn values(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.count).collect()
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &SweepRow> + '_ {
        self.rows.iter().filter(|row| !row.matches())
    }

    /// Kernel statistics summed over every n of the sweep.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Outcome of checking the closed-form rule against the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub max_n: usize,
    pub mismatches: Vec<SweepRow>,
}

impl VerificationReport {
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare the engine with the rule for n = 1..=`max_n`, collecting every mismatch.
pub fn verify_rule(max_n: usize, engine: &InvariantEngine) -> VerificationReport {
    let sweep = Sweep::run(max_n, engine);
    VerificationReport {
        max_n,
        mismatches: sweep.mismatches().copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::state::Counters;

    #[test]
    fn test_sweep_rows() {
        let sweep = Sweep::run(5, &InvariantEngine::default());
        assert_eq!(sweep.max_n(), 5);
        assert_eq!(sweep.values(), vec![1, 0, 7, 0, 13]);
        let ns: Vec<usize> = sweep.rows().iter().map(|row| row.n).collect();
        assert_eq!(ns, vec![1, 2, 3, 4, 5]);
        assert_eq!(sweep.mismatches().count(), 0);
    }

    #[test]
    fn test_sweep_statistics_are_summed() {
        let sweep = Sweep::run(4, &InvariantEngine::default());
        assert_eq!(
            sweep.statistics().get(Counters::PairsVisited),
            1 + 4 + 9 + 16
        );
        assert_eq!(sweep.statistics().get(Counters::Accepted), 1 + 7);
    }

    #[test]
    fn test_from_config_validates() {
        let err = Sweep::from_config(&EngineConfig::new(0, 1e-12)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let sweep = Sweep::from_config(&EngineConfig::new(3, 1e-12)).unwrap();
        assert_eq!(sweep.values(), vec![1, 0, 7]);
    }

    #[test]
    fn test_row_matches() {
        let row = SweepRow {
            n: 9,
            count: 25,
            rule: 37,
        };
        assert!(!row.matches());
    }

    #[test]
    fn test_verify_small_range() {
        let report = verify_rule(30, &InvariantEngine::default());
        assert!(report.is_ok(), "mismatches: {:?}", report.mismatches);
        assert_eq!(report.max_n, 30);
    }
}
