// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Invocation parameters for a sweep.

use crate::error::{Error, Result};
use crate::geometry::constants::{DEFAULT_MAX_N, DEFAULT_TOLERANCE};

/// What to compute: the sweep n = 1..=max_n at `tolerance`, and optionally
/// the full triple listing for one n.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub max_n: usize,
    pub tolerance: f64,
    pub list_triples: Option<usize>,
}

impl EngineConfig {
    pub fn new(max_n: usize, tolerance: f64) -> Self {
        Self {
            max_n,
            tolerance,
            list_triples: None,
        }
    }

    pub fn with_list_triples(mut self, n: usize) -> Self {
        self.list_triples = Some(n);
        self
    }

    /// Check `max_n ≥ 1` and that the tolerance is a positive finite real.
    pub fn validate(&self) -> Result<()> {
        if self.max_n < 1 {
            return Err(Error::InvalidConfig(format!(
                "max_n must be at least 1, got {}",
                self.max_n
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be a positive real, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_N, DEFAULT_TOLERANCE)
    }
}
