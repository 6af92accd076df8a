// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Digamma function at integer-like arguments.
//!
//! The kNN estimators only ever evaluate ψ at neighbour counts and sample sizes, where the
//! recursion ψ(x + 1) = ψ(x) + 1/x gives an exact closed form:
//!
//! ψ(x) = -γ + Σ_{i=1}^{⌊x⌋-1} 1/i
//!
//! Summing costs O(x), so for large arguments the asymptotic form ψ(x) ≈ ln(x) - 1/(2x) is used
//! instead. The switch-over point is the first integer at which both agree within a tolerance ε.

use log::trace;

use crate::error::{DependencyError, Result};

/// Euler–Mascheroni constant γ.
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_860_61;

/// Tolerance behind [`DIGAMMA_CROSSOVER`].
pub const DEFAULT_DIGAMMA_TOLERANCE: f64 = 1e-7;

/// Smallest integer at which exact and asymptotic digamma agree within 1e-7.
pub const DIGAMMA_CROSSOVER: u64 = 913;

/// Upper bound on the crossover search; beyond it the harmonic sum's rounding error is of
/// the same order as the tolerances that would need it.
const CROSSOVER_SEARCH_LIMIT: u64 = 10_000_000;

/// Exact digamma by harmonic summation, O(x).
pub fn digamma_exact(x: f64) -> f64 {
    let upper = x.floor();
    let mut acc = -EULER_MASCHERONI;
    let mut i = 1.0;
    while i < upper {
        acc += 1.0 / i;
        i += 1.0;
    }
    acc
}

/// Asymptotic digamma ln(x) - 1/(2x).
pub fn digamma_asymptotic(x: f64) -> f64 {
    x.ln() - 1.0 / (2.0 * x)
}

/// Digamma switching to the asymptotic form at [`DIGAMMA_CROSSOVER`].
pub fn digamma_fast(x: u64) -> f64 {
    if x >= DIGAMMA_CROSSOVER {
        digamma_asymptotic(x as f64)
    } else {
        digamma_exact(x as f64)
    }
}

/// Smallest integer x >= 0 with |digamma_exact(x) - digamma_asymptotic(x)| <= `epsilon`.
///
/// Searches upward from 0, carrying the harmonic sum along so the whole search is linear in the
/// result. The running sum adds terms in the same order as [`digamma_exact`], so the values
/// compared are bit-identical to calling it directly.
pub fn find_crossover(epsilon: f64) -> Result<u64> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(DependencyError::InvalidParameter("digamma tolerance must be positive and finite"));
    }
    let mut exact = -EULER_MASCHERONI;
    for x in 0..=CROSSOVER_SEARCH_LIMIT {
        if x >= 2 {
            exact += 1.0 / (x - 1) as f64;
        }
        let gap = (exact - digamma_asymptotic(x as f64)).abs();
        if gap <= epsilon {
            trace!("digamma crossover for eps={epsilon:e} at x={x} (gap {gap:e})");
            return Ok(x);
        }
    }
    Err(DependencyError::InvalidParameter("digamma tolerance below attainable precision"))
}

/// Digamma evaluator bound to a tolerance and its crossover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Digamma {
    epsilon: f64,
    crossover: u64,
}

impl Digamma {
    /// Evaluator for tolerance `epsilon`, running the crossover search once.
    pub fn new(epsilon: f64) -> Result<Self> {
        let crossover = find_crossover(epsilon)?;
        Ok(Self { epsilon, crossover })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn crossover(&self) -> u64 {
        self.crossover
    }

    pub fn exact(&self, x: f64) -> f64 {
        digamma_exact(x)
    }

    /// Asymptotic form at and above this evaluator's crossover, exact below.
    pub fn fast(&self, x: u64) -> f64 {
        if x >= self.crossover {
            digamma_asymptotic(x as f64)
        } else {
            digamma_exact(x as f64)
        }
    }
}

impl Default for Digamma {
    fn default() -> Self {
        Self { epsilon: DEFAULT_DIGAMMA_TOLERANCE, crossover: DIGAMMA_CROSSOVER }
    }
}
