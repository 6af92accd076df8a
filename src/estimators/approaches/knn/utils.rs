// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{DependencyError, Result};

/// n! as f64.
pub fn factorial(n: usize) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// n!! as f64: product of every integer of n's parity from 1 (or 2) up to n.
pub fn double_factorial(n: usize) -> f64 {
    (1..=n).rev().step_by(2).fold(1.0, |acc, i| acc * i as f64)
}

/// Compute the volume of the unit m-ball in R^m.
///
/// Even m: π^(m/2) / (m/2)!
/// Odd m: π^⌊m/2⌋ · 2^(⌊m/2⌋+1) / m!!
pub fn unit_ball_volume(m: usize) -> f64 {
    let half = m / 2;
    let pi_term = std::f64::consts::PI.powi(half as i32);
    if m % 2 == 0 {
        pi_term / factorial(half)
    } else {
        pi_term * 2f64.powi(half as i32 + 1) / double_factorial(m)
    }
}

/// Validate a nominal neighbour count for self-queries on `n` points (k+1 convention).
pub fn check_self_query_k(k: usize, n: usize) -> Result<()> {
    if k == 0 {
        return Err(DependencyError::InvalidNeighborCount);
    }
    if k >= n {
        return Err(DependencyError::InsufficientObjects { k: k.saturating_add(1), n });
    }
    Ok(())
}

/// Validate a logarithm base.
pub fn check_base(base: f64) -> Result<()> {
    if base.is_finite() && base > 0.0 && base != 1.0 {
        Ok(())
    } else {
        Err(DependencyError::InvalidParameter("logarithm base must be positive, finite and != 1"))
    }
}
