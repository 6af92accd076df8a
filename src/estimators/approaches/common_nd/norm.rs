// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{DependencyError, Result};

use super::subset::DimensionSubset;

/// Distance norms available to the neighbour engine.
///
/// A norm maps the vector of per-dimension absolute differences to a non-negative scalar.
/// The subspace variants only let the dimensions selected by their mask contribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Norm {
    /// Square root of the sum of squares.
    Euclidean,
    /// Largest absolute component (Chebyshev, L-infinity).
    Maximum,
    EuclideanSubspace(DimensionSubset),
    MaximumSubspace(DimensionSubset),
}

impl Norm {
    /// Subset mask of the subspace variants.
    pub fn subset(&self) -> Option<&DimensionSubset> {
        match self {
            Norm::Euclidean | Norm::Maximum => None,
            Norm::EuclideanSubspace(s) | Norm::MaximumSubspace(s) => Some(s),
        }
    }

    /// Number of dimensions the norm actually looks at in a `dims`-dimensional space.
    pub fn effective_dims(&self, dims: usize) -> usize {
        self.subset().map_or(dims, DimensionSubset::cardinality)
    }

    /// Check that the norm can be applied to `dims`-dimensional vectors.
    pub fn validate(&self, dims: usize) -> Result<()> {
        match self.subset() {
            Some(s) if s.dims() != dims => Err(DependencyError::DimensionMismatch {
                expected: dims,
                actual: s.dims(),
            }),
            _ => Ok(()),
        }
    }

    /// Norm of a vector of absolute differences.
    pub fn norm(&self, value: &[f64]) -> Result<f64> {
        self.validate(value.len())?;
        Ok(self.norm_of(value.iter().map(|v| v.abs())))
    }

    /// `norm(|a - b|)`.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(DependencyError::DimensionMismatch { expected: a.len(), actual: b.len() });
        }
        self.validate(a.len())?;
        Ok(self.dist(a, b))
    }

    /// Unchecked distance for callers that validated dimensionality up front.
    pub(crate) fn dist(&self, a: &[f64], b: &[f64]) -> f64 {
        self.norm_of(a.iter().zip(b).map(|(x, y)| (x - y).abs()))
    }

    fn norm_of(&self, diffs: impl Iterator<Item = f64>) -> f64 {
        match self {
            Norm::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            Norm::Maximum => diffs.fold(0.0, f64::max),
            Norm::EuclideanSubspace(s) => masked(diffs, s).map(|d| d * d).sum::<f64>().sqrt(),
            Norm::MaximumSubspace(s) => masked(diffs, s).fold(0.0, f64::max),
        }
    }
}

fn masked<'a>(
    diffs: impl Iterator<Item = f64> + 'a,
    subset: &'a DimensionSubset,
) -> impl Iterator<Item = f64> + 'a {
    diffs.zip(subset.mask()).filter_map(|(d, used)| used.then_some(d))
}
