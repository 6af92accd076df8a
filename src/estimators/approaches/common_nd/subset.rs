// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{DependencyError, Result};

/// Largest dimensionality whose subsets can be enumerated as a `u64` bit mask.
pub const MAX_SUBSET_DIMS: usize = 63;

/// A set of dimension indices drawn from `0..dims`, stored as a boolean mask.
///
/// Bit `j` of the mask form corresponds to dimension `j`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionSubset {
    mask: Vec<bool>,
}

impl DimensionSubset {
    /// Every dimension of a `dims`-dimensional space.
    pub fn full(dims: usize) -> Self {
        Self { mask: vec![true; dims] }
    }

    pub fn from_mask(mask: Vec<bool>) -> Self {
        Self { mask }
    }

    /// Subset of the dimensions listed in `indices`.
    pub fn from_indices(dims: usize, indices: &[usize]) -> Result<Self> {
        let mut mask = vec![false; dims];
        for &j in indices {
            if j >= dims {
                return Err(DependencyError::DimensionMismatch { expected: dims, actual: j + 1 });
            }
            mask[j] = true;
        }
        Ok(Self { mask })
    }

    /// Decode the low `dims` bits of `bits`.
    pub fn from_bits(bits: u64, dims: usize) -> Self {
        assert!(dims <= MAX_SUBSET_DIMS, "too many dimensions for a u64 mask");
        Self { mask: (0..dims).map(|j| (bits >> j) & 1 == 1).collect() }
    }

    pub fn to_bits(&self) -> u64 {
        assert!(self.mask.len() <= MAX_SUBSET_DIMS, "too many dimensions for a u64 mask");
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, used)| **used)
            .fold(0u64, |acc, (j, _)| acc | (1 << j))
    }

    /// Length of the mask, i.e. the dimensionality of the ambient space.
    pub fn dims(&self) -> usize {
        self.mask.len()
    }

    /// Number of selected dimensions.
    pub fn cardinality(&self) -> usize {
        self.mask.iter().filter(|used| **used).count()
    }

    pub fn contains(&self, j: usize) -> bool {
        self.mask.get(j).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    pub fn is_full(&self) -> bool {
        self.mask.iter().all(|used| *used)
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Selected dimension indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(j, used)| used.then_some(j))
            .collect()
    }
}

/// Non-empty proper subsets of a `dims`-dimensional space, enumerated by bit mask decrement.
///
/// Starting from the all-ones mask `2^dims - 1` (which is skipped, the full space is handled by
/// callers on its own) the mask is decremented by one until it reaches zero, visiting
/// `2^dims - 2` subsets in a fixed order. The count is exponential in `dims`.
#[derive(Debug, Clone)]
pub struct ProperSubsets {
    dims: usize,
    next: u64,
}

impl ProperSubsets {
    pub fn new(dims: usize) -> Result<Self> {
        if dims > MAX_SUBSET_DIMS {
            return Err(DependencyError::InvalidParameter(
                "too many dimensions to enumerate subsets",
            ));
        }
        let full = if dims == 0 { 0 } else { u64::MAX >> (64 - dims) };
        Ok(Self { dims, next: full.saturating_sub(1) })
    }
}

impl Iterator for ProperSubsets {
    type Item = DimensionSubset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == 0 {
            return None;
        }
        let subset = DimensionSubset::from_bits(self.next, self.dims);
        self.next -= 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.next).unwrap_or(usize::MAX);
        (remaining, usize::try_from(self.next).ok())
    }
}
