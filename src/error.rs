// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by every estimator in the crate.

use thiserror::Error;

/// Errors reported while building datasets, neighbour engines and estimators.
///
/// Numeric degeneracies (a zero neighbour distance feeding `ln(0)`) are not errors;
/// they surface as non-finite estimates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    /// Two vectors (or a vector and a subset mask) of unequal length were compared.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// More neighbours were requested than the dataset holds.
    #[error("not enough objects to find {k} neighbours among {n}")]
    InsufficientObjects { k: usize, n: usize },

    /// Entropy requested over a subspace with no dimensions.
    #[error("entropy of a zero-dimensional subspace is undefined")]
    DegenerateSubspace,

    /// The input table has no rows or no columns.
    #[error("empty dataset")]
    EmptyDataset,

    /// A row of the input table differs in length from the first row.
    #[error("ragged dataset: row {row} has {actual} columns, expected {expected}")]
    RaggedDataset {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The neighbour count must be at least one.
    #[error("neighbour count k must be >= 1")]
    InvalidNeighborCount,

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

pub type Result<T> = std::result::Result<T, DependencyError>;
