// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView2};

use crate::error::{DependencyError, Result};

/// Shared N-D dataset container: `n` points of `dims` coordinates each, row-major.
///
/// Built once from a rectangular table and never mutated afterwards; every estimator
/// borrows it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
    n: usize,
    dims: usize,
}

impl Dataset {
    /// Build from rows of equal length (rows = objects, columns = dimensions).
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(DependencyError::EmptyDataset)?;
        let dims = first.as_ref().len();
        if dims == 0 {
            return Err(DependencyError::EmptyDataset);
        }

        let mut values = Vec::with_capacity(rows.len() * dims);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != dims {
                return Err(DependencyError::RaggedDataset {
                    row,
                    expected: dims,
                    actual: r.len(),
                });
            }
            values.extend_from_slice(r);
        }
        Ok(Self { values, n: rows.len(), dims })
    }

    /// Build from a 2D array (rows = samples, cols = dimensions).
    pub fn from_array2(data: Array2<f64>) -> Result<Self> {
        let (n, dims) = data.dim();
        if n == 0 || dims == 0 {
            return Err(DependencyError::EmptyDataset);
        }
        // `iter` walks in logical row-major order regardless of memory layout
        let values = data.iter().copied().collect();
        Ok(Self { values, n, dims })
    }

    /// Number of points N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Dimensionality D shared by every point.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Coordinates of point `i`.
    ///
    /// Panics if `i >= n`.
    pub fn point(&self, i: usize) -> &[f64] {
        &self.values[i * self.dims..(i + 1) * self.dims]
    }

    /// Iterate over all points in dataset order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.dims)
    }

    /// Coordinate `j` of every point, in dataset order.
    pub fn column(&self, j: usize) -> Vec<f64> {
        assert!(j < self.dims, "column index out of range");
        self.points().map(|p| p[j]).collect()
    }

    /// Return a view of the dataset as a 2D array (samples x dimensions)
    pub fn view(&self) -> ArrayView2<'_, f64> {
        ArrayView2::from_shape((self.n, self.dims), &self.values)
            .expect("dataset storage always holds n * dims values")
    }
}

impl TryFrom<Array2<f64>> for Dataset {
    type Error = DependencyError;

    fn try_from(data: Array2<f64>) -> Result<Self> {
        Self::from_array2(data)
    }
}
