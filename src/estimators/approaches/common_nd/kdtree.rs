// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::num::NonZeroUsize;

use kiddo::{ImmutableKdTree, SquaredEuclidean};

use crate::error::{DependencyError, Result};

use super::dataset::Dataset;
use super::neighbors::NeighborIndex;
use super::norm::Norm;

/// Relative slack added to the search radius so that rounding differences between kiddo's
/// squared distances and [`Norm`] never drop a boundary point.
const RADIUS_SLACK: f64 = 1e-9;

/// KD-tree candidate index for `K`-dimensional datasets.
///
/// Serves the unmasked Euclidean and Maximum norms. The tree is always searched under squared
/// Euclidean distance: a `nearest_n` query bounds the k-th neighbour radius R under the requested
/// norm, and every point inside the Euclidean ball that contains the norm's R-ball is returned
/// (radius R for Euclidean, R * sqrt(K) for Maximum). Masked norms fall back to a full scan.
pub struct KdTreeIndex<const K: usize> {
    points: Vec<[f64; K]>,
    tree: ImmutableKdTree<f64, K>,
}

impl<const K: usize> KdTreeIndex<K> {
    pub fn new(dataset: &Dataset) -> Result<Self> {
        if dataset.dims() != K {
            return Err(DependencyError::DimensionMismatch { expected: K, actual: dataset.dims() });
        }
        let points: Vec<[f64; K]> = dataset
            .points()
            .map(|row| {
                let mut p = [0.0; K];
                p.copy_from_slice(row);
                p
            })
            .collect();
        let tree = ImmutableKdTree::new_from_slice(&points);
        Ok(Self { points, tree })
    }

    fn all(&self) -> Vec<usize> {
        (0..self.points.len()).collect()
    }

    /// Squared Euclidean radius enclosing the k nearest neighbours of `query` under `norm`.
    fn enclosing_radius_sq(&self, query: &[f64; K], k: NonZeroUsize, norm: &Norm) -> Option<f64> {
        let nearest = self.tree.nearest_n::<SquaredEuclidean>(query, k);
        match norm {
            Norm::Euclidean => nearest.last().map(|nb| nb.distance),
            Norm::Maximum => {
                // the k Euclidean-nearest points bound the k-th maximum-norm distance from above
                let r = nearest
                    .iter()
                    .map(|nb| norm.dist(&self.points[nb.item as usize], query))
                    .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.max(d))))?;
                Some(r * r * K as f64)
            }
            Norm::EuclideanSubspace(_) | Norm::MaximumSubspace(_) => None,
        }
    }
}

impl<const K: usize> NeighborIndex for KdTreeIndex<K> {
    fn candidates(&self, query: &[f64], k: usize, norm: &Norm) -> Vec<usize> {
        let (Ok(q), Some(k)) = (<[f64; K]>::try_from(query), NonZeroUsize::new(k)) else {
            return self.all();
        };
        let Some(radius_sq) = self.enclosing_radius_sq(&q, k, norm) else {
            return self.all();
        };
        if !radius_sq.is_finite() {
            return self.all();
        }
        let radius_sq = radius_sq * (1.0 + RADIUS_SLACK) + f64::MIN_POSITIVE;

        let mut idx: Vec<usize> = self
            .tree
            .within_unsorted::<SquaredEuclidean>(&q, radius_sq)
            .into_iter()
            .map(|nb| nb.item as usize)
            .collect();
        // the engine's tie-breaking depends on dataset order
        idx.sort_unstable();
        idx
    }
}
