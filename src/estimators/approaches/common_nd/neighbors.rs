// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::trace;
use ndarray::Array2;
use ordered_float::OrderedFloat;

use crate::error::{DependencyError, Result};

use super::dataset::Dataset;
use super::norm::Norm;

/// One entry of a k-NN result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the neighbour in the dataset.
    pub index: usize,
    /// Norm distance to the query (unperturbed).
    pub distance: f64,
}

/// Accelerated candidate pruning for the neighbour engine.
///
/// An index returns, in ascending order, dataset positions that contain every point at least
/// as close to `query` as its k-th nearest neighbour under `norm`. The engine ranks the
/// candidates itself, so any superset is a correct answer and returning every position is
/// always allowed.
pub trait NeighborIndex {
    fn candidates(&self, query: &[f64], k: usize, norm: &Norm) -> Vec<usize>;
}

/// Neighbour key: a distance made unique by upward ulp perturbation.
///
/// `seq` stays zero for finite keys. Non-finite distances cannot be perturbed, so they are
/// told apart by arrival order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct NeighborKey {
    distance: OrderedFloat<f64>,
    seq: usize,
}

/// Smallest f64 strictly greater than a non-negative finite `x`.
fn next_up(x: f64) -> f64 {
    if x == 0.0 {
        f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        f64::from_bits(x.to_bits() - 1)
    }
}

/// Bounded best-k selection over a stream of `(index, distance)` candidates.
///
/// A candidate whose distance collides with a retained key is moved up one ulp at a time
/// until its key is unique, and is only admitted if that key beats the current worst one.
/// Equal distances therefore resolve in favour of the candidate seen first.
struct BestK {
    k: usize,
    best: BTreeMap<NeighborKey, Neighbor>,
    seq: usize,
}

impl BestK {
    fn new(k: usize) -> Self {
        Self { k, best: BTreeMap::new(), seq: 0 }
    }

    fn unique_key(&mut self, distance: f64) -> NeighborKey {
        let mut d = distance;
        while d.is_finite() && self.best.contains_key(&NeighborKey { distance: OrderedFloat(d), seq: 0 }) {
            d = next_up(d);
        }
        if d.is_finite() {
            NeighborKey { distance: OrderedFloat(d), seq: 0 }
        } else {
            self.seq += 1;
            NeighborKey { distance: OrderedFloat(d), seq: self.seq }
        }
    }

    fn offer(&mut self, index: usize, distance: f64) {
        let key = self.unique_key(distance);
        if self.best.len() < self.k {
            self.best.insert(key, Neighbor { index, distance });
            return;
        }
        if let Some((&worst, _)) = self.best.last_key_value() {
            if key < worst {
                self.best.pop_last();
                self.best.insert(key, Neighbor { index, distance });
            }
        }
    }

    fn into_sorted(self) -> Vec<Neighbor> {
        self.best.into_values().collect()
    }
}

/// k-nearest-neighbour search over a borrowed dataset under a fixed norm.
///
/// Brute force by default; an accelerated [`NeighborIndex`] can be injected with
/// [`NearestNeighborEngine::with_index`] without changing results.
///
/// Self-queries follow the k+1 convention: estimators ask for one neighbour more than they
/// need so the point's own zero-distance match is absorbed.
pub struct NearestNeighborEngine<'a> {
    dataset: &'a Dataset,
    k: usize,
    norm: Norm,
    index: Option<Box<dyn NeighborIndex + Send + Sync + 'a>>,
    cache: OnceLock<Vec<Vec<Neighbor>>>,
}

impl<'a> NearestNeighborEngine<'a> {
    pub fn new(dataset: &'a Dataset, k: usize, norm: Norm) -> Result<Self> {
        if k == 0 {
            return Err(DependencyError::InvalidNeighborCount);
        }
        if k > dataset.n() {
            return Err(DependencyError::InsufficientObjects { k, n: dataset.n() });
        }
        norm.validate(dataset.dims())?;
        Ok(Self { dataset, k, norm, index: None, cache: OnceLock::new() })
    }

    /// Use `index` to prune candidates before ranking.
    pub fn with_index(mut self, index: impl NeighborIndex + Send + Sync + 'a) -> Self {
        self.index = Some(Box::new(index));
        self.cache = OnceLock::new();
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn norm(&self) -> &Norm {
        &self.norm
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    fn check_query(&self, query: &[f64]) -> Result<()> {
        if query.len() != self.dataset.dims() {
            return Err(DependencyError::DimensionMismatch {
                expected: self.dataset.dims(),
                actual: query.len(),
            });
        }
        Ok(())
    }

    fn select(&self, query: &[f64]) -> Vec<Neighbor> {
        let mut best = BestK::new(self.k);
        match &self.index {
            Some(index) => {
                for i in index.candidates(query, self.k, &self.norm) {
                    best.offer(i, self.norm.dist(self.dataset.point(i), query));
                }
            }
            None => {
                for (i, p) in self.dataset.points().enumerate() {
                    best.offer(i, self.norm.dist(p, query));
                }
            }
        }
        best.into_sorted()
    }

    /// The k nearest neighbours of `query`, ascending by distance.
    pub fn k_nearest_neighbors(&self, query: &[f64]) -> Result<Vec<Neighbor>> {
        self.check_query(query)?;
        Ok(self.select(query))
    }

    /// Distance from `query` to its k-th nearest neighbour.
    pub fn k_distance(&self, query: &[f64]) -> Result<f64> {
        self.check_query(query)?;
        Ok(kth_distance(&self.select(query)))
    }

    /// Per dimension, the largest absolute coordinate offset between `query` and any of its
    /// k nearest neighbours.
    pub fn per_dimension_max_offset(&self, query: &[f64]) -> Result<Vec<f64>> {
        self.check_query(query)?;
        Ok(max_offsets(self.dataset, query, &self.select(query)))
    }

    /// Neighbour lists of every dataset point, computed on first use and cached.
    pub fn all_neighbors(&self) -> &[Vec<Neighbor>] {
        self.cache.get_or_init(|| {
            trace!(
                "computing {}-NN lists for {} points in {} dimensions",
                self.k,
                self.dataset.n(),
                self.dataset.dims()
            );
            self.dataset.points().map(|p| self.select(p)).collect()
        })
    }

    /// k-distance of every dataset point (self-queries).
    pub fn all_k_distances(&self) -> Vec<f64> {
        self.all_neighbors().iter().map(|nb| kth_distance(nb)).collect()
    }

    /// Per-dimension max offsets of every dataset point, shape (N, D).
    pub fn all_per_dimension_max_offsets(&self) -> Array2<f64> {
        let (n, dims) = (self.dataset.n(), self.dataset.dims());
        let mut out = Array2::<f64>::zeros((n, dims));
        for (i, nb) in self.all_neighbors().iter().enumerate() {
            let offsets = max_offsets(self.dataset, self.dataset.point(i), nb);
            for (j, v) in offsets.into_iter().enumerate() {
                out[[i, j]] = v;
            }
        }
        out
    }
}

fn kth_distance(neighbors: &[Neighbor]) -> f64 {
    // k >= 1 is enforced at construction
    neighbors.last().map_or(f64::NAN, |nb| nb.distance)
}

fn max_offsets(dataset: &Dataset, query: &[f64], neighbors: &[Neighbor]) -> Vec<f64> {
    let mut offsets = vec![0.0; query.len()];
    for nb in neighbors {
        for (o, (q, x)) in offsets.iter_mut().zip(query.iter().zip(dataset.point(nb.index))) {
            *o = f64::max(*o, (q - x).abs());
        }
    }
    offsets
}
