// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, warn};
use ndarray::Array2;

use crate::error::Result;
use crate::estimators::approaches::common_nd::{Dataset, NearestNeighborEngine, NeighborIndex, Norm};
use crate::estimators::traits::{DependencyEstimator, GlobalValue};
use crate::estimators::utils::digamma::{Digamma, digamma_exact};
use crate::estimators::utils::nats_to_base;

use super::utils::{check_base, check_self_query_k};

/// Total correlation from per-dimension neighbour bin counts (Kraskov, maximum norm).
///
/// For every point the k nearest neighbours (k+1 with self) under the maximum norm define a
/// half-width per axis: the largest offset to any neighbour along that axis. The bin
/// cardinality n_ij counts the other points within that half-width along axis j, and
///
/// TC = psi(k) - (D-1)/k + (D-1) * psi(N) - (1/N) * sum_i sum_j psi(n_ij)
#[derive(Debug, Clone)]
pub struct TotalCorrelation<'a> {
    dataset: &'a Dataset,
    k: usize,
    /// Per-point, per-dimension k-NN half-widths, shape (N, D).
    offsets: Array2<f64>,
    digamma: Digamma,
    base: f64,
}

impl<'a> TotalCorrelation<'a> {
    pub fn new(dataset: &'a Dataset, k: usize) -> Result<Self> {
        check_self_query_k(k, dataset.n())?;
        let engine = NearestNeighborEngine::new(dataset, k + 1, Norm::Maximum)?;
        Ok(Self::from_engine(&engine, k))
    }

    /// Like [`TotalCorrelation::new`], with neighbour candidates pruned by `index`.
    pub fn with_index(
        dataset: &'a Dataset,
        k: usize,
        index: impl NeighborIndex + Send + Sync + 'a,
    ) -> Result<Self> {
        check_self_query_k(k, dataset.n())?;
        let engine = NearestNeighborEngine::new(dataset, k + 1, Norm::Maximum)?.with_index(index);
        Ok(Self::from_engine(&engine, k))
    }

    fn from_engine(engine: &NearestNeighborEngine<'a>, k: usize) -> Self {
        let dataset = engine.dataset();
        debug!("total correlation: n={} d={} k={k}", dataset.n(), dataset.dims());
        Self {
            dataset,
            k,
            offsets: engine.all_per_dimension_max_offsets(),
            digamma: Digamma::default(),
            base: 2.0,
        }
    }

    /// Set logarithm base (default 2)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        check_base(base)?;
        self.base = base;
        Ok(self)
    }

    pub fn with_digamma(mut self, digamma: Digamma) -> Self {
        self.digamma = digamma;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn offsets(&self) -> &Array2<f64> {
        &self.offsets
    }

    /// Bin cardinalities of point `i`: per dimension, the number of other points whose
    /// coordinate lies within the point's k-NN half-width.
    pub fn bin_cardinalities(&self, i: usize) -> Vec<usize> {
        let value = self.dataset.point(i);
        (0..self.dataset.dims())
            .map(|j| {
                let half_width = self.offsets[[i, j]];
                let inside = self
                    .dataset
                    .points()
                    .filter(|p| (value[j] - p[j]).abs() <= half_width)
                    .count();
                // the point itself is always inside its own bin
                inside.saturating_sub(1)
            })
            .collect()
    }

    /// Bin cardinalities of every point, shape (N, D).
    pub fn all_bin_cardinalities(&self) -> Array2<usize> {
        let (n, dims) = (self.dataset.n(), self.dataset.dims());
        let mut out = Array2::<usize>::zeros((n, dims));
        for i in 0..n {
            for (j, c) in self.bin_cardinalities(i).into_iter().enumerate() {
                out[[i, j]] = c;
            }
        }
        out
    }

    /// The estimate in nats regardless of the configured base.
    pub fn nats(&self) -> f64 {
        let n = self.dataset.n();
        let d_minus_one = (self.dataset.dims() - 1) as f64;
        let k = self.k as f64;

        let digamma_bin_sum: f64 = self
            .all_bin_cardinalities()
            .iter()
            .map(|&c| digamma_exact(c as f64))
            .sum();
        let mean_bin_digamma = digamma_bin_sum / n as f64;

        digamma_exact(k) - d_minus_one / k + d_minus_one * self.digamma.fast(n as u64) - mean_bin_digamma
    }
}

impl GlobalValue for TotalCorrelation<'_> {
    fn global_value(&self) -> f64 {
        let value = nats_to_base(self.nats(), self.base);
        if !value.is_finite() {
            warn!("total correlation is not finite ({value})");
        }
        debug!("total correlation: {value} (base {})", self.base);
        value
    }
}

impl DependencyEstimator for TotalCorrelation<'_> {
    fn name(&self) -> &'static str {
        "total_correlation"
    }
}
