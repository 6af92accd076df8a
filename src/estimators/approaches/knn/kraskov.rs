// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::debug;
use ndarray::Array1;

use crate::error::{DependencyError, Result};
use crate::estimators::approaches::common_nd::{Dataset, DimensionSubset, NearestNeighborEngine, Norm};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::digamma::{Digamma, digamma_exact};
use crate::estimators::utils::nats_to_base;

use super::utils::{check_base, check_self_query_k, unit_ball_volume};

/// Kraskov kNN differential entropy estimator (Euclidean metric), optionally restricted to a
/// subspace of the dataset's dimensions.
///
/// H_hat = -psi(k) + psi(N) + ln(V_d) + (d/N) * sum_i ln(2 * rho_k,i)
///
/// where d is the subspace dimensionality, V_d the volume of the unit d-ball and rho_k,i the
/// distance from point i to its k-th nearest neighbour in the subspace (self excluded via the
/// k+1 convention). psi(N) switches to its asymptotic form at the digamma crossover.
#[derive(Debug, Clone)]
pub struct KraskovEntropy<'a> {
    dataset: &'a Dataset,
    subset: DimensionSubset,
    k: usize,
    radii: Vec<f64>,
    digamma: Digamma,
    base: f64,
}

impl<'a> KraskovEntropy<'a> {
    /// Entropy of the full space.
    pub fn new(dataset: &'a Dataset, k: usize) -> Result<Self> {
        Self::for_subset(dataset, DimensionSubset::full(dataset.dims()), k)
    }

    /// Entropy of the projection onto `subset`.
    pub fn for_subset(dataset: &'a Dataset, subset: DimensionSubset, k: usize) -> Result<Self> {
        if subset.dims() != dataset.dims() {
            return Err(DependencyError::DimensionMismatch {
                expected: dataset.dims(),
                actual: subset.dims(),
            });
        }
        if subset.is_empty() {
            return Err(DependencyError::DegenerateSubspace);
        }
        check_self_query_k(k, dataset.n())?;

        let norm = if subset.is_full() {
            Norm::Euclidean
        } else {
            Norm::EuclideanSubspace(subset.clone())
        };
        let engine = NearestNeighborEngine::new(dataset, k + 1, norm)?;
        let radii = engine.all_k_distances();
        Ok(Self { dataset, subset, k, radii, digamma: Digamma::default(), base: std::f64::consts::E })
    }

    /// Set logarithm base (default e)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        check_base(base)?;
        self.base = base;
        Ok(self)
    }

    pub fn with_digamma(mut self, digamma: Digamma) -> Self {
        self.digamma = digamma;
        self
    }

    pub fn subset(&self) -> &DimensionSubset {
        &self.subset
    }

    /// Dimensionality d of the subspace.
    pub fn dimensionality(&self) -> usize {
        self.subset.cardinality()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Distance of every point to its k-th nearest neighbour in the subspace.
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Part of the estimate shared by every point: -psi(k) + psi(N) + ln(V_d).
    fn constant_term(&self) -> f64 {
        -digamma_exact(self.k as f64)
            + self.digamma.fast(self.dataset.n() as u64)
            + unit_ball_volume(self.dimensionality()).ln()
    }

    /// The estimate in nats regardless of the configured base.
    pub fn nats(&self) -> f64 {
        let d = self.dimensionality() as f64;
        let n = self.dataset.n() as f64;
        let sum_ln: f64 = self.radii.iter().map(|r| (2.0 * r).ln()).sum();
        self.constant_term() + (d / n) * sum_ln
    }
}

impl GlobalValue for KraskovEntropy<'_> {
    fn global_value(&self) -> f64 {
        let h = nats_to_base(self.nats(), self.base);
        debug!(
            "kraskov entropy: n={} d={} k={} -> {h}",
            self.dataset.n(),
            self.dimensionality(),
            self.k
        );
        h
    }
}

impl LocalValues for KraskovEntropy<'_> {
    /// Per-point contributions -psi(k) + psi(N) + ln(V_d) + d * ln(2 * rho_k,i); their mean is
    /// the global value.
    fn local_values(&self) -> Array1<f64> {
        let c = self.constant_term();
        let d = self.dimensionality() as f64;
        self.radii
            .iter()
            .map(|r| nats_to_base(c + d * (2.0 * r).ln(), self.base))
            .collect()
    }
}
