// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, warn};
use ndarray::Array2;

use crate::estimators::approaches::common_nd::Dataset;
use crate::estimators::traits::{DependencyEstimator, GlobalValue};

use super::rank_utils::natural_ranks;

/// Multivariate Spearman's rho from normalized ranks.
///
/// Each coordinate is replaced by its natural rank within its dimension divided by N. With
/// h(D) = (D+1) / (2^D - (D+1)), the two branch statistics
///
/// rho_1 = h(D) * (2^D/N * sum_j prod_i (1 - r_ji) - 1)
/// rho_2 = h(D) * (2^D/N * sum_j prod_i r_ji - 1)
///
/// are averaged. For D = 1 the normalization h is infinite and the estimate is NaN.
#[derive(Debug, Clone)]
pub struct MultivariateSpearman {
    /// Normalized ranks, shape (N, D).
    ranks: Array2<f64>,
}

impl MultivariateSpearman {
    pub fn new(dataset: &Dataset) -> Self {
        let (n, dims) = (dataset.n(), dataset.dims());
        let mut ranks = Array2::<f64>::zeros((n, dims));
        for j in 0..dims {
            for (i, r) in natural_ranks(&dataset.column(j)).into_iter().enumerate() {
                ranks[[i, j]] = r / n as f64;
            }
        }
        Self { ranks }
    }

    /// Normalized rank table, shape (N, D).
    pub fn ranks(&self) -> &Array2<f64> {
        &self.ranks
    }

    /// h(D) = (D+1) / (2^D - (D+1)).
    pub fn h(&self) -> f64 {
        let d = self.ranks.ncols() as f64;
        (d + 1.0) / (2f64.powi(d as i32) - (d + 1.0))
    }

    fn branch(&self, factor: impl Fn(f64) -> f64) -> f64 {
        let (n, d) = self.ranks.dim();
        let sum: f64 = self
            .ranks
            .rows()
            .into_iter()
            .map(|row| row.iter().fold(1.0, |acc, &r| acc * factor(r)))
            .sum();
        self.h() * (2f64.powi(d as i32) / n as f64 * sum - 1.0)
    }

    /// Branch built on the complements 1 - r.
    pub fn lower_branch(&self) -> f64 {
        self.branch(|r| 1.0 - r)
    }

    /// Branch built on the ranks r.
    pub fn upper_branch(&self) -> f64 {
        self.branch(|r| r)
    }
}

impl GlobalValue for MultivariateSpearman {
    fn global_value(&self) -> f64 {
        let rho = (self.lower_branch() + self.upper_branch()) / 2.0;
        if !rho.is_finite() {
            warn!("multivariate spearman rho is not finite ({rho}); at least two dimensions are needed");
        }
        debug!("multivariate spearman: n={} d={} -> {rho}", self.ranks.nrows(), self.ranks.ncols());
        rho
    }
}

impl DependencyEstimator for MultivariateSpearman {
    fn name(&self) -> &'static str {
        "multivariate_spearman"
    }
}
