// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, trace, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::estimators::approaches::common_nd::{Dataset, DimensionSubset, ProperSubsets};
use crate::estimators::traits::{DependencyEstimator, GlobalValue};
use crate::estimators::utils::digamma::Digamma;
use crate::estimators::utils::nats_to_base;

use super::kraskov::KraskovEntropy;
use super::utils::{check_base, check_self_query_k};

/// Interaction information via inclusion–exclusion over subspace entropies.
///
/// I = -[ H(all) + sum_{S proper, non-empty} (-1)^(D - |S|) * H(S) ]
///
/// Every entropy is a [`KraskovEntropy`] with the same k. The subsets are visited by bit mask
/// decrement (see [`ProperSubsets`]), so the estimator needs 2^D - 1 entropy evaluations and is
/// only practical for small D. Reported in bits unless another base is set.
///
/// With the `parallel` feature the subspace entropies are computed on the rayon pool; the
/// accumulation order stays the enumeration order.
#[derive(Debug, Clone)]
pub struct InteractionInformation<'a> {
    dataset: &'a Dataset,
    k: usize,
    /// Full-space entropy first, then the proper subsets in enumeration order.
    entropies: Vec<KraskovEntropy<'a>>,
    base: f64,
}

impl<'a> InteractionInformation<'a> {
    pub fn new(dataset: &'a Dataset, k: usize) -> Result<Self> {
        check_self_query_k(k, dataset.n())?;
        let dims = dataset.dims();
        let subsets: Vec<DimensionSubset> = std::iter::once(DimensionSubset::full(dims))
            .chain(ProperSubsets::new(dims)?)
            .collect();
        debug!(
            "interaction information: n={} d={dims} k={k}, {} subspace entropies",
            dataset.n(),
            subsets.len()
        );

        #[cfg(feature = "parallel")]
        let entropies = subsets
            .into_par_iter()
            .map(|s| KraskovEntropy::for_subset(dataset, s, k))
            .collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let entropies = subsets
            .into_iter()
            .map(|s| KraskovEntropy::for_subset(dataset, s, k))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { dataset, k, entropies, base: 2.0 })
    }

    /// Set logarithm base (default 2)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        check_base(base)?;
        self.base = base;
        Ok(self)
    }

    /// Digamma evaluator used by every subspace entropy.
    pub fn with_digamma(mut self, digamma: Digamma) -> Self {
        self.entropies = self.entropies.into_iter().map(|e| e.with_digamma(digamma)).collect();
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Subspace entropies (nats) in accumulation order, full space first.
    pub fn entropies(&self) -> &[KraskovEntropy<'a>] {
        &self.entropies
    }

    /// Signed inclusion–exclusion terms in nats, in accumulation order.
    pub fn signed_terms(&self) -> Vec<(DimensionSubset, f64)> {
        let dims = self.dataset.dims();
        self.entropies
            .iter()
            .map(|e| {
                let sign = if (dims - e.dimensionality()) % 2 == 0 { 1.0 } else { -1.0 };
                (e.subset().clone(), sign * e.nats())
            })
            .collect()
    }

    /// The estimate in nats regardless of the configured base.
    pub fn nats(&self) -> f64 {
        let mut acc = 0.0;
        for (subset, term) in self.signed_terms() {
            trace!("subspace {:?}: signed entropy {term}", subset.indices());
            acc += term;
        }
        -acc
    }
}

impl GlobalValue for InteractionInformation<'_> {
    fn global_value(&self) -> f64 {
        let value = nats_to_base(self.nats(), self.base);
        if !value.is_finite() {
            warn!("interaction information is not finite ({value}); duplicate points in some subspace?");
        }
        debug!("interaction information: {value} (base {})", self.base);
        value
    }
}

impl DependencyEstimator for InteractionInformation<'_> {
    fn name(&self) -> &'static str {
        "interaction_information"
    }
}
