// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local values of the measure.
    fn local_values(&self) -> Array1<f64>;

    /// Derive global_value as the mean of local values.
    fn global_from_local(&self) -> f64 {
        let local_vals = self.local_values();
        local_vals.mean().unwrap_or(f64::NAN)
    }
}

/// A dependency measure over a dataset producing a single scalar.
///
/// Implementors validate everything at construction, so estimating cannot fail; re-running it
/// on the same estimator yields a bit-identical value.
pub trait DependencyEstimator: GlobalValue {
    /// Short name of the measure, used in logs.
    fn name(&self) -> &'static str;

    fn estimate(&self) -> f64 {
        self.global_value()
    }
}
