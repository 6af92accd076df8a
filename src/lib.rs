// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # multidep
//!
//! Nearest-neighbour estimators of multivariate dependency for continuous data: interaction
//! information, total correlation and multivariate Spearman's rho.
//!
//! ## Quick Start
//!
//! ```rust
//! use multidep::estimators::approaches::common_nd::Dataset;
//! use multidep::estimators::dependency::{Dependency, DependencyEstimator};
//!
//! let data = Dataset::from_rows(&[
//!     [0.0, 0.0],
//!     [1.0, 0.0],
//!     [0.0, 1.0],
//!     [1.0, 1.0],
//! ])?;
//!
//! let tc = Dependency::total_correlation(&data, 1)?.estimate();
//! let ii = Dependency::interaction_information(&data, 2)?.estimate();
//! let rho = Dependency::multivariate_spearman(&data).estimate();
//! assert!(tc.is_finite() && ii.is_finite() && rho.is_finite());
//! # Ok::<(), multidep::DependencyError>(())
//! ```
//!
//! ## Measures
//!
//! | Measure | Approach | Unit |
//! |---------|----------|------|
//! | Differential entropy | Kraskov kNN (Euclidean) | nats |
//! | Interaction information | inclusion–exclusion over subspace entropies | bits |
//! | Total correlation | per-dimension kNN bin counts (maximum norm) | bits |
//! | Multivariate Spearman's rho | normalized ranks | – |
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: Factory types (`Entropy`, `Dependency`)
//! 2. **Estimation Approaches**: kNN-based (`knn`) and rank-based (`rank`) estimators
//! 3. **Core Infrastructure**: dataset, norms, neighbour engine, digamma
//!
//! Neighbour search is brute force with deterministic tie-breaking; a KD-tree index
//! (`KdTreeIndex`) can be injected to prune candidates without changing results.
//!
//! ## Feature Flags
//!
//! - `parallel`: compute the subspace entropies of the interaction information on the rayon pool
//!
//! ## Logging
//!
//! Estimators log through the `log` facade; install any logger to see per-estimate summaries
//! (`debug`) and per-subspace terms (`trace`).

pub mod error;
pub mod estimators;

pub use error::{DependencyError, Result};
pub use estimators::approaches::common_nd::{Dataset, DimensionSubset, NearestNeighborEngine, Norm};
pub use estimators::traits::{DependencyEstimator, GlobalValue, LocalValues};
