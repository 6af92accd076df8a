// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Common N-D dataset utilities shared by the kNN-based estimators

pub mod dataset;
pub mod kdtree;
pub mod neighbors;
pub mod norm;
pub mod subset;

pub use dataset::Dataset;
pub use kdtree::KdTreeIndex;
pub use neighbors::{NearestNeighborEngine, Neighbor, NeighborIndex};
pub use norm::Norm;
pub use subset::{DimensionSubset, ProperSubsets};
