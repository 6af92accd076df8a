use crate::error::Result;
use crate::estimators::approaches::common_nd::{Dataset, DimensionSubset};
use crate::estimators::approaches::knn::kraskov::KraskovEntropy;
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation methods for continuous N-dimensional data
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a Kraskov kNN entropy estimator over every dimension of `dataset`
    ///
    /// # Arguments
    ///
    /// * `dataset` - Points to estimate the differential entropy of
    /// * `k` - Neighbour count (the point itself is not counted)
    ///
    /// # Errors
    ///
    /// `InvalidNeighborCount` for k = 0, `InsufficientObjects` when k >= N.
    pub fn kraskov(dataset: &Dataset, k: usize) -> Result<KraskovEntropy<'_>> {
        KraskovEntropy::new(dataset, k)
    }

    /// Creates a Kraskov kNN entropy estimator for the projection of `dataset` onto `subset`
    ///
    /// # Errors
    ///
    /// As [`Entropy::kraskov`], plus `DegenerateSubspace` for an empty subset and
    /// `DimensionMismatch` when the subset mask does not match the dataset.
    pub fn kraskov_subspace(
        dataset: &Dataset,
        subset: DimensionSubset,
        k: usize,
    ) -> Result<KraskovEntropy<'_>> {
        KraskovEntropy::for_subset(dataset, subset, k)
    }
}
