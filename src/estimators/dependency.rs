use crate::error::Result;
use crate::estimators::approaches::common_nd::Dataset;
use crate::estimators::approaches::knn::interaction_information::InteractionInformation;
use crate::estimators::approaches::knn::total_correlation::TotalCorrelation;
use crate::estimators::approaches::rank::spearman::MultivariateSpearman;
pub use crate::estimators::traits::{DependencyEstimator, GlobalValue};

/// Multivariate dependency measures over a dataset
///
/// Every constructor validates its input and returns an estimator whose
/// [`DependencyEstimator::estimate`] yields the scalar.
pub struct Dependency;

impl Dependency {
    /// Interaction information in bits from kNN entropies of every dimension subset
    ///
    /// Costs 2^D - 1 entropy estimates.
    pub fn interaction_information(dataset: &Dataset, k: usize) -> Result<InteractionInformation<'_>> {
        InteractionInformation::new(dataset, k)
    }

    /// Total correlation in bits from per-dimension kNN bin counts
    pub fn total_correlation(dataset: &Dataset, k: usize) -> Result<TotalCorrelation<'_>> {
        TotalCorrelation::new(dataset, k)
    }

    /// Multivariate Spearman's rho from normalized ranks
    pub fn multivariate_spearman(dataset: &Dataset) -> MultivariateSpearman {
        MultivariateSpearman::new(dataset)
    }

    /// All three measures as boxed estimators, in the order interaction information,
    /// total correlation, Spearman's rho.
    pub fn all(dataset: &Dataset, k: usize) -> Result<Vec<Box<dyn DependencyEstimator + '_>>> {
        let estimators: Vec<Box<dyn DependencyEstimator + '_>> = vec![
            Box::new(Self::interaction_information(dataset, k)?),
            Box::new(Self::total_correlation(dataset, k)?),
            Box::new(Self::multivariate_spearman(dataset)),
        ];
        Ok(estimators)
    }
}
