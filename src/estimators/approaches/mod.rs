pub mod common_nd;
pub mod knn;
pub mod rank;

// Unified re-exports for common estimators so tests and users can import
// multidep::estimators::approaches::* ergonomically.
pub use knn::interaction_information::InteractionInformation;
pub use knn::kraskov::KraskovEntropy;
pub use knn::total_correlation::TotalCorrelation;
pub use rank::spearman::MultivariateSpearman;
