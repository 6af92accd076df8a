pub mod approaches;
pub mod dependency;
pub mod entropy;
pub mod traits;
pub mod utils;

pub use traits::{DependencyEstimator, GlobalValue, LocalValues};
