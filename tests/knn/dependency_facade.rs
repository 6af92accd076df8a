use multidep::estimators::approaches::common_nd::DimensionSubset;
use multidep::estimators::dependency::{Dependency, DependencyEstimator};
use multidep::estimators::entropy::{Entropy, GlobalValue};

use crate::test_helpers::{dataset, generate_gaussian_data, unit_square};

#[test]
fn all_returns_every_measure_in_order() {
    let ds = dataset(generate_gaussian_data(120, 3, 0.0, 1.0, 31));
    let estimators = Dependency::all(&ds, 3).unwrap();
    let names: Vec<&str> = estimators.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["interaction_information", "total_correlation", "multivariate_spearman"]
    );

    assert_eq!(
        estimators[0].estimate(),
        Dependency::interaction_information(&ds, 3).unwrap().estimate()
    );
    assert_eq!(estimators[1].estimate(), Dependency::total_correlation(&ds, 3).unwrap().estimate());
    assert_eq!(estimators[2].estimate(), Dependency::multivariate_spearman(&ds).estimate());
    for e in &estimators {
        assert!(e.estimate().is_finite(), "{} not finite", e.name());
    }
}

#[test]
fn all_propagates_construction_errors() {
    let ds = unit_square();
    assert!(Dependency::all(&ds, 4).is_err());
}

#[test]
fn entropy_facade_matches_subspace_of_full_mask() {
    let ds = dataset(generate_gaussian_data(90, 2, 0.0, 1.0, 6));
    let full = Entropy::kraskov(&ds, 2).unwrap();
    let masked = Entropy::kraskov_subspace(&ds, DimensionSubset::full(2), 2).unwrap();
    assert_eq!(full.global_value(), masked.global_value());
}
