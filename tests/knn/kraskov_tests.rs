use std::f64::consts::{LN_2, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};

use multidep::estimators::approaches::common_nd::{Dataset, DimensionSubset};
use multidep::estimators::approaches::KraskovEntropy;
use multidep::estimators::entropy::{Entropy, GlobalValue, LocalValues};
use multidep::DependencyError;

use crate::test_helpers::{dataset, generate_gaussian_data, init_logging};

#[test]
fn two_points_on_a_line() {
    let ds = Dataset::from_rows(&[[1.0], [2.0]]).unwrap();
    let h = Entropy::kraskov(&ds, 1).unwrap();
    assert_eq!(h.radii(), &[1.0, 1.0]);
    assert_abs_diff_eq!(h.global_value(), 1.0 + 2.0 * LN_2, epsilon = 1e-12);
}

#[test]
fn two_points_in_the_plane() {
    let ds = Dataset::from_rows(&[[1.0, 2.0], [2.0, 3.0]]).unwrap();
    let h = Entropy::kraskov(&ds, 1).unwrap();
    let expected = 1.0 + PI.ln() + 2.0 * (2.0 * 2f64.sqrt()).ln();
    assert_abs_diff_eq!(h.global_value(), expected, epsilon = 1e-12);
}

#[test]
fn subspace_entropy_equals_entropy_of_projection() {
    let ds = dataset(generate_gaussian_data(300, 3, 0.0, 1.0, 21));
    let projected =
        Dataset::from_rows(&ds.points().map(|p| vec![p[0], p[2]]).collect::<Vec<_>>()).unwrap();

    let subset = DimensionSubset::from_indices(3, &[0, 2]).unwrap();
    let sub = Entropy::kraskov_subspace(&ds, subset, 3).unwrap();
    let direct = Entropy::kraskov(&projected, 3).unwrap();
    assert_eq!(sub.dimensionality(), 2);
    assert_eq!(sub.radii(), direct.radii());
    assert_eq!(sub.global_value(), direct.global_value());
}

#[test]
fn gaussian_entropy_is_close_to_analytic() {
    init_logging();
    // the 2 * rho convention shifts the estimate by d * ln 2
    let analytic_1d = 0.5 * (2.0 * PI * std::f64::consts::E).ln();

    let ds = dataset(generate_gaussian_data(2000, 1, 0.0, 1.0, 1));
    let h = Entropy::kraskov(&ds, 4).unwrap().global_value();
    assert_abs_diff_eq!(h - LN_2, analytic_1d, epsilon = 0.1);

    let ds = dataset(generate_gaussian_data(2000, 2, 0.0, 1.0, 2));
    let h = Entropy::kraskov(&ds, 4).unwrap().global_value();
    assert_abs_diff_eq!(h - 2.0 * LN_2, 2.0 * analytic_1d, epsilon = 0.15);
}

#[test]
fn local_values_average_to_global() {
    let ds = dataset(generate_gaussian_data(200, 2, 0.0, 1.0, 5));
    let h = KraskovEntropy::new(&ds, 3).unwrap();
    let local = h.local_values();
    assert_eq!(local.len(), 200);
    assert_relative_eq!(local.mean().unwrap(), h.global_value(), epsilon = 1e-10);
    assert_relative_eq!(h.global_from_local(), h.global_value(), epsilon = 1e-10);
}

#[test]
fn base_two_rescales_nats() {
    let ds = dataset(generate_gaussian_data(100, 2, 0.0, 1.0, 8));
    let nats = KraskovEntropy::new(&ds, 2).unwrap();
    let bits = KraskovEntropy::new(&ds, 2).unwrap().with_base(2.0).unwrap();
    assert_relative_eq!(bits.global_value(), nats.global_value() / LN_2, epsilon = 1e-12);
    assert_eq!(bits.nats(), nats.nats());
    assert!(KraskovEntropy::new(&ds, 2).unwrap().with_base(1.0).is_err());
}

#[test]
fn invalid_arguments_are_rejected() {
    let ds = Dataset::from_rows(&[[1.0, 2.0], [2.0, 3.0]]).unwrap();
    assert_eq!(
        KraskovEntropy::new(&ds, 0).err(),
        Some(DependencyError::InvalidNeighborCount)
    );
    assert!(matches!(
        KraskovEntropy::new(&ds, 2),
        Err(DependencyError::InsufficientObjects { k: 3, n: 2 })
    ));
    assert!(matches!(
        KraskovEntropy::for_subset(&ds, DimensionSubset::from_mask(vec![false, false]), 1),
        Err(DependencyError::DegenerateSubspace)
    ));
    assert!(matches!(
        KraskovEntropy::for_subset(&ds, DimensionSubset::full(3), 1),
        Err(DependencyError::DimensionMismatch { expected: 2, actual: 3 })
    ));
}

#[test]
fn duplicate_points_give_negative_infinity() {
    let ds = Dataset::from_rows(&[[0.0], [0.0], [1.0]]).unwrap();
    let h = KraskovEntropy::new(&ds, 1).unwrap();
    assert_eq!(h.global_value(), f64::NEG_INFINITY);
}
