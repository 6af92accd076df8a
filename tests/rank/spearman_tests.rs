use approx::assert_abs_diff_eq;

use multidep::estimators::approaches::common_nd::Dataset;
use multidep::estimators::approaches::MultivariateSpearman;
use multidep::estimators::dependency::{Dependency, DependencyEstimator, GlobalValue};

use crate::test_helpers::{dataset, generate_random_nd_data, init_logging};

fn monotone(n: usize) -> Dataset {
    let rows: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let x = i as f64 / 7.0 - 3.0;
            [x, x * x * x]
        })
        .collect();
    Dataset::from_rows(&rows).unwrap()
}

#[test]
fn monotone_pair_has_closed_form() {
    let n = 100;
    let rho = Dependency::multivariate_spearman(&monotone(n));
    let n = n as f64;
    assert_abs_diff_eq!(rho.lower_branch(), 1.0 - 6.0 / n + 2.0 / (n * n), epsilon = 1e-10);
    assert_abs_diff_eq!(rho.upper_branch(), 1.0 + 6.0 / n + 2.0 / (n * n), epsilon = 1e-10);
    assert_abs_diff_eq!(rho.estimate(), 1.0 + 2.0 / (n * n), epsilon = 1e-10);
}

#[test]
fn independent_dimensions_are_near_zero() {
    init_logging();
    for dims in [2, 3] {
        let ds = dataset(generate_random_nd_data(2000, dims, 40 + dims as u64));
        let rho = MultivariateSpearman::new(&ds).global_value();
        assert!(rho.abs() < 0.15, "d={dims}: got {rho}");
    }
}

#[test]
fn normalization_factor() {
    let two = MultivariateSpearman::new(&monotone(10));
    assert_eq!(two.h(), 3.0);
    let three = MultivariateSpearman::new(&dataset(generate_random_nd_data(10, 3, 1)));
    assert_eq!(three.h(), 1.0);
}

#[test]
fn single_dimension_is_nan() {
    let ds = Dataset::from_rows(&[[3.0], [1.0], [2.0]]).unwrap();
    let rho = MultivariateSpearman::new(&ds);
    assert!(rho.h().is_infinite());
    assert!(rho.estimate().is_nan());
}

#[test]
fn ranks_are_normalized_permutations() {
    let ds = dataset(generate_random_nd_data(50, 2, 8));
    let rho = MultivariateSpearman::new(&ds);
    let ranks = rho.ranks();
    assert_eq!(ranks.dim(), (50, 2));
    for column in ranks.columns() {
        let mut scaled: Vec<usize> = column.iter().map(|r| (r * 50.0).round() as usize).collect();
        scaled.sort_unstable();
        assert_eq!(scaled, (1..=50).collect::<Vec<_>>());
    }
}

#[test]
fn ties_share_the_average_rank() {
    let ds = Dataset::from_rows(&[[1.0, 5.0], [1.0, 6.0], [2.0, 7.0], [3.0, 7.0]]).unwrap();
    let rho = MultivariateSpearman::new(&ds);
    let ranks = rho.ranks();
    assert_eq!(ranks.column(0).to_vec(), vec![1.5 / 4.0, 1.5 / 4.0, 0.75, 1.0]);
    assert_eq!(ranks.column(1).to_vec(), vec![0.25, 0.5, 3.5 / 4.0, 3.5 / 4.0]);
}

#[test]
fn estimate_is_idempotent() {
    let ds = dataset(generate_random_nd_data(30, 3, 77));
    let rho = MultivariateSpearman::new(&ds);
    assert_eq!(rho.estimate(), rho.estimate());
    assert_eq!(rho.name(), "multivariate_spearman");
}
