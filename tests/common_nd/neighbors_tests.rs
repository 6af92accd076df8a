use approx::assert_abs_diff_eq;

use multidep::estimators::approaches::common_nd::{
    Dataset, DimensionSubset, NearestNeighborEngine, Norm,
};
use multidep::DependencyError;

use crate::test_helpers::{dataset, generate_random_nd_data, unit_square};

#[test]
fn returns_exactly_k_sorted_neighbors_for_every_k() {
    let ds = dataset(generate_random_nd_data(40, 3, 7));
    let query = [10.0, 10.0, 10.0];
    for k in 1..=ds.n() {
        for norm in [Norm::Euclidean, Norm::Maximum] {
            let engine = NearestNeighborEngine::new(&ds, k, norm.clone()).unwrap();
            let nn = engine.k_nearest_neighbors(&query).unwrap();
            assert_eq!(nn.len(), k);
            for pair in nn.windows(2) {
                assert!(pair[0].distance <= pair[1].distance);
            }
            for nb in &nn {
                let d = norm.distance(ds.point(nb.index), &query).unwrap();
                assert_eq!(nb.distance, d);
            }
        }
    }
}

#[test]
fn k_equal_to_n_returns_whole_dataset_in_order() {
    let ds = dataset(generate_random_nd_data(25, 2, 11));
    let query = [3.0, 17.0];
    let engine = NearestNeighborEngine::new(&ds, ds.n(), Norm::Euclidean).unwrap();
    let nn = engine.k_nearest_neighbors(&query).unwrap();

    let mut idx: Vec<usize> = nn.iter().map(|n| n.index).collect();
    let mut expected: Vec<usize> = (0..ds.n()).collect();
    expected.sort_by(|&a, &b| {
        let da = Norm::Euclidean.distance(ds.point(a), &query).unwrap();
        let db = Norm::Euclidean.distance(ds.point(b), &query).unwrap();
        da.total_cmp(&db)
    });
    assert_eq!(idx, expected);
    idx.sort_unstable();
    assert_eq!(idx, (0..ds.n()).collect::<Vec<_>>());
}

#[test]
fn invalid_neighbor_counts_are_rejected() {
    let ds = unit_square();
    assert_eq!(
        NearestNeighborEngine::new(&ds, 5, Norm::Euclidean).err(),
        Some(DependencyError::InsufficientObjects { k: 5, n: 4 })
    );
    assert_eq!(
        NearestNeighborEngine::new(&ds, 0, Norm::Euclidean).err(),
        Some(DependencyError::InvalidNeighborCount)
    );
    let bad_mask = Norm::EuclideanSubspace(DimensionSubset::full(3));
    assert!(matches!(
        NearestNeighborEngine::new(&ds, 1, bad_mask),
        Err(DependencyError::DimensionMismatch { .. })
    ));
}

#[test]
fn query_dimension_must_match() {
    let ds = unit_square();
    let engine = NearestNeighborEngine::new(&ds, 2, Norm::Maximum).unwrap();
    assert_eq!(
        engine.k_distance(&[0.0, 0.0, 0.0]),
        Err(DependencyError::DimensionMismatch { expected: 2, actual: 3 })
    );
}

#[test]
fn equal_distances_resolve_by_dataset_position() {
    let ds = unit_square();
    let engine = NearestNeighborEngine::new(&ds, 2, Norm::Maximum).unwrap();
    // every other corner lies at maximum-norm distance 1 from (1, 1)
    let nn = engine.k_nearest_neighbors(&[1.0, 1.0]).unwrap();
    let idx: Vec<usize> = nn.iter().map(|n| n.index).collect();
    assert_eq!(idx, vec![3, 0]);

    let all = engine.k_nearest_neighbors(&[0.5, 0.5]).unwrap();
    assert_eq!(all.iter().map(|n| n.index).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn k_distance_and_max_offsets() {
    let ds = Dataset::from_rows(&[[0.0, 0.0], [1.0, 5.0], [3.0, 1.0], [10.0, 10.0]]).unwrap();
    let engine = NearestNeighborEngine::new(&ds, 3, Norm::Maximum).unwrap();
    let query = [0.0, 0.0];

    let nn = engine.k_nearest_neighbors(&query).unwrap();
    assert_eq!(nn.iter().map(|n| n.index).collect::<Vec<_>>(), vec![0, 2, 1]);
    assert_abs_diff_eq!(engine.k_distance(&query).unwrap(), 5.0, epsilon = 1e-12);

    let offsets = engine.per_dimension_max_offset(&query).unwrap();
    assert_eq!(offsets, vec![3.0, 5.0]);
}

#[test]
fn batch_queries_match_single_queries() {
    let ds = dataset(generate_random_nd_data(30, 3, 3));
    let engine = NearestNeighborEngine::new(&ds, 4, Norm::Maximum).unwrap();
    let radii = engine.all_k_distances();
    let offsets = engine.all_per_dimension_max_offsets();
    assert_eq!(offsets.dim(), (30, 3));
    for i in 0..ds.n() {
        assert_eq!(radii[i], engine.k_distance(ds.point(i)).unwrap());
        let single = engine.per_dimension_max_offset(ds.point(i)).unwrap();
        for j in 0..3 {
            assert_eq!(offsets[[i, j]], single[j]);
        }
    }
    // cached and recomputed values agree bit for bit
    assert_eq!(engine.all_k_distances(), radii);
}

#[test]
fn masked_norm_matches_projected_dataset() {
    let ds = dataset(generate_random_nd_data(35, 3, 5));
    let subset = DimensionSubset::from_indices(3, &[0, 2]).unwrap();
    let projected = Dataset::from_rows(
        &ds.points().map(|p| vec![p[0], p[2]]).collect::<Vec<_>>(),
    )
    .unwrap();

    let masked = NearestNeighborEngine::new(&ds, 3, Norm::EuclideanSubspace(subset)).unwrap();
    let plain = NearestNeighborEngine::new(&projected, 3, Norm::Euclidean).unwrap();
    assert_eq!(masked.all_k_distances(), plain.all_k_distances());
}
