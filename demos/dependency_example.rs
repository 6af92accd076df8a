use multidep::estimators::approaches::common_nd::DimensionSubset;
use multidep::estimators::dependency::{Dependency, DependencyEstimator};
use multidep::estimators::entropy::{Entropy, GlobalValue, LocalValues};
use multidep::Dataset;
use ndarray::Array2;

fn main() -> multidep::Result<()> {
    env_logger::init();

    // Three variables: x, y and a noisy sum z = x + y
    let n = 400;
    let mut data = Array2::<f64>::zeros((n, 3));
    for i in 0..n {
        let t = i as f64;
        let x = (t * 0.37).sin() * 2.0 + (t * 0.011).cos();
        let y = (t * 1.13).cos() * 1.5;
        data[[i, 0]] = x;
        data[[i, 1]] = y;
        data[[i, 2]] = x + y + 0.05 * (t * 7.7).sin();
    }
    let dataset = Dataset::from_array2(data)?;

    println!("Dataset: {} points in {} dimensions", dataset.n(), dataset.dims());

    let k = 4;
    for estimator in Dependency::all(&dataset, k)? {
        println!("  {:<24} {:>10.4}", estimator.name(), estimator.estimate());
    }

    // Entropy of each variable and of the (x, y) plane
    for j in 0..dataset.dims() {
        let subset = DimensionSubset::from_indices(dataset.dims(), &[j])?;
        let h = Entropy::kraskov_subspace(&dataset, subset, k)?;
        println!("  H(x{j}) = {:.4} nats", h.global_value());
    }
    let plane = Entropy::kraskov_subspace(&dataset, DimensionSubset::from_indices(3, &[0, 1])?, k)?;
    let local = plane.local_values();
    println!(
        "  H(x0, x1) = {:.4} nats (local values range {:.3} to {:.3})",
        plane.global_value(),
        local.fold(f64::INFINITY, |a, &b| a.min(b)),
        local.fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
    );

    // The interaction information term by term
    let ii = Dependency::interaction_information(&dataset, k)?;
    for (subset, term) in ii.signed_terms() {
        println!("  subspace {:?}: {term:+.4} nats", subset.indices());
    }
    println!("  interaction information: {:.4} bits", ii.estimate());

    Ok(())
}
