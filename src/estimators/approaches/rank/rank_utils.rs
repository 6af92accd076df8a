// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::cmp::Ordering;

/// Total order on f64 used for ranking: NaNs are "greater" than everything and equal to
/// each other.
fn rank_cmp(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        None => {
            if a.is_nan() && b.is_nan() {
                Ordering::Equal
            } else if a.is_nan() {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
    }
}

/// Stable argsort for f64 values.
///
/// Returns indices that would sort the slice in ascending order; ties keep their original
/// index order.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&i, &j| rank_cmp(values[i], values[j]));
    idx
}

/// Natural ranks 1..=n with ties averaged.
///
/// Equal values receive the mean of the ranks they would occupy, e.g. `[10, 20, 10]` ranks as
/// `[1.5, 3, 1.5]`. NaNs rank after every number.
pub fn natural_ranks(values: &[f64]) -> Vec<f64> {
    let order = argsort(values);
    let mut ranks = vec![0.0; values.len()];

    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && rank_cmp(values[order[start]], values[order[end]]) == Ordering::Equal {
            end += 1;
        }
        // positions start..end hold ranks start+1..=end
        let mean_rank = (start + 1 + end) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = mean_rank;
        }
        start = end;
    }
    ranks
}
