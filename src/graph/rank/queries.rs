// src/graph/rank/queries.rs
//! Top-K selection over a converged score vector.

use std::cmp::Ordering;

use crate::graph::LinkGraph;
use crate::types::RankedEntry;

/// Sort key under which equal scores compare equal: `-0.0` folds into `0.0`
/// and NaN ranks below every number.
fn score_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score + 0.0
    }
}

/// Highest-first order with ties kept in id order, i.e. the result of a
/// stable descending sort.
fn rank_order(scores: &[f64], a: usize, b: usize) -> Ordering {
    score_key(scores[b])
        .total_cmp(&score_key(scores[a]))
        .then(a.cmp(&b))
}

/// Returns the `min(k, n)` highest `(id, score)` pairs, best first.
///
/// Selection is `O(n + k log k)`: partition the `k` best to the front, then
/// sort only that prefix.
#[must_use]
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    let k = k.min(scores.len());
    if k == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    let cmp = |a: &usize, b: &usize| rank_order(scores, *a, *b);
    if k < order.len() {
        order.select_nth_unstable_by(k - 1, cmp);
        order.truncate(k);
    }
    order.sort_unstable_by(cmp);

    order.into_iter().map(|id| (id, scores[id])).collect()
}

/// Pairs the top `k` scores with entity names.
#[must_use]
pub fn ranked_entries(graph: &LinkGraph, scores: &[f64], k: usize) -> Vec<RankedEntry> {
    top_k(scores, k)
        .into_iter()
        .enumerate()
        .map(|(pos, (id, score))| RankedEntry {
            rank: pos + 1,
            id,
            name: graph.name(id).unwrap_or_default().to_string(),
            score,
        })
        .collect()
}
