// tests/unit_ranker.rs
//! Top-K ordering, tie handling and short inputs.

use linkrank_core::graph::rank::queries::{ranked_entries, top_k};
use linkrank_core::{Edge, LinkGraph};

#[test]
fn test_output_is_non_increasing() {
    let scores: Vec<f64> = (0..500u32)
        .map(|i| f64::from((i * 7919) % 101) / 101.0)
        .collect();
    let top = top_k(&scores, 10);
    assert_eq!(top.len(), 10);
    for pair in top.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
    let best = scores.iter().copied().fold(f64::MIN, f64::max);
    assert!((top[0].1 - best).abs() < f64::EPSILON);
}

#[test]
fn test_length_is_min_of_k_and_n() {
    let scores = [0.3, 0.1, 0.6];
    assert_eq!(top_k(&scores, 10).len(), 3);
    assert_eq!(top_k(&scores, 2).len(), 2);
    assert_eq!(top_k(&scores, 0).len(), 0);
}

#[test]
fn test_equal_scores_keep_entity_order() {
    let scores = [0.25; 4];
    let ids: Vec<usize> = top_k(&scores, 3).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_entries_carry_names_and_ranks() {
    let graph = LinkGraph::from_parts(
        vec!["alpha", "beta", "gamma"],
        vec![Edge::new(0, 1), Edge::new(2, 1)],
    )
    .unwrap();
    let entries = ranked_entries(&graph, &[0.2, 0.5, 0.3], 2);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].name, "beta");
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[1].name, "gamma");
}
