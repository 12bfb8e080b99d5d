// src/graph/rank/builder.rs
//! Stochastic matrix construction: distinct out-links and dangling-row correction.

use std::collections::HashSet;

use super::matrix::DenseMatrix;
use crate::error::{RankError, Result};
use crate::graph::Edge;

/// Row-stochastic transition matrix `S`, where `S[i][j]` is the probability of
/// moving from entity `i` to entity `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticMatrix {
    matrix: DenseMatrix,
    dangling: Vec<usize>,
}

impl StochasticMatrix {
    #[must_use]
    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }

    #[must_use]
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// Rows that had no out-links and were filled uniformly.
    #[must_use]
    pub fn dangling(&self) -> &[usize] {
        &self.dangling
    }

    /// True if every row sums to 1 within `tolerance`.
    #[must_use]
    pub fn is_row_stochastic(&self, tolerance: f64) -> bool {
        self.matrix
            .row_sums()
            .iter()
            .all(|s| (s - 1.0).abs() <= tolerance)
    }
}

/// Distinct out-degree per entity. Duplicate edges count once.
///
/// # Errors
/// Returns `EdgeOutOfRange` if any endpoint is `>= n`.
pub fn out_degrees(n: usize, edges: &[Edge]) -> Result<Vec<usize>> {
    let links = distinct_links(n, edges)?;
    let mut degrees = vec![0; n];
    for edge in &links {
        degrees[edge.src] += 1;
    }
    Ok(degrees)
}

/// Builds `S` from the raw edge list.
///
/// Rows with out-links get `1/out_degree` on each distinct target, rows
/// without get `1/n` everywhere.
///
/// # Errors
/// Returns `EdgeOutOfRange` if any endpoint is `>= n`, or `InvalidConfig` for `n == 0`.
#[allow(clippy::cast_precision_loss)]
pub fn build(n: usize, edges: &[Edge]) -> Result<StochasticMatrix> {
    if n == 0 {
        return Err(RankError::InvalidConfig(
            "cannot build a transition matrix for zero entities".to_string(),
        ));
    }

    let links = distinct_links(n, edges)?;
    let mut matrix = DenseMatrix::zeros(n);
    for edge in &links {
        matrix.set(edge.src, edge.dst, 1.0);
    }

    let uniform = 1.0 / n as f64;
    let mut dangling = Vec::new();
    for i in 0..n {
        let row = matrix.row_mut(i);
        let degree = row.iter().filter(|&&v| v != 0.0).count();
        if degree == 0 {
            row.fill(uniform);
            dangling.push(i);
        } else {
            let share = 1.0 / degree as f64;
            for v in row.iter_mut().filter(|v| **v != 0.0) {
                *v = share;
            }
        }
    }

    Ok(StochasticMatrix { matrix, dangling })
}

fn distinct_links(n: usize, edges: &[Edge]) -> Result<HashSet<Edge>> {
    let mut links = HashSet::with_capacity(edges.len());
    for (idx, edge) in edges.iter().enumerate() {
        if edge.src >= n || edge.dst >= n {
            return Err(RankError::EdgeOutOfRange {
                line: idx + 1,
                src: edge.src + 1,
                dst: edge.dst + 1,
                n,
            });
        }
        links.insert(*edge);
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_row_is_uniform() {
        let s = build(2, &[Edge::new(0, 1)]).unwrap();
        assert_eq!(s.get(0, 0), 0.0);
        assert_eq!(s.get(0, 1), 1.0);
        assert_eq!(s.get(1, 0), 0.5);
        assert_eq!(s.get(1, 1), 0.5);
        assert_eq!(s.dangling(), &[1]);
    }

    #[test]
    fn duplicates_collapse() {
        let edges = [Edge::new(0, 1), Edge::new(0, 1), Edge::new(0, 2)];
        let s = build(3, &edges).unwrap();
        assert_eq!(s.get(0, 1), 0.5);
        assert_eq!(s.get(0, 2), 0.5);
        assert_eq!(out_degrees(3, &edges).unwrap(), vec![2, 0, 0]);
    }

    #[test]
    fn single_entity_self_row() {
        let s = build(1, &[]).unwrap();
        assert_eq!(s.get(0, 0), 1.0);
    }

    #[test]
    fn rejects_out_of_range() {
        let err = build(2, &[Edge::new(0, 2)]).unwrap_err();
        assert!(matches!(err, RankError::EdgeOutOfRange { dst: 3, n: 2, .. }));
    }

    #[test]
    fn rejects_empty() {
        assert!(build(0, &[]).is_err());
    }
}
