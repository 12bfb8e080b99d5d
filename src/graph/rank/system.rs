// src/graph/rank/system.rs
//! Damped linear system `A p = b` with `A = I - d*S^T` and `b = (1-d)/n`.

use super::builder::StochasticMatrix;
use super::matrix::{dot, DenseMatrix};
use crate::error::{RankError, Result};

#[derive(Debug, Clone)]
pub struct DampedSystem {
    a: DenseMatrix,
    b: Vec<f64>,
    damping: f64,
}

/// Validates a damping factor: finite and strictly inside `(0, 1)`.
///
/// # Errors
/// Returns `InvalidDamping` otherwise.
pub fn check_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}

impl DampedSystem {
    /// Derives `A` and `b` from the transition matrix in one pass.
    ///
    /// # Errors
    /// Returns `InvalidDamping` if `damping` is not in `(0, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn assemble(s: &StochasticMatrix, damping: f64) -> Result<Self> {
        check_damping(damping)?;

        let n = s.dim();
        let mut a = s.matrix().transpose();
        for i in 0..n {
            for (j, v) in a.row_mut(i).iter_mut().enumerate() {
                let identity = if i == j { 1.0 } else { 0.0 };
                *v = identity - damping * *v;
            }
        }
        let b = vec![(1.0 - damping) / n as f64; n];

        Ok(Self { a, b, damping })
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[must_use]
    pub fn a(&self) -> &DenseMatrix {
        &self.a
    }

    #[must_use]
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// `b[i] - A[i] . p`
    #[must_use]
    pub fn row_residual(&self, i: usize, p: &[f64]) -> f64 {
        self.b[i] - dot(self.a.row(i), p)
    }

    /// `||A p - b||_inf`
    #[must_use]
    pub fn residual_norm(&self, p: &[f64]) -> f64 {
        (0..self.dim())
            .map(|i| self.row_residual(i, p).abs())
            .fold(0.0, f64::max)
    }
}
