// src/graph/rank/solver.rs
//! Parallel row relaxation for the damped system.
//!
//! Each pass computes, for every row `i`,
//! `shift_i = (b[i] - A[i] . p) / A[i][i]` and moves `p[i]` by `shift_i`.
//! The pass error is `sum |shift_i|`; iteration stops once it drops below the
//! tolerance. `A` is strictly column diagonally dominant for `d < 1`, so both
//! modes converge to the same fixed point.
//!
//! [`RelaxationMode::Jacobi`] reads a snapshot and writes a second buffer, so
//! results and iteration counts do not depend on the thread count.
//! [`RelaxationMode::Chaotic`] updates the shared vector in place: every row
//! has exactly one writer, but a row may see neighbours from this pass or the
//! previous one depending on scheduling. The trajectory is non-deterministic;
//! the converged vector agrees with Jacobi to within the tolerance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, trace};

use super::system::DampedSystem;
use crate::config::{RelaxationMode, SolverConfig};
use crate::error::{RankError, Result};

/// Converged score vector plus run diagnostics.
#[derive(Debug, Clone)]
pub struct Solution {
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// Error of the final pass.
    pub error: f64,
    pub elapsed: Duration,
    pub threads: usize,
}

pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// # Errors
    /// Returns `InvalidConfig` if the tolerance or iteration cap is unusable.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves starting from the uniform vector `1/n`.
    ///
    /// # Errors
    /// Returns `NotConverged` when the iteration cap is reached, or
    /// `ThreadPool` if the worker pool cannot be created.
    #[allow(clippy::cast_precision_loss)]
    pub fn solve(&self, system: &DampedSystem) -> Result<Solution> {
        let n = system.dim();
        self.solve_from(system, vec![1.0 / n as f64; n])
    }

    /// Solves starting from a caller-supplied guess.
    ///
    /// # Errors
    /// As [`Solver::solve`], plus `DimensionMismatch` if `initial` has the wrong length.
    pub fn solve_from(&self, system: &DampedSystem, initial: Vec<f64>) -> Result<Solution> {
        if initial.len() != system.dim() {
            return Err(RankError::DimensionMismatch {
                expected: system.dim(),
                actual: initial.len(),
            });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()?;
        let threads = pool.current_num_threads();
        debug!(
            n = system.dim(),
            threads,
            mode = ?self.config.mode,
            "starting relaxation"
        );

        let start = Instant::now();
        let (scores, iterations, error) = pool.install(|| match self.config.mode {
            RelaxationMode::Jacobi => self.run_jacobi(system, initial),
            RelaxationMode::Chaotic => self.run_chaotic(system, &initial),
        })?;

        Ok(Solution {
            scores,
            iterations,
            error,
            elapsed: start.elapsed(),
            threads,
        })
    }

    fn run_jacobi(&self, system: &DampedSystem, initial: Vec<f64>) -> Result<(Vec<f64>, usize, f64)> {
        let n = system.dim();
        let mut p = initial;
        let mut next = vec![0.0; n];
        let mut shifts = vec![0.0; n];

        let (iterations, error) = self.iterate(|| {
            jacobi_pass(system, &p, &mut next, &mut shifts);
            std::mem::swap(&mut p, &mut next);
            // sequential sum keeps the error bit-identical across thread counts
            shifts.iter().map(|s| s.abs()).sum()
        })?;
        Ok((p, iterations, error))
    }

    fn run_chaotic(&self, system: &DampedSystem, initial: &[f64]) -> Result<(Vec<f64>, usize, f64)> {
        let shared: Vec<AtomicU64> = initial
            .iter()
            .map(|v| AtomicU64::new(v.to_bits()))
            .collect();

        let (iterations, error) = self.iterate(|| chaotic_pass(system, &shared))?;
        let scores = shared
            .into_iter()
            .map(|cell| f64::from_bits(cell.into_inner()))
            .collect();
        Ok((scores, iterations, error))
    }

    /// Runs passes until the error drops below tolerance or the cap is hit.
    fn iterate<F>(&self, mut pass: F) -> Result<(usize, f64)>
    where
        F: FnMut() -> f64,
    {
        let mut iterations = 0;
        loop {
            let error = pass();
            iterations += 1;
            trace!(iteration = iterations, error, "relaxation pass");

            if error < self.config.tolerance {
                return Ok((iterations, error));
            }
            if iterations >= self.config.max_iterations {
                return Err(RankError::NotConverged { iterations, error });
            }
        }
    }
}

fn jacobi_pass(system: &DampedSystem, p: &[f64], next: &mut [f64], shifts: &mut [f64]) {
    next.par_iter_mut()
        .zip(shifts.par_iter_mut())
        .enumerate()
        .for_each(|(i, (slot, shift))| {
            *shift = system.row_residual(i, p) / system.a().get(i, i);
            *slot = p[i] + *shift;
        });
}

fn chaotic_pass(system: &DampedSystem, shared: &[AtomicU64]) -> f64 {
    let a = system.a();
    let b = system.b();
    (0..shared.len())
        .into_par_iter()
        .map(|i| {
            let row = a.row(i);
            let ap: f64 = row
                .iter()
                .zip(shared)
                .map(|(coef, cell)| coef * load(cell))
                .sum();
            let shift = (b[i] - ap) / row[i];
            // row i is the only writer of cell i
            store(&shared[i], load(&shared[i]) + shift);
            shift.abs()
        })
        .sum()
}

fn load(cell: &AtomicU64) -> f64 {
    f64::from_bits(cell.load(Ordering::Relaxed))
}

fn store(cell: &AtomicU64, value: f64) {
    cell.store(value.to_bits(), Ordering::Relaxed);
}
