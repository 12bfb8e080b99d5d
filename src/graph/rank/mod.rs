// src/graph/rank/mod.rs
pub mod builder;
pub mod matrix;
pub mod queries;
pub mod solver;
pub mod system;

pub use builder::StochasticMatrix;
pub use solver::{Solution, Solver};
pub use system::DampedSystem;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::graph::LinkGraph;
use crate::types::RankReport;

/// Orchestrates matrix construction, solving and ranking.
pub struct RankEngine {
    config: Config,
}

impl RankEngine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the full pipeline and returns the top-K report.
    ///
    /// # Errors
    /// Returns configuration errors before any matrix is built, `EdgeOutOfRange`
    /// for bad edges, and `NotConverged` if the solver hits its cap.
    pub fn rank(&self, graph: &LinkGraph) -> Result<RankReport> {
        self.config.validate()?;
        let solver = Solver::new(self.config.solver.clone())?;

        let (system, dangling_count) = self.assemble(graph)?;
        let solution = solver.solve(&system)?;
        info!(
            iterations = solution.iterations,
            error = solution.error,
            elapsed_ms = solution.elapsed.as_millis(),
            "relaxation converged"
        );

        let entries = queries::ranked_entries(graph, &solution.scores, self.config.report.top_k);
        Ok(RankReport {
            entries,
            entity_count: graph.len(),
            edge_count: graph.edges.len(),
            dangling_count,
            damping: system.damping(),
            mode: self.config.solver.mode,
            threads: solution.threads,
            iterations: solution.iterations,
            error: solution.error,
            duration_ms: u64::try_from(solution.elapsed.as_millis()).unwrap_or(u64::MAX),
            solve_seconds: solution.elapsed.as_secs_f64(),
        })
    }

    /// Runs the solver only and returns the full score vector.
    ///
    /// # Errors
    /// As [`RankEngine::rank`].
    pub fn scores(&self, graph: &LinkGraph) -> Result<Solution> {
        self.config.validate()?;
        let solver = Solver::new(self.config.solver.clone())?;
        let (system, _) = self.assemble(graph)?;
        solver.solve(&system)
    }

    fn assemble(&self, graph: &LinkGraph) -> Result<(DampedSystem, usize)> {
        // S is dropped once A exists; only one dense matrix is alive while solving
        let stochastic = builder::build(graph.len(), &graph.edges)?;
        let dangling_count = stochastic.dangling().len();
        debug!(
            n = stochastic.dim(),
            dangling = dangling_count,
            "built transition matrix"
        );
        let system = DampedSystem::assemble(&stochastic, self.config.solver.damping)?;
        Ok((system, dangling_count))
    }
}
