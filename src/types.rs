// src/types.rs
use serde::Serialize;

use crate::config::RelaxationMode;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// 0-based entity id.
    pub id: usize,
    pub name: String,
    pub score: f64,
}

/// Ranking plus solver diagnostics, handed to the reporters.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub entries: Vec<RankedEntry>,
    pub entity_count: usize,
    pub edge_count: usize,
    pub dangling_count: usize,
    pub damping: f64,
    pub mode: RelaxationMode,
    pub threads: usize,
    pub iterations: usize,
    pub error: f64,
    pub duration_ms: u64,
    /// Wall-clock solve time in seconds.
    pub solve_seconds: f64,
}

impl RankReport {
    #[must_use]
    pub fn top(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }
}
