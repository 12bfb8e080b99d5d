use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How rows read the shared score vector during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RelaxationMode {
    /// Read from a snapshot, write to a second buffer, swap after each pass.
    #[default]
    Jacobi,
    /// Update the shared vector in place while other rows read it.
    Chaotic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Worker count; 0 uses the available hardware parallelism.
    #[serde(default)]
    pub threads: usize,
    #[serde(default)]
    pub mode: RelaxationMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            threads: 0,
            mode: RelaxationMode::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            format: OutputFormat::default(),
        }
    }
}

const fn default_damping() -> f64 { 0.75 }
const fn default_tolerance() -> f64 { 1e-6 }
const fn default_max_iterations() -> usize { 10_000 }
const fn default_top_k() -> usize { 10 }

/// On-disk layout of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub report: ReportConfig,
}
