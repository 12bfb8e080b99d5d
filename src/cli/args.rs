use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, OutputFormat, RelaxationMode};

/// Link file ranked when none is named.
pub const DEFAULT_INPUT: &str = "hollins.dat";

#[derive(Parser)]
#[command(name = "linkrank", version, about = "Rank linked entities by damped random-walk importance")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute scores for a link file and print the top entries
    Rank(RankArgs),
    /// Write a default linkrank.toml to the current directory
    Init,
}

/// A bare `linkrank` ranks the default link file with default settings.
impl Default for Commands {
    fn default() -> Self {
        Self::Rank(RankArgs {
            file: PathBuf::from(DEFAULT_INPUT),
            ..RankArgs::default()
        })
    }
}

/// Options for the rank command. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct RankArgs {
    /// Link file: `n m`, n entity lines, m edge pairs
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,
    /// Read settings from this file instead of ./linkrank.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Damping factor, strictly between 0 and 1
    #[arg(long, short)]
    pub damping: Option<f64>,
    /// Stop once the summed shift of a pass drops below this
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Give up after this many passes
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Worker threads (0 = all cores)
    #[arg(long, short)]
    pub threads: Option<usize>,
    /// Number of entries to report
    #[arg(long = "top", short = 'k')]
    pub top_k: Option<usize>,
    #[arg(long, value_enum)]
    pub mode: Option<RelaxationMode>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl RankArgs {
    /// Overlays command-line values on a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(d) = self.damping {
            config.solver.damping = d;
        }
        if let Some(t) = self.tolerance {
            config.solver.tolerance = t;
        }
        if let Some(m) = self.max_iterations {
            config.solver.max_iterations = m;
        }
        if let Some(t) = self.threads {
            config.solver.threads = t;
        }
        if let Some(mode) = self.mode {
            config.solver.mode = mode;
        }
        if let Some(k) = self.top_k {
            config.report.top_k = k;
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
    }
}
