// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, OutputFormat, RelaxationMode, ReportConfig, SolverConfig};

use crate::error::{RankError, Result};
use crate::graph::rank::system::check_damping;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "linkrank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from `linkrank.toml` in the working directory, or defaults
    /// if there is none.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        io::load_local()
    }

    /// Parses a TOML document. Missing sections and keys take their defaults.
    ///
    /// # Errors
    /// Returns `Toml` on malformed input.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validates configuration before any matrix is built.
    ///
    /// # Errors
    /// Returns `InvalidDamping` or `InvalidConfig` for out-of-range settings.
    pub fn validate(&self) -> Result<()> {
        self.solver.validate()
    }
}

impl SolverConfig {
    /// # Errors
    /// Returns `InvalidDamping` unless `0 < damping < 1`, and `InvalidConfig`
    /// for a non-positive tolerance or a zero iteration cap.
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(RankError::InvalidConfig(format!(
                "tolerance must be finite and > 0 (got {})",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
