// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: edge {src} -> {dst} references an entity outside 1..={n}")]
    EdgeOutOfRange {
        line: usize,
        src: usize,
        dst: usize,
        n: usize,
    },

    #[error("damping factor must lie strictly between 0 and 1 (got {0})")]
    InvalidDamping(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("did not converge within {iterations} iterations (last error {error:e})")]
    NotConverged { iterations: usize, error: f64 },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RankError {
    /// Builds a parse error for a 1-based input line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// True for errors caused by the input data rather than the configuration.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::EdgeOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
