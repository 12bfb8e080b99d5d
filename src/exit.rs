// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Ranking completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, worker pool).
    Error = 1,
    /// Input file is malformed or references unknown entities.
    InvalidInput = 2,
    /// Damping factor, tolerance or other settings are out of range.
    InvalidConfig = 3,
    /// The solver hit its iteration cap before reaching tolerance.
    NotConverged = 4,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&RankError> for LinkRankExit {
    fn from(err: &RankError) -> Self {
        match err {
            RankError::Parse { .. } | RankError::EdgeOutOfRange { .. } => Self::InvalidInput,
            RankError::InvalidDamping(_)
            | RankError::InvalidConfig(_)
            | RankError::Toml(_)
            | RankError::DimensionMismatch { .. } => Self::InvalidConfig,
            RankError::NotConverged { .. } => Self::NotConverged,
            RankError::Io { .. } | RankError::ThreadPool(_) => Self::Error,
        }
    }
}

impl From<&anyhow::Error> for LinkRankExit {
    fn from(err: &anyhow::Error) -> Self {
        err.downcast_ref::<RankError>()
            .map_or(Self::Error, Self::from)
    }
}
