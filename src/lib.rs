//! Importance ranking of linked entities.
//!
//! Pipeline: link file -> row-stochastic matrix (dangling rows made uniform)
//! -> damped system `(I - d*S^T) p = (1-d)/n` -> parallel relaxation -> top-K.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod reporting;
pub mod types;

pub use config::Config;
pub use error::{RankError, Result};
pub use graph::rank::RankEngine;
pub use graph::{Edge, Entity, LinkGraph};
