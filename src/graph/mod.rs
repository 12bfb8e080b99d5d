// src/graph/mod.rs
//! Link graph model and ingestion.

pub mod parse;
pub mod rank;

use serde::Serialize;

use crate::error::{RankError, Result};

/// One ranked unit: a stable 0-based id and an opaque display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub id: usize,
    pub name: String,
}

/// Directed link `src -> dst`, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
}

impl Edge {
    #[must_use]
    pub const fn new(src: usize, dst: usize) -> Self {
        Self { src, dst }
    }
}

/// Entities plus the raw (possibly duplicated) edge list.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    pub entities: Vec<Entity>,
    pub edges: Vec<Edge>,
}

impl LinkGraph {
    /// Builds a graph from display names (id = position) and 0-based edges.
    ///
    /// # Errors
    /// Returns `EdgeOutOfRange` if an edge endpoint is not a valid entity id.
    pub fn from_parts<S: Into<String>>(names: Vec<S>, edges: Vec<Edge>) -> Result<Self> {
        let n = names.len();
        if let Some((idx, bad)) = edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.src >= n || e.dst >= n)
        {
            return Err(RankError::EdgeOutOfRange {
                line: idx + 1,
                src: bad.src + 1,
                dst: bad.dst + 1,
                n,
            });
        }
        let entities = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Entity {
                id,
                name: name.into(),
            })
            .collect();
        Ok(Self { entities, edges })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn name(&self, id: usize) -> Option<&str> {
        self.entities.get(id).map(|e| e.name.as_str())
    }
}
