//! Core types for graph_poet
//!
//! This module defines the data structures shared across the crate:
//! edge weights, tokens, and configuration.

use crate::errors::{PoetError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Weight
// ============================================================================

/// Edge weight. Stored weights are always positive; zero means "no edge".
///
/// The type is signed so that a negative weight can be rejected at the call
/// site with [`PoetError::InvalidWeight`] instead of wrapping silently.
pub type Weight = i64;

// ============================================================================
// Token
// ============================================================================

/// A whitespace-delimited token from a corpus or an input phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form, casing and punctuation untouched
    pub text: String,
    /// Byte offset (start) in the source text or line
    pub start: usize,
    /// Byte offset (end) in the source text or line
    pub end: usize,
    /// Position in the token sequence
    pub index: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The canonical (case-folded) form used as a graph vertex label
    pub fn canonical(&self) -> String {
        self.text.to_lowercase()
    }
}

// ============================================================================
// Tie-break rule
// ============================================================================

/// How equally-scored bridge candidates are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The lexically smallest canonical word wins
    #[default]
    Lexical,
    /// The lexically largest canonical word wins
    ReverseLexical,
}

impl TieBreak {
    /// Returns `Ordering::Greater` when `a` should be preferred over `b`
    /// among candidates with equal scores.
    pub fn prefer(self, a: &str, b: &str) -> Ordering {
        match self {
            TieBreak::Lexical => b.cmp(a),
            TieBreak::ReverseLexical => a.cmp(b),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for graph building and poem generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoetConfig {
    /// Tie-break rule for equally-scored bridge words
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Corpus size (in tokens) from which adjacency counting runs in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    1000
}

impl Default for PoetConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl PoetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold < 2 {
            return Err(PoetError::invalid_config(format!(
                "parallel_threshold must be >= 2, got {}",
                self.parallel_threshold
            )));
        }

        Ok(())
    }

    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builder method: set parallel build threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
