//! Graph data structures
//!
//! - [`weighted`]: the mutable weighted directed graph
//! - [`builder`]: word-adjacency graph construction from corpus tokens

pub mod builder;
pub mod weighted;

pub use builder::{WordGraph, WordGraphBuilder};
pub use weighted::WeightedDiGraph;
