//! # graph_poet
//!
//! Word-adjacency graphs and bridge-word poems.
//!
//! A corpus is split on whitespace, case-folded, and turned into a weighted
//! directed graph where the edge `a -> b` counts how often word `a` is
//! immediately followed by word `b`. Given an input phrase, a poet inserts
//! between each pair of adjacent words the corpus word that best bridges
//! them in two hops.
//!
//! ```
//! use graph_poet::GraphPoet;
//!
//! let poet = GraphPoet::from_text("To explore strange new worlds");
//! assert_eq!(poet.poem("Explore new worlds"), "Explore strange new worlds");
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: the mutable weighted digraph and the word graph builder
//! - [`nlp`]: whitespace tokenization and case folding
//! - [`poet`]: bridge selection and the [`GraphPoet`] facade

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod poet;
pub mod types;

// Re-export commonly used types
pub use errors::{PoetError, Result};
pub use types::{PoetConfig, TieBreak, Token, Weight};

// Re-export main functionality
pub use graph::{WeightedDiGraph, WordGraph, WordGraphBuilder};
pub use nlp::tokenizer::{canonical, Tokenizer};
pub use poet::{poem, Bridge, BridgeInserter, GraphPoet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
