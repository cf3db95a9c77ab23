//! Word graph construction from a token sequence
//!
//! Every distinct canonical word becomes a vertex, and each time word `a`
//! is immediately followed by word `b` the edge `a -> b` gains one unit of
//! weight. Unlike a windowed co-occurrence graph the edges are directed and
//! self-loops are kept ("very very" strengthens `very -> very`).

use crate::graph::weighted::WeightedDiGraph;
use crate::types::{PoetConfig, Token};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A word-adjacency graph keyed by canonical (lowercased) words
pub type WordGraph = WeightedDiGraph<String>;

/// Builds a [`WordGraph`] from corpus tokens
#[derive(Debug, Clone)]
pub struct WordGraphBuilder {
    /// Token count from which adjacency counting runs in parallel
    parallel_threshold: usize,
}

impl Default for WordGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordGraphBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::with_config(&PoetConfig::default())
    }

    /// Create a builder from a config
    pub fn with_config(config: &PoetConfig) -> Self {
        Self {
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the graph sequentially
    pub fn build(&self, tokens: &[Token]) -> WordGraph {
        let words: Vec<String> = tokens.iter().map(Token::canonical).collect();
        let mut graph = Self::with_vertices(&words);

        for pair in words.windows(2) {
            graph.increment(pair[0].clone(), pair[1].clone(), 1);
        }

        debug!(
            tokens = tokens.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built word graph"
        );
        graph
    }

    /// Build the graph, counting adjacencies in parallel for large corpora
    ///
    /// Corpora below the parallel threshold go through [`build`]. The result
    /// is identical to [`build`] either way.
    ///
    /// [`build`]: WordGraphBuilder::build
    pub fn build_parallel(&self, tokens: &[Token]) -> WordGraph {
        // For small corpora, sequential is faster
        if tokens.len() < self.parallel_threshold {
            return self.build(tokens);
        }

        let words: Vec<String> = tokens.par_iter().map(Token::canonical).collect();

        // Count adjacencies per chunk, then merge the partial counts
        let counts: FxHashMap<(&str, &str), u32> = words
            .par_windows(2)
            .fold(FxHashMap::default, |mut acc, pair| {
                *acc.entry((pair[0].as_str(), pair[1].as_str())).or_insert(0) += 1;
                acc
            })
            .reduce(FxHashMap::default, |mut merged, partial| {
                for (pair, count) in partial {
                    *merged.entry(pair).or_insert(0) += count;
                }
                merged
            });

        let mut graph = Self::with_vertices(&words);
        for ((source, target), count) in counts {
            graph.increment(source.to_string(), target.to_string(), count);
        }

        debug!(
            tokens = tokens.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built word graph in parallel"
        );
        graph
    }

    /// A graph holding every distinct word as an isolated vertex
    fn with_vertices(words: &[String]) -> WordGraph {
        let mut graph = WordGraph::with_capacity(words.len() / 2);
        for word in words {
            if !graph.contains(word.as_str()) {
                graph.add(word.clone());
            }
        }
        graph
    }
}
