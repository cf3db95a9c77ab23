//! Bridge-word insertion
//!
//! For two adjacent input words `a` and `b`, a bridge is a corpus word `x`
//! with edges `a -> x` and `x -> b`. Its score is the product of the two
//! edge weights. The highest-scoring bridge is inserted between `a` and `b`;
//! equal scores are ordered by the configured [`TieBreak`], never by hash
//! iteration order, so the same graph and input always give the same poem.

use crate::graph::WordGraph;
use crate::nlp::tokenizer::{canonical, Tokenizer};
use crate::types::{TieBreak, Weight};
use std::cmp::Ordering;
use tracing::trace;

/// A selected bridge word and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    /// Canonical (lowercased) corpus word
    pub word: String,
    /// Product of the two edge weights
    pub score: u128,
}

/// Inserts bridge words into phrases using a read-only word graph
#[derive(Debug, Clone, Copy)]
pub struct BridgeInserter<'g> {
    graph: &'g WordGraph,
    tie_break: TieBreak,
    tokenizer: Tokenizer,
}

impl<'g> BridgeInserter<'g> {
    /// Create an inserter over a built graph, with the default tie-break
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            tie_break: TieBreak::default(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Builder method: set tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Find the best bridge from `from` to `to`
    ///
    /// Both words are case-folded before lookup.
    pub fn bridge(&self, from: &str, to: &str) -> Option<Bridge> {
        self.select(&canonical(from), &canonical(to))
    }

    /// Expand a phrase by inserting a bridge word between each adjacent pair
    ///
    /// Input words are emitted exactly as written; inserted words use their
    /// canonical form. Words are joined by single spaces. A phrase with fewer
    /// than two words is returned unchanged.
    pub fn poem(&self, input: &str) -> String {
        let tokens = self.tokenizer.tokenize(input);
        if tokens.len() <= 1 {
            return input.to_string();
        }

        let folded: Vec<String> = tokens.iter().map(|t| t.canonical()).collect();
        let bridges: Vec<Option<Bridge>> = folded
            .windows(2)
            .map(|pair| self.select(&pair[0], &pair[1]))
            .collect();

        let mut words: Vec<&str> = Vec::with_capacity(tokens.len() * 2 - 1);

        for (token, bridge) in tokens.iter().zip(&bridges) {
            words.push(&token.text);
            if let Some(bridge) = bridge {
                words.push(&bridge.word);
            }
        }
        if let Some(last) = tokens.last() {
            words.push(&last.text);
        }

        words.join(" ")
    }

    fn select(&self, from: &str, to: &str) -> Option<Bridge> {
        let mut best: Option<(&String, u128)> = None;

        for (candidate, first) in self.graph.out_edges(from) {
            let second = self.graph.weight(candidate.as_str(), to);
            if first <= 0 || second <= 0 {
                continue;
            }

            let score = bridge_score(first, second);
            let better = match best {
                None => true,
                Some((current, best_score)) => {
                    score
                        .cmp(&best_score)
                        .then_with(|| self.tie_break.prefer(candidate, current))
                        == Ordering::Greater
                }
            };
            if better {
                best = Some((candidate, score));
            }
        }

        best.map(|(word, score)| {
            trace!(from, to, bridge = %word, score = %score, "selected bridge");
            Bridge {
                word: word.clone(),
                score,
            }
        })
    }
}

fn bridge_score(first: Weight, second: Weight) -> u128 {
    u128::from(first.unsigned_abs()) * u128::from(second.unsigned_abs())
}
