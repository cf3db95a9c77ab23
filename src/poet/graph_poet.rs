//! GraphPoet: a corpus word graph plus bridge-word poems
//!
//! The graph is built once, when the poet is created, and is read-only
//! afterward. `poem` takes `&self`, so one poet can serve many callers at
//! once; to pick up a new corpus, build a new poet and swap it in.

use crate::errors::Result;
use crate::graph::{WordGraph, WordGraphBuilder};
use crate::nlp::tokenizer::Tokenizer;
use crate::poet::bridge::BridgeInserter;
use crate::types::{PoetConfig, Token};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A word-adjacency graph built from a corpus, used to expand phrases
#[derive(Debug, Clone)]
pub struct GraphPoet {
    graph: WordGraph,
    corpus_words: Vec<String>,
    config: PoetConfig,
}

impl GraphPoet {
    /// Build a poet from corpus text with default config
    pub fn from_text(text: &str) -> Self {
        Self::build(&Tokenizer::new().tokenize(text), PoetConfig::default())
    }

    /// Build a poet from corpus lines with default config
    ///
    /// Words at the end of one line are adjacent to words at the start of
    /// the next.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(&Tokenizer::new().tokenize_lines(lines), PoetConfig::default())
    }

    /// Build a poet from a corpus file with default config
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_config(path, PoetConfig::default())
    }

    /// Build a poet from corpus text with custom config
    pub fn from_text_with_config(text: &str, config: PoetConfig) -> Result<Self> {
        Self::from_tokens_with_config(&Tokenizer::new().tokenize(text), config)
    }

    /// Build a poet from corpus lines with custom config
    pub fn from_lines_with_config<I, S>(lines: I, config: PoetConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokens_with_config(&Tokenizer::new().tokenize_lines(lines), config)
    }

    /// Build a poet from a corpus file with custom config
    pub fn from_path_with_config(path: impl AsRef<Path>, config: PoetConfig) -> Result<Self> {
        config.validate()?;

        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        debug!(path = %path.display(), lines = lines.len(), "loaded corpus");

        Ok(Self::build(&Tokenizer::new().tokenize_lines(&lines), config))
    }

    /// Build a poet from already-tokenized corpus text with custom config
    pub fn from_tokens_with_config(tokens: &[Token], config: PoetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(tokens, config))
    }

    fn build(tokens: &[Token], config: PoetConfig) -> Self {
        let graph = WordGraphBuilder::with_config(&config).build_parallel(tokens);
        let corpus_words = tokens.iter().map(Token::canonical).collect();
        Self {
            graph,
            corpus_words,
            config,
        }
    }

    /// The canonical corpus words, in corpus order, duplicates kept
    pub fn corpus_words(&self) -> &[String] {
        &self.corpus_words
    }

    /// The word graph
    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// The config this poet was built with
    pub fn config(&self) -> &PoetConfig {
        &self.config
    }

    /// A bridge inserter over this poet's graph
    pub fn inserter(&self) -> BridgeInserter<'_> {
        BridgeInserter::new(&self.graph).with_tie_break(self.config.tie_break)
    }

    /// Expand a phrase with bridge words
    pub fn poem(&self, input: &str) -> String {
        self.inserter().poem(input)
    }

    /// Expand many phrases in parallel; output order matches input order
    pub fn poems<S>(&self, inputs: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let inserter = self.inserter();
        inputs
            .par_iter()
            .map(|input| inserter.poem(input.as_ref()))
            .collect()
    }
}

/// Convenience function: build a poet from `corpus` and expand `input`
pub fn poem(corpus: &str, input: &str) -> String {
    GraphPoet::from_text(corpus).poem(input)
}
