//! Text processing: whitespace tokenization and case folding.

pub mod tokenizer;
