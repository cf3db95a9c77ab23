//! Whitespace tokenization
//!
//! Tokens are maximal runs of characters other than space, tab, newline and
//! carriage return. Other Unicode spacing (no-break space, vertical tab) is
//! part of the word. Punctuation stays
//! attached to the word it touches and casing is preserved; case folding is
//! a separate step (see [`canonical`]).

use crate::types::Token;

/// A whitespace-only tokenizer for corpora and input phrases
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into an ordered sequence of tokens
    ///
    /// Empty or all-whitespace text yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.push_tokens(text, &mut tokens);
        tokens
    }

    /// Tokenize a sequence of lines as one continuous text
    ///
    /// A line break separates words like any other whitespace, so the last
    /// word of one line is adjacent to the first word of the next. Offsets
    /// are relative to each line; `index` runs across all lines.
    pub fn tokenize_lines<I, S>(&self, lines: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        for line in lines {
            self.push_tokens(line.as_ref(), &mut tokens);
        }
        tokens
    }

    fn push_tokens(&self, text: &str, tokens: &mut Vec<Token>) {
        let base = text.as_ptr() as usize;
        for word in text.split(is_separator).filter(|w| !w.is_empty()) {
            let start = word.as_ptr() as usize - base;
            let index = tokens.len();
            tokens.push(Token::new(word, start, start + word.len(), index));
        }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Canonical (Unicode lowercase) form of a word
pub fn canonical(word: &str) -> String {
    word.to_lowercase()
}
