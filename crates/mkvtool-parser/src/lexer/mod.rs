//! Logos-based lexer for release-name stems.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// A tokenized release-name stem.
///
/// Characters no pattern accepts (`!`, `,`, `+`, ...) are dropped from the
/// token list; spans always index the original input, so the title can be
/// cut from the raw text with that punctuation intact.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Tokenize the whole input immediately.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
            .collect();
        Self { tokens, input }
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }

    /// Get the original input string.
    pub fn input(&self) -> &'src str {
        self.input
    }
}

/// Find a leading `[...]` group, as used by fansub releases
/// (`[Group] Title - 01.mkv`).
///
/// Returns the span of the whole group and of its content.
pub fn leading_bracket_group(input: &str) -> Option<(Range<usize>, Range<usize>)> {
    let rest = input.strip_prefix('[')?;
    let close = rest.find(']')?;
    Some((0..close + 2, 1..close + 1))
}
