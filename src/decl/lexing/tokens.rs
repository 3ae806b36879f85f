//! Delimiter tokens
//!
//! The scanner only cares about the character sequences that can open or close a comment or a
//! literal. These are recognised with logos; every other run of characters is a single `Text`
//! token so the token stream stays short even for long bodies.
use logos::Logos;

/// Span delimiters recognised in declaration text
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    #[token("//")]
    LineCommentStart,

    #[token("/*")]
    BlockCommentStart,

    #[token("*/")]
    BlockCommentEnd,

    // Whether this opens a text literal depends on the character after it, which the
    // scanner checks; logos only sees the three quotes.
    #[token("\"\"\"")]
    TripleQuote,

    #[token("\"")]
    Quote,

    #[token("\n")]
    LineBreak,

    #[token("/")]
    Slash,

    #[token("*")]
    Star,

    #[regex(r#"[^/*"\n]+"#)]
    Text,
}

/// Tokenize text into delimiter tokens with their byte ranges
///
/// Every byte of the input belongs to exactly one token, so the ranges are contiguous.
pub fn tokenize(source: &str) -> Vec<(Delimiter, logos::Span)> {
    let mut lexer = Delimiter::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
