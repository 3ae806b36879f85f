//! Lexing
//!
//!     Declaration text is never fully tokenized. All the parsers in this crate need to know is
//!     whether a given character is real code, part of a comment, or part of a string literal,
//!     so that a `(` inside `// see foo(bar)` or a `,` inside `"a, b"` is never mistaken for
//!     structure. This module answers that question once per buffer.
//!
//! Two Stages
//!
//!     1. Delimiter tokenization using logos. See [tokens](tokens). Only the character
//!        sequences that can open or close a span are interesting (`//`, `/*`, `*/`, `"`,
//!        `"""`, line breaks); everything else is lumped together as text.
//!
//!     2. Span classification. See [scanner](scanner). A single left-to-right pass over the
//!        delimiter tokens with one open span, producing contiguous, non-overlapping lexemes
//!        that cover the whole buffer.
//!
//! Helpers
//!
//!     The [text](text) module holds the small searching and layout helpers (first code `(`,
//!     top-level `,`, first word, indentation) the parsers and the printer share.
//!
//! Known Limitations
//!
//!     String literals close at the next quote character. Backslash-escaped quotes are not
//!     special-cased, so `"a \" b"` is read as the literal `"a \"` followed by code.

pub mod scanner;
pub mod text;
pub mod tokens;

pub use scanner::{scan, Lexeme, LexemeKind, LexemeString};
pub use tokens::{tokenize, Delimiter};
