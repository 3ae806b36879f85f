//! Lexeme scanner
//!
//!     Classifies every byte of a buffer as source code, comment, or literal. The result is a
//!     list of [Lexeme]s that are contiguous, non-overlapping, never empty, and cover the whole
//!     buffer in order. Two neighbouring lexemes never share a kind: a closed string literal
//!     followed by another literal is merged into one span.
//!
//! Transitions
//!
//!     Only the source code state can open a span, checked in this order:
//!         `//`              line comment
//!         `/*`              block comment
//!         `"""` + newline   text literal (the three quotes belong to the literal)
//!         `"`               string literal
//!
//!     Each span closes on its own delimiter:
//!         line comment      at the line break, which is code again
//!         block comment     after `*/`
//!         string literal    after the next `"` (escapes are not special-cased)
//!         text literal      after the next `"""`
//!
//!     An unterminated span simply runs to the end of the buffer. Scanning never fails.

use super::tokens::{tokenize, Delimiter};
use std::ops::Range;

/// What a span of text is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    SourceCode,
    LineComment,
    BlockComment,
    StringLiteral,
    /// Triple-quoted, multi-line literal
    TextLiteral,
}

impl LexemeKind {
    pub fn is_code(&self) -> bool {
        matches!(self, LexemeKind::SourceCode)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, LexemeKind::LineComment | LexemeKind::BlockComment)
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(self, LexemeKind::StringLiteral | LexemeKind::TextLiteral)
    }
}

/// A classified byte range of the scanned buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub span: Range<usize>,
}

impl Lexeme {
    pub fn new(kind: LexemeKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.span.contains(&index)
    }
}

/// A buffer together with its span classification
#[derive(Debug, Clone)]
pub struct LexemeString<'a> {
    source: &'a str,
    lexemes: Vec<Lexeme>,
}

impl<'a> LexemeString<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexemes: classify(source),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// The text covered by a lexeme of this buffer
    pub fn text(&self, lexeme: &Lexeme) -> &'a str {
        &self.source[lexeme.span.clone()]
    }

    /// Kind of the span containing `index`, `None` at or past the end of the buffer
    pub fn kind_at(&self, index: usize) -> Option<LexemeKind> {
        if index >= self.source.len() {
            return None;
        }
        let position = self.lexemes.partition_point(|l| l.span.end <= index);
        self.lexemes
            .get(position)
            .filter(|l| l.contains(index))
            .map(|l| l.kind)
    }

    pub fn is_code(&self, index: usize) -> bool {
        self.kind_at(index).is_some_and(|k| k.is_code())
    }

    pub fn is_comment(&self, index: usize) -> bool {
        self.kind_at(index).is_some_and(|k| k.is_comment())
    }

    pub fn is_string_literal(&self, index: usize) -> bool {
        self.kind_at(index).is_some_and(|k| k.is_string_literal())
    }

    /// Comment lexemes in source order
    pub fn comments(&self) -> impl Iterator<Item = &Lexeme> + '_ {
        self.lexemes.iter().filter(|l| l.kind.is_comment())
    }

    /// Characters that are real code, paired with their byte index
    pub fn code_chars(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.source
            .char_indices()
            .filter(move |(index, _)| self.is_code(*index))
    }
}

/// Scan a buffer into its lexemes
pub fn scan(source: &str) -> LexemeString<'_> {
    LexemeString::new(source)
}

/// Accumulates lexemes while tracking the single open span
struct SpanBuilder {
    lexemes: Vec<Lexeme>,
    kind: LexemeKind,
    start: usize,
}

impl SpanBuilder {
    fn new() -> Self {
        Self {
            lexemes: Vec::new(),
            kind: LexemeKind::SourceCode,
            start: 0,
        }
    }

    /// Close the open span at `at` and open a span of `kind` there
    fn switch(&mut self, at: usize, kind: LexemeKind) {
        self.close(at);
        self.kind = kind;
        self.start = at;
    }

    fn close(&mut self, at: usize) {
        if at <= self.start {
            return;
        }
        let span = self.start..at;
        match self.lexemes.last_mut() {
            Some(last) if last.kind == self.kind && last.span.end == span.start => {
                last.span.end = span.end;
            }
            _ => self.lexemes.push(Lexeme::new(self.kind, span)),
        }
    }

    fn finish(mut self, end: usize) -> Vec<Lexeme> {
        self.close(end);
        self.lexemes
    }
}

fn starts_with_line_break(rest: &str) -> bool {
    rest.starts_with('\n') || rest.starts_with("\r\n")
}

fn classify(source: &str) -> Vec<Lexeme> {
    use LexemeKind::*;

    let mut builder = SpanBuilder::new();

    for (token, span) in tokenize(source) {
        match (builder.kind, token) {
            (SourceCode, Delimiter::LineCommentStart) => builder.switch(span.start, LineComment),
            (SourceCode, Delimiter::BlockCommentStart) => builder.switch(span.start, BlockComment),
            (SourceCode, Delimiter::BlockCommentEnd) => {
                // `*/` in code: its slash may still open a comment (`a*//b`, `a*/*b*/`)
                match source[span.end..].chars().next() {
                    Some('/') => builder.switch(span.start + 1, LineComment),
                    Some('*') => builder.switch(span.start + 1, BlockComment),
                    _ => {}
                }
            }
            (SourceCode, Delimiter::TripleQuote) => {
                if starts_with_line_break(&source[span.end..]) {
                    builder.switch(span.start, TextLiteral);
                } else {
                    // `""` is an empty literal and the third quote opens the next one
                    builder.switch(span.start, StringLiteral);
                }
            }
            (SourceCode, Delimiter::Quote) => builder.switch(span.start, StringLiteral),
            (LineComment, Delimiter::LineBreak) => builder.switch(span.start, SourceCode),
            (BlockComment, Delimiter::BlockCommentEnd) => builder.switch(span.end, SourceCode),
            // A closing quote followed by `""` is still literal text
            (StringLiteral, Delimiter::Quote | Delimiter::TripleQuote) => {
                builder.switch(span.end, SourceCode)
            }
            (TextLiteral, Delimiter::TripleQuote) => builder.switch(span.end, SourceCode),
            _ => {}
        }
    }

    builder.finish(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use LexemeKind::*;

    fn spans(source: &str) -> Vec<(LexemeKind, &str)> {
        let lex = scan(source);
        lex.lexemes()
            .iter()
            .map(|l| (l.kind, lex.text(l)))
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_lexemes() {
        assert!(scan("").lexemes().is_empty());
    }

    #[test]
    fn test_plain_code_is_one_span() {
        assert_eq!(spans("func a()"), vec![(SourceCode, "func a()")]);
    }

    #[test]
    fn test_line_comment_excludes_line_break() {
        assert_eq!(
            spans("a, // b, c\nd"),
            vec![
                (SourceCode, "a, "),
                (LineComment, "// b, c"),
                (SourceCode, "\nd")
            ]
        );
    }

    #[test]
    fn test_block_comment_includes_terminator() {
        assert_eq!(
            spans("a /* (b) */ c"),
            vec![
                (SourceCode, "a "),
                (BlockComment, "/* (b) */"),
                (SourceCode, " c")
            ]
        );
    }

    #[test]
    fn test_string_literal_includes_both_quotes() {
        assert_eq!(
            spans("x = \"a, b\" + y"),
            vec![
                (SourceCode, "x = "),
                (StringLiteral, "\"a, b\""),
                (SourceCode, " + y")
            ]
        );
    }

    #[test]
    fn test_comment_markers_inside_literal_are_text() {
        assert_eq!(
            spans("\"http://x\" // c"),
            vec![
                (StringLiteral, "\"http://x\""),
                (SourceCode, " "),
                (LineComment, "// c")
            ]
        );
    }

    #[test]
    fn test_text_literal_owns_its_delimiters() {
        let source = "let a = \"\"\"\nline \"q\"\n\"\"\" + b";
        assert_eq!(
            spans(source),
            vec![
                (SourceCode, "let a = "),
                (TextLiteral, "\"\"\"\nline \"q\"\n\"\"\""),
                (SourceCode, " + b")
            ]
        );
    }

    #[test]
    fn test_triple_quote_without_line_break_is_string_literals() {
        assert_eq!(
            spans("\"\"\"abc\" d"),
            vec![(StringLiteral, "\"\"\"abc\""), (SourceCode, " d")]
        );
    }

    #[test]
    fn test_adjacent_literals_are_merged() {
        assert_eq!(
            spans("\"a\"\"b\""),
            vec![(StringLiteral, "\"a\"\"b\"")]
        );
    }

    #[test]
    fn test_escaped_quote_is_not_special() {
        assert_eq!(
            spans("\"a \\\" b"),
            vec![(StringLiteral, "\"a \\\""), (SourceCode, " b")]
        );
    }

    #[test]
    fn test_unterminated_spans_run_to_end() {
        assert_eq!(spans("a /* b"), vec![(SourceCode, "a "), (BlockComment, "/* b")]);
        assert_eq!(spans("a \"b"), vec![(SourceCode, "a "), (StringLiteral, "\"b")]);
        assert_eq!(spans("// b"), vec![(LineComment, "// b")]);
    }

    #[test]
    fn test_star_slash_in_code_can_open_comment() {
        assert_eq!(
            spans("a*//b"),
            vec![(SourceCode, "a*"), (LineComment, "//b")]
        );
    }

    #[test]
    fn test_queries() {
        let lex = scan("f(a) // (b)");
        assert!(lex.is_code(1));
        assert!(lex.is_comment(7));
        assert!(!lex.is_code(7));
        assert!(!lex.is_code(lex.source().len()));
        assert!(!lex.is_comment(100));
        assert_eq!(lex.kind_at(100), None);

        let lex = scan("x = \"s\"");
        assert!(lex.is_string_literal(5));
        assert!(!lex.is_string_literal(0));
    }

    #[test]
    fn test_code_chars_skip_comments_and_literals() {
        let lex = scan("a/*b*/\"c\"d");
        let code: String = lex.code_chars().map(|(_, c)| c).collect();
        assert_eq!(code, "ad");
    }
}
