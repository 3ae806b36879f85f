//! Reference indexer for canonical verse
//!
//!     Reads back what the pretty printer writes, producing the same records an external
//!     indexer would: kind tags, byte ranges, body ranges, documentation comments, complete
//!     headers, selector-form function names.
//!
//! Layout Rules
//!
//!     A declaration starts at the first non-blank character after the previous one. Its
//!     header runs until a `{` in code or a line break in code, whichever comes first, as long
//!     as neither sits inside `()` or `[]`; multi-line argument lists therefore stay in one
//!     header. A line ending in `,` continues the header, and a `{` right after `=` is a
//!     closure default rather than a body. Any other `{` opens a body that ends at its
//!     matching `}`.
//!
//!     `///` lines right before a declaration are its documentation comment. Other comments
//!     are skipped and cut the documentation off.
//!
//!     Headers that start with anything other than the known modifiers and keywords (imports,
//!     statements, attributes) are skipped along with their body.

use super::kinds::DeclarationKind;
use super::record::{IndexedRecord, InheritedType};
use super::{IndexError, SourceIndexer};
use crate::decl::lexing::text::{first_word_with, matching_close, split_top_level};
use crate::decl::lexing::{scan, LexemeString};
use crate::decl::parsing::arguments::arguments_of;
use std::ops::Range;
use tracing::trace;

const ACCESS_MODIFIERS: &[&str] = &["private", "fileprivate", "internal", "public", "open"];

const IGNORED_MODIFIERS: &[&str] = &[
    "final",
    "override",
    "mutating",
    "required",
    "convenience",
    "indirect",
    "lazy",
    "weak",
];

const NAME_DIVIDERS: &[char] = &[' ', '\t', '\n', '(', ':', '<', '{', '=', ','];

#[derive(Debug, Clone, Copy, Default)]
pub struct VerseIndexer;

impl VerseIndexer {
    pub fn new() -> Self {
        Self
    }
}

impl SourceIndexer for VerseIndexer {
    fn name(&self) -> &str {
        "verse"
    }

    fn index(&self, source: &str) -> Result<Vec<IndexedRecord>, IndexError> {
        let lex = scan(source);
        Ok(index_region(&lex, 0..source.len(), false))
    }
}

/// Whether the declaration belongs to the type (`static`, `class`) or its instances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Instance,
    Static,
    ClassLevel,
}

/// Header split into its modifiers and the rest
struct Header<'a> {
    accessibility: &'a str,
    level: Level,
    keyword: &'a str,
    /// Text after the keyword
    rest: &'a str,
    /// Byte offset of `rest` within the header
    rest_offset: usize,
}

fn index_region(
    lex: &LexemeString<'_>,
    region: Range<usize>,
    in_container: bool,
) -> Vec<IndexedRecord> {
    let source = lex.source();
    let mut records = Vec::new();
    let mut doc: Vec<&str> = Vec::new();
    let mut pos = region.start;

    while pos < region.end {
        let Some(c) = source[pos..].chars().next() else {
            break;
        };
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        if lex.is_comment(pos) {
            let end = comment_end(lex, pos).min(region.end);
            match source[pos..end].strip_prefix("///") {
                Some(line) => doc.push(line.strip_prefix(' ').unwrap_or(line)),
                None => doc.clear(),
            }
            pos = end;
            continue;
        }

        let header_end = header_end(lex, pos, region.end);
        let (body, end) = if source[header_end..].starts_with('{') {
            match matching_close(lex, header_end).filter(|close| *close < region.end) {
                Some(close) => (Some(header_end + 1..close), close + 1),
                None => (Some(header_end + 1..region.end), region.end),
            }
        } else {
            (None, header_end)
        };

        let comment = (!doc.is_empty()).then(|| doc.join("\n"));
        doc.clear();

        let declaration = Declared {
            range: pos..end,
            header: pos..header_end,
            body,
            comment,
        };
        match describe(lex, declaration, in_container) {
            Some(record) => records.push(record),
            None => trace!(
                header = %source[pos..header_end].trim(),
                "skipping unrecognised header"
            ),
        }

        pos = end.max(pos + c.len_utf8());
    }

    records
}

/// Byte ranges of one declaration
struct Declared {
    range: Range<usize>,
    header: Range<usize>,
    body: Option<Range<usize>>,
    comment: Option<String>,
}

fn comment_end(lex: &LexemeString<'_>, pos: usize) -> usize {
    lex.lexemes()
        .iter()
        .find(|l| l.contains(pos))
        .map(|l| l.span.end)
        .unwrap_or(lex.source().len())
}

/// End of the header starting at `start`: the first code `{` or line break outside nesting
///
/// A `{` right after `=` opens a closure default and is skipped with its matching `}`. A line
/// that ends in `,` continues on the next one.
fn header_end(lex: &LexemeString<'_>, start: usize, limit: usize) -> usize {
    let source = lex.source();
    let mut depth = 0usize;
    let mut last = None;
    let mut index = start;

    while index < limit {
        let Some(c) = source[index..].chars().next() else {
            break;
        };
        if lex.is_code(index) {
            match c {
                '(' | '[' => depth += 1,
                ')' | ']' => depth = depth.saturating_sub(1),
                '{' if depth == 0 && last == Some('=') => {
                    match matching_close(lex, index).filter(|close| *close < limit) {
                        Some(close) => {
                            index = close + 1;
                            last = Some('}');
                            continue;
                        }
                        None => return limit,
                    }
                }
                '\n' if depth == 0 && last == Some(',') => {}
                '{' | '\n' if depth == 0 => return index,
                _ => {}
            }
            if !c.is_whitespace() {
                last = Some(c);
            }
        }
        index += c.len_utf8();
    }
    limit
}

fn split_header(header: &str) -> Header<'_> {
    let mut accessibility = "internal";
    let mut level = Level::Instance;
    let mut offset = 0;

    loop {
        let rest = &header[offset..];
        let word = first_word_with(rest, NAME_DIVIDERS);
        let after = rest[word.len()..].trim_start();
        let next = first_word_with(after, NAME_DIVIDERS);

        if ACCESS_MODIFIERS.contains(&word) {
            accessibility = word;
        } else if word == "static" {
            level = Level::Static;
        } else if word == "class" && matches!(next, "func" | "var" | "let") {
            level = Level::ClassLevel;
        } else if !IGNORED_MODIFIERS.contains(&word) || word.is_empty() {
            let rest_offset = offset + word.len();
            return Header {
                accessibility,
                level,
                keyword: word,
                rest: &header[rest_offset..],
                rest_offset,
            };
        }

        offset = header.len() - after.len();
    }
}

fn describe(
    lex: &LexemeString<'_>,
    declared: Declared,
    in_container: bool,
) -> Option<IndexedRecord> {
    let source = lex.source();
    let header_text = source[declared.header.clone()].trim_end();
    let header = split_header(header_text);
    let name = first_word_with(header.rest.trim_start(), NAME_DIVIDERS);

    let kind = match header.keyword {
        "class" => DeclarationKind::Class,
        "struct" => DeclarationKind::Struct,
        "protocol" => DeclarationKind::Protocol,
        "enum" => DeclarationKind::Enum,
        "case" if in_container => {
            return Some(enum_case(source, &declared, &header));
        }
        "func" | "init" | "init?" | "init!" => {
            return Some(function(&declared, header_text, &header, in_container));
        }
        "var" | "let" if in_container => match header.level {
            Level::Instance => DeclarationKind::InstanceVariable,
            Level::Static => DeclarationKind::StaticVariable,
            Level::ClassLevel => DeclarationKind::ClassVariable,
        },
        _ => return None,
    };

    let mut record = base_record(kind, name, &declared, header_text, &header);

    if kind.is_container() {
        let after_name = header.rest.trim_start()[name.len()..].trim_start();
        if let Some(inherited) = after_name.strip_prefix(':') {
            record.inherited_types = inherited
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| InheritedType {
                    name: t.to_string(),
                })
                .collect();
        }
        if let Some(body) = &declared.body {
            record.substructure = index_region(lex, body.clone(), true);
        }
    }

    Some(record)
}

fn base_record(
    kind: DeclarationKind,
    name: &str,
    declared: &Declared,
    header_text: &str,
    header: &Header<'_>,
) -> IndexedRecord {
    let mut record = IndexedRecord::new(kind, name);
    record.offset = declared.range.start;
    record.length = declared.range.len();
    record.parsed_declaration = Some(header_text.to_string());
    record.accessibility = Some(format!(
        "source.lang.swift.accessibility.{}",
        header.accessibility
    ));
    record.doc_comment = declared.comment.clone();
    if let Some(body) = &declared.body {
        record.body_offset = Some(body.start);
        record.body_length = Some(body.len());
    }
    record
}

fn function(
    declared: &Declared,
    header_text: &str,
    header: &Header<'_>,
    in_container: bool,
) -> IndexedRecord {
    let base = if header.keyword.starts_with("init") {
        header.keyword
    } else {
        first_word_with(header.rest.trim_start(), NAME_DIVIDERS)
    };
    let labels: String = arguments_of(header_text)
        .iter()
        .map(|argument| format!("{}:", argument.external_name))
        .collect();
    let name = format!("{base}({labels})");

    let kind = match (in_container, header.level) {
        (false, _) => DeclarationKind::FreeFunction,
        (true, Level::Instance) => DeclarationKind::InstanceMethod,
        (true, Level::Static) => DeclarationKind::StaticMethod,
        (true, Level::ClassLevel) => DeclarationKind::ClassMethod,
    };

    base_record(kind, &name, declared, header_text, header)
}

/// A `case` line; each comma-separated element becomes a sub-record
fn enum_case(source: &str, declared: &Declared, header: &Header<'_>) -> IndexedRecord {
    let header_text = source[declared.header.clone()].trim_end();
    let mut record = base_record(DeclarationKind::EnumCase, "", declared, header_text, header);
    record.name = None;
    record.doc_comment = None;

    let elements_start = declared.header.start + header.rest_offset;
    let elements_text = &header_text[header.rest_offset..];
    let lex = scan(elements_text);

    for (i, range) in split_top_level(&lex, ',').into_iter().enumerate() {
        let raw = &elements_text[range.clone()];
        let visible: Vec<(usize, char)> = raw
            .char_indices()
            .filter(|(at, ch)| !ch.is_whitespace() && !lex.is_comment(range.start + at))
            .collect();
        let (Some(&(leading, _)), Some(&(last, c))) = (visible.first(), visible.last()) else {
            continue;
        };
        let element = &raw[leading..last + c.len_utf8()];
        let name = first_word_with(element, NAME_DIVIDERS);

        let mut sub = IndexedRecord::new(DeclarationKind::EnumElement, name);
        sub.offset = elements_start + range.start + leading;
        sub.length = element.len();
        sub.parsed_declaration = Some(format!("case {element}"));
        if i == 0 {
            sub.doc_comment = declared.comment.clone();
        }
        record.substructure.push(sub);
    }

    record
}
