//! Text helpers shared by the parsers and the printer
//!
//! Every structural search here goes through a [LexemeString] so that punctuation inside
//! comments and literals is invisible. The layout helpers (`indent`, `prefix_lines`,
//! `normalize_body`) work on plain text.

use super::scanner::LexemeString;
use std::ops::Range;

/// Characters that end a word for name and type lookups
pub const WORD_DIVIDERS: &[char] = &['\n', ' ', '.', ',', ';', ':'];

/// Leading run of `text` up to the first divider
pub fn first_word_with<'a>(text: &'a str, dividers: &[char]) -> &'a str {
    match text.find(|c: char| dividers.contains(&c)) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Leading run of `text` up to the first of [WORD_DIVIDERS]
pub fn first_word(text: &str) -> &str {
    first_word_with(text, WORD_DIVIDERS)
}

/// Byte index of the first code occurrence of `needle`
pub fn find_in_code(lex: &LexemeString<'_>, needle: char) -> Option<usize> {
    find_in_code_from(lex, needle, 0)
}

/// Byte index of the first code occurrence of `needle` at or after `from`
pub fn find_in_code_from(lex: &LexemeString<'_>, needle: char, from: usize) -> Option<usize> {
    lex.code_chars()
        .find(|(index, c)| *index >= from && *c == needle)
        .map(|(index, _)| index)
}

/// Byte index of the first code occurrence of `needle` outside `()` and `[]` nesting
pub fn find_top_level(lex: &LexemeString<'_>, needle: char) -> Option<usize> {
    top_level_positions(lex, needle).into_iter().next()
}

/// Every code occurrence of `needle` outside `()` and `[]` nesting
pub fn top_level_positions(lex: &LexemeString<'_>, needle: char) -> Vec<usize> {
    let mut depth = 0usize;
    let mut positions = Vec::new();

    for (index, c) in lex.code_chars() {
        if c == needle && depth == 0 {
            positions.push(index);
            continue;
        }
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    positions
}

/// Split the buffer on top-level code occurrences of `separator`
pub fn split_top_level(lex: &LexemeString<'_>, separator: char) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for position in top_level_positions(lex, separator) {
        ranges.push(start..position);
        start = position + separator.len_utf8();
    }
    ranges.push(start..lex.source().len());
    ranges
}

/// Index of the code bracket closing the one opened at `open_index`
///
/// Only the bracket kind found at `open_index` is counted, so `{` matching ignores
/// parentheses. Returns `None` when `open_index` is not an opening bracket in code or the
/// bracket is never closed.
pub fn matching_close(lex: &LexemeString<'_>, open_index: usize) -> Option<usize> {
    let open = lex.source()[open_index..].chars().next()?;
    let close = match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        _ => return None,
    };
    if !lex.is_code(open_index) {
        return None;
    }

    let mut depth = 0usize;
    for (index, c) in lex.code_chars() {
        if index < open_index {
            continue;
        }
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Whether a code `(` is followed somewhere by a code `)`
pub fn has_round_brackets(lex: &LexemeString<'_>) -> bool {
    find_in_code(lex, '(')
        .and_then(|open| find_in_code_from(lex, ')', open))
        .is_some()
}

/// The buffer with comments removed; literals are kept
pub fn code_text(lex: &LexemeString<'_>) -> String {
    lex.lexemes()
        .iter()
        .filter(|l| !l.kind.is_comment())
        .map(|l| lex.text(l))
        .collect()
}

/// Comment text without its `//`, `///` or `/* */` markers, trimmed
pub fn strip_comment_marker(comment: &str) -> &str {
    let trimmed = comment.trim();
    if let Some(block) = trimmed.strip_prefix("/*") {
        let block = block.strip_suffix("*/").unwrap_or(block);
        return block.trim_matches('*').trim();
    }
    trimmed.trim_start_matches('/').trim()
}

/// Prefix every non-blank line with `unit`; blank lines come out empty
pub fn indent(text: &str, unit: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{unit}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line with `prefix`, blank ones included
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body text with outer blank lines dropped, common indentation removed and trailing
/// whitespace trimmed from every line
pub fn normalize_body(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return String::new();
    };
    let lines = &lines[first..=last];

    let margin = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                l[margin..].trim_end()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::lexing::scan;

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("model\nrest"), "model");
        assert_eq!(first_word("url person_id"), "url");
        assert_eq!(first_word("name: Int"), "name");
        assert_eq!(first_word(""), "");
        assert_eq!(first_word_with("a.b c", &[' ']), "a.b");
    }

    #[test]
    fn test_find_in_code_skips_comments() {
        let lex = scan("// f(x)\nfunc g(y)");
        assert_eq!(find_in_code(&lex, '('), Some(14));
        assert_eq!(find_in_code_from(&lex, ')', 15), Some(16));
        assert_eq!(find_in_code(&lex, '{'), None);
    }

    #[test]
    fn test_top_level_positions_ignore_nesting() {
        let lex = scan("a: [Int: (x, y)], b = f(1, 2), \"c, d\"");
        assert_eq!(top_level_positions(&lex, ','), vec![16, 29]);
        assert_eq!(find_top_level(&lex, ':'), Some(1));
    }

    #[test]
    fn test_split_top_level() {
        let lex = scan("a, b // x, y\n, c");
        let parts: Vec<&str> = split_top_level(&lex, ',')
            .into_iter()
            .map(|r| &lex.source()[r])
            .collect();
        assert_eq!(parts, vec!["a", " b // x, y\n", " c"]);
    }

    #[test]
    fn test_matching_close() {
        let lex = scan("f { a { \"}\" } // }\n}");
        assert_eq!(matching_close(&lex, 2), Some(19));
        assert_eq!(matching_close(&lex, 0), None);
        assert_eq!(matching_close(&scan("{ open"), 0), None);
    }

    #[test]
    fn test_has_round_brackets() {
        assert!(has_round_brackets(&scan("get(id:)")));
        assert!(!has_round_brackets(&scan("get")));
        assert!(!has_round_brackets(&scan("get // ()")));
        assert!(!has_round_brackets(&scan(")(")));
    }

    #[test]
    fn test_code_text_and_comment_markers() {
        let lex = scan("a: Int, // note\nb: \"//\"");
        assert_eq!(code_text(&lex), "a: Int, \nb: \"//\"");
        assert_eq!(strip_comment_marker("// @url person_id "), "@url person_id");
        assert_eq!(strip_comment_marker("/// doc"), "doc");
        assert_eq!(strip_comment_marker("/** block */"), "block");
    }

    #[test]
    fn test_indent_leaves_blank_lines_empty() {
        assert_eq!(indent("a\n\nb", "    "), "    a\n\n    b");
        assert_eq!(indent("", "    "), "");
    }

    #[test]
    fn test_prefix_lines() {
        assert_eq!(prefix_lines("a\n\nb", "/// "), "/// a\n/// \n/// b");
    }

    #[test]
    fn test_normalize_body() {
        let body = "\n        let a = 1\n\n            return a  \n    ";
        assert_eq!(normalize_body(body), "let a = 1\n\n    return a");
        assert_eq!(normalize_body("  \n  "), "");
        assert_eq!(normalize_body(""), "");
    }
}
