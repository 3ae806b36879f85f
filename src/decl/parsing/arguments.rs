//! Argument list parser
//!
//!     Turns the inside of a parenthesised argument list into [ArgumentDescription]s:
//!
//!         personId id: Int, // @url person_id
//!         fullPayload: Int = 0 // @query full_payload
//!
//!     The list is split on commas that are real code and not nested in `()` or `[]`, so
//!     commas inside comments, literals, tuples and dictionary literals stay put. Commas
//!     inside `<...>` still split; multi-parameter generic argument types are not supported.
//!
//!     Each comment is attached to the argument whose code comes before it, which is where a
//!     trailing `// ...` naturally sits. A comment in front of every argument belongs to the
//!     first one.

use crate::decl::lexing::text::{
    find_in_code, find_top_level, first_word, matching_close, split_top_level,
    strip_comment_marker,
};
use crate::decl::lexing::{scan, LexemeString};
use crate::decl::model::ArgumentDescription;
use crate::decl::parsing::{parse_annotations, types::deduce_type};
use std::ops::Range;

/// Text between the first code `(` of `header` and its matching `)`
///
/// A header without parentheses has an empty argument list. An unclosed list runs to the end
/// of the header.
pub fn extract_raw_argument_list(header: &str) -> String {
    let lex = scan(header);
    let Some(open) = find_in_code(&lex, '(') else {
        return String::new();
    };
    let close = matching_close(&lex, open).unwrap_or(header.len());
    header[open + 1..close].to_string()
}

/// Arguments declared in a function header
pub fn arguments_of(header: &str) -> Vec<ArgumentDescription> {
    parse_arguments(&extract_raw_argument_list(header))
}

/// Parse the inside of an argument list
pub fn parse_arguments(raw: &str) -> Vec<ArgumentDescription> {
    let lex = scan(raw);

    // (code text, index of its first code character)
    let segments: Vec<(String, usize)> = split_top_level(&lex, ',')
        .into_iter()
        .filter_map(|range| segment_code(&lex, range))
        .collect();

    if segments.is_empty() {
        return Vec::new();
    }

    let mut comments: Vec<Vec<&str>> = vec![Vec::new(); segments.len()];
    for comment in lex.comments() {
        let owner = segments
            .iter()
            .rposition(|(_, start)| *start < comment.span.start)
            .unwrap_or(0);
        let text = strip_comment_marker(lex.text(comment));
        if !text.is_empty() {
            comments[owner].push(text);
        }
    }

    segments
        .iter()
        .zip(comments)
        .map(|((code, _), comments)| {
            let comment = (!comments.is_empty()).then(|| comments.join(" "));
            parse_argument(code, comment)
        })
        .collect()
}

/// Code of one comma-separated segment with comments removed and line breaks flattened
fn segment_code(lex: &LexemeString<'_>, range: Range<usize>) -> Option<(String, usize)> {
    let mut code = String::new();
    let mut first = None;

    for (index, c) in lex.source()[range.clone()].char_indices() {
        let index = range.start + index;
        if lex.is_comment(index) {
            continue;
        }
        if first.is_none() && !c.is_whitespace() {
            first = Some(index);
        }
        code.push(if c == '\n' || c == '\r' { ' ' } else { c });
    }

    let code = code.trim();
    first.map(|first| (code.to_string(), first))
}

fn parse_argument(code: &str, comment: Option<String>) -> ArgumentDescription {
    let lex = scan(code);

    let names = match find_in_code(&lex, ':') {
        Some(colon) => code[..colon].trim(),
        None => code.trim(),
    };
    let external_name = first_word(names).to_string();
    let internal_name = match names.split_once(' ') {
        Some((_, internal)) => internal.trim().to_string(),
        None => external_name.clone(),
    };

    let default_value = find_top_level(&lex, '=')
        .map(|equals| code[equals + 1..].trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    ArgumentDescription {
        external_name,
        internal_name,
        type_description: deduce_type(code),
        default_value,
        annotations: comment.as_deref().map(parse_annotations).unwrap_or_default(),
        comment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::model::{AnnotationLookup, TypeDescription as T};

    #[test]
    fn test_extract_raw_argument_list() {
        assert_eq!(
            extract_raw_argument_list("func get(id: Int) -> Person"),
            "id: Int"
        );
        assert_eq!(
            extract_raw_argument_list("func f(a: Int = g(1), b: Int)"),
            "a: Int = g(1), b: Int"
        );
        assert_eq!(
            extract_raw_argument_list("func f(/* (x) */ a: Int)"),
            "/* (x) */ a: Int"
        );
        assert_eq!(extract_raw_argument_list("var a: Int"), "");
        assert_eq!(extract_raw_argument_list("func f(a: Int"), "a: Int");
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_arguments("").is_empty());
        assert!(parse_arguments("  \n ").is_empty());
    }

    #[test]
    fn test_names() {
        let arguments = parse_arguments("personId id: Int, name: String, _ value: Bool");
        let names: Vec<(&str, &str)> = arguments
            .iter()
            .map(|a| (a.external_name.as_str(), a.internal_name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("personId", "id"), ("name", "name"), ("_", "value")]
        );
    }

    #[test]
    fn test_types_and_defaults() {
        let arguments = parse_arguments("a: Int = 0, b: [String: Int] = [:], c = \"x, y\"");
        assert_eq!(arguments.len(), 3);
        assert_eq!(arguments[0].type_description, T::Integer);
        assert_eq!(arguments[0].default_value.as_deref(), Some("0"));
        assert_eq!(arguments[1].type_description, T::map(T::String, T::Integer));
        assert_eq!(arguments[1].default_value.as_deref(), Some("[:]"));
        assert_eq!(arguments[2].type_description, T::String);
        assert_eq!(arguments[2].default_value.as_deref(), Some("\"x, y\""));
    }

    #[test]
    fn test_comment_with_comma_does_not_split() {
        let raw = "\n    personId id: Int, // @url person_id, required\n    fullPayload: Int = 0 // @query full_payload\n";
        let arguments = parse_arguments(raw);
        assert_eq!(arguments.len(), 2);
        assert_eq!(
            arguments[0].comment.as_deref(),
            Some("@url person_id, required")
        );
        assert_eq!(
            arguments[0]
                .annotations
                .find("url")
                .and_then(|a| a.value.as_deref()),
            Some("person_id,")
        );
        assert_eq!(
            arguments[1].comment.as_deref(),
            Some("@query full_payload")
        );
        assert!(arguments[1].annotations.has("query"));
    }

    #[test]
    fn test_leading_comment_goes_to_first_argument() {
        let arguments = parse_arguments("/* ids */ a: Int, b: Int");
        assert_eq!(arguments[0].comment.as_deref(), Some("ids"));
        assert_eq!(arguments[1].comment, None);
    }

    #[test]
    fn test_multi_line_argument() {
        let arguments = parse_arguments("a:\n    Int,\n    b: String");
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[0].external_name, "a");
        assert_eq!(arguments[0].type_description, T::Integer);
    }

    #[test]
    fn test_closure_argument_keeps_nested_commas() {
        let arguments = parse_arguments("completion: (Int, String) -> Void, flag: Bool");
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[1].external_name, "flag");
    }

    #[test]
    fn test_arguments_of_header() {
        let arguments = arguments_of("func get(id: Int) // (not: Args)");
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments[0].external_name, "id");
    }
}
