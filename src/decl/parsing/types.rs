//! Type grammar parser
//!
//!     Type expressions are parsed top-down on the trimmed text, first rule wins:
//!
//!         T?              Optional(T)
//!         Name<T>         Generic(Name, [T])         when `<` comes before any `[`
//!         [K: V]          Map(K, V)                  top-level `:` inside the brackets
//!         [T]             Array(T)
//!         Bool Float Double Date Data String Void    exact keywords
//!         ...Int...       Integer                    any name containing `Int`
//!         Name            Object(Name)               first word, trailing `?` dropped
//!
//!     Generics capture one constraint: everything between the angle brackets is parsed as a
//!     single type, so `Dictionary<String, Int>` does not split its parameters.
//!
//! Literal Inference
//!
//!     When a declaration has no explicit type, the default value decides, again first rule
//!     wins: anything with `[` is an anonymous object (collections are not inferred), then
//!     quoted text, decimal, integer, boolean, and `Name(...)` construction. The rules are
//!     deliberately loose; `isTrue == other` counts as a boolean.

use crate::decl::lexing::{scan, text::first_word, LexemeString};
use crate::decl::model::TypeDescription;
use once_cell::sync::Lazy;
use regex::Regex;

static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"(.*)"$"#).unwrap());

static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)$").unwrap());

static INTEGER_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)$").unwrap());

static CONSTRUCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\((.*)\)$").unwrap());

/// Parse a type expression such as `[String: [Int]]?`
pub fn parse_type(raw: &str) -> TypeDescription {
    let raw = raw.trim();

    if let Some(wrapped) = raw.strip_suffix('?') {
        return TypeDescription::optional(parse_type(wrapped));
    }

    let angle = raw.find('<');
    let square = raw.find('[');

    if let Some(open) = angle {
        if square.map_or(true, |square| open < square) {
            if let Some(close) = closing(raw, open) {
                let name = raw[..open].trim();
                let constraint = parse_type(&raw[open + 1..close]);
                return TypeDescription::generic(name, vec![constraint]);
            }
        }
    }

    if let Some(open) = square {
        if let Some(close) = closing(raw, open) {
            let inner = &raw[open + 1..close];
            return match top_level_colon(inner) {
                Some(colon) => TypeDescription::map(
                    parse_type(&inner[..colon]),
                    parse_type(&inner[colon + 1..]),
                ),
                None => TypeDescription::array(parse_type(inner)),
            };
        }
    }

    if let Some(keyword) = keyword_type(raw) {
        return keyword;
    }
    if raw.contains("Int") {
        return TypeDescription::Integer;
    }

    let name = first_word(raw);
    TypeDescription::object(name.strip_suffix('?').unwrap_or(name))
}

/// Best-effort type of a literal default value
pub fn infer_type_from_default(literal: &str) -> TypeDescription {
    let literal = literal.trim();

    if literal.contains('[') {
        return TypeDescription::anonymous();
    }
    if STRING_LITERAL.is_match(literal) {
        return TypeDescription::String;
    }
    if DECIMAL_LITERAL.is_match(literal) {
        return TypeDescription::DoublePrecision;
    }
    if INTEGER_LITERAL.is_match(literal) {
        return TypeDescription::Integer;
    }
    if literal.contains("true") || literal.contains("false") {
        return TypeDescription::Boolean;
    }
    if let Some(captures) = CONSTRUCTION.captures(literal) {
        if let Some(type_name) = captures.get(1) {
            return parse_type(type_name.as_str());
        }
    }

    TypeDescription::anonymous()
}

/// Type of a declaration fragment such as `id: Int = 0` or `var name = "x"`
///
/// An explicit annotation after the first code `:` wins. Without one the literal after `=` is
/// inferred. Anything else is anonymous.
pub fn deduce_type(fragment: &str) -> TypeDescription {
    let lex = scan(fragment);
    let equals = code_position(&lex, 0, &['=']);
    let colon =
        code_position(&lex, 0, &[':']).filter(|colon| equals.map_or(true, |eq| *colon < eq));

    if let Some(colon) = colon {
        let end = code_position(&lex, colon + 1, &['=', '{']).unwrap_or(fragment.len());
        let end = end.min(comment_start(&lex, colon + 1).unwrap_or(end));
        return parse_type(&fragment[colon + 1..end]);
    }

    if let Some(equals) = equals {
        let end = comment_start(&lex, equals + 1).unwrap_or(fragment.len());
        return infer_type_from_default(&fragment[equals + 1..end]);
    }

    TypeDescription::anonymous()
}

/// Return type from a function type hint such as `(Int) -> ServiceCall<Person>`
///
/// The text after the last `->` is used when there is one, otherwise the last word. `()` and
/// `Void` both mean [TypeDescription::Void].
pub fn parse_return_type(typename_hint: &str) -> TypeDescription {
    let returned = match typename_hint.rsplit_once("->") {
        Some((_, returned)) => returned.trim(),
        None => typename_hint.split_whitespace().last().unwrap_or(""),
    };

    match returned {
        "" | "()" | "Void" => TypeDescription::Void,
        "Int" => TypeDescription::Integer,
        other => keyword_type(other).unwrap_or_else(|| parse_type(other)),
    }
}

/// Type of a property from the indexer's typename hint and the declaration text
///
/// Exact primitive hints are taken as is. Otherwise the declaration decides, and the hint is
/// only parsed when the declaration gives nothing away.
pub fn resolve_property_type(typename_hint: Option<&str>, declaration: &str) -> TypeDescription {
    let hint = typename_hint.map(str::trim).filter(|h| !h.is_empty());

    match hint {
        Some("Int") => return TypeDescription::Integer,
        Some(h) => {
            if let Some(primitive) = keyword_type(h).filter(|t| is_primitive(t)) {
                return primitive;
            }
        }
        None => {}
    }

    let deduced = deduce_type(declaration);
    match hint {
        Some(h) if deduced.is_anonymous() => parse_type(h),
        _ => deduced,
    }
}

fn keyword_type(raw: &str) -> Option<TypeDescription> {
    match raw {
        "Bool" => Some(TypeDescription::Boolean),
        "Float" => Some(TypeDescription::FloatingPoint),
        "Double" => Some(TypeDescription::DoublePrecision),
        "Date" => Some(TypeDescription::Date),
        "Data" => Some(TypeDescription::Data),
        "String" => Some(TypeDescription::String),
        "Void" => Some(TypeDescription::Void),
        _ => None,
    }
}

fn is_primitive(t: &TypeDescription) -> bool {
    matches!(
        t,
        TypeDescription::Boolean
            | TypeDescription::FloatingPoint
            | TypeDescription::DoublePrecision
            | TypeDescription::String
            | TypeDescription::Void
    )
}

/// Index of the bracket closing the one at `open`, counting only that bracket kind
fn closing(raw: &str, open: usize) -> Option<usize> {
    let (open_char, close_char) = match raw[open..].chars().next()? {
        '<' => ('<', '>'),
        '[' => ('[', ']'),
        '(' => ('(', ')'),
        _ => return None,
    };

    let mut depth = 0usize;
    for (index, c) in raw[open..].char_indices() {
        if c == open_char {
            depth += 1;
        } else if c == close_char {
            depth -= 1;
            if depth == 0 {
                return Some(open + index);
            }
        }
    }
    None
}

fn top_level_colon(inner: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in inner.char_indices() {
        match c {
            '[' | '<' | '(' => depth += 1,
            ']' | '>' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return Some(index),
            _ => {}
        }
    }
    None
}

fn code_position(lex: &LexemeString<'_>, from: usize, needles: &[char]) -> Option<usize> {
    lex.code_chars()
        .find(|(index, c)| *index >= from && needles.contains(c))
        .map(|(index, _)| index)
}

fn comment_start(lex: &LexemeString<'_>, from: usize) -> Option<usize> {
    lex.comments()
        .map(|comment| comment.span.start)
        .find(|start| *start >= from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TypeDescription as T;

    #[test]
    fn test_parse_primitives() {
        assert_eq!(parse_type("Bool"), T::Boolean);
        assert_eq!(parse_type("Int"), T::Integer);
        assert_eq!(parse_type("UInt64"), T::Integer);
        assert_eq!(parse_type(" String "), T::String);
        assert_eq!(parse_type("Void"), T::Void);
    }

    #[test]
    fn test_parse_composites() {
        assert_eq!(parse_type("Int?"), T::optional(T::Integer));
        assert_eq!(
            parse_type("[String: [Int]]"),
            T::map(T::String, T::array(T::Integer))
        );
        assert_eq!(
            parse_type("Array<Person>"),
            T::generic("Array", vec![T::object("Person")])
        );
        assert_eq!(parse_type("[Basic]"), T::array(T::object("Basic")));
        assert_eq!(
            parse_type("ServiceCall<[Person]>?"),
            T::optional(T::generic("ServiceCall", vec![T::array(T::object("Person"))]))
        );
    }

    #[test]
    fn test_unbalanced_brackets_fall_through() {
        assert_eq!(parse_type("Array<Person"), T::object("Array<Person"));
    }

    #[test]
    fn test_infer_from_literals() {
        assert_eq!(infer_type_from_default("123"), T::Integer);
        assert_eq!(infer_type_from_default("123.45"), T::DoublePrecision);
        assert_eq!(infer_type_from_default("\"abc\""), T::String);
        assert_eq!(infer_type_from_default("true"), T::Boolean);
        assert_eq!(infer_type_from_default("Object(x: 1)"), T::object("Object"));
        assert_eq!(infer_type_from_default("[1, 2]"), T::anonymous());
        assert_eq!(infer_type_from_default("compute()"), T::object("compute"));
        assert_eq!(infer_type_from_default("a + b"), T::anonymous());
    }

    #[test]
    fn test_deduce_type() {
        assert_eq!(deduce_type("let a: Int = 1"), T::Integer);
        assert_eq!(deduce_type("var a = \"x: y\""), T::String);
        assert_eq!(deduce_type("personId id: Int"), T::Integer);
        assert_eq!(deduce_type("var name: String { get }"), T::String);
        assert_eq!(deduce_type("let a: [String: Int] = [:]"), T::map(T::String, T::Integer));
        assert_eq!(deduce_type("var a"), T::anonymous());
    }

    #[test]
    fn test_parse_return_type() {
        assert_eq!(parse_return_type("() -> ()"), T::Void);
        assert_eq!(parse_return_type("(Int) -> Void"), T::Void);
        assert_eq!(parse_return_type("(Int) -> Int"), T::Integer);
        assert_eq!(
            parse_return_type("(Int, Int) -> ServiceCall<Person>"),
            T::generic("ServiceCall", vec![T::object("Person")])
        );
        assert_eq!(
            parse_return_type("() -> [String: Int]"),
            T::map(T::String, T::Integer)
        );
    }

    #[test]
    fn test_resolve_property_type() {
        assert_eq!(resolve_property_type(Some("Int"), "var a = 1.5"), T::Integer);
        assert_eq!(
            resolve_property_type(Some("[Person]"), "var people: [Person]"),
            T::array(T::object("Person"))
        );
        assert_eq!(
            resolve_property_type(Some("Person"), "var boss = makeBoss"),
            T::object("Person")
        );
        assert_eq!(resolve_property_type(None, "var a = 1"), T::Integer);
        assert_eq!(resolve_property_type(None, "var a"), T::anonymous());
    }
}
