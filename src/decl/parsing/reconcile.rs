//! Declaration reconciler
//!
//!     Indexers sometimes report a shortened header for multi-line declarations, e.g. only
//!     `public func get(` for a function whose arguments span several lines. When the header
//!     has no closing `)` in code, the full header is taken from the file instead: the
//!     declaration's own byte range, cut at the first `{` that is real code.

use crate::decl::lexing::{scan, text::find_in_code};
use tracing::{trace, warn};

/// Complete header for a declaration at `offset..offset + length` of `file_text`
pub fn reconcile(header: &str, file_text: &str, offset: usize, length: usize) -> String {
    if find_in_code(&scan(header), ')').is_some() {
        return header.to_string();
    }

    let Some(slice) = slice_at(file_text, offset, length) else {
        warn!(offset, length, "declaration range is outside the file, keeping indexer header");
        return header.trim().to_string();
    };

    let lex = scan(slice);
    let end = find_in_code(&lex, '{').unwrap_or(slice.len());
    let reconciled = slice[..end].trim().to_string();
    trace!(header, reconciled = %reconciled, "reconciled truncated header");
    reconciled
}

/// `text[offset..offset + length]`, clamped to the text and shrunk to character boundaries
fn slice_at(text: &str, offset: usize, length: usize) -> Option<&str> {
    if offset >= text.len() {
        return None;
    }
    let mut start = offset;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    let mut end = offset.saturating_add(length).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.get(start..end.max(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "class Service {\n    public func get(\n        personId id: Int, // @url person_id\n        fullPayload: Int = 0 // { not a body\n    ) -> ServiceCall<Person> {\n        return call()\n    }\n}\n";

    fn function_range() -> (usize, usize) {
        let start = FILE.find("public").unwrap_or(0);
        let end = FILE.rfind("    }").unwrap_or(FILE.len()) + 5;
        (start, end - start)
    }

    #[test]
    fn test_complete_header_is_trusted() {
        let header = "func a(b: Int)";
        assert_eq!(reconcile(header, "", 10, 10), header);
    }

    #[test]
    fn test_truncated_header_is_rebuilt_from_file() {
        let (offset, length) = function_range();
        assert_eq!(
            reconcile("public func get(", FILE, offset, length),
            "public func get(\n        personId id: Int, // @url person_id\n        fullPayload: Int = 0 // { not a body\n    ) -> ServiceCall<Person>"
        );
    }

    #[test]
    fn test_out_of_range_falls_back_to_header() {
        assert_eq!(reconcile(" public func get( ", FILE, 10_000, 5), "public func get(");
    }

    #[test]
    fn test_range_is_clamped() {
        let text = "func a(\n  b: Int\n) { }";
        assert_eq!(reconcile("func a(", text, 0, 10_000), "func a(\n  b: Int\n)");
    }

    #[test]
    fn test_slice_respects_char_boundaries() {
        assert_eq!(slice_at("é(x)", 1, 3), Some("(x"));
        assert_eq!(slice_at("abc", 3, 1), None);
    }
}
