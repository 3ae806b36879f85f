//! Annotation parser
//!
//!     Annotations are `@name value` tags embedded in comment text:
//!
//!         /// Person record
//!         /// @model
//!         /// @realm DBPerson
//!
//!     Several tags may share a line when separated by `;` (`@a; @b value;`) or simply follow
//!     each other (`@a value @b value`). A tag has no value when the rest of its line is empty,
//!     when it is followed by `;`, or when the next token is itself a tag.

use crate::decl::lexing::text::{first_word, first_word_with};
use crate::decl::model::Annotation;

const VALUE_DIVIDERS: &[char] = &['\n', ' ', ';'];

/// Parse every annotation found in `comment`, in order
///
/// Comment markers are not special: `/// @model` and `@model` give the same result. Empty
/// names (a bare `@`) are skipped.
pub fn parse_annotations(comment: &str) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    let mut rest = comment;

    while let Some(at) = rest.find('@') {
        let after = &rest[at + 1..];
        let name = first_word(after);
        let tail = &after[name.len()..];

        let value = annotation_value(tail);
        rest = match value {
            Some(value) => {
                let leading = tail.len() - tail.trim_start().len();
                &tail[leading + value.len()..]
            }
            None => tail,
        };

        if !name.is_empty() {
            annotations.push(Annotation::new(name, value));
        }
    }

    annotations
}

fn annotation_value(tail: &str) -> Option<&str> {
    if tail.starts_with('\n')
        || tail.starts_with(" \n")
        || tail.starts_with(';')
        || tail.trim().is_empty()
    {
        return None;
    }

    let value = first_word_with(tail.trim_start(), VALUE_DIVIDERS);
    if value.is_empty() || value.starts_with('@') {
        None
    } else {
        Some(value)
    }
}
