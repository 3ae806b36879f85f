//! Parsing
//!
//!     Heuristic parsers for the pieces of a declaration header. None of them build a syntax
//!     tree: they look for structural punctuation (`(`, `:`, `=`, `,`, `{`) in code spans, as
//!     classified by [lexing](crate::decl::lexing), and cut the text there.
//!
//!     Malformed input never fails. Each parser resolves to a fallback instead: an anonymous
//!     object type, no default value, an empty annotation list.
//!
//! Parsers
//!
//!     - [annotations]: `@name value` tags in documentation comments
//!     - [types]: the type grammar and literal type inference
//!     - [arguments]: parenthesised argument lists
//!     - [reconcile]: recovery of headers truncated by the indexer

pub mod annotations;
pub mod arguments;
pub mod reconcile;
pub mod types;

pub use annotations::parse_annotations;
pub use arguments::{extract_raw_argument_list, parse_arguments};
pub use reconcile::reconcile;
pub use types::{
    deduce_type, infer_type_from_default, parse_return_type, parse_type, resolve_property_type,
};
