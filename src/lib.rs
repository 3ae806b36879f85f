//! # decl
//!
//! Reads the shape of a codebase out of raw declaration text and writes it back as canonical,
//! formatted declarations.
//!
//! File Layout
//!
//!     The library is organised the way the data flows:
//!
//!         src/decl/lexing       Span classification (code, comments, literals)
//!         src/decl/parsing      Annotations, types, argument lists, header reconciliation
//!         src/decl/model        The declaration model (types, members, containers)
//!         src/decl/verse        Canonical pretty printer
//!         src/decl/indexing     Indexer records, the indexer seam and the reference indexer
//!         src/decl/assembling   Routing indexer records into model nodes
//!         src/decl/diagnostics  Editor-facing messages
//!         src/decl/formats      Output format registry (verse, json, yaml)
//!         src/decl/config       Layered configuration
//!
//!     Everything below `lexing` consults the span classification rather than guessing whether
//!     a character is inside a comment or a literal.

pub mod decl;
