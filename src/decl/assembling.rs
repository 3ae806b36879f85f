//! Assembly
//!
//!     Turns indexer records into an [Outline]. Top-level records are dispatched by kind;
//!     container records recurse into their substructure for properties, methods and (for
//!     enums) cases. Records of kinds the model does not cover are skipped.
//!
//!     Failures are per record. A function whose name is not in selector form, or a body range
//!     outside the file, drops that one node and is reported in [Assembly::failures]; the rest
//!     of the file is assembled as usual.
//!
//! Declaration Text
//!
//!     Containers, properties and cases use the indexer's `parsed_declaration` when there is
//!     one and otherwise the file slice up to the first `{` in code. Functions always go
//!     through the [reconciler](crate::decl::parsing::reconcile), because indexers truncate
//!     multi-line function headers.
//!
//! Bodies
//!
//!     Bodies are the `bodyoffset`/`bodylength` slice of the file with outer blank lines, common
//!     indentation and trailing whitespace removed. A record without body keys has no body; an
//!     empty slice is an empty body.

use crate::decl::indexing::{DeclarationKind, IndexError, IndexedRecord, SourceIndexer};
use crate::decl::lexing::text::{find_in_code, has_round_brackets, matching_close, normalize_body};
use crate::decl::lexing::{scan, LexemeString};
use crate::decl::model::{
    Accessibility, CallableKind, Declaration, EnumCase, EnumDescription, ExtensibleDescription,
    ExtensibleKind, FunctionDescription, Outline, PropertyDescription, PropertyKind,
    TypeDescription,
};
use crate::decl::parsing::arguments::arguments_of;
use crate::decl::parsing::{
    parse_annotations, parse_return_type, parse_type, reconcile, resolve_property_type,
};
use std::fmt;
use std::ops::Range;
use tracing::{debug, trace, warn};

/// A node that could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// Function names must be in selector form, `name(label:)`
    NameLacksRoundBrackets { name: String, offset: usize },
    /// The record's body range does not fit the file
    BodyOutOfRange { name: String, offset: usize, body: Range<usize> },
}

impl AssemblyError {
    /// Offset of the offending declaration in the file
    pub fn offset(&self) -> usize {
        match self {
            AssemblyError::NameLacksRoundBrackets { offset, .. }
            | AssemblyError::BodyOutOfRange { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::NameLacksRoundBrackets { name, .. } => {
                write!(f, "Function name '{name}' lacks round brackets")
            }
            AssemblyError::BodyOutOfRange { name, body, .. } => write!(
                f,
                "Body of '{name}' at {}..{} is outside the file",
                body.start, body.end
            ),
        }
    }
}

impl std::error::Error for AssemblyError {}

/// Result of assembling one file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assembly {
    pub path: String,
    pub outline: Outline,
    pub failures: Vec<AssemblyError>,
}

impl Assembly {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build the outline of `file_text` from its indexer records
pub fn assemble(path: &str, file_text: &str, records: &[IndexedRecord]) -> Assembly {
    debug!(path, records = records.len(), "assembling outline");

    let mut assembler = Assembler {
        path,
        file_text,
        failures: Vec::new(),
    };
    let mut outline = Outline::new();

    for record in records {
        match record.declaration_kind() {
            DeclarationKind::Class => {
                outline.push_extensible(assembler.extensible(record, ExtensibleKind::Class))
            }
            DeclarationKind::Struct => {
                outline.push_extensible(assembler.extensible(record, ExtensibleKind::Struct))
            }
            DeclarationKind::Protocol => {
                outline.push_extensible(assembler.extensible(record, ExtensibleKind::Protocol))
            }
            DeclarationKind::Enum => outline.enums.push(assembler.enumeration(record)),
            DeclarationKind::FreeFunction => {
                if let Some(function) = assembler.function(record) {
                    outline.functions.push(function);
                }
            }
            other => trace!(kind = ?other, name = record.name(), "skipping top-level record"),
        }
    }

    Assembly {
        path: path.to_string(),
        outline,
        failures: assembler.failures,
    }
}

/// Index `file_text` with `indexer` and assemble the result
pub fn assemble_with(
    path: &str,
    file_text: &str,
    indexer: &dyn SourceIndexer,
) -> Result<Assembly, IndexError> {
    let records = indexer.index(file_text)?;
    debug!(path, indexer = indexer.name(), "indexed source");
    Ok(assemble(path, file_text, &records))
}

struct Assembler<'a> {
    path: &'a str,
    file_text: &'a str,
    failures: Vec<AssemblyError>,
}

impl Assembler<'_> {
    fn fail(&mut self, error: AssemblyError) {
        warn!(path = self.path, offset = error.offset(), "{}", error);
        self.failures.push(error);
    }

    fn extensible(
        &mut self,
        record: &IndexedRecord,
        kind: ExtensibleKind,
    ) -> ExtensibleDescription {
        let header = self.header(record);
        let comment = comment_of(record);
        ExtensibleDescription {
            kind,
            annotations: annotations_of(comment.as_deref()),
            comment,
            declaration: self.declaration(&header, record.offset),
            accessibility: accessibility_of(record),
            name: record.name().to_string(),
            inherited_types: record.inherited_type_names(),
            properties: self.properties(&record.substructure),
            methods: self.methods(&record.substructure),
        }
    }

    fn enumeration(&mut self, record: &IndexedRecord) -> EnumDescription {
        let header = self.header(record);
        let comment = comment_of(record);
        let cases = record
            .substructure
            .iter()
            .filter(|r| {
                matches!(
                    r.declaration_kind(),
                    DeclarationKind::EnumCase | DeclarationKind::EnumElement
                )
            })
            .flat_map(|r| self.enum_cases(r))
            .collect();

        EnumDescription {
            annotations: annotations_of(comment.as_deref()),
            comment,
            declaration: self.declaration(&header, record.offset),
            accessibility: accessibility_of(record),
            name: record.name().to_string(),
            inherited_types: record.inherited_type_names(),
            cases,
            properties: self.properties(&record.substructure),
            methods: self.methods(&record.substructure),
        }
    }

    /// Cases of one `case` record, one per element
    fn enum_cases(&self, record: &IndexedRecord) -> Vec<EnumCase> {
        let elements: Vec<&IndexedRecord> = if record.substructure.is_empty() {
            vec![record]
        } else {
            record.substructure.iter().collect()
        };

        elements
            .into_iter()
            .map(|element| {
                let header = element
                    .parsed_declaration
                    .clone()
                    .unwrap_or_else(|| self.header(element));
                let comment = comment_of(element).or_else(|| comment_of(record));
                EnumCase {
                    annotations: annotations_of(comment.as_deref()),
                    comment,
                    name: element.name().to_string(),
                    default_value: value_after_equals(&scan(&header)),
                    declaration: self.declaration(&header, record.offset),
                }
            })
            .collect()
    }

    fn properties(&mut self, records: &[IndexedRecord]) -> Vec<PropertyDescription> {
        records
            .iter()
            .filter(|r| r.declaration_kind().is_property())
            .filter_map(|r| self.property(r))
            .collect()
    }

    fn methods(&mut self, records: &[IndexedRecord]) -> Vec<FunctionDescription> {
        records
            .iter()
            .filter(|r| r.declaration_kind().is_method())
            .filter_map(|r| self.function(r))
            .collect()
    }

    fn property(&mut self, record: &IndexedRecord) -> Option<PropertyDescription> {
        let header = self.header(record);
        let lex = scan(&header);
        let comment = comment_of(record);
        let body = self.body(record)?;

        let kind = match record.declaration_kind() {
            DeclarationKind::StaticVariable => PropertyKind::Static,
            DeclarationKind::ClassVariable => PropertyKind::ClassLevel,
            _ => PropertyKind::Instance,
        };

        Some(PropertyDescription {
            annotations: annotations_of(comment.as_deref()),
            comment,
            accessibility: accessibility_of(record),
            constant: declares_constant(&lex),
            name: record.name().to_string(),
            type_description: resolve_property_type(record.typename.as_deref(), &header),
            default_value: value_after_equals(&lex),
            declaration: self.declaration(&header, record.offset),
            kind,
            body,
        })
    }

    fn function(&mut self, record: &IndexedRecord) -> Option<FunctionDescription> {
        let name = record.name().to_string();
        if !has_round_brackets(&scan(&name)) {
            self.fail(AssemblyError::NameLacksRoundBrackets {
                name,
                offset: record.offset,
            });
            return None;
        }

        let header = reconcile(
            record.parsed_declaration.as_deref().unwrap_or(""),
            self.file_text,
            record.offset,
            record.length,
        );
        let body = self.body(record)?;
        let comment = comment_of(record);

        let kind = match record.declaration_kind() {
            _ if is_initializer_name(&name) => CallableKind::Initializer,
            DeclarationKind::InstanceMethod => CallableKind::Instance,
            DeclarationKind::StaticMethod => CallableKind::Static,
            DeclarationKind::ClassMethod => CallableKind::ClassLevel,
            _ => CallableKind::Free,
        };
        let return_type = match kind {
            CallableKind::Initializer => None,
            _ => return_type_of(&header, record.typename.as_deref()),
        };

        Some(FunctionDescription {
            annotations: annotations_of(comment.as_deref()),
            comment,
            accessibility: accessibility_of(record),
            name,
            arguments: arguments_of(&header),
            return_type,
            declaration: self.declaration(&header, record.offset),
            kind,
            body,
        })
    }

    /// `parsed_declaration`, or the file slice up to the first code `{`
    fn header(&self, record: &IndexedRecord) -> String {
        match record.parsed_declaration.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(declaration) => declaration.trim().to_string(),
            None => reconcile("", self.file_text, record.offset, record.length),
        }
    }

    fn declaration(&self, header: &str, offset: usize) -> Declaration {
        Declaration::locate(self.path, self.file_text, header, offset)
    }

    /// `Some(None)` without a body, `None` when the body range is broken
    fn body(&mut self, record: &IndexedRecord) -> Option<Option<String>> {
        let Some(range) = record.body_range() else {
            return Some(None);
        };
        match self.file_text.get(range.clone()) {
            Some(body) => Some(Some(normalize_body(body))),
            None => {
                self.fail(AssemblyError::BodyOutOfRange {
                    name: record.name().to_string(),
                    offset: record.offset,
                    body: range,
                });
                None
            }
        }
    }
}

fn comment_of(record: &IndexedRecord) -> Option<String> {
    record
        .doc_comment
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
}

fn annotations_of(comment: Option<&str>) -> Vec<crate::decl::model::Annotation> {
    comment.map(parse_annotations).unwrap_or_default()
}

fn accessibility_of(record: &IndexedRecord) -> Accessibility {
    record
        .accessibility
        .as_deref()
        .map(Accessibility::from_tag)
        .unwrap_or_default()
}

fn is_initializer_name(name: &str) -> bool {
    ["init(", "init?(", "init!("]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Whether the header declares with `let` (in code, as a whole word)
fn declares_constant(lex: &LexemeString<'_>) -> bool {
    let source = lex.source();
    source.match_indices("let ").any(|(index, _)| {
        lex.is_code(index)
            && source[..index]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric() && c != '_')
    })
}

/// Trimmed text after the first code `=`, if any
fn value_after_equals(lex: &LexemeString<'_>) -> Option<String> {
    let equals = find_in_code(lex, '=')?;
    let value = lex.source()[equals + 1..].trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Return type from a code `->` after the argument list, else from the type hint
fn return_type_of(header: &str, typename_hint: Option<&str>) -> Option<TypeDescription> {
    let lex = scan(header);
    let after_arguments = find_in_code(&lex, '(')
        .and_then(|open| matching_close(&lex, open))
        .map_or(0, |close| close + 1);

    let arrow = header[after_arguments..]
        .match_indices("->")
        .map(|(index, _)| after_arguments + index)
        .find(|index| lex.is_code(*index));

    if let Some(arrow) = arrow {
        let start = arrow + 2;
        let end = lex
            .comments()
            .map(|c| c.span.start)
            .find(|s| *s >= start)
            .unwrap_or(header.len());
        let returned = header[start..end].trim();
        let returned = returned.split(" where ").next().unwrap_or(returned);
        return Some(parse_type(returned));
    }

    typename_hint
        .filter(|hint| !hint.trim().is_empty())
        .map(parse_return_type)
}
