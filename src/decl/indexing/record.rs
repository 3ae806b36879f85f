//! Indexer records
//!
//!     One record per declaration, in the key layout SourceKit uses. Keys that are missing
//!     from a dump take their empty value, and unknown keys are ignored, so dumps from other
//!     tools only need the keys they actually know.

use super::kinds::DeclarationKind;
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexedRecord {
    #[serde(rename = "key.kind")]
    pub kind: String,

    #[serde(rename = "key.name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type hint: the property type, or the function type for callables
    #[serde(rename = "key.typename", skip_serializing_if = "Option::is_none")]
    pub typename: Option<String>,

    #[serde(rename = "key.offset")]
    pub offset: usize,

    #[serde(rename = "key.length")]
    pub length: usize,

    #[serde(rename = "key.bodyoffset", skip_serializing_if = "Option::is_none")]
    pub body_offset: Option<usize>,

    #[serde(rename = "key.bodylength", skip_serializing_if = "Option::is_none")]
    pub body_length: Option<usize>,

    #[serde(rename = "key.doc.comment", skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,

    /// Header text; indexers may truncate it for multi-line declarations
    #[serde(rename = "key.parsed_declaration", skip_serializing_if = "Option::is_none")]
    pub parsed_declaration: Option<String>,

    #[serde(rename = "key.accessibility", skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,

    #[serde(rename = "key.inheritedtypes", skip_serializing_if = "Vec::is_empty")]
    pub inherited_types: Vec<InheritedType>,

    #[serde(rename = "key.substructure", skip_serializing_if = "Vec::is_empty")]
    pub substructure: Vec<IndexedRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InheritedType {
    #[serde(rename = "key.name")]
    pub name: String,
}

impl IndexedRecord {
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind: kind.tag(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn declaration_kind(&self) -> DeclarationKind {
        DeclarationKind::from_tag(&self.kind)
    }

    /// The record's name, empty when the indexer gave none
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.length)
    }

    /// Byte range of the body, when the record has one
    pub fn body_range(&self) -> Option<Range<usize>> {
        let offset = self.body_offset?;
        let length = self.body_length?;
        Some(offset..offset.saturating_add(length))
    }

    pub fn inherited_type_names(&self) -> Vec<String> {
        self.inherited_types.iter().map(|t| t.name.clone()).collect()
    }
}
