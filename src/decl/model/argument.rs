//! Function arguments

use super::annotation::Annotation;
use super::types::TypeDescription;
use crate::decl::parsing::parse_annotations;
use serde::{Deserialize, Serialize};

/// One argument of a function or initializer
///
/// `external_name` is the label used at call sites, `internal_name` the name inside the body.
/// When both are equal the argument is written with a single name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescription {
    pub external_name: String,
    pub internal_name: String,
    pub type_description: TypeDescription,
    pub default_value: Option<String>,
    /// Arguments only carry inline annotations, taken from their trailing comment
    pub annotations: Vec<Annotation>,
    pub comment: Option<String>,
}

impl ArgumentDescription {
    pub fn template(
        external_name: impl Into<String>,
        internal_name: impl Into<String>,
        type_description: TypeDescription,
    ) -> Self {
        Self {
            external_name: external_name.into(),
            internal_name: internal_name.into(),
            type_description,
            default_value: None,
            annotations: Vec::new(),
            comment: None,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Set the trailing comment; its annotations come along
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.annotations = parse_annotations(&comment);
        self.comment = Some(comment);
        self
    }

    pub fn has_single_name(&self) -> bool {
        self.external_name == self.internal_name
    }
}
