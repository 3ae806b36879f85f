//! Enum cases

use super::annotation::Annotation;
use super::declaration::Declaration;
use crate::decl::parsing::parse_annotations;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
    pub comment: Option<String>,
    pub annotations: Vec<Annotation>,
    pub name: String,
    /// Raw value, as written after `=`
    pub default_value: Option<String>,
    pub declaration: Declaration,
}

impl EnumCase {
    pub fn template(name: impl Into<String>) -> Self {
        Self {
            comment: None,
            annotations: Vec::new(),
            name: name.into(),
            default_value: None,
            declaration: Declaration::template(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.annotations = parse_annotations(&comment);
        self.comment = Some(comment);
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn as_template(&self) -> Self {
        Self {
            declaration: Declaration::template(),
            ..self.clone()
        }
    }
}
