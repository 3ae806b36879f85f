//! Properties

use super::accessibility::Accessibility;
use super::annotation::Annotation;
use super::declaration::Declaration;
use super::types::TypeDescription;
use crate::decl::parsing::parse_annotations;
use serde::{Deserialize, Serialize};

/// Whether a property belongs to instances or to the type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyKind {
    #[default]
    Instance,
    Static,
    /// Overridable type property (`class var`)
    ClassLevel,
}

impl PropertyKind {
    /// Keyword written before `let`/`var`, if any
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            PropertyKind::Instance => None,
            PropertyKind::Static => Some("static"),
            PropertyKind::ClassLevel => Some("class"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub comment: Option<String>,
    pub annotations: Vec<Annotation>,
    pub accessibility: Accessibility,
    /// `let` rather than `var`
    pub constant: bool,
    pub name: String,
    pub type_description: TypeDescription,
    pub default_value: Option<String>,
    pub declaration: Declaration,
    pub kind: PropertyKind,
    /// Accessor block, for computed properties and observers
    pub body: Option<String>,
}

impl PropertyDescription {
    /// A mutable internal instance property
    pub fn template(name: impl Into<String>, type_description: TypeDescription) -> Self {
        Self {
            comment: None,
            annotations: Vec::new(),
            accessibility: Accessibility::Internal,
            constant: false,
            name: name.into(),
            type_description,
            default_value: None,
            declaration: Declaration::template(),
            kind: PropertyKind::Instance,
            body: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.annotations = parse_annotations(&comment);
        self.comment = Some(comment);
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_kind(mut self, kind: PropertyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn as_template(&self) -> Self {
        Self {
            declaration: Declaration::template(),
            ..self.clone()
        }
    }
}
