//! Classes, structs and protocols

use super::accessibility::Accessibility;
use super::annotation::Annotation;
use super::declaration::Declaration;
use super::function::FunctionDescription;
use super::property::PropertyDescription;
use crate::decl::parsing::parse_annotations;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtensibleKind {
    Class,
    Struct,
    Protocol,
}

impl ExtensibleKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ExtensibleKind::Class => "class",
            ExtensibleKind::Struct => "struct",
            ExtensibleKind::Protocol => "protocol",
        }
    }
}

/// A container with properties and methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensibleDescription {
    pub kind: ExtensibleKind,
    pub comment: Option<String>,
    pub annotations: Vec<Annotation>,
    pub declaration: Declaration,
    pub accessibility: Accessibility,
    pub name: String,
    pub inherited_types: Vec<String>,
    pub properties: Vec<PropertyDescription>,
    pub methods: Vec<FunctionDescription>,
}

impl ExtensibleDescription {
    pub fn template(kind: ExtensibleKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            comment: None,
            annotations: Vec::new(),
            declaration: Declaration::template(),
            accessibility: Accessibility::Internal,
            name: name.into(),
            inherited_types: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
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

    pub fn with_inherited_types<I, S>(mut self, inherited_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inherited_types = inherited_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_properties(mut self, properties: Vec<PropertyDescription>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_methods(mut self, methods: Vec<FunctionDescription>) -> Self {
        self.methods = methods;
        self
    }

    pub fn as_template(&self) -> Self {
        Self {
            declaration: Declaration::template(),
            properties: self.properties.iter().map(|p| p.as_template()).collect(),
            methods: self.methods.iter().map(|m| m.as_template()).collect(),
            ..self.clone()
        }
    }
}
