//! Functions, methods and initializers

use super::accessibility::Accessibility;
use super::annotation::Annotation;
use super::argument::ArgumentDescription;
use super::declaration::Declaration;
use super::types::TypeDescription;
use crate::decl::lexing::{scan, text};
use crate::decl::parsing::parse_annotations;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of callable a [FunctionDescription] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CallableKind {
    /// Top-level function
    Free,
    #[default]
    Instance,
    Static,
    /// Overridable type method (`class func`)
    ClassLevel,
    Initializer,
}

impl CallableKind {
    /// Keyword written before `func`, if any
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            CallableKind::Static => Some("static"),
            CallableKind::ClassLevel => Some("class"),
            _ => None,
        }
    }

    pub fn is_method(&self) -> bool {
        !matches!(self, CallableKind::Free)
    }
}

/// Errors from building nodes by hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Function names are in selector form, `name(label:)`
    NameLacksRoundBrackets { name: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::NameLacksRoundBrackets { name } => {
                write!(f, "Function name '{}' lacks round brackets", name)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A free function, method or initializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescription {
    pub comment: Option<String>,
    pub annotations: Vec<Annotation>,
    pub accessibility: Accessibility,
    /// Selector form, e.g. `get(personId:fullPayload:)`
    pub name: String,
    pub arguments: Vec<ArgumentDescription>,
    pub return_type: Option<TypeDescription>,
    pub declaration: Declaration,
    pub kind: CallableKind,
    pub body: Option<String>,
}

impl FunctionDescription {
    /// A hand-built callable; `name` must contain a `(` … `)` pair in code
    pub fn template(name: impl Into<String>, kind: CallableKind) -> Result<Self, TemplateError> {
        let name = name.into();
        if !text::has_round_brackets(&scan(&name)) {
            return Err(TemplateError::NameLacksRoundBrackets { name });
        }
        Ok(Self {
            comment: None,
            annotations: Vec::new(),
            accessibility: Accessibility::Internal,
            name,
            arguments: Vec::new(),
            return_type: None,
            declaration: Declaration::template(),
            kind,
            body: None,
        })
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

    pub fn with_arguments(mut self, arguments: Vec<ArgumentDescription>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Ignored for initializers
    pub fn with_return_type(mut self, return_type: TypeDescription) -> Self {
        if !self.is_initializer() {
            self.return_type = Some(return_type);
        }
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Name without the argument labels: `get` for `get(personId:)`
    pub fn base_name(&self) -> &str {
        match self.name.find('(') {
            Some(open) => self.name[..open].trim_end(),
            None => &self.name,
        }
    }

    pub fn is_initializer(&self) -> bool {
        self.kind == CallableKind::Initializer
    }

    pub fn as_template(&self) -> Self {
        Self {
            declaration: Declaration::template(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_requires_round_brackets() {
        assert_eq!(
            FunctionDescription::template("get", CallableKind::Instance),
            Err(TemplateError::NameLacksRoundBrackets {
                name: "get".to_string()
            })
        );
        assert!(FunctionDescription::template("get // ()", CallableKind::Free).is_err());
        assert!(FunctionDescription::template("get(id:)", CallableKind::Free).is_ok());
    }

    #[test]
    fn test_base_name() {
        let function = FunctionDescription::template("get(personId:)", CallableKind::Instance)
            .unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(function.base_name(), "get");
    }

    #[test]
    fn test_initializer_has_no_return_type() {
        let function = FunctionDescription::template("init(name:)", CallableKind::Initializer)
            .unwrap_or_else(|e| panic!("{}", e))
            .with_return_type(TypeDescription::Void);
        assert_eq!(function.return_type, None);
    }

    #[test]
    fn test_error_display() {
        let error = TemplateError::NameLacksRoundBrackets {
            name: "get".to_string(),
        };
        assert_eq!(error.to_string(), "Function name 'get' lacks round brackets");
    }
}
