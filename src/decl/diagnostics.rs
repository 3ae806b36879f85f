//! Editor diagnostics
//!
//!     IDE build phases pick up lines of the form
//!
//!         path:line:column: warning: message
//!
//!     and show them inline in the editor. [Outline::messages] turns a parsed outline into such
//!     lines, one per node, so the model can be inspected right where it was declared.
//!     Assembly failures become errors at the failing declaration.

use crate::decl::assembling::{Assembly, AssemblyError};
use crate::decl::model::declaration::line_and_column;
use crate::decl::model::{
    Annotation, ArgumentDescription, Declaration, EnumCase, EnumDescription,
    ExtensibleDescription, ExtensibleKind, FunctionDescription, Outline, PropertyDescription,
};
use crate::decl::verse::ToVerse;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        };
        f.write_str(name)
    }
}

/// One diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorMessage {
    pub path: String,
    pub line: usize,
    pub column: usize,
    pub severity: Severity,
    pub message: String,
}

impl EditorMessage {
    /// Message at a node's declaration; templates point at the first column of the first line
    pub fn at(declaration: &Declaration, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            path: declaration.path.clone(),
            line: declaration.line.unwrap_or(1),
            column: declaration.column.unwrap_or(1),
            severity,
            message: message.into(),
        }
    }

    /// Error for a node that could not be assembled
    pub fn from_failure(path: &str, file_text: &str, failure: &AssemblyError) -> Self {
        let (line, column) = line_and_column(file_text, failure.offset());
        Self {
            path: path.to_string(),
            line,
            column,
            severity: Severity::Error,
            message: failure.to_string(),
        }
    }
}

impl fmt::Display for EditorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}: {}",
            self.path, self.line, self.column, self.severity, self.message
        )
    }
}

/// Short one-line summary of a node
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for Annotation {
    fn describe(&self) -> String {
        match &self.value {
            Some(value) => format!("ANNOTATION: name = {}; value = {}", self.name, value),
            None => format!("ANNOTATION: name = {}", self.name),
        }
    }
}

impl Describe for ArgumentDescription {
    fn describe(&self) -> String {
        format!(
            "ARGUMENT: name = {}; body name = {}; type = {}",
            self.external_name,
            self.internal_name,
            self.type_description.to_verse()
        )
    }
}

impl Describe for PropertyDescription {
    fn describe(&self) -> String {
        format!(
            "PROPERTY: name = {}; type = {}; constant = {}",
            self.name,
            self.type_description.to_verse(),
            self.constant
        )
    }
}

impl Describe for FunctionDescription {
    fn describe(&self) -> String {
        let label = if self.kind.is_method() { "METHOD" } else { "FUNCTION" };
        match &self.return_type {
            Some(return_type) => format!(
                "{}: name = {}; return type = {}",
                label,
                self.name,
                return_type.to_verse()
            ),
            None => format!("{}: name = {}", label, self.name),
        }
    }
}

impl Describe for EnumCase {
    fn describe(&self) -> String {
        format!("ENUMCASE: name = {}", self.name)
    }
}

impl Describe for ExtensibleDescription {
    fn describe(&self) -> String {
        let label = match self.kind {
            ExtensibleKind::Class => "CLASS",
            ExtensibleKind::Struct => "STRUCT",
            ExtensibleKind::Protocol => "PROTOCOL",
        };
        container_description(label, &self.name, &self.inherited_types)
    }
}

impl Describe for EnumDescription {
    fn describe(&self) -> String {
        container_description("ENUM", &self.name, &self.inherited_types)
    }
}

fn container_description(label: &str, name: &str, inherited_types: &[String]) -> String {
    if inherited_types.is_empty() {
        format!("{label}: name = {name}")
    } else {
        format!("{label}: name = {name}; inherited = {}", inherited_types.join(", "))
    }
}

impl Outline {
    /// A warning per container, container annotation, case, property, method and argument,
    /// in rendering order
    pub fn messages(&self) -> Vec<EditorMessage> {
        let mut messages = Vec::new();

        for extensible in self.extensibles() {
            container_messages(
                &mut messages,
                &extensible.declaration,
                extensible.describe(),
                &extensible.annotations,
            );
            member_messages(&mut messages, &extensible.properties, &extensible.methods);
        }

        for enumeration in &self.enums {
            container_messages(
                &mut messages,
                &enumeration.declaration,
                enumeration.describe(),
                &enumeration.annotations,
            );
            for case in &enumeration.cases {
                messages.push(warning(&case.declaration, case.describe()));
            }
            member_messages(&mut messages, &enumeration.properties, &enumeration.methods);
        }

        for function in &self.functions {
            function_messages(&mut messages, function);
        }

        messages
    }
}

impl Assembly {
    /// Outline warnings followed by an error per failure
    pub fn messages(&self, file_text: &str) -> Vec<EditorMessage> {
        let mut messages = self.outline.messages();
        messages.extend(
            self.failures
                .iter()
                .map(|failure| EditorMessage::from_failure(&self.path, file_text, failure)),
        );
        messages
    }
}

fn warning(declaration: &Declaration, message: String) -> EditorMessage {
    EditorMessage::at(declaration, Severity::Warning, message)
}

fn container_messages(
    messages: &mut Vec<EditorMessage>,
    declaration: &Declaration,
    description: String,
    annotations: &[Annotation],
) {
    messages.push(warning(declaration, description));
    for annotation in annotations {
        messages.push(warning(declaration, annotation.describe()));
    }
}

fn member_messages(
    messages: &mut Vec<EditorMessage>,
    properties: &[PropertyDescription],
    methods: &[FunctionDescription],
) {
    for property in properties {
        messages.push(warning(&property.declaration, property.describe()));
    }
    for method in methods {
        function_messages(messages, method);
    }
}

fn function_messages(messages: &mut Vec<EditorMessage>, function: &FunctionDescription) {
    messages.push(warning(&function.declaration, function.describe()));
    for argument in &function.arguments {
        messages.push(warning(&function.declaration, argument.describe()));
    }
}
