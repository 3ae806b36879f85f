//! Verse: the canonical pretty printer
//!
//!     Renders model nodes back into declaration text. The output is deterministic and is
//!     exactly what the parsers read back: for every node, parsing its verse yields an equal
//!     node (ignoring source positions).
//!
//! Layout
//!
//!     - Documentation comments are written line by line behind the doc marker (`/// `).
//!     - Accessibility is written only when it is not the default (`internal`).
//!     - Arguments go one per line, indented, with a comma after all but the last and their
//!       inline comment at the end of the line. An empty list stays `()`.
//!     - Bodies: none at all for `None`, ` {}` for an empty body, otherwise an indented block.
//!     - Container members are indented and separated by a blank line. Enums list their cases
//!       first, then properties, then methods.
//!
//!     Indentation never leaves trailing whitespace on blank lines.
//!
//!     The indent unit and the doc marker come from [VerseStyle]; everything else is fixed.

use crate::decl::lexing::text::{indent, prefix_lines};
use crate::decl::model::{
    Accessibility, Annotation, ArgumentDescription, EnumCase, EnumDescription,
    ExtensibleDescription, FunctionDescription, Outline, PropertyDescription, TypeDescription,
};

/// Knobs for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseStyle {
    /// One level of indentation
    pub indent: String,
    /// Written in front of every documentation comment line
    pub doc_marker: String,
}

impl Default for VerseStyle {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            doc_marker: "/// ".to_string(),
        }
    }
}

/// Rendering into canonical declaration text
pub trait ToVerse {
    fn write_verse(&self, style: &VerseStyle) -> String;

    /// Render with the default style
    fn to_verse(&self) -> String {
        self.write_verse(&VerseStyle::default())
    }
}

impl ToVerse for TypeDescription {
    fn write_verse(&self, style: &VerseStyle) -> String {
        match self {
            TypeDescription::Boolean => "Bool".to_string(),
            TypeDescription::Integer => "Int".to_string(),
            TypeDescription::FloatingPoint => "Float".to_string(),
            TypeDescription::DoublePrecision => "Double".to_string(),
            TypeDescription::String => "String".to_string(),
            TypeDescription::Date => "Date".to_string(),
            TypeDescription::Data => "Data".to_string(),
            TypeDescription::Void => "Void".to_string(),
            TypeDescription::Optional(wrapped) => format!("{}?", wrapped.write_verse(style)),
            TypeDescription::Object(name) => name.clone(),
            TypeDescription::Array(element) => format!("[{}]", element.write_verse(style)),
            TypeDescription::Map(key, value) => format!(
                "[{}: {}]",
                key.write_verse(style),
                value.write_verse(style)
            ),
            TypeDescription::Generic(name, constraints) => {
                let constraints: Vec<String> =
                    constraints.iter().map(|c| c.write_verse(style)).collect();
                format!("{}<{}>", name, constraints.join(", "))
            }
        }
    }
}

impl ToVerse for Annotation {
    fn write_verse(&self, _style: &VerseStyle) -> String {
        match &self.value {
            Some(value) => format!("@{} {}", self.name, value),
            None => format!("@{}", self.name),
        }
    }
}

impl ToVerse for ArgumentDescription {
    fn write_verse(&self, style: &VerseStyle) -> String {
        argument_line(self, false, style)
    }
}

impl ToVerse for EnumCase {
    fn write_verse(&self, style: &VerseStyle) -> String {
        let mut verse = comment_block(self.comment.as_deref(), style);
        verse.push_str("case ");
        verse.push_str(&self.name);
        if let Some(default_value) = &self.default_value {
            verse.push_str(" = ");
            verse.push_str(default_value);
        }
        verse
    }
}

impl ToVerse for PropertyDescription {
    fn write_verse(&self, style: &VerseStyle) -> String {
        let mut verse = comment_block(self.comment.as_deref(), style);
        verse.push_str(accessibility_prefix(self.accessibility));
        if let Some(keyword) = self.kind.keyword() {
            verse.push_str(keyword);
            verse.push(' ');
        }
        verse.push_str(if self.constant { "let " } else { "var " });
        verse.push_str(&self.name);
        if !self.type_description.is_anonymous() {
            verse.push_str(": ");
            verse.push_str(&self.type_description.write_verse(style));
        }
        if let Some(default_value) = &self.default_value {
            verse.push_str(" = ");
            verse.push_str(default_value);
        }
        verse.push_str(&body_block(self.body.as_deref(), style));
        verse
    }
}

impl ToVerse for FunctionDescription {
    fn write_verse(&self, style: &VerseStyle) -> String {
        let mut verse = comment_block(self.comment.as_deref(), style);
        verse.push_str(accessibility_prefix(self.accessibility));
        if let Some(keyword) = self.kind.keyword() {
            verse.push_str(keyword);
            verse.push(' ');
        }
        if !self.is_initializer() {
            verse.push_str("func ");
        }
        verse.push_str(self.base_name());

        if self.arguments.is_empty() {
            verse.push_str("()");
        } else {
            let last = self.arguments.len() - 1;
            let lines: Vec<String> = self
                .arguments
                .iter()
                .enumerate()
                .map(|(i, argument)| argument_line(argument, i < last, style))
                .collect();
            verse.push_str("(\n");
            verse.push_str(&indent(&lines.join("\n"), &style.indent));
            verse.push_str("\n)");
        }

        if let Some(return_type) = self.return_type.as_ref().filter(|_| !self.is_initializer()) {
            verse.push_str(" -> ");
            verse.push_str(&return_type.write_verse(style));
        }
        verse.push_str(&body_block(self.body.as_deref(), style));
        verse
    }
}

impl ToVerse for ExtensibleDescription {
    fn write_verse(&self, style: &VerseStyle) -> String {
        let members: Vec<String> = self
            .properties
            .iter()
            .map(|p| p.write_verse(style))
            .chain(self.methods.iter().map(|m| m.write_verse(style)))
            .collect();

        container(
            ContainerHead {
                comment: self.comment.as_deref(),
                accessibility: self.accessibility,
                keyword: self.kind.keyword(),
                name: &self.name,
                inherited_types: &self.inherited_types,
            },
            &members,
            style,
        )
    }
}

impl ToVerse for EnumDescription {
    fn write_verse(&self, style: &VerseStyle) -> String {
        let members: Vec<String> = self
            .cases
            .iter()
            .map(|c| c.write_verse(style))
            .chain(self.properties.iter().map(|p| p.write_verse(style)))
            .chain(self.methods.iter().map(|m| m.write_verse(style)))
            .collect();

        container(
            ContainerHead {
                comment: self.comment.as_deref(),
                accessibility: self.accessibility,
                keyword: "enum",
                name: &self.name,
                inherited_types: &self.inherited_types,
            },
            &members,
            style,
        )
    }
}

impl ToVerse for Outline {
    fn write_verse(&self, style: &VerseStyle) -> String {
        let nodes: Vec<String> = self
            .extensibles()
            .map(|e| e.write_verse(style))
            .chain(self.enums.iter().map(|e| e.write_verse(style)))
            .chain(self.functions.iter().map(|f| f.write_verse(style)))
            .map(|verse| verse.trim_end_matches('\n').to_string())
            .collect();

        if nodes.is_empty() {
            return String::new();
        }
        format!("{}\n", nodes.join("\n\n"))
    }
}

struct ContainerHead<'a> {
    comment: Option<&'a str>,
    accessibility: Accessibility,
    keyword: &'a str,
    name: &'a str,
    inherited_types: &'a [String],
}

fn container(head: ContainerHead<'_>, members: &[String], style: &VerseStyle) -> String {
    let mut verse = comment_block(head.comment, style);
    verse.push_str(accessibility_prefix(head.accessibility));
    verse.push_str(head.keyword);
    verse.push(' ');
    verse.push_str(head.name);
    if !head.inherited_types.is_empty() {
        verse.push_str(": ");
        verse.push_str(&head.inherited_types.join(", "));
    }

    if members.is_empty() {
        verse.push_str(" {}\n");
    } else {
        verse.push_str(" {\n");
        verse.push_str(&indent(&members.join("\n\n"), &style.indent));
        verse.push_str("\n}\n");
    }
    verse
}

/// One argument as it appears in a multi-line argument list
fn argument_line(
    argument: &ArgumentDescription,
    trailing_comma: bool,
    style: &VerseStyle,
) -> String {
    let mut line = argument.external_name.clone();
    if !argument.has_single_name() {
        line.push(' ');
        line.push_str(&argument.internal_name);
    }
    line.push_str(": ");
    line.push_str(&argument.type_description.write_verse(style));
    if let Some(default_value) = &argument.default_value {
        line.push_str(" = ");
        line.push_str(default_value);
    }
    if trailing_comma {
        line.push(',');
    }
    if let Some(comment) = argument.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        line.push_str(" // ");
        line.push_str(&comment.split_whitespace().collect::<Vec<_>>().join(" "));
    }
    line
}

fn comment_block(comment: Option<&str>, style: &VerseStyle) -> String {
    match comment.filter(|c| !c.is_empty()) {
        Some(comment) => format!("{}\n", prefix_lines(comment, &style.doc_marker)),
        None => String::new(),
    }
}

fn accessibility_prefix(accessibility: Accessibility) -> &'static str {
    match accessibility {
        Accessibility::Internal => "",
        Accessibility::Private => "private ",
        Accessibility::Public => "public ",
        Accessibility::Open => "open ",
    }
}

fn body_block(body: Option<&str>, style: &VerseStyle) -> String {
    match body {
        None => String::new(),
        Some("") => " {}".to_string(),
        Some(body) => format!(" {{\n{}\n}}", indent(body, &style.indent)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::model::{CallableKind, PropertyKind};
    use TypeDescription as T;

    #[test]
    fn test_type_verse() {
        assert_eq!(T::optional(T::Integer).to_verse(), "Int?");
        assert_eq!(
            T::map(T::String, T::array(T::Integer)).to_verse(),
            "[String: [Int]]"
        );
        assert_eq!(
            T::generic("Result", vec![T::object("A"), T::object("B")]).to_verse(),
            "Result<A, B>"
        );
    }

    #[test]
    fn test_annotation_verse() {
        assert_eq!(Annotation::new("model", None).to_verse(), "@model");
        assert_eq!(
            Annotation::new("realm", Some("DBBasic")).to_verse(),
            "@realm DBBasic"
        );
    }

    #[test]
    fn test_argument_verse() {
        let argument = ArgumentDescription::template("personId", "id", T::Integer)
            .with_default("0")
            .with_comment("@url person_id");
        assert_eq!(argument.to_verse(), "personId id: Int = 0 // @url person_id");
        assert_eq!(
            argument_line(&argument, true, &VerseStyle::default()),
            "personId id: Int = 0, // @url person_id"
        );
    }

    #[test]
    fn test_body_blocks() {
        let style = VerseStyle::default();
        assert_eq!(body_block(None, &style), "");
        assert_eq!(body_block(Some(""), &style), " {}");
        assert_eq!(
            body_block(Some("a\n\nb"), &style),
            " {\n    a\n\n    b\n}"
        );
    }

    #[test]
    fn test_property_verse() {
        let property = PropertyDescription::template("count", T::Integer)
            .with_accessibility(Accessibility::Private)
            .with_kind(PropertyKind::Static)
            .constant()
            .with_default("0");
        assert_eq!(property.to_verse(), "private static let count: Int = 0");
    }

    #[test]
    fn test_initializer_verse() {
        let function = FunctionDescription::template("init()", CallableKind::Initializer)
            .unwrap_or_else(|e| panic!("{}", e))
            .with_body("");
        assert_eq!(function.to_verse(), "init() {}");
    }

    #[test]
    fn test_custom_style() {
        let style = VerseStyle {
            indent: "\t".to_string(),
            doc_marker: "// ".to_string(),
        };
        let class = ExtensibleDescription::template(crate::decl::model::ExtensibleKind::Class, "A")
            .with_comment("Doc")
            .with_properties(vec![PropertyDescription::template("a", T::Integer)]);
        assert_eq!(
            class.write_verse(&style),
            "// Doc\nclass A {\n\tvar a: Int\n}\n"
        );
    }
}
