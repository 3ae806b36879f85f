//! Output formats for outlines
//!
//! This module contains the serializations an outline can be written in:
//! - verse: the canonical declaration text, see [verse](crate::decl::verse)
//! - json: pretty-printed serde_json
//! - yaml: serde_yaml

pub mod registry;

pub use registry::{FormatError, FormatRegistry, Formatter};

use crate::decl::model::Outline;
use crate::decl::verse::{ToVerse, VerseStyle};

/// Canonical declaration text
#[derive(Debug, Clone, Default)]
pub struct VerseFormatter {
    style: VerseStyle,
}

impl VerseFormatter {
    pub fn new(style: VerseStyle) -> Self {
        Self { style }
    }
}

impl Formatter for VerseFormatter {
    fn name(&self) -> &str {
        "verse"
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(outline.write_verse(&self.style))
    }

    fn description(&self) -> &str {
        "Canonical declaration text"
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        serde_json::to_string_pretty(outline)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Outline model as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        serde_yaml::to_string(outline).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Outline model as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::model::{ExtensibleDescription, ExtensibleKind};

    fn outline() -> Outline {
        let mut outline = Outline::new();
        outline.push_extensible(ExtensibleDescription::template(ExtensibleKind::Struct, "Point"));
        outline
    }

    #[test]
    fn test_verse_formatter() {
        assert_eq!(
            VerseFormatter::default().serialize(&outline()).unwrap(),
            "struct Point {}\n"
        );
    }

    #[test]
    fn test_json_formatter_round_trips() {
        let json = JsonFormatter.serialize(&outline()).unwrap();
        let parsed: Outline = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outline());
    }

    #[test]
    fn test_yaml_formatter() {
        let yaml = YamlFormatter.serialize(&outline()).unwrap();
        assert!(yaml.contains("name: Point"));
        assert!(yaml.contains("kind: Struct"));
    }
}
