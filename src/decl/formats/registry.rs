//! Format registry for outline serialization
//!
//! Each format implements the `Formatter` trait and is registered with `FormatRegistry` under
//! its name, which is what the command line `--format` option selects.

use crate::decl::model::Outline;
use crate::decl::verse::VerseStyle;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for outline formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "verse", "json")
    fn name(&self) -> &str;

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Output formats by name, as selected by `output.format` or `--format`
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Add `formatter` under its own name, replacing an earlier one with that name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Render `outline` in the format called `format`
    pub fn serialize(&self, outline: &Outline, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(outline)
    }

    /// Registered format names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// verse, json and yaml, with verse in its default style
    pub fn with_defaults() -> Self {
        Self::with_style(VerseStyle::default())
    }

    /// verse, json and yaml, with verse written in `style`
    pub fn with_style(style: VerseStyle) -> Self {
        let mut registry = Self::new();
        registry.register(super::VerseFormatter::new(style));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }
}
