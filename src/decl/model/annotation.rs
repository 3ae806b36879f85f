//! Annotations
//!
//!     `@name value` tags found in documentation and inline comments. A tag carries at most one
//!     value token.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Tag name without the `@`
    pub name: String,
    pub value: Option<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(str::to_string),
        }
    }
}

/// Lookup by name over a list of annotations
pub trait AnnotationLookup {
    /// First annotation called `name`
    fn find(&self, name: &str) -> Option<&Annotation>;

    /// Whether any annotation is called `name`
    fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

impl AnnotationLookup for [Annotation] {
    fn find(&self, name: &str) -> Option<&Annotation> {
        self.iter().find(|a| a.name == name)
    }
}
