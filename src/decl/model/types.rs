//! Type expressions

use serde::{Deserialize, Serialize};

/// A parsed type expression
///
/// Rendering lives in [verse](crate::decl::verse); parsing in
/// [parsing::types](crate::decl::parsing::types).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDescription {
    Boolean,
    Integer,
    FloatingPoint,
    DoublePrecision,
    String,
    Date,
    Data,
    Void,
    Optional(Box<TypeDescription>),
    /// A named type; the empty name stands for "could not tell"
    Object(std::string::String),
    Array(Box<TypeDescription>),
    Map(Box<TypeDescription>, Box<TypeDescription>),
    Generic(std::string::String, Vec<TypeDescription>),
}

impl TypeDescription {
    pub fn optional(wrapped: TypeDescription) -> Self {
        TypeDescription::Optional(Box::new(wrapped))
    }

    pub fn object(name: impl Into<std::string::String>) -> Self {
        TypeDescription::Object(name.into())
    }

    pub fn array(element: TypeDescription) -> Self {
        TypeDescription::Array(Box::new(element))
    }

    pub fn map(key: TypeDescription, value: TypeDescription) -> Self {
        TypeDescription::Map(Box::new(key), Box::new(value))
    }

    pub fn generic(
        name: impl Into<std::string::String>,
        constraints: Vec<TypeDescription>,
    ) -> Self {
        TypeDescription::Generic(name.into(), constraints)
    }

    /// The fallback type, `Object("")`
    pub fn anonymous() -> Self {
        TypeDescription::Object(std::string::String::new())
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, TypeDescription::Object(name) if name.is_empty())
    }
}
