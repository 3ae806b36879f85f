//! Declaration kinds reported by indexers

/// What an indexer record declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Struct,
    Protocol,
    Enum,
    /// A `case` line, holding one or more elements
    EnumCase,
    EnumElement,
    FreeFunction,
    InstanceMethod,
    StaticMethod,
    ClassMethod,
    InstanceVariable,
    StaticVariable,
    ClassVariable,
    Other,
}

/// Suffixes in match order; the more specific ones come first (`.function.method.class`
/// also ends in `.class`)
const SUFFIXES: &[(&str, DeclarationKind)] = &[
    (".function.method.instance", DeclarationKind::InstanceMethod),
    (".function.method.static", DeclarationKind::StaticMethod),
    (".function.method.class", DeclarationKind::ClassMethod),
    (".function.free", DeclarationKind::FreeFunction),
    (".var.instance", DeclarationKind::InstanceVariable),
    (".var.static", DeclarationKind::StaticVariable),
    (".var.class", DeclarationKind::ClassVariable),
    (".enumcase", DeclarationKind::EnumCase),
    (".enumelement", DeclarationKind::EnumElement),
    (".class", DeclarationKind::Class),
    (".struct", DeclarationKind::Struct),
    (".protocol", DeclarationKind::Protocol),
    (".enum", DeclarationKind::Enum),
];

const TAG_PREFIX: &str = "source.lang.swift.decl";

impl DeclarationKind {
    /// Classify a kind tag such as `source.lang.swift.decl.function.method.static`
    pub fn from_tag(tag: &str) -> Self {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| tag.ends_with(suffix))
            .map(|(_, kind)| *kind)
            .unwrap_or(DeclarationKind::Other)
    }

    /// Canonical tag for this kind
    pub fn tag(&self) -> String {
        let suffix = SUFFIXES
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(suffix, _)| *suffix)
            .unwrap_or(".other");
        format!("{TAG_PREFIX}{suffix}")
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self,
            DeclarationKind::Class
                | DeclarationKind::Struct
                | DeclarationKind::Protocol
                | DeclarationKind::Enum
        )
    }

    pub fn is_method(&self) -> bool {
        matches!(
            self,
            DeclarationKind::InstanceMethod
                | DeclarationKind::StaticMethod
                | DeclarationKind::ClassMethod
        )
    }

    pub fn is_property(&self) -> bool {
        matches!(
            self,
            DeclarationKind::InstanceVariable
                | DeclarationKind::StaticVariable
                | DeclarationKind::ClassVariable
        )
    }
}
