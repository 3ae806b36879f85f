//! Per-file outline

use super::enumeration::EnumDescription;
use super::extensible::{ExtensibleDescription, ExtensibleKind};
use super::function::FunctionDescription;
use serde::{Deserialize, Serialize};

/// Everything declared at the top level of one file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outline {
    pub classes: Vec<ExtensibleDescription>,
    pub structs: Vec<ExtensibleDescription>,
    pub protocols: Vec<ExtensibleDescription>,
    pub enums: Vec<EnumDescription>,
    pub functions: Vec<FunctionDescription>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a container under classes, structs or protocols by its kind
    pub fn push_extensible(&mut self, extensible: ExtensibleDescription) {
        match extensible.kind {
            ExtensibleKind::Class => self.classes.push(extensible),
            ExtensibleKind::Struct => self.structs.push(extensible),
            ExtensibleKind::Protocol => self.protocols.push(extensible),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.structs.is_empty()
            && self.protocols.is_empty()
            && self.enums.is_empty()
            && self.functions.is_empty()
    }

    /// Containers in rendering order: classes, structs, protocols
    pub fn extensibles(&self) -> impl Iterator<Item = &ExtensibleDescription> {
        self.classes
            .iter()
            .chain(self.structs.iter())
            .chain(self.protocols.iter())
    }

    /// The same outline with every source position dropped
    pub fn as_template(&self) -> Self {
        Self {
            classes: self.classes.iter().map(|c| c.as_template()).collect(),
            structs: self.structs.iter().map(|s| s.as_template()).collect(),
            protocols: self.protocols.iter().map(|p| p.as_template()).collect(),
            enums: self.enums.iter().map(|e| e.as_template()).collect(),
            functions: self.functions.iter().map(|f| f.as_template()).collect(),
        }
    }
}
