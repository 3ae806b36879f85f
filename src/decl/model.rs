//! Declaration model
//!
//!     The structured, language-agnostic picture of a source file: containers (classes,
//!     structs, protocols, enums), their members, free functions, and the types, arguments and
//!     annotations hanging off them.
//!
//!     Every node that comes from a file carries a [Declaration] pointing back at it. Nodes
//!     built by hand for code generation use [Declaration::template] instead, and all node
//!     types offer `as_template()` to compare parsed nodes against hand-built ones.
//!
//!     Nodes are plain data: built once during assembly and never mutated afterwards. They
//!     derive serde traits so an outline can be written as json or yaml.
//!
//! Callables
//!
//!     Free functions, methods and initializers share [FunctionDescription]; what kind of
//!     callable it is lives in [CallableKind]. Classes, structs and protocols likewise share
//!     [ExtensibleDescription] with an [ExtensibleKind] tag.

pub mod accessibility;
pub mod annotation;
pub mod argument;
pub mod declaration;
pub mod enum_case;
pub mod enumeration;
pub mod extensible;
pub mod function;
pub mod outline;
pub mod property;
pub mod types;

pub use accessibility::Accessibility;
pub use annotation::{Annotation, AnnotationLookup};
pub use argument::ArgumentDescription;
pub use declaration::Declaration;
pub use enum_case::EnumCase;
pub use enumeration::EnumDescription;
pub use extensible::{ExtensibleDescription, ExtensibleKind};
pub use function::{CallableKind, FunctionDescription, TemplateError};
pub use outline::Outline;
pub use property::{PropertyDescription, PropertyKind};
pub use types::TypeDescription;
