//! Accessibility levels

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accessibility {
    Private,
    #[default]
    Internal,
    Public,
    Open,
}

impl Accessibility {
    /// Parse an indexer tag such as `source.lang.swift.accessibility.public`
    ///
    /// Only the last component matters. `fileprivate` counts as private, anything unknown as
    /// internal.
    pub fn from_tag(tag: &str) -> Self {
        let level = tag.rsplit('.').next().unwrap_or(tag);
        Self::from_keyword(level).unwrap_or_default()
    }

    /// Parse a source keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "private" | "fileprivate" => Some(Accessibility::Private),
            "internal" => Some(Accessibility::Internal),
            "public" => Some(Accessibility::Public),
            "open" => Some(Accessibility::Open),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Accessibility::Private => "private",
            Accessibility::Internal => "internal",
            Accessibility::Public => "public",
            Accessibility::Open => "open",
        }
    }
}
