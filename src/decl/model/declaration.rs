//! Source positions of model nodes

use serde::{Deserialize, Serialize};

/// Where a node was declared, and the complete header text
///
/// `line` and `column` are 1-based. All position fields are `None` for a template
/// declaration, i.e. a node built by hand rather than parsed from a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Declaration {
    pub path: String,
    pub raw_text: String,
    pub offset: Option<usize>,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl Declaration {
    /// Declaration of a node built for code generation
    pub fn template() -> Self {
        Self::default()
    }

    /// Declaration at byte `offset` of `file_text`, with line and column computed from it
    pub fn locate(
        path: impl Into<String>,
        file_text: &str,
        raw_text: impl Into<String>,
        offset: usize,
    ) -> Self {
        let (line, column) = line_and_column(file_text, offset);
        Self {
            path: path.into(),
            raw_text: raw_text.into(),
            offset: Some(offset),
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn is_template(&self) -> bool {
        self.offset.is_none()
    }
}

/// 1-based line and column of byte `offset` in `text`
///
/// The offset is clamped to the text and moved back to the nearest character boundary.
/// Columns count characters, not bytes.
pub fn line_and_column(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let last_line = before.rsplit('\n').next().unwrap_or(before);
    (line, last_line.chars().count() + 1)
}
