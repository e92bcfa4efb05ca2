use crate::style::StyleTag;

/// An inline style applied to `[offset, offset + length)` of a block's text.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: StyleTag,
}

impl InlineStyleRange {
    pub fn new(offset: usize, length: usize, style: impl Into<StyleTag>) -> Self {
        InlineStyleRange {
            offset,
            length,
            style: style.into(),
        }
    }

    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

/// A reference from `[offset, offset + length)` to an entry in the entity map.
/// A range without a key covers its text but renders it as plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: Option<String>,
}

impl EntityRange {
    pub fn new(offset: usize, length: usize, key: impl Into<String>) -> Self {
        EntityRange {
            offset,
            length,
            key: Some(key.into()),
        }
    }

    pub fn keyless(offset: usize, length: usize) -> Self {
        EntityRange {
            offset,
            length,
            key: None,
        }
    }

    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}
