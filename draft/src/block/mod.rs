pub mod range;

use std::fmt;

use serde_json::{Map, Value};

use crate::block::range::{EntityRange, InlineStyleRange};
use crate::style::StyleTag;

/// Structural kind of a block, keyed by the Draft.js type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `unstyled`: a plain paragraph.
    Unstyled,
    /// `header-one` .. `header-six`, level 1-6.
    Header(u8),
    UnorderedListItem,
    OrderedListItem,
    Blockquote,
    Code,
    Atomic,
    /// Any tag the model does not recognize, kept verbatim.
    Other(String),
}

const HEADER_TAGS: [&str; 6] = [
    "header-one",
    "header-two",
    "header-three",
    "header-four",
    "header-five",
    "header-six",
];

impl BlockType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "unstyled" => BlockType::Unstyled,
            "unordered-list-item" => BlockType::UnorderedListItem,
            "ordered-list-item" => BlockType::OrderedListItem,
            "blockquote" => BlockType::Blockquote,
            "code" => BlockType::Code,
            "atomic" => BlockType::Atomic,
            other => match HEADER_TAGS.iter().position(|h| *h == other) {
                Some(idx) => BlockType::Header(idx as u8 + 1),
                None => BlockType::Other(other.to_string()),
            },
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::Header(level) => HEADER_TAGS
                .get((*level as usize).wrapping_sub(1))
                .copied()
                .unwrap_or("header"),
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::Blockquote => "blockquote",
            BlockType::Code => "code",
            BlockType::Atomic => "atomic",
            BlockType::Other(tag) => tag,
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            BlockType::UnorderedListItem | BlockType::OrderedListItem
        )
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One structural unit of a document with its own text and annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub block_type: BlockType,
    pub text: String,
    /// Nesting level; only meaningful for list items.
    pub depth: usize,
    /// Block-level CSS properties, in input order.
    pub data: Map<String, Value>,
    pub inline_style_ranges: Vec<InlineStyleRange>,
    pub entity_ranges: Vec<EntityRange>,
}

impl Block {
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Block {
            block_type,
            text: text.into(),
            depth: 0,
            data: Map::new(),
            inline_style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_style(mut self, offset: usize, length: usize, style: impl Into<StyleTag>) -> Self {
        self.inline_style_ranges
            .push(InlineStyleRange::new(offset, length, style));
        self
    }

    pub fn with_entity(mut self, offset: usize, length: usize, key: impl Into<String>) -> Self {
        self.entity_ranges.push(EntityRange::new(offset, length, key));
        self
    }

    pub fn with_data(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(property.into(), value.into());
        self
    }

    /// Text length in characters, the unit every range offset is measured in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_list_item(&self) -> bool {
        self.block_type.is_list_item()
    }
}
