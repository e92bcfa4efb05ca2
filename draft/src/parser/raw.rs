//! Serde mirror of the raw Draft.js content shape.
//!
//! Every field is optional: missing `data`, ranges or depth load as empty,
//! `null` where a list or map is expected loads as empty too.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::Document;
use crate::block::range::{EntityRange, InlineStyleRange};
use crate::block::{Block, BlockType};
use crate::entity::{Entity, EntityType};
use crate::style::StyleTag;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawDocument {
    blocks: Option<Vec<RawBlock>>,
    entity_map: Option<BTreeMap<String, RawEntity>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawBlock {
    text: Option<String>,
    #[serde(rename = "type")]
    block_type: Option<String>,
    depth: Option<i64>,
    data: Option<Map<String, Value>>,
    inline_style_ranges: Option<Vec<RawStyleRange>>,
    entity_ranges: Option<Vec<RawEntityRange>>,
}

#[derive(Debug, Deserialize)]
struct RawStyleRange {
    #[serde(default)]
    offset: i64,
    #[serde(default)]
    length: i64,
    style: String,
}

#[derive(Debug, Deserialize)]
struct RawEntityRange {
    #[serde(default)]
    offset: i64,
    #[serde(default)]
    length: i64,
    #[serde(default)]
    key: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEntity {
    #[serde(rename = "type")]
    entity_type: Option<String>,
    data: Option<Map<String, Value>>,
}

impl RawDocument {
    pub(crate) fn into_document(self) -> Document {
        let blocks = self
            .blocks
            .unwrap_or_default()
            .into_iter()
            .map(RawBlock::into_block)
            .collect();
        let entity_map = self
            .entity_map
            .unwrap_or_default()
            .into_iter()
            .map(|(key, raw)| (key, raw.into_entity()))
            .collect();
        Document { blocks, entity_map }
    }
}

impl RawBlock {
    fn into_block(self) -> Block {
        let inline_style_ranges = self
            .inline_style_ranges
            .unwrap_or_default()
            .into_iter()
            .map(|r| InlineStyleRange {
                offset: clamp("style offset", r.offset),
                length: clamp("style length", r.length),
                style: StyleTag::parse(&r.style),
            })
            .collect();
        let entity_ranges = self
            .entity_ranges
            .unwrap_or_default()
            .into_iter()
            .map(|r| EntityRange {
                offset: clamp("entity offset", r.offset),
                length: clamp("entity length", r.length),
                key: entity_key(r.key),
            })
            .collect();
        Block {
            block_type: BlockType::from_tag(self.block_type.as_deref().unwrap_or_default()),
            text: self.text.unwrap_or_default(),
            depth: clamp("depth", self.depth.unwrap_or(0)),
            data: self.data.unwrap_or_default(),
            inline_style_ranges,
            entity_ranges,
        }
    }
}

impl RawEntity {
    fn into_entity(self) -> Entity {
        Entity {
            entity_type: EntityType::from_tag(self.entity_type.as_deref().unwrap_or_default()),
            data: self.data.unwrap_or_default(),
        }
    }
}

fn clamp(what: &str, value: i64) -> usize {
    if value < 0 {
        tracing::debug!("clamping negative {} {} to 0", what, value);
        0
    } else {
        value as usize
    }
}

/// Entity keys are strings in the entity map but often numbers in ranges.
/// A missing or `null` key leaves the range unlinked.
fn entity_key(key: Option<Value>) -> Option<String> {
    match key? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
