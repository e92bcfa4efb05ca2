pub mod block;
pub mod entity;
pub mod parser;
pub mod style;

use std::collections::BTreeMap;

use crate::block::Block;
use crate::entity::Entity;

/// A rich-text document: ordered blocks plus the entities their ranges point at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Blocks in reading order.
    pub blocks: Vec<Block>,
    /// Entities keyed by the opaque identifiers used in `EntityRange::key`.
    pub entity_map: BTreeMap<String, Entity>,
}

impl Document {
    pub fn empty() -> Self {
        Document::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entity_map.get(key)
    }
}
