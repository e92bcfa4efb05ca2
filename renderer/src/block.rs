//! Block-level wrapping: element, inline CSS and direction.

use draft::block::{Block, BlockType};
use serde_json::{Map, Value};

use crate::context::RenderContext;
use crate::entity::entity_markup;
use crate::error::RenderError;
use crate::markup::block_inner_markup;

/// Element name for a block type; `None` for types rendered without a wrapper.
pub fn block_tag(block_type: &BlockType) -> Option<&'static str> {
    match block_type {
        BlockType::Unstyled => Some("p"),
        BlockType::Header(1) => Some("h1"),
        BlockType::Header(2) => Some("h2"),
        BlockType::Header(3) => Some("h3"),
        BlockType::Header(4) => Some("h4"),
        BlockType::Header(5) => Some("h5"),
        BlockType::Header(6) => Some("h6"),
        BlockType::UnorderedListItem => Some("ul"),
        BlockType::OrderedListItem => Some("ol"),
        BlockType::Blockquote => Some("blockquote"),
        BlockType::Code => Some("pre"),
        BlockType::Header(_) | BlockType::Atomic | BlockType::Other(_) => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Inline CSS from block data: `key:value;` per entry, falsy values skipped.
pub fn block_style(data: &Map<String, Value>) -> String {
    let mut style = String::new();
    for (key, value) in data {
        if is_falsy(value) {
            continue;
        }
        style.push_str(key);
        style.push(':');
        match value {
            Value::String(s) => style.push_str(s),
            other => style.push_str(&other.to_string()),
        }
        style.push(';');
    }
    style
}

/// Opening tag carrying the block's CSS and, if asked, `dir = "auto"`.
pub(crate) fn open_tag(tag: &str, block: &Block, directional: bool) -> String {
    let mut html = format!("<{tag}");
    let style = block_style(&block.data);
    if !style.is_empty() {
        html.push_str(&format!(" style=\"{style}\""));
    }
    if directional {
        html.push_str(" dir = \"auto\"");
    }
    html.push('>');
    html
}

/// A block whose whole content is its first entity: it has entity ranges and
/// either blank text or the `atomic` type.
pub fn is_atomic_entity_block(block: &Block) -> bool {
    !block.entity_ranges.is_empty()
        && (block.text.trim().is_empty() || block.block_type == BlockType::Atomic)
}

/// Render a non-list block followed by a newline.
pub fn render_block(ctx: &RenderContext<'_>, block: &Block) -> Result<String, RenderError> {
    let mut html = String::new();
    if is_atomic_entity_block(block) {
        match &block.entity_ranges[0].key {
            Some(key) => html.push_str(&entity_markup(ctx, key, None)?),
            None => tracing::debug!("atomic block range has no entity key, emitting nothing"),
        }
    } else {
        let inner = block_inner_markup(ctx, block)?;
        match block_tag(&block.block_type) {
            Some(tag) => {
                html.push_str(&open_tag(tag, block, ctx.directional()));
                html.push_str(&inner);
                html.push_str(&format!("</{tag}>"));
            }
            None => {
                tracing::debug!(
                    "no element for block type '{}', emitting inner markup only",
                    block.block_type
                );
                html.push_str(&inner);
            }
        }
    }
    html.push('\n');
    Ok(html)
}
