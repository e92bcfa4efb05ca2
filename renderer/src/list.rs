//! Nested lists rebuilt from a flat run of depth-annotated list items.

use draft::block::Block;

use crate::block::{block_tag, open_tag};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::markup::block_inner_markup;

fn container_tag(block: &Block) -> &'static str {
    block_tag(&block.block_type).unwrap_or("ul")
}

fn list_item(ctx: &RenderContext<'_>, block: &Block) -> Result<String, RenderError> {
    let mut html = open_tag("li", block, ctx.directional());
    html.push_str(&block_inner_markup(ctx, block)?);
    html.push_str("</li>\n");
    Ok(html)
}

/// Render a contiguous run of list-item blocks.
///
/// Items are emitted at the depth of the first item. Any item whose depth
/// differs from the last emitted one is buffered, and the buffer is rendered
/// recursively as one nested list just before the next same-depth item (or at
/// the end). A change of list type closes the current container and opens a
/// sibling one; it does not flush the buffer.
pub fn render_list(ctx: &RenderContext<'_>, blocks: &[&Block]) -> Result<String, RenderError> {
    let mut html = String::new();
    let mut nested: Vec<&Block> = Vec::new();
    let mut previous: Option<&Block> = None;

    for &block in blocks {
        match previous {
            None => {
                html.push_str(&format!("<{}>\n", container_tag(block)));
            }
            Some(prev) if prev.block_type != block.block_type => {
                html.push_str(&format!("</{}>\n", container_tag(prev)));
                html.push_str(&format!("<{}>\n", container_tag(block)));
            }
            Some(prev) if prev.depth == block.depth => {
                if !nested.is_empty() {
                    html.push_str(&render_list(ctx, &nested)?);
                    nested.clear();
                }
            }
            Some(_) => {
                nested.push(block);
                continue;
            }
        }
        html.push_str(&list_item(ctx, block)?);
        previous = Some(block);
    }

    if !nested.is_empty() {
        html.push_str(&render_list(ctx, &nested)?);
    }
    if let Some(last) = previous {
        html.push_str(&format!("</{}>\n", container_tag(last)));
    }
    Ok(html)
}
