use draft::Document;
use draft::block::Block;

use crate::block::render_block;
use crate::config::RenderOptions;
use crate::context::RenderContext;
use crate::entity::EntityTransform;
use crate::error::RenderError;
use crate::list::render_list;

/// Render a document to an HTML fragment.
///
/// Consecutive list items are grouped and rendered as one list; every other
/// block is rendered on its own. Output order follows block order.
#[tracing::instrument(skip_all, fields(blocks = document.blocks.len()))]
pub fn render(
    document: &Document,
    options: &RenderOptions,
    transform: Option<&dyn EntityTransform>,
) -> Result<String, RenderError> {
    let mut ctx = RenderContext::new(document, options);
    if let Some(transform) = transform {
        ctx = ctx.with_transform(transform);
    }

    let mut html = String::new();
    let mut list_run: Vec<&Block> = Vec::new();
    for block in &document.blocks {
        if block.is_list_item() {
            list_run.push(block);
            continue;
        }
        if !list_run.is_empty() {
            html.push_str(&render_list(&ctx, &list_run)?);
            list_run.clear();
        }
        html.push_str(&render_block(&ctx, block)?);
    }
    if !list_run.is_empty() {
        html.push_str(&render_list(&ctx, &list_run)?);
    }
    Ok(html)
}

/// [`render`] without an entity transform.
pub fn render_html(document: &Document, options: &RenderOptions) -> Result<String, RenderError> {
    render(document, options, None)
}
