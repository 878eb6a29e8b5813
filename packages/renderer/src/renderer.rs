use crate::blocks::{self, RenderFn};
use crate::html::css_property;
use crate::{RenderContext, VNode};
use pagewright_catalog::{BlockCatalog, BlockKind};
use pagewright_document::PageBlock;
use std::collections::HashMap;
use tracing::debug;

/// Maps a block's declared type to its visual output.
///
/// The type-to-function table is resolved once from the catalog. A type the
/// catalog does not carry renders the "unknown block" fallback, even when a
/// render function for it exists, so a reduced catalog also restricts what
/// the canvas shows.
#[derive(Debug, Clone)]
pub struct Renderer {
    registry: HashMap<BlockKind, RenderFn>,
}

impl Renderer {
    pub fn new(catalog: &BlockCatalog) -> Self {
        let registry: HashMap<BlockKind, RenderFn> = catalog
            .list_definitions(None)
            .into_iter()
            .filter_map(|def| def.kind())
            .map(|kind| (kind, blocks::render_fn(kind)))
            .collect();

        debug!(types = registry.len(), "Resolved block renderers");
        Self { registry }
    }

    pub fn supports(&self, block_type: &str) -> bool {
        BlockKind::parse(block_type).map_or(false, |kind| self.registry.contains_key(&kind))
    }

    /// Render one block. Never fails: unknown types get a visible fallback.
    pub fn render(&self, block: &PageBlock, ctx: &RenderContext) -> VNode {
        let render = match block.kind().and_then(|kind| self.registry.get(&kind)) {
            Some(render) => *render,
            None => {
                debug!(block_id = %block.id, block_type = %block.block_type, "No renderer for block type");
                blocks::unknown as RenderFn
            }
        };

        with_block_style(render(block, ctx), block)
    }
}

/// Apply the site-builder `style` sub-object as inline styles on the root
fn with_block_style(node: VNode, block: &PageBlock) -> VNode {
    let Some(style) = &block.style else {
        return node;
    };

    style
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) if !s.is_empty() => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some((css_property(key), value))
        })
        .fold(node, |node, (property, value)| node.with_style(property, value))
}
