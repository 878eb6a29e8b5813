//! Whole-canvas rendering.
//!
//! In edit mode every block is wrapped in a canvas item carrying its index
//! (the drag engine measures these), a toolbar and selection state. Hidden
//! blocks stay in place at half opacity. In preview mode the chrome goes away
//! and hidden blocks are omitted entirely.

use crate::{RenderContext, Renderer, VNode};
use pagewright_document::{PageBlock, PageDocument};

impl Renderer {
    pub fn render_page(&self, document: &PageDocument, ctx: &RenderContext) -> VNode {
        let mut canvas = VNode::element("div")
            .with_class("canvas")
            .with_class(if ctx.preview_mode { "preview" } else { "editing" });

        if !ctx.preview_mode {
            if let Some(top) = &ctx.drop_indicator_top {
                canvas = canvas.with_child(
                    VNode::element("div")
                        .with_class("drop-indicator")
                        .with_style("top", top.as_str()),
                );
            }

            if document.is_empty() {
                return canvas.with_child(empty_state());
            }
        }

        for (index, block) in document.blocks().iter().enumerate() {
            if ctx.preview_mode && !block.is_visible() {
                continue;
            }
            canvas = canvas.with_child(self.canvas_item(index, block, ctx));
        }

        if !ctx.preview_mode {
            canvas = canvas.with_child(
                VNode::element("div")
                    .with_class("drop-zone-end")
                    .with_attr("data-drop-index", document.len().to_string())
                    .with_child(VNode::text("Drop a block here or drag from the library")),
            );
        }

        canvas
    }

    fn canvas_item(&self, index: usize, block: &PageBlock, ctx: &RenderContext) -> VNode {
        let content = self.render(block, ctx);

        let mut item = VNode::element("div")
            .with_class("canvas-item")
            .with_attr("data-block-index", index.to_string())
            .with_attr("data-block-id", block.id.as_str());

        if ctx.preview_mode {
            return item.with_child(content);
        }

        if ctx.is_selected(&block.id) {
            item = item.with_class("selected");
        }
        if !block.is_visible() {
            item = item.with_class("hidden").with_style("opacity", "0.5");
        }
        if block.is_locked() {
            item = item.with_class("locked");
        }

        item.with_child(toolbar(block)).with_child(content)
    }
}

fn toolbar(block: &PageBlock) -> VNode {
    let action = |name: &str, label: &str, disabled: bool| {
        let button = VNode::element("button")
            .with_class("toolbar-button")
            .with_attr("type", "button")
            .with_attr("data-action", name)
            .with_attr("aria-label", label);
        if disabled {
            button.with_attr("disabled", "")
        } else {
            button
        }
    };

    let locked = block.is_locked();

    VNode::element("div")
        .with_class("block-toolbar")
        .with_child(action(
            "toggle-visibility",
            if block.is_visible() { "Hide block" } else { "Show block" },
            false,
        ))
        .with_child(action(
            "toggle-lock",
            if locked { "Unlock block" } else { "Lock block" },
            false,
        ))
        .with_child(action("duplicate", "Duplicate block", locked))
        .with_child(action("delete", "Delete block", locked))
        .with_child(
            VNode::element("span")
                .with_class("block-type-label")
                .with_child(VNode::text(block.block_type.as_str())),
        )
}

fn empty_state() -> VNode {
    VNode::element("div")
        .with_class("empty-state")
        .with_child(VNode::text_element("h3", "Start Building Your Page"))
        .with_child(VNode::text_element(
            "p",
            "Drag blocks from the library on the left to start building your website. \
             You can add text, images, forms, and more.",
        ))
}
